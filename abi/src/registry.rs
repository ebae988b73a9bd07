// Arwen SDK: client-side library for typed smart contract calls
//
// SPDX-License-Identifier: Apache-2.0
//
// Copyright (C) 2023-2026 Arwen SDK contributors.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

use indexmap::IndexMap;
use log::debug;

use crate::{NumericType, Type, TypeError};

/// A resolution scope mapping type names to [`Type`] instances.
///
/// The registry is an explicit value, not a process-wide singleton: one is
/// constructed per loaded ABI (or shared by reference when a single ABI is the
/// norm). Insertion happens while the ABI loads; afterwards the registry is
/// treated as frozen and only read. Within a scope every name is unique —
/// re-registering a name is an error, never a silent override.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    types: IndexMap<String, Type>,
}

impl Default for TypeRegistry {
    fn default() -> Self { Self::new() }
}

impl TypeRegistry {
    /// Creates a scope pre-populated with the closed set of built-in types.
    pub fn new() -> Self {
        let mut registry = TypeRegistry { types: IndexMap::new() };
        for builtin in [
            Type::Numeric(NumericType::U8),
            Type::Numeric(NumericType::U16),
            Type::Numeric(NumericType::U32),
            Type::Numeric(NumericType::U64),
            Type::Numeric(NumericType::I8),
            Type::Numeric(NumericType::I16),
            Type::Numeric(NumericType::I32),
            Type::Numeric(NumericType::I64),
            Type::Numeric(NumericType::BIG_UINT),
            Type::Numeric(NumericType::BIG_INT),
            Type::Bool,
            Type::Bytes,
            Type::Address,
            Type::H256,
            Type::TokenIdentifier,
        ] {
            registry
                .register(builtin)
                .expect("built-in type names are distinct");
        }
        registry
    }

    /// Registers a type under its canonical name.
    pub fn register(&mut self, ty: Type) -> Result<(), TypeError> {
        let name = ty.name();
        if self.types.contains_key(&name) {
            return Err(TypeError::DuplicateType(name));
        }
        debug!("registering type {name}");
        self.types.insert(name, ty);
        Ok(())
    }

    /// Looks up a previously registered type by its exact name.
    pub fn resolve(&self, name: &str) -> Result<Type, TypeError> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| TypeError::UnknownType(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool { self.types.contains_key(name) }

    pub fn names(&self) -> impl Iterator<Item = &str> { self.types.keys().map(String::as_str) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{EnumType, EnumVariant};

    #[test]
    fn builtins_resolve() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.resolve("u32").unwrap(), Type::Numeric(NumericType::U32));
        assert_eq!(registry.resolve("BigUint").unwrap(), Type::Numeric(NumericType::BIG_UINT));
        assert_eq!(registry.resolve("bool").unwrap(), Type::Bool);
        assert!(matches!(registry.resolve("nope"), Err(TypeError::UnknownType(_))));
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = TypeRegistry::new();
        let color = Type::Enum(EnumType::new("Color", [EnumVariant::new("Red", 0)]));
        registry.register(color.clone()).unwrap();
        assert_eq!(registry.register(color), Err(TypeError::DuplicateType(s!("Color"))));
    }
}

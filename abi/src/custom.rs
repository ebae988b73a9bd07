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

use crate::Type;

/// A contract-defined record type: named, ordered fields.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructType {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl StructType {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        StructType {
            name: name.into(),
            fields: fields.into_iter().collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> { self.fields.iter().find(|field| field.name == name) }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: Type,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: Type) -> Self { FieldDefinition { name: name.into(), ty } }
}

/// A contract-defined enumeration: a table of named variants keyed by a
/// one-byte discriminant.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumType {
    pub name: String,
    pub variants: Vec<EnumVariant>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, variants: impl IntoIterator<Item = EnumVariant>) -> Self {
        EnumType {
            name: name.into(),
            variants: variants.into_iter().collect(),
        }
    }

    pub fn variant_by_discriminant(&self, discriminant: u8) -> Option<&EnumVariant> {
        self.variants.iter().find(|variant| variant.discriminant == discriminant)
    }

    pub fn variant_by_name(&self, name: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|variant| variant.name == name)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumVariant {
    pub name: String,
    pub discriminant: u8,
}

impl EnumVariant {
    pub fn new(name: impl Into<String>, discriminant: u8) -> Self {
        EnumVariant {
            name: name.into(),
            discriminant,
        }
    }
}

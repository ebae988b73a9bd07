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

use core::fmt::{self, Display, Formatter};

use crate::{EnumType, StructType};

/// The closed set of type categories understood by the binary codec.
///
/// The set is closed on purpose: every codec operation dispatches over it with
/// an exhaustive `match`, so adding a category forces every dispatcher to be
/// revisited.
///
/// Type trees are immutable: they are built once, at ABI load time or through
/// the well-known constructors, and only ever composed into richer trees.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Bool,
    Numeric(NumericType),
    Bytes,
    Address,
    H256,
    TokenIdentifier,

    /// Homogeneous dynamic-length sequence.
    List(Box<Type>),

    /// Zero-or-one value with an explicit presence flag on the wire.
    Option(Box<Type>),

    /// Zero-or-one value at the argument level; an unset optional contributes
    /// no wire token at all.
    Optional(Box<Type>),

    /// Zero-or-more values at the argument level; must be the last formal
    /// parameter of an endpoint.
    Variadic(Box<Type>),

    /// Fixed-arity heterogeneous tuple at the argument level (the ABI calls
    /// these `MultiArg` / `MultiResult`).
    Composite(Vec<Type>),

    Struct(StructType),
    Enum(EnumType),
}

impl Type {
    /// Canonical textual name of the type (`"List<u32>"` etc).
    pub fn name(&self) -> String { self.to_string() }

    /// The number of logical argument-level values a single parameter of this
    /// type contributes.
    pub fn cardinality(&self) -> TypeCardinality {
        match self {
            Type::Optional(_) => TypeCardinality::variable(Some(1)),
            Type::Variadic(_) => TypeCardinality::variable(None),
            Type::Composite(items) => TypeCardinality::variable(Some(items.len())),
            _ => TypeCardinality::fixed(1),
        }
    }

    /// Nested type parameters, in order; empty for non-generic types.
    pub fn type_parameters(&self) -> Vec<&Type> {
        match self {
            Type::List(inner) | Type::Option(inner) | Type::Optional(inner) | Type::Variadic(inner) => {
                vec![inner.as_ref()]
            }
            Type::Composite(items) => items.iter().collect(),
            _ => vec![],
        }
    }

    /// Statically known encoded size in bytes of the nested form, where one
    /// exists.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Type::Bool => Some(1),
            Type::Numeric(numeric) => numeric.size_in_bytes,
            Type::Address | Type::H256 => Some(32),
            Type::Enum(_) => Some(1),
            Type::Struct(strukt) => {
                let mut total = 0usize;
                for field in &strukt.fields {
                    total += field.ty.fixed_size()?;
                }
                Some(total)
            }
            _ => None,
        }
    }

    pub fn has_fixed_size(&self) -> bool { self.fixed_size().is_some() }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("bool"),
            Type::Numeric(numeric) => Display::fmt(numeric, f),
            Type::Bytes => f.write_str("bytes"),
            Type::Address => f.write_str("Address"),
            Type::H256 => f.write_str("H256"),
            Type::TokenIdentifier => f.write_str("TokenIdentifier"),
            Type::List(inner) => write!(f, "List<{inner}>"),
            Type::Option(inner) => write!(f, "Option<{inner}>"),
            Type::Optional(inner) => write!(f, "Optional<{inner}>"),
            Type::Variadic(inner) => write!(f, "Variadic<{inner}>"),
            Type::Composite(items) => {
                f.write_str("Composite<")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_str(">")
            }
            Type::Struct(strukt) => f.write_str(&strukt.name),
            Type::Enum(en) => f.write_str(&en.name),
        }
    }
}

/// Descriptor of an integer type: byte width (`None` for arbitrary precision)
/// plus signedness.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NumericType {
    /// 1, 2, 4 or 8 bytes for fixed-width integers; `None` for the
    /// arbitrary-precision `BigUint` / `BigInt`.
    pub size_in_bytes: Option<usize>,
    pub signed: bool,
}

impl NumericType {
    pub const U8: Self = NumericType { size_in_bytes: Some(1), signed: false };
    pub const I8: Self = NumericType { size_in_bytes: Some(1), signed: true };
    pub const U16: Self = NumericType { size_in_bytes: Some(2), signed: false };
    pub const I16: Self = NumericType { size_in_bytes: Some(2), signed: true };
    pub const U32: Self = NumericType { size_in_bytes: Some(4), signed: false };
    pub const I32: Self = NumericType { size_in_bytes: Some(4), signed: true };
    pub const U64: Self = NumericType { size_in_bytes: Some(8), signed: false };
    pub const I64: Self = NumericType { size_in_bytes: Some(8), signed: true };
    pub const BIG_UINT: Self = NumericType { size_in_bytes: None, signed: false };
    pub const BIG_INT: Self = NumericType { size_in_bytes: None, signed: true };

    pub fn is_arbitrary_size(&self) -> bool { self.size_in_bytes.is_none() }
}

impl Display for NumericType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match (self.size_in_bytes, self.signed) {
            (Some(1), false) => "u8",
            (Some(2), false) => "u16",
            (Some(4), false) => "u32",
            (Some(8), false) => "u64",
            (Some(1), true) => "i8",
            (Some(2), true) => "i16",
            (Some(4), true) => "i32",
            (Some(8), true) => "i64",
            (None, false) => "BigUint",
            (None, true) => "BigInt",
            _ => unreachable!("numeric widths are limited to 1, 2, 4 and 8 bytes"),
        };
        f.write_str(name)
    }
}

/// How many logical values a type contributes to an argument list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeCardinality {
    lower: usize,
    upper: Option<usize>,
}

impl TypeCardinality {
    pub fn fixed(count: usize) -> Self { TypeCardinality { lower: count, upper: Some(count) } }

    /// A variable cardinality starting at zero; `None` means unbounded.
    pub fn variable(upper: Option<usize>) -> Self { TypeCardinality { lower: 0, upper } }

    pub fn lower_bound(&self) -> usize { self.lower }

    pub fn upper_bound(&self) -> Option<usize> { self.upper }

    /// A single mandatory value.
    pub fn is_singular(&self) -> bool { self.lower == 1 && self.upper == Some(1) }

    pub fn is_unbounded(&self) -> bool { self.upper.is_none() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!(Type::Bool.name(), "bool");
        assert_eq!(Type::Numeric(NumericType::BIG_UINT).name(), "BigUint");
        assert_eq!(Type::List(Box::new(Type::Numeric(NumericType::U32))).name(), "List<u32>");
        assert_eq!(
            Type::Variadic(Box::new(Type::Composite(vec![
                Type::Numeric(NumericType::I32),
                Type::Bytes
            ])))
            .name(),
            "Variadic<Composite<i32,bytes>>"
        );
    }

    #[test]
    fn cardinalities() {
        assert!(Type::Bool.cardinality().is_singular());
        assert_eq!(Type::Optional(Box::new(Type::Bool)).cardinality(), TypeCardinality::variable(Some(1)));
        assert!(Type::Variadic(Box::new(Type::Bytes)).cardinality().is_unbounded());
        assert_eq!(
            Type::Composite(vec![Type::Bool, Type::Bytes]).cardinality(),
            TypeCardinality::variable(Some(2))
        );
    }

    #[test]
    fn fixed_sizes() {
        assert_eq!(Type::Bool.fixed_size(), Some(1));
        assert_eq!(Type::Numeric(NumericType::U64).fixed_size(), Some(8));
        assert_eq!(Type::Numeric(NumericType::BIG_INT).fixed_size(), None);
        assert_eq!(Type::Address.fixed_size(), Some(32));
        assert_eq!(Type::Bytes.fixed_size(), None);
        assert_eq!(Type::List(Box::new(Type::Bool)).fixed_size(), None);
    }
}

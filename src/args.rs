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

//! The `@`-separated argument wire string.
//!
//! Each token is the hex form of one top-level-encoded value. Argument-level
//! types reshape the token stream rather than encode bytes: an unset optional
//! contributes no token at all (not even an empty one), a variadic value
//! contributes one token per item, a composite contributes its fixed arity.
//! The token count therefore generally differs from the logical argument
//! count, and decoding is driven by the formal parameter list.

use amplify::hex::{FromHex, ToHex};
use arwen_abi::{CompositeValue, OptionalValue, Type, TypedValue, VariadicValue};

use crate::codec::{BinaryCodec, CodecError};

pub const ARGUMENTS_SEPARATOR: char = '@';

/// Converts between typed values and the argument wire string, in both
/// directions.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct ArgSerializer {
    codec: BinaryCodec,
}

impl ArgSerializer {
    pub fn new() -> Self { ArgSerializer::default() }

    pub fn with_codec(codec: BinaryCodec) -> Self { ArgSerializer { codec } }

    /// One raw buffer per wire token, expanding argument-level values
    /// recursively.
    pub fn values_to_buffers(&self, values: &[TypedValue]) -> Result<Vec<Vec<u8>>, CodecError> {
        let mut buffers = Vec::new();
        for value in values {
            self.expand_value(value, &mut buffers)?;
        }
        Ok(buffers)
    }

    fn expand_value(&self, value: &TypedValue, buffers: &mut Vec<Vec<u8>>) -> Result<(), CodecError> {
        match value {
            TypedValue::Optional(optional) => match optional.value() {
                Some(inner) => self.expand_value(inner, buffers),
                None => Ok(()),
            },
            TypedValue::Variadic(variadic) => {
                for item in variadic.items() {
                    self.expand_value(item, buffers)?;
                }
                Ok(())
            }
            TypedValue::Composite(composite) => {
                for item in composite.items() {
                    self.expand_value(item, buffers)?;
                }
                Ok(())
            }
            _ => {
                buffers.push(self.codec.encode_top_level(value)?);
                Ok(())
            }
        }
    }

    pub fn values_to_strings(&self, values: &[TypedValue]) -> Result<Vec<String>, CodecError> {
        Ok(self.values_to_buffers(values)?.iter().map(|buffer| buffer.to_hex()).collect())
    }

    /// The joined wire string: `tok0@tok1@…@tokN`.
    pub fn values_to_string(&self, values: &[TypedValue]) -> Result<String, CodecError> {
        Ok(self.values_to_strings(values)?.join(&ARGUMENTS_SEPARATOR.to_string()))
    }

    /// Splits a wire string back into raw buffers. Empty tokens are kept:
    /// they carry the empty top-level encoding.
    pub fn string_to_buffers(&self, joined: &str) -> Result<Vec<Vec<u8>>, CodecError> {
        joined.split(ARGUMENTS_SEPARATOR).map(parse_hex_token).collect()
    }

    pub fn string_to_values(&self, joined: &str, types: &[Type]) -> Result<Vec<TypedValue>, CodecError> {
        let buffers = self.string_to_buffers(joined)?;
        self.buffers_to_values(&buffers, types)
    }

    /// Reconstructs one value per formal parameter by consuming tokens in
    /// order: a plain type takes one token, an optional takes one iff tokens
    /// remain, a variadic drains the tail, a composite takes its arity.
    pub fn buffers_to_values(&self, buffers: &[Vec<u8>], types: &[Type]) -> Result<Vec<TypedValue>, CodecError> {
        buffers_to_values_with(&self.codec, buffers, types)
    }
}

pub(crate) fn buffers_to_values_with(
    codec: &BinaryCodec,
    buffers: &[Vec<u8>],
    types: &[Type],
) -> Result<Vec<TypedValue>, CodecError> {
    let mut tokens = buffers.iter();
    types.iter().map(|ty| consume(codec, &mut tokens, ty)).collect()
}

fn consume<'a>(
    codec: &BinaryCodec,
    tokens: &mut core::slice::Iter<'a, Vec<u8>>,
    ty: &Type,
) -> Result<TypedValue, CodecError> {
    match ty {
        Type::Optional(inner) => {
            if tokens.len() == 0 {
                return Ok(TypedValue::Optional(OptionalValue::unset(inner.as_ref().clone())));
            }
            Ok(TypedValue::Optional(OptionalValue::of(consume(codec, tokens, inner)?)))
        }
        Type::Variadic(inner) => {
            let mut items = Vec::new();
            while tokens.len() != 0 {
                items.push(consume(codec, tokens, inner)?);
            }
            Ok(TypedValue::Variadic(VariadicValue::new(inner.as_ref().clone(), items)?))
        }
        Type::Composite(item_types) => {
            let items = item_types
                .iter()
                .map(|item_ty| consume(codec, tokens, item_ty))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TypedValue::Composite(CompositeValue::new(item_types.clone(), items)?))
        }
        _ => {
            let buffer = tokens.next().ok_or_else(|| CodecError::MissingToken(ty.clone()))?;
            codec.decode_top_level(buffer, ty)
        }
    }
}

fn parse_hex_token(token: &str) -> Result<Vec<u8>, CodecError> {
    // Odd-length tokens gain a leading zero nibble.
    let padded;
    let hex = if token.len() % 2 == 1 {
        padded = format!("0{token}");
        &padded
    } else {
        token
    };
    Vec::<u8>::from_hex(hex).map_err(|_| CodecError::InvalidHexToken(token.to_owned()))
}

/// How many wire-level argument slots a formal parameter list admits.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ArgumentsCardinality {
    pub min: usize,
    /// `None` when the last formal parameter is variadic.
    pub max: Option<usize>,
}

impl ArgumentsCardinality {
    pub fn is_variadic(&self) -> bool { self.max.is_none() }

    pub fn admits(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

/// Computes `{min, max}` for a formal parameter list: trailing parameters
/// whose cardinality admits zero values each lower `min` by one, and a final
/// variadic parameter lifts `max` entirely.
pub fn arguments_cardinality(types: &[Type]) -> ArgumentsCardinality {
    let mut min = types.len();
    for ty in types.iter().rev() {
        if ty.cardinality().lower_bound() > 0 {
            break;
        }
        min -= 1;
    }

    let unbounded = types.last().is_some_and(|ty| ty.cardinality().is_unbounded());
    let max = if unbounded {
        None
    } else {
        Some(types.iter().map(|ty| ty.cardinality().upper_bound().unwrap_or(1)).sum())
    };

    ArgumentsCardinality { min, max }
}

/// Count-vs-signature mismatches reported before any codec work happens.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum CardinalityError {
    #[display("too few arguments: at least {min} required, {actual} given")]
    TooFew { min: usize, actual: usize },

    #[display("too many arguments: at most {max} accepted, {actual} given")]
    TooMany { max: usize, actual: usize },
}

/// Validates a provided argument count against a formal parameter list.
pub fn check_argument_count(types: &[Type], actual: usize) -> Result<(), CardinalityError> {
    let cardinality = arguments_cardinality(types);
    if actual < cardinality.min {
        return Err(CardinalityError::TooFew { min: cardinality.min, actual });
    }
    if let Some(max) = cardinality.max {
        if actual > max {
            return Err(CardinalityError::TooMany { max, actual });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use arwen_abi::{ListValue, NumericType, OptionValue};

    use super::*;

    fn u16_list(values: [u16; 2]) -> TypedValue {
        TypedValue::List(
            ListValue::new(
                Type::Numeric(NumericType::U16),
                values.iter().map(|value| TypedValue::u16(*value)).collect(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn plain_values_one_token_each() {
        let serializer = ArgSerializer::new();
        let values = [TypedValue::u32(100), TypedValue::i64(-1), TypedValue::bytes(vec![0xAB, 0xBA])];
        assert_eq!(serializer.values_to_string(&values).unwrap(), "64@ff@abba");

        let types = [
            Type::Numeric(NumericType::U32),
            Type::Numeric(NumericType::I64),
            Type::Bytes,
        ];
        assert_eq!(serializer.string_to_values("64@ff@abba", &types).unwrap(), values);
    }

    #[test]
    fn option_and_composite_tokens() {
        let serializer = ArgSerializer::new();
        let values = [
            TypedValue::Option(OptionValue::some(TypedValue::u32(100))),
            TypedValue::Option(OptionValue::none(Type::Numeric(NumericType::U8))),
            TypedValue::Composite(CompositeValue::from_items(vec![
                TypedValue::u8(3),
                TypedValue::bytes(vec![0xAB, 0xBA]),
            ])),
        ];
        assert_eq!(serializer.values_to_string(&values).unwrap(), "0100000064@@03@abba");

        let types = [
            Type::Option(Box::new(Type::Numeric(NumericType::U32))),
            Type::Option(Box::new(Type::Numeric(NumericType::U8))),
            Type::Composite(vec![Type::Numeric(NumericType::U8), Type::Bytes]),
        ];
        assert_eq!(serializer.string_to_values("0100000064@@03@abba", &types).unwrap(), values);
    }

    #[test]
    fn composite_of_list_with_variadic_tail() {
        let serializer = ArgSerializer::new();
        let values = [
            TypedValue::Composite(CompositeValue::from_items(vec![u16_list([8, 9])])),
            TypedValue::Variadic(
                VariadicValue::new(Type::Bytes, vec![
                    TypedValue::bytes(vec![0xAB, 0xBA]),
                    TypedValue::bytes(vec![0xAB, 0xBA]),
                    TypedValue::bytes(vec![0xAB, 0xBA]),
                ])
                .unwrap(),
            ),
        ];
        let joined = "00080009@abba@abba@abba";
        assert_eq!(serializer.values_to_string(&values).unwrap(), joined);

        let types = [
            Type::Composite(vec![Type::List(Box::new(Type::Numeric(NumericType::U16)))]),
            Type::Variadic(Box::new(Type::Bytes)),
        ];
        assert_eq!(serializer.string_to_values(joined, &types).unwrap(), values);
    }

    #[test]
    fn unset_optional_contributes_no_token() {
        let serializer = ArgSerializer::new();
        let values = [
            TypedValue::u32(100),
            TypedValue::Optional(OptionalValue::unset(Type::Numeric(NumericType::U8))),
            TypedValue::bytes(vec![0xAB, 0xBA]),
        ];
        let joined = serializer.values_to_string(&values).unwrap();
        assert_eq!(joined, "64@abba");
        assert_eq!(joined.split(ARGUMENTS_SEPARATOR).count(), 2);
    }

    #[test]
    fn odd_length_tokens_gain_a_leading_zero() {
        let serializer = ArgSerializer::new();
        let buffers = serializer.string_to_buffers("a@bcd").unwrap();
        assert_eq!(buffers, vec![vec![0x0A], vec![0x0B, 0xCD]]);
        assert!(matches!(
            serializer.string_to_buffers("xyz"),
            Err(CodecError::InvalidHexToken(_))
        ));
    }

    #[test]
    fn exhausted_tokens_fail_plain_types() {
        let serializer = ArgSerializer::new();
        let types = [Type::Numeric(NumericType::U32), Type::Bytes];
        assert!(matches!(
            serializer.string_to_values("64", &types),
            Err(CodecError::MissingToken(Type::Bytes))
        ));
    }

    #[test]
    fn cardinalities() {
        let u32_ty = Type::Numeric(NumericType::U32);

        let mixed = [
            u32_ty.clone(),
            u32_ty.clone(),
            Type::Optional(Box::new(u32_ty.clone())),
            Type::Optional(Box::new(u32_ty.clone())),
        ];
        assert_eq!(arguments_cardinality(&mixed), ArgumentsCardinality { min: 2, max: Some(4) });

        let variadic = [u32_ty.clone(), Type::Variadic(Box::new(Type::Bytes))];
        let cardinality = arguments_cardinality(&variadic);
        assert_eq!(cardinality, ArgumentsCardinality { min: 1, max: None });
        assert!(cardinality.is_variadic());
        assert!(cardinality.admits(17));

        // An optional before a mandatory parameter does not lower the minimum.
        let inner_optional = [Type::Optional(Box::new(u32_ty.clone())), u32_ty.clone()];
        assert_eq!(arguments_cardinality(&inner_optional), ArgumentsCardinality { min: 2, max: Some(2) });

        assert_eq!(check_argument_count(&mixed, 3), Ok(()));
        assert_eq!(check_argument_count(&mixed, 1), Err(CardinalityError::TooFew { min: 2, actual: 1 }));
        assert_eq!(check_argument_count(&mixed, 5), Err(CardinalityError::TooMany { max: 4, actual: 5 }));
    }
}

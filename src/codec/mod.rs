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

//! Binary wire format of typed values.
//!
//! Every type has two encodings. The *nested* form is self-delimiting: a
//! decoder embedded in a larger structure can always tell how many bytes to
//! consume (fixed widths stay fixed, everything else carries a 4-byte
//! big-endian length or count header). The *top-level* form is used when a
//! value owns a whole argument slot and drops metadata the slot boundary
//! already provides: `false`, numeric zero and an absent `Option` all encode
//! to the empty buffer, and a top-level list runs to the end of the buffer
//! with no count header.

mod num;
mod reader;

use arwen_abi::{
    EndpointDefinition, EnumValue, ListValue, OptionValue, StructValue, Type, TypedValue, ValueTypingError,
};

pub use self::num::{
    big_int_from_bytes, big_int_to_bytes, big_uint_from_bytes, big_uint_to_bytes,
    discard_superfluous_bytes_in_twos_complement, discard_superfluous_zero_bytes, flip_bits, is_msb_one,
};
pub use self::reader::ByteReader;
use crate::args;

/// Failures of byte-level encoding and decoding. Fail-fast: a failed decode
/// never yields a partially populated value.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
pub enum CodecError {
    #[display("unexpected end of buffer: {wanted} more byte(s) wanted, {remaining} available")]
    UnexpectedEnd { wanted: usize, remaining: usize },

    #[display("buffer of {0} byte(s) exceeds the limit of {1}")]
    BufferTooLarge(usize, usize),

    #[display("list of {0} element(s) exceeds the limit of {1}")]
    ListTooLong(usize, usize),

    #[display("invalid option presence flag {0:#04x}")]
    InvalidOptionFlag(u8),

    #[display("{0} trailing byte(s) left after a complete top-level value")]
    TrailingBytes(usize),

    #[display("token identifier payload is not valid UTF-8")]
    InvalidTokenIdentifier,

    /// Optional, variadic and composite types shape the argument list; they
    /// have no byte-level form of their own.
    #[display("{0} is an argument-level type and has no byte-level encoding")]
    ArgumentLevel(Type),

    #[display("no wire token left for a value of type {0}")]
    MissingToken(Type),

    #[from]
    #[display(inner)]
    Typing(ValueTypingError),

    #[display("invalid hex token \"{0}\"")]
    InvalidHexToken(String),

    #[display("invalid base64 payload \"{0}\"")]
    InvalidBase64(String),
}

/// Guards against hostile or corrupted buffers.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CodecConstraints {
    pub max_buffer_len: usize,
    pub max_list_len: usize,
}

impl Default for CodecConstraints {
    fn default() -> Self {
        CodecConstraints {
            max_buffer_len: 4096,
            max_list_len: 1024,
        }
    }
}

/// The codec proper: a closed dispatch over every [`Type`] category, in both
/// encoding modes.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct BinaryCodec {
    pub constraints: CodecConstraints,
}

impl BinaryCodec {
    pub fn new() -> Self { BinaryCodec::default() }

    pub fn with_constraints(constraints: CodecConstraints) -> Self { BinaryCodec { constraints } }

    pub fn encode_nested(&self, value: &TypedValue) -> Result<Vec<u8>, CodecError> {
        match value {
            TypedValue::Bool(value) => Ok(vec![*value as u8]),
            TypedValue::Numeric(numeric) => Ok(num::encode_nested(numeric)),
            TypedValue::Bytes(bytes) => Ok(Self::length_prefixed(bytes)),
            TypedValue::Address(hash) | TypedValue::H256(hash) => Ok(hash.to_byte_array().to_vec()),
            TypedValue::TokenIdentifier(token) => Ok(Self::length_prefixed(token.as_bytes())),
            TypedValue::List(list) => {
                self.check_list_len(list.len())?;
                let mut bytes = (list.len() as u32).to_be_bytes().to_vec();
                for item in list.items() {
                    bytes.extend(self.encode_nested(item)?);
                }
                Ok(bytes)
            }
            TypedValue::Option(option) => match option.value() {
                None => Ok(vec![0x00]),
                Some(inner) => {
                    let mut bytes = vec![0x01];
                    bytes.extend(self.encode_nested(inner)?);
                    Ok(bytes)
                }
            },
            TypedValue::Struct(strukt) => {
                let mut bytes = Vec::new();
                for field in strukt.fields() {
                    bytes.extend(self.encode_nested(field)?);
                }
                Ok(bytes)
            }
            TypedValue::Enum(en) => Ok(vec![en.discriminant()]),
            TypedValue::Optional(_) | TypedValue::Variadic(_) | TypedValue::Composite(_) => {
                Err(CodecError::ArgumentLevel(value.ty()))
            }
        }
    }

    pub fn encode_top_level(&self, value: &TypedValue) -> Result<Vec<u8>, CodecError> {
        match value {
            TypedValue::Bool(value) => Ok(if *value { vec![0x01] } else { vec![] }),
            TypedValue::Numeric(numeric) => Ok(num::encode_top_level(numeric)),
            TypedValue::Bytes(bytes) => Ok(bytes.clone()),
            TypedValue::Address(hash) | TypedValue::H256(hash) => Ok(hash.to_byte_array().to_vec()),
            TypedValue::TokenIdentifier(token) => Ok(token.as_bytes().to_vec()),
            TypedValue::List(list) => {
                self.check_list_len(list.len())?;
                let mut bytes = Vec::new();
                for item in list.items() {
                    bytes.extend(self.encode_nested(item)?);
                }
                Ok(bytes)
            }
            TypedValue::Option(option) => match option.value() {
                None => Ok(vec![]),
                Some(inner) => {
                    let mut bytes = vec![0x01];
                    bytes.extend(self.encode_nested(inner)?);
                    Ok(bytes)
                }
            },
            // A struct's boundaries are unambiguous once field types are
            // known, so its top-level form equals the nested concatenation.
            TypedValue::Struct(_) => self.encode_nested(value),
            TypedValue::Enum(en) => {
                Ok(num::encode_top_level(&arwen_abi::NumericValue::u8(en.discriminant())))
            }
            TypedValue::Optional(_) | TypedValue::Variadic(_) | TypedValue::Composite(_) => {
                Err(CodecError::ArgumentLevel(value.ty()))
            }
        }
    }

    /// Decodes the self-delimiting form off the front of `data`, returning
    /// the value together with the number of bytes it consumed; trailing
    /// bytes are left untouched for the caller.
    pub fn decode_nested(&self, data: &[u8], ty: &Type) -> Result<(TypedValue, usize), CodecError> {
        let mut reader = ByteReader::new(data);
        let value = self.read_nested(&mut reader, ty)?;
        Ok((value, reader.pos()))
    }

    pub(crate) fn read_nested(&self, reader: &mut ByteReader, ty: &Type) -> Result<TypedValue, CodecError> {
        match ty {
            Type::Bool => Ok(TypedValue::Bool(reader.read_byte()? == 1)),
            Type::Numeric(numeric) => Ok(TypedValue::Numeric(num::decode_nested(reader, *numeric)?)),
            Type::Bytes => {
                let len = self.read_length_header(reader)?;
                Ok(TypedValue::bytes(reader.read_exact(len)?))
            }
            Type::Address => Ok(TypedValue::address_from_slice(reader.read_exact(32)?)?),
            Type::H256 => Ok(TypedValue::h256_from_slice(reader.read_exact(32)?)?),
            Type::TokenIdentifier => {
                let len = self.read_length_header(reader)?;
                let token = core::str::from_utf8(reader.read_exact(len)?)
                    .map_err(|_| CodecError::InvalidTokenIdentifier)?;
                Ok(TypedValue::token_identifier(token))
            }
            Type::List(inner) => {
                let count = reader.read_u32_be()? as usize;
                self.check_list_len(count)?;
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(self.read_nested(reader, inner)?);
                }
                Ok(TypedValue::List(ListValue::new(inner.as_ref().clone(), items)?))
            }
            Type::Option(inner) => match reader.read_byte()? {
                0x00 => Ok(TypedValue::Option(OptionValue::none(inner.as_ref().clone()))),
                0x01 => Ok(TypedValue::Option(OptionValue::some(self.read_nested(reader, inner)?))),
                flag => Err(CodecError::InvalidOptionFlag(flag)),
            },
            Type::Struct(strukt) => {
                let mut fields = Vec::with_capacity(strukt.fields.len());
                for field in &strukt.fields {
                    fields.push(self.read_nested(reader, &field.ty)?);
                }
                Ok(TypedValue::Struct(StructValue::new(strukt.clone(), fields)?))
            }
            Type::Enum(en) => {
                let discriminant = reader.read_byte()?;
                Ok(TypedValue::Enum(EnumValue::from_discriminant(en.clone(), discriminant)?))
            }
            Type::Optional(_) | Type::Variadic(_) | Type::Composite(_) => {
                Err(CodecError::ArgumentLevel(ty.clone()))
            }
        }
    }

    /// Decodes a whole argument slot. The buffer must be fully explained by
    /// the type: leftovers after a complete value are an error, not ignored.
    pub fn decode_top_level(&self, data: &[u8], ty: &Type) -> Result<TypedValue, CodecError> {
        if data.len() > self.constraints.max_buffer_len {
            return Err(CodecError::BufferTooLarge(data.len(), self.constraints.max_buffer_len));
        }
        match ty {
            Type::Bool => {
                if data.len() > 1 {
                    return Err(CodecError::TrailingBytes(data.len() - 1));
                }
                Ok(TypedValue::Bool(data.first() == Some(&1)))
            }
            Type::Numeric(numeric) => Ok(TypedValue::Numeric(num::decode_top_level(data, *numeric)?)),
            Type::Bytes => Ok(TypedValue::bytes(data)),
            Type::Address => Ok(TypedValue::address_from_slice(data)?),
            Type::H256 => Ok(TypedValue::h256_from_slice(data)?),
            Type::TokenIdentifier => {
                let token = core::str::from_utf8(data).map_err(|_| CodecError::InvalidTokenIdentifier)?;
                Ok(TypedValue::token_identifier(token))
            }
            Type::List(inner) => {
                // No count header: elements run to the end of the buffer.
                let mut reader = ByteReader::new(data);
                let mut items = Vec::new();
                while !reader.is_empty() {
                    self.check_list_len(items.len() + 1)?;
                    items.push(self.read_nested(&mut reader, inner)?);
                }
                Ok(TypedValue::List(ListValue::new(inner.as_ref().clone(), items)?))
            }
            Type::Option(inner) => {
                if data.is_empty() {
                    return Ok(TypedValue::Option(OptionValue::none(inner.as_ref().clone())));
                }
                let mut reader = ByteReader::new(data);
                let value = match reader.read_byte()? {
                    0x01 => self.read_nested(&mut reader, inner)?,
                    flag => return Err(CodecError::InvalidOptionFlag(flag)),
                };
                Self::expect_exhausted(&reader)?;
                Ok(TypedValue::Option(OptionValue::some(value)))
            }
            Type::Struct(_) => {
                let mut reader = ByteReader::new(data);
                let value = self.read_nested(&mut reader, ty)?;
                Self::expect_exhausted(&reader)?;
                Ok(value)
            }
            Type::Enum(en) => {
                let numeric = num::decode_top_level(data, arwen_abi::NumericType::U8)?;
                let discriminant = u8::try_from(numeric.value().clone())
                    .map_err(|_| ValueTypingError::NumericOverflow(numeric.value().clone(), numeric.ty()))?;
                Ok(TypedValue::Enum(EnumValue::from_discriminant(en.clone(), discriminant)?))
            }
            Type::Optional(_) | Type::Variadic(_) | Type::Composite(_) => {
                Err(CodecError::ArgumentLevel(ty.clone()))
            }
        }
    }

    /// Decodes a query or transaction result: one raw buffer per wire token,
    /// consumed against the endpoint's formal output parameters.
    pub fn decode_output(
        &self,
        buffers: &[Vec<u8>],
        endpoint: &EndpointDefinition,
    ) -> Result<Vec<TypedValue>, CodecError> {
        args::buffers_to_values_with(self, buffers, &endpoint.output_types())
    }

    fn length_prefixed(payload: &[u8]) -> Vec<u8> {
        let mut bytes = (payload.len() as u32).to_be_bytes().to_vec();
        bytes.extend_from_slice(payload);
        bytes
    }

    fn read_length_header(&self, reader: &mut ByteReader) -> Result<usize, CodecError> {
        let len = reader.read_u32_be()? as usize;
        if len > self.constraints.max_buffer_len {
            return Err(CodecError::BufferTooLarge(len, self.constraints.max_buffer_len));
        }
        Ok(len)
    }

    fn check_list_len(&self, len: usize) -> Result<(), CodecError> {
        if len > self.constraints.max_list_len {
            return Err(CodecError::ListTooLong(len, self.constraints.max_list_len));
        }
        Ok(())
    }

    fn expect_exhausted(reader: &ByteReader) -> Result<(), CodecError> {
        if reader.remaining() > 0 {
            return Err(CodecError::TrailingBytes(reader.remaining()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use arwen_abi::{EnumType, EnumVariant, FieldDefinition, NumericType, OptionalValue, StructType};
    use num_bigint::BigInt;

    use super::*;

    fn codec() -> BinaryCodec { BinaryCodec::new() }

    #[test]
    fn booleans() {
        let codec = codec();
        assert_eq!(codec.encode_top_level(&TypedValue::bool(true)).unwrap(), vec![0x01]);
        assert_eq!(codec.encode_top_level(&TypedValue::bool(false)).unwrap(), Vec::<u8>::new());
        assert_eq!(codec.encode_nested(&TypedValue::bool(false)).unwrap(), vec![0x00]);
        assert_eq!(codec.decode_top_level(&[], &Type::Bool).unwrap(), TypedValue::bool(false));
        assert_eq!(codec.decode_nested(&[0x01, 0xAA], &Type::Bool).unwrap(), (TypedValue::bool(true), 1));
        // A top-level boolean is at most one byte; leftovers are an error.
        assert_eq!(
            codec.decode_top_level(&[0x01, 0xAB, 0xCD], &Type::Bool),
            Err(CodecError::TrailingBytes(2))
        );
    }

    #[test]
    fn nested_length_headers() {
        let codec = codec();
        assert_eq!(codec.encode_nested(&TypedValue::bytes(vec![0xAB, 0xBA])).unwrap(), vec![
            0, 0, 0, 2, 0xAB, 0xBA
        ]);
        assert_eq!(
            codec.encode_nested(&TypedValue::big_uint(0xABBAu16)).unwrap(),
            vec![0, 0, 0, 2, 0xAB, 0xBA]
        );
        let (value, read) = codec.decode_nested(&[0, 0, 0, 2, 0xAB, 0xBA, 0xFF], &Type::Bytes).unwrap();
        assert_eq!(value, TypedValue::bytes(vec![0xAB, 0xBA]));
        assert_eq!(read, 6);
    }

    #[test]
    fn top_level_list_consumes_whole_buffer() {
        let codec = codec();
        let ty = Type::List(Box::new(Type::Numeric(NumericType::U16)));
        let value = codec.decode_top_level(&[0x00, 0x08, 0x00, 0x09], &ty).unwrap();
        let TypedValue::List(list) = &value else { panic!("expected a list") };
        assert_eq!(list.items(), &[TypedValue::u16(8), TypedValue::u16(9)]);
        // A partial trailing element is a hard failure.
        assert!(matches!(
            codec.decode_top_level(&[0x00, 0x08, 0x00], &ty),
            Err(CodecError::UnexpectedEnd { .. })
        ));
        assert_eq!(codec.encode_top_level(&value).unwrap(), vec![0x00, 0x08, 0x00, 0x09]);
        assert_eq!(codec.encode_nested(&value).unwrap(), vec![0, 0, 0, 2, 0x00, 0x08, 0x00, 0x09]);
    }

    #[test]
    fn option_asymmetry() {
        let codec = codec();
        let some = TypedValue::Option(OptionValue::some(TypedValue::u32(100)));
        let none = TypedValue::Option(OptionValue::none(Type::Numeric(NumericType::U32)));
        let ty = Type::Option(Box::new(Type::Numeric(NumericType::U32)));

        assert_eq!(codec.encode_top_level(&some).unwrap(), vec![0x01, 0, 0, 0, 0x64]);
        assert_eq!(codec.encode_top_level(&none).unwrap(), Vec::<u8>::new());
        assert_eq!(codec.encode_nested(&none).unwrap(), vec![0x00]);

        assert_eq!(codec.decode_top_level(&[], &ty).unwrap(), none);
        assert_eq!(codec.decode_top_level(&[0x01, 0, 0, 0, 0x64], &ty).unwrap(), some);
        // 0x00 is a nested-only flag; at top level absence is the empty buffer.
        assert!(matches!(
            codec.decode_top_level(&[0x00, 0, 0, 0, 0x64], &ty),
            Err(CodecError::InvalidOptionFlag(0x00))
        ));
    }

    #[test]
    fn structs_concatenate_fields() {
        let codec = codec();
        let ty = StructType::new("TokenPayment", [
            FieldDefinition::new("token", Type::TokenIdentifier),
            FieldDefinition::new("amount", Type::Numeric(NumericType::BIG_UINT)),
            FieldDefinition::new("frozen", Type::Bool),
        ]);
        let value = TypedValue::Struct(
            StructValue::new(ty.clone(), vec![
                TypedValue::token_identifier("TKN"),
                TypedValue::big_uint(0x64u8),
                TypedValue::bool(true),
            ])
            .unwrap(),
        );

        let encoded = codec.encode_nested(&value).unwrap();
        assert_eq!(encoded, vec![0, 0, 0, 3, b'T', b'K', b'N', 0, 0, 0, 1, 0x64, 0x01]);
        assert_eq!(codec.encode_top_level(&value).unwrap(), encoded);

        assert_eq!(codec.decode_top_level(&encoded, &Type::Struct(ty.clone())).unwrap(), value);
        assert!(matches!(
            codec.decode_top_level(&encoded[..encoded.len() - 1], &Type::Struct(ty)),
            Err(CodecError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn enum_discriminants() {
        let codec = codec();
        let ty = EnumType::new("Status", [EnumVariant::new("Inactive", 0), EnumVariant::new("Running", 1)]);
        let running = TypedValue::Enum(EnumValue::from_discriminant(ty.clone(), 1).unwrap());
        let inactive = TypedValue::Enum(EnumValue::from_discriminant(ty.clone(), 0).unwrap());

        assert_eq!(codec.encode_top_level(&running).unwrap(), vec![0x01]);
        // Discriminant zero follows the numeric zero rule.
        assert_eq!(codec.encode_top_level(&inactive).unwrap(), Vec::<u8>::new());
        assert_eq!(codec.encode_nested(&inactive).unwrap(), vec![0x00]);

        assert_eq!(codec.decode_top_level(&[], &Type::Enum(ty.clone())).unwrap(), inactive);
        assert!(matches!(
            codec.decode_top_level(&[0x07], &Type::Enum(ty)),
            Err(CodecError::Typing(ValueTypingError::UnknownDiscriminant(..)))
        ));
    }

    #[test]
    fn argument_level_types_have_no_byte_form() {
        let codec = codec();
        let value = TypedValue::Optional(OptionalValue::unset(Type::Bool));
        assert!(matches!(codec.encode_top_level(&value), Err(CodecError::ArgumentLevel(_))));
        assert!(matches!(
            codec.decode_top_level(&[], &Type::Variadic(Box::new(Type::Bool))),
            Err(CodecError::ArgumentLevel(_))
        ));
    }

    #[test]
    fn constraints_guard_hostile_buffers() {
        let codec = BinaryCodec::with_constraints(CodecConstraints { max_buffer_len: 8, max_list_len: 2 });
        assert!(matches!(
            codec.decode_top_level(&[0u8; 9], &Type::Bytes),
            Err(CodecError::BufferTooLarge(9, 8))
        ));
        // Claimed length header far beyond the real buffer.
        assert!(matches!(
            codec.decode_nested(&[0xFF, 0xFF, 0xFF, 0xFF], &Type::Bytes),
            Err(CodecError::BufferTooLarge(..))
        ));
        let ty = Type::List(Box::new(Type::Bool));
        assert!(matches!(
            codec.decode_top_level(&[1, 1, 1], &ty),
            Err(CodecError::ListTooLong(3, 2))
        ));
    }

    #[test]
    fn big_int_round_trips() {
        let codec = codec();
        for value in [0i64, 1, -1, 127, 128, -129, 255, 256, -255, -257] {
            let typed = TypedValue::big_int(BigInt::from(value));
            let top = codec.encode_top_level(&typed).unwrap();
            assert_eq!(codec.decode_top_level(&top, &Type::Numeric(NumericType::BIG_INT)).unwrap(), typed);
            let nested = codec.encode_nested(&typed).unwrap();
            let (decoded, read) = codec
                .decode_nested(&nested, &Type::Numeric(NumericType::BIG_INT))
                .unwrap();
            assert_eq!((decoded, read), (typed, nested.len()));
        }
    }
}

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

//! Big-endian two's-complement helpers over plain byte buffers, plus the
//! numeric encode/decode entry points built on them.
//!
//! The wire rule for integers is minimality with sign disambiguation: at top
//! level, zero is the empty buffer; an unsigned value is its magnitude bytes;
//! a signed value is the shortest two's-complement representation whose
//! leading bit still reads as the correct sign (so `+128` carries a `0x00`
//! prefix and `-129` carries a `0xFF` prefix). All helpers work at arbitrary
//! width.

use arwen_abi::{NumericType, NumericValue};
use num_bigint::{BigInt, BigUint, Sign};

use super::{ByteReader, CodecError};

/// Minimal big-endian magnitude bytes; zero maps to the empty buffer.
pub fn big_uint_to_bytes(value: &BigUint) -> Vec<u8> {
    // `to_bytes_be` spells zero as a single 0x00 byte.
    if value.bits() == 0 {
        return vec![];
    }
    value.to_bytes_be()
}

pub fn big_uint_from_bytes(bytes: &[u8]) -> BigUint { BigUint::from_bytes_be(bytes) }

/// Minimal two's-complement bytes of a signed value, with the
/// sign-disambiguation prefix where the natural encoding's leading bit would
/// misrepresent the sign. Zero maps to the empty buffer.
pub fn big_int_to_bytes(value: &BigInt) -> Vec<u8> {
    match value.sign() {
        Sign::NoSign => vec![],
        Sign::Plus => {
            let mut bytes = value.magnitude().to_bytes_be();
            if is_msb_one(&bytes) {
                bytes.insert(0, 0x00);
            }
            bytes
        }
        Sign::Minus => {
            // Two's complement of v is the bit flip of |v + 1|'s magnitude.
            let shifted = value + 1u8;
            let mut bytes = big_uint_to_bytes(shifted.magnitude());
            flip_bits(&mut bytes);
            if !is_msb_one(&bytes) {
                bytes.insert(0, 0xFF);
            }
            bytes
        }
    }
}

/// Reads a signed value out of big-endian two's-complement bytes of any
/// length; the empty buffer is zero.
pub fn big_int_from_bytes(bytes: &[u8]) -> BigInt {
    if !is_msb_one(bytes) {
        return BigInt::from(BigUint::from_bytes_be(bytes));
    }
    let mut flipped = bytes.to_vec();
    flip_bits(&mut flipped);
    -BigInt::from(BigUint::from_bytes_be(&flipped)) - 1
}

/// Ones'-complement over the whole buffer, in place.
pub fn flip_bits(bytes: &mut [u8]) {
    for byte in bytes {
        *byte = !*byte;
    }
}

/// Whether the leading bit of the buffer is set; the empty buffer reads as
/// unset.
pub fn is_msb_one(bytes: &[u8]) -> bool { bytes.first().is_some_and(|byte| byte & 0x80 != 0) }

/// Strips leading zero bytes off an unsigned big-endian magnitude.
pub fn discard_superfluous_zero_bytes(bytes: &[u8]) -> &[u8] {
    let mut start = 0;
    while start < bytes.len() && bytes[start] == 0 {
        start += 1;
    }
    &bytes[start..]
}

/// Strips leading sign-extension bytes off a two's-complement buffer, keeping
/// the shortest form which still carries the correct sign in its leading bit.
pub fn discard_superfluous_bytes_in_twos_complement(bytes: &[u8]) -> &[u8] {
    let mut start = 0;
    while start + 1 < bytes.len() {
        let redundant = match bytes[start] {
            0x00 if bytes[start + 1] & 0x80 == 0 => true,
            0xFF if bytes[start + 1] & 0x80 != 0 => true,
            _ => false,
        };
        if !redundant {
            break;
        }
        start += 1;
    }
    &bytes[start..]
}

/// Top-level form: minimal bytes, zero encodes to nothing.
pub(crate) fn encode_top_level(numeric: &NumericValue) -> Vec<u8> {
    if numeric.ty().signed {
        big_int_to_bytes(numeric.value())
    } else {
        big_uint_to_bytes(numeric.value().magnitude())
    }
}

/// Nested form: exactly the declared width for fixed-width types, a 4-byte
/// length header plus the top-level form for arbitrary-precision ones.
pub(crate) fn encode_nested(numeric: &NumericValue) -> Vec<u8> {
    let payload = encode_top_level(numeric);
    match numeric.ty().size_in_bytes {
        Some(width) => {
            let fill = if numeric.value().sign() == Sign::Minus { 0xFF } else { 0x00 };
            let mut bytes = vec![fill; width - payload.len()];
            bytes.extend_from_slice(&payload);
            bytes
        }
        None => {
            let mut bytes = (payload.len() as u32).to_be_bytes().to_vec();
            bytes.extend_from_slice(&payload);
            bytes
        }
    }
}

pub(crate) fn decode_top_level(data: &[u8], ty: NumericType) -> Result<NumericValue, CodecError> {
    if let Some(width) = ty.size_in_bytes {
        if data.len() > width {
            return Err(CodecError::BufferTooLarge(data.len(), width));
        }
    }
    let value = if ty.signed {
        big_int_from_bytes(data)
    } else {
        BigInt::from(BigUint::from_bytes_be(data))
    };
    Ok(NumericValue::new(value, ty)?)
}

pub(crate) fn decode_nested(reader: &mut ByteReader, ty: NumericType) -> Result<NumericValue, CodecError> {
    let payload = match ty.size_in_bytes {
        Some(width) => reader.read_exact(width)?,
        None => {
            let len = reader.read_u32_be()? as usize;
            reader.read_exact(len)?
        }
    };
    let value = if ty.signed {
        big_int_from_bytes(payload)
    } else {
        BigInt::from(BigUint::from_bytes_be(payload))
    };
    Ok(NumericValue::new(value, ty)?)
}

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

//! Return-data normalization for query and transaction results.
//!
//! The network reports contract return data in two outer encodings: query
//! endpoints hand back base64 items, transaction results embed hex tokens.
//! Both normalize to the raw per-token buffers which
//! [`BinaryCodec::decode_output`](crate::BinaryCodec::decode_output) consumes.

use amplify::hex::FromHex;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::codec::CodecError;

/// Decodes the base64 return-data items of a query response.
pub fn buffers_from_base64<'a>(
    items: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Vec<u8>>, CodecError> {
    items
        .into_iter()
        .map(|item| STANDARD.decode(item).map_err(|_| CodecError::InvalidBase64(item.to_owned())))
        .collect()
}

/// Decodes the hex return-data tokens embedded in a transaction result.
pub fn buffers_from_hex<'a>(items: impl IntoIterator<Item = &'a str>) -> Result<Vec<Vec<u8>>, CodecError> {
    items
        .into_iter()
        .map(|item| Vec::<u8>::from_hex(item).map_err(|_| CodecError::InvalidHexToken(item.to_owned())))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn base64_items() {
        // "ZA==" is 0x64, "q7o=" is 0xABBA.
        let buffers = buffers_from_base64(["ZA==", "", "q7o="]).unwrap();
        assert_eq!(buffers, vec![vec![0x64], vec![], vec![0xAB, 0xBA]]);
        assert!(matches!(buffers_from_base64(["%%"]), Err(CodecError::InvalidBase64(_))));
    }

    #[test]
    fn hex_items() {
        let buffers = buffers_from_hex(["64", "", "abba"]).unwrap();
        assert_eq!(buffers, vec![vec![0x64], vec![], vec![0xAB, 0xBA]]);
        assert!(matches!(buffers_from_hex(["zz"]), Err(CodecError::InvalidHexToken(_))));
    }
}

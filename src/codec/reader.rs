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

use super::CodecError;

/// Bounds-checked decode cursor over a byte buffer.
///
/// Nested decoding threads a single reader through recursive calls, so the
/// number of bytes each value consumed is always explicit in the cursor
/// position rather than hidden in per-call bookkeeping.
#[derive(Copy, Clone, Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self { ByteReader { data, pos: 0 } }

    pub fn pos(&self) -> usize { self.pos }

    pub fn remaining(&self) -> usize { self.data.len() - self.pos }

    pub fn is_empty(&self) -> bool { self.pos >= self.data.len() }

    pub fn read_byte(&mut self) -> Result<u8, CodecError> {
        let slice = self.read_exact(1)?;
        Ok(slice[0])
    }

    pub fn read_u32_be(&mut self) -> Result<u32, CodecError> {
        let slice = self.read_exact(4)?;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(slice);
        Ok(u32::from_be_bytes(bytes))
    }

    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < len {
            return Err(CodecError::UnexpectedEnd {
                wanted: len,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn read_to_end(&mut self) -> &'a [u8] {
        let slice = &self.data[self.pos..];
        self.pos = self.data.len();
        slice
    }
}

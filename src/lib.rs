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

#![deny(unsafe_code, non_upper_case_globals, non_camel_case_types, non_snake_case)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! ABI-driven binary serialization for smart contract calls.
//!
//! The crate turns typed values into the wire formats a contract-hosting
//! chain expects and back:
//!
//! - [`BinaryCodec`] — the per-value byte format, in its nested and top-level
//!   modes;
//! - [`ArgSerializer`] — the `@`-separated hex token string carried in the
//!   transaction data field;
//! - [`CallPayloadBuilder`], [`DeployPayloadBuilder`], [`UpgradePayloadBuilder`]
//!   — complete transaction data payloads;
//! - [`buffers_from_base64`] / [`buffers_from_hex`] — return-data
//!   normalization for query and transaction results.
//!
//! The type algebra, ABI JSON loading and value model live in the re-exported
//! `arwen-abi` crate.

#[macro_use]
extern crate amplify;

pub mod codec;
mod args;
mod calls;
mod response;

pub use arwen_abi::*;

pub use crate::args::{
    arguments_cardinality, check_argument_count, ArgSerializer, ArgumentsCardinality, CardinalityError,
    ARGUMENTS_SEPARATOR,
};
pub use crate::calls::{
    CallError, CallPayloadBuilder, CodeMetadata, ContractFunction, DeployPayloadBuilder, UpgradePayloadBuilder,
    VM_TYPE_WASM,
};
pub use crate::codec::{BinaryCodec, ByteReader, CodecConstraints, CodecError};
pub use crate::response::{buffers_from_base64, buffers_from_hex};

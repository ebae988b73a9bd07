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

//! Type algebra and ABI resolution for Arwen smart contract calls.
//!
//! A contract ABI describes each callable endpoint as a list of typed input and
//! output parameters. This crate turns that description into values the binary
//! codec can work with:
//!
//! - [`Type`] — a closed algebra of primitive and composite type categories;
//! - [`TypedValue`] — a native value paired with its [`Type`], validated at
//!   construction;
//! - [`TypeRegistry`] — an explicit name → type scope, frozen after ABI load;
//! - [`parse_type_expression`] and [`TypeMapper`] — the textual type grammar
//!   (`"List<u32>"`, `"MultiResultVec<MultiResult<i32,bytes>>"`) and the
//!   mapping from ABI vocabulary to canonical types;
//! - [`AbiRegistry`] — the ABI JSON loader producing [`EndpointDefinition`]s.

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate serde;

mod types;
mod custom;
mod values;
mod registry;
mod parser;
mod mapper;
mod endpoint;
mod abi;
mod error;

pub use abi::AbiRegistry;
pub use custom::{EnumType, EnumVariant, FieldDefinition, StructType};
pub use endpoint::{EndpointDefinition, EndpointModifiers, EndpointParameter, Mutability};
pub use error::{AbiError, TypeError, ValueTypingError};
pub use mapper::{map_type_expression, resolve_type_names, TypeMapper};
pub use parser::{parse_type_expression, TypeExpression};
pub use registry::TypeRegistry;
pub use types::{NumericType, Type, TypeCardinality};
pub use values::{
    CompositeValue, EnumValue, ListValue, NumericValue, OptionValue, OptionalValue, StructValue, TypedValue,
    VariadicValue,
};

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

use num_bigint::BigInt;

use crate::{NumericType, Type};

/// Failures of type resolution and the textual type-expression grammar.
///
/// All of these are unrecoverable for the operation which detects them and
/// abort it immediately.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum TypeError {
    #[display("unknown type name \"{0}\"")]
    UnknownType(String),

    #[display("type \"{0}\" is already registered within this scope")]
    DuplicateType(String),

    #[display("unknown generic type alias \"{0}\"")]
    UnknownAlias(String),

    #[display("generic type {0} takes {1} type parameter(s), {2} given")]
    GenericArity(String, usize, usize),

    #[display("malformed type expression \"{expr}\": {reason}")]
    TypeExpression { expr: String, reason: String },

    #[display("struct {0} defines field \"{1}\" more than once")]
    DuplicateField(String, String),

    #[display("enum {0} assigns discriminant {1} more than once")]
    DuplicateDiscriminant(String, u8),
}

/// A constructed value whose runtime shape does not match its declared type.
///
/// These are raised at value construction, never at encode time.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum ValueTypingError {
    #[display("negative value {0} can't be held by the unsigned type {1}")]
    NegativeUnsigned(BigInt, NumericType),

    #[display("value {0} does not fit into {1}")]
    NumericOverflow(BigInt, NumericType),

    #[display("expected a value of type {expected}, found {found}")]
    TypeMismatch { expected: Type, found: Type },

    #[display("can't infer the element type of an empty sequence")]
    EmptyInference,

    #[display("struct {0} defines {1} field(s), {2} value(s) provided")]
    StructArity(String, usize, usize),

    #[display("field \"{field}\" of struct {strukt} must be of type {expected}, found {found}")]
    StructFieldType {
        strukt: String,
        field: String,
        expected: Type,
        found: Type,
    },

    #[display("discriminant {1} does not identify any variant of enum {0}")]
    UnknownDiscriminant(String, u8),

    #[display("\"{1}\" does not name any variant of enum {0}")]
    UnknownVariant(String, String),

    #[display("a 32-byte value is expected, {0} byte(s) provided")]
    InvalidByteLength(usize),
}

/// Failures while interpreting an ABI JSON document.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
pub enum AbiError {
    /// The document is not valid JSON or misses required structure.
    #[display("invalid ABI JSON: {0}")]
    Json(String),

    #[from]
    #[display(inner)]
    Type(TypeError),

    #[display("endpoint \"{0}\" is defined more than once")]
    DuplicateEndpoint(String),

    #[display("endpoint \"{0}\" is not defined by the ABI")]
    UnknownEndpoint(String),
}

impl From<serde_json::Error> for AbiError {
    fn from(err: serde_json::Error) -> Self { AbiError::Json(err.to_string()) }
}

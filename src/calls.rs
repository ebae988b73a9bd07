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

//! Transaction data payloads for contract calls, deployments and upgrades.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use amplify::hex::ToHex;
use arwen_abi::TypedValue;

use crate::args::{ArgSerializer, ARGUMENTS_SEPARATOR};
use crate::codec::CodecError;

/// VM type marker placed in deployment payloads.
pub const VM_TYPE_WASM: &str = "0500";

#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
pub enum CallError {
    #[display("contract function name must not be empty")]
    EmptyFunctionName,

    #[display("no contract function was given to the call builder")]
    MissingFunction,

    #[display("no contract code was given to the deployment builder")]
    MissingCode,

    #[from]
    #[display(inner)]
    Codec(CodecError),
}

/// A validated, non-empty contract function name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContractFunction(String);

impl ContractFunction {
    pub fn new(name: impl Into<String>) -> Result<Self, CallError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CallError::EmptyFunctionName);
        }
        Ok(ContractFunction(name))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl FromStr for ContractFunction {
    type Err = CallError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::new(s) }
}

impl Display for ContractFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Two-byte deployment property flags attached to contract code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CodeMetadata {
    pub upgradeable: bool,
    pub readable: bool,
    pub payable: bool,
}

impl Default for CodeMetadata {
    fn default() -> Self {
        CodeMetadata {
            upgradeable: true,
            readable: false,
            payable: false,
        }
    }
}

impl CodeMetadata {
    const UPGRADEABLE: u8 = 0x01;
    const READABLE: u8 = 0x04;
    const PAYABLE: u8 = 0x02;

    pub fn to_bytes(self) -> [u8; 2] {
        let mut byte_zero = 0u8;
        let mut byte_one = 0u8;
        if self.upgradeable {
            byte_zero |= Self::UPGRADEABLE;
        }
        if self.readable {
            byte_zero |= Self::READABLE;
        }
        if self.payable {
            byte_one |= Self::PAYABLE;
        }
        [byte_zero, byte_one]
    }
}

impl Display for CodeMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.to_bytes().to_hex()) }
}

/// Builds the `name@tok0@tok1…` transaction data field of a contract call.
#[derive(Clone, Default, Debug)]
pub struct CallPayloadBuilder {
    function: Option<ContractFunction>,
    args: Vec<TypedValue>,
}

impl CallPayloadBuilder {
    pub fn new() -> Self { CallPayloadBuilder::default() }

    pub fn use_function(mut self, function: ContractFunction) -> Self {
        self.function = Some(function);
        self
    }

    pub fn add_arg(mut self, arg: TypedValue) -> Self {
        self.args.push(arg);
        self
    }

    pub fn add_args(mut self, args: impl IntoIterator<Item = TypedValue>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn build(self) -> Result<String, CallError> {
        let function = self.function.ok_or(CallError::MissingFunction)?;
        let mut payload = function.to_string();
        append_tokens(&mut payload, &self.args)?;
        Ok(payload)
    }
}

/// Builds the `codeHex@vmType@metadataHex@initArgs…` data field of a
/// contract deployment.
#[derive(Clone, Default, Debug)]
pub struct DeployPayloadBuilder {
    code: Option<Vec<u8>>,
    metadata: CodeMetadata,
    init_args: Vec<TypedValue>,
}

impl DeployPayloadBuilder {
    pub fn new() -> Self { DeployPayloadBuilder::default() }

    pub fn use_code(mut self, code: impl Into<Vec<u8>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn use_metadata(mut self, metadata: CodeMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn add_initial_arg(mut self, arg: TypedValue) -> Self {
        self.init_args.push(arg);
        self
    }

    pub fn build(self) -> Result<String, CallError> {
        let code = self.code.ok_or(CallError::MissingCode)?;
        let mut payload = format!(
            "{}{ARGUMENTS_SEPARATOR}{VM_TYPE_WASM}{ARGUMENTS_SEPARATOR}{}",
            code.to_hex(),
            self.metadata
        );
        append_tokens(&mut payload, &self.init_args)?;
        Ok(payload)
    }
}

/// Builds the `upgradeContract@codeHex@metadataHex@args…` data field of a
/// contract upgrade.
#[derive(Clone, Default, Debug)]
pub struct UpgradePayloadBuilder {
    code: Option<Vec<u8>>,
    metadata: CodeMetadata,
    args: Vec<TypedValue>,
}

impl UpgradePayloadBuilder {
    pub fn new() -> Self { UpgradePayloadBuilder::default() }

    pub fn use_code(mut self, code: impl Into<Vec<u8>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn use_metadata(mut self, metadata: CodeMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn add_arg(mut self, arg: TypedValue) -> Self {
        self.args.push(arg);
        self
    }

    pub fn build(self) -> Result<String, CallError> {
        let code = self.code.ok_or(CallError::MissingCode)?;
        let mut payload = format!(
            "upgradeContract{ARGUMENTS_SEPARATOR}{}{ARGUMENTS_SEPARATOR}{}",
            code.to_hex(),
            self.metadata
        );
        append_tokens(&mut payload, &self.args)?;
        Ok(payload)
    }
}

fn append_tokens(payload: &mut String, args: &[TypedValue]) -> Result<(), CodecError> {
    for token in ArgSerializer::new().values_to_strings(args)? {
        payload.push(ARGUMENTS_SEPARATOR);
        payload.push_str(&token);
    }
    Ok(())
}

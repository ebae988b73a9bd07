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

use crate::Type;

/// Whether an endpoint may change contract state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Default)]
#[display(lowercase)]
pub enum Mutability {
    #[default]
    Mutable,
    Readonly,
    Pure,
}

/// Endpoint attributes beyond its name and parameter lists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct EndpointModifiers {
    pub mutability: Mutability,
    /// Whether the endpoint accepts a native-token payment alongside the call.
    pub payable_in_native: bool,
}

/// A named, typed input or output of an endpoint.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EndpointParameter {
    pub name: String,
    pub ty: Type,
}

impl EndpointParameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self { EndpointParameter { name: name.into(), ty } }
}

/// A callable contract endpoint: its name plus ordered, typed formal input and
/// output parameter lists.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EndpointDefinition {
    pub name: String,
    pub inputs: Vec<EndpointParameter>,
    pub outputs: Vec<EndpointParameter>,
    pub modifiers: EndpointModifiers,
}

impl EndpointDefinition {
    pub fn new(
        name: impl Into<String>,
        inputs: impl IntoIterator<Item = EndpointParameter>,
        outputs: impl IntoIterator<Item = EndpointParameter>,
        modifiers: EndpointModifiers,
    ) -> Self {
        EndpointDefinition {
            name: name.into(),
            inputs: inputs.into_iter().collect(),
            outputs: outputs.into_iter().collect(),
            modifiers,
        }
    }

    /// The formal input types, in declaration order.
    pub fn input_types(&self) -> Vec<Type> { self.inputs.iter().map(|param| param.ty.clone()).collect() }

    /// The formal output types, in declaration order.
    pub fn output_types(&self) -> Vec<Type> { self.outputs.iter().map(|param| param.ty.clone()).collect() }

    pub fn is_readonly(&self) -> bool { self.modifiers.mutability != Mutability::Mutable }
}

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

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use crate::{
    map_type_expression, resolve_type_names, AbiError, EndpointDefinition, EndpointModifiers, EndpointParameter,
    EnumType, EnumVariant, FieldDefinition, Mutability, StructType, Type, TypeError, TypeRegistry,
};

#[derive(Clone, Debug, Deserialize)]
struct AbiJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    endpoints: Vec<EndpointJson>,
    #[serde(default)]
    types: IndexMap<String, TypeDefJson>,
}

#[derive(Clone, Debug, Deserialize)]
struct EndpointJson {
    name: String,
    #[serde(default)]
    inputs: Vec<ParamJson>,
    #[serde(default)]
    outputs: Vec<ParamJson>,
    #[serde(default)]
    mutability: Option<String>,
    #[serde(default, rename = "payableInTokens")]
    payable_in_tokens: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct ParamJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type")]
    ty: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TypeDefJson {
    Struct { fields: Vec<FieldJson> },
    Enum { variants: Vec<VariantJson> },
}

#[derive(Clone, Debug, Deserialize)]
struct FieldJson {
    name: String,
    #[serde(rename = "type")]
    ty: FieldTypeJson,
}

/// Field types appear either as a bracketed expression string or as a list of
/// type-name tokens, one per nesting level; both forms must resolve alike.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum FieldTypeJson {
    Expression(String),
    Tokens(Vec<String>),
}

#[derive(Clone, Debug, Deserialize)]
struct VariantJson {
    name: String,
    discriminant: u8,
}

/// A fully loaded contract ABI: a frozen type scope plus the endpoint table.
///
/// Custom types may reference each other in any order of declaration, so
/// registration iterates to a fixed point: each pass registers every
/// definition whose dependencies already resolve, and loading fails only when
/// a pass makes no progress.
#[derive(Clone, Debug)]
pub struct AbiRegistry {
    name: Option<String>,
    registry: TypeRegistry,
    endpoints: IndexMap<String, EndpointDefinition>,
}

impl AbiRegistry {
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        let abi: AbiJson = serde_json::from_str(json)?;
        Self::build(abi)
    }

    pub fn from_value(value: Value) -> Result<Self, AbiError> {
        let abi: AbiJson = serde_json::from_value(value)?;
        Self::build(abi)
    }

    fn build(abi: AbiJson) -> Result<Self, AbiError> {
        let mut registry = TypeRegistry::new();

        let mut pending: Vec<(String, TypeDefJson)> = abi.types.into_iter().collect();
        while !pending.is_empty() {
            let before = pending.len();
            let mut deferred = Vec::new();
            let mut last_failure = None;
            for (name, def) in pending {
                match Self::build_custom_type(&registry, &name, &def) {
                    Ok(ty) => registry.register(ty)?,
                    Err(err @ TypeError::UnknownType(_)) => {
                        last_failure = Some(err);
                        deferred.push((name, def));
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            // A pass which registers nothing means a genuinely unknown name
            // or a dependency cycle.
            if deferred.len() == before {
                if let Some(err) = last_failure {
                    return Err(err.into());
                }
            }
            pending = deferred;
        }

        let mut endpoints = IndexMap::new();
        for endpoint in abi.endpoints {
            let definition = Self::build_endpoint(&registry, &endpoint)?;
            debug!("loaded endpoint {}", definition.name);
            if endpoints.insert(definition.name.clone(), definition).is_some() {
                return Err(AbiError::DuplicateEndpoint(endpoint.name));
            }
        }

        Ok(AbiRegistry {
            name: abi.name,
            registry,
            endpoints,
        })
    }

    fn build_custom_type(registry: &TypeRegistry, name: &str, def: &TypeDefJson) -> Result<Type, TypeError> {
        match def {
            TypeDefJson::Struct { fields } => {
                let mut definitions = Vec::with_capacity(fields.len());
                for (index, field) in fields.iter().enumerate() {
                    if fields[..index].iter().any(|prior| prior.name == field.name) {
                        return Err(TypeError::DuplicateField(name.to_owned(), field.name.clone()));
                    }
                    let ty = match &field.ty {
                        FieldTypeJson::Expression(expr) => map_type_expression(registry, expr)?,
                        FieldTypeJson::Tokens(tokens) => {
                            resolve_type_names(registry, tokens.iter().map(String::as_str))?
                        }
                    };
                    definitions.push(FieldDefinition::new(&field.name, ty));
                }
                Ok(Type::Struct(StructType::new(name, definitions)))
            }
            TypeDefJson::Enum { variants } => {
                for (index, variant) in variants.iter().enumerate() {
                    if variants[..index].iter().any(|prior| prior.discriminant == variant.discriminant) {
                        return Err(TypeError::DuplicateDiscriminant(name.to_owned(), variant.discriminant));
                    }
                }
                Ok(Type::Enum(EnumType::new(
                    name,
                    variants.iter().map(|variant| EnumVariant::new(&variant.name, variant.discriminant)),
                )))
            }
        }
    }

    fn build_endpoint(registry: &TypeRegistry, endpoint: &EndpointJson) -> Result<EndpointDefinition, AbiError> {
        let inputs = Self::build_parameters(registry, &endpoint.inputs)?;
        let outputs = Self::build_parameters(registry, &endpoint.outputs)?;
        let mutability = match endpoint.mutability.as_deref() {
            Some("readonly") => Mutability::Readonly,
            Some("pure") => Mutability::Pure,
            // Unknown or absent mutability is treated as the most permissive.
            _ => Mutability::Mutable,
        };
        let payable_in_native = endpoint
            .payable_in_tokens
            .iter()
            .any(|token| token == "EGLD" || token == "*");
        Ok(EndpointDefinition::new(&endpoint.name, inputs, outputs, EndpointModifiers {
            mutability,
            payable_in_native,
        }))
    }

    fn build_parameters(registry: &TypeRegistry, params: &[ParamJson]) -> Result<Vec<EndpointParameter>, AbiError> {
        params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                let ty = map_type_expression(registry, &param.ty)?;
                let name = param.name.clone().unwrap_or_else(|| format!("arg{index}"));
                Ok(EndpointParameter::new(name, ty))
            })
            .collect()
    }

    pub fn name(&self) -> Option<&str> { self.name.as_deref() }

    pub fn registry(&self) -> &TypeRegistry { &self.registry }

    pub fn endpoint(&self, name: &str) -> Result<&EndpointDefinition, AbiError> {
        self.endpoints
            .get(name)
            .ok_or_else(|| AbiError::UnknownEndpoint(name.to_owned()))
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &EndpointDefinition> { self.endpoints.values() }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NumericType;

    const ABI: &str = r#"{
        "name": "lottery",
        "endpoints": [
            {
                "name": "start",
                "inputs": [
                    { "name": "ticket_price", "type": "BigUint" },
                    { "name": "status", "type": "Status" },
                    { "name": "whitelist", "type": "VarArgs<Address>" }
                ],
                "outputs": [],
                "payableInTokens": ["EGLD"]
            },
            {
                "name": "info",
                "inputs": [],
                "outputs": [{ "type": "LotteryInfo" }],
                "mutability": "readonly"
            }
        ],
        "types": {
            "LotteryInfo": {
                "type": "struct",
                "fields": [
                    { "name": "ticket_price", "type": "BigUint" },
                    { "name": "status", "type": "Status" },
                    { "name": "entries", "type": ["List", "Address"] }
                ]
            },
            "Status": {
                "type": "enum",
                "variants": [
                    { "name": "Inactive", "discriminant": 0 },
                    { "name": "Running", "discriminant": 1 }
                ]
            }
        }
    }"#;

    #[test]
    fn loads_types_in_any_declaration_order() {
        let abi = AbiRegistry::from_json(ABI).unwrap();
        // LotteryInfo references Status but is declared first.
        let info = abi.registry().resolve("LotteryInfo").unwrap();
        let Type::Struct(strukt) = info else {
            panic!("LotteryInfo must be a struct")
        };
        assert_eq!(strukt.fields.len(), 3);
        assert_eq!(strukt.fields[2].ty, Type::List(Box::new(Type::Address)));
        assert!(matches!(&strukt.fields[1].ty, Type::Enum(en) if en.variants.len() == 2));
    }

    #[test]
    fn builds_endpoints() {
        let abi = AbiRegistry::from_json(ABI).unwrap();
        assert_eq!(abi.name(), Some("lottery"));

        let start = abi.endpoint("start").unwrap();
        assert_eq!(start.modifiers.mutability, Mutability::Mutable);
        assert!(start.modifiers.payable_in_native);
        assert_eq!(start.inputs[0].ty, Type::Numeric(NumericType::BIG_UINT));
        assert_eq!(start.inputs[2].ty, Type::Variadic(Box::new(Type::Address)));

        let info = abi.endpoint("info").unwrap();
        assert_eq!(info.modifiers.mutability, Mutability::Readonly);
        assert!(info.is_readonly());

        assert!(matches!(abi.endpoint("nope"), Err(AbiError::UnknownEndpoint(_))));
    }

    #[test]
    fn rejects_duplicate_fields_and_discriminants() {
        let duplicate_field = r#"{
            "types": {
                "Pair": { "type": "struct", "fields": [
                    { "name": "x", "type": "u32" },
                    { "name": "x", "type": "u64" }
                ] }
            }
        }"#;
        assert_eq!(
            AbiRegistry::from_json(duplicate_field).unwrap_err(),
            AbiError::Type(TypeError::DuplicateField(s!("Pair"), s!("x")))
        );

        let duplicate_discriminant = r#"{
            "types": {
                "Status": { "type": "enum", "variants": [
                    { "name": "Inactive", "discriminant": 0 },
                    { "name": "Running", "discriminant": 0 }
                ] }
            }
        }"#;
        assert_eq!(
            AbiRegistry::from_json(duplicate_discriminant).unwrap_err(),
            AbiError::Type(TypeError::DuplicateDiscriminant(s!("Status"), 0))
        );
    }

    #[test]
    fn rejects_unresolvable_types() {
        let json = r#"{
            "types": {
                "Broken": { "type": "struct", "fields": [{ "name": "x", "type": "Missing" }] }
            }
        }"#;
        assert!(matches!(
            AbiRegistry::from_json(json),
            Err(AbiError::Type(TypeError::UnknownType(_)))
        ));
    }
}

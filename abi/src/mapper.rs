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

use crate::{parse_type_expression, Type, TypeError, TypeExpression, TypeRegistry};

/// Maps parsed [`TypeExpression`] trees to canonical [`Type`]s within a
/// resolution scope.
///
/// ABI documents spell argument-level types in several historical vocabularies
/// (`VarArgs` next to `MultiResultVec`, `OptionalArg` next to
/// `OptionalResult`); the mapper folds all of them onto the three canonical
/// categories `Variadic`, `Optional` and `Composite`. Plain names are resolved
/// through the registry, so contract-defined structs and enums participate as
/// type parameters like any built-in.
#[derive(Copy, Clone, Debug)]
pub struct TypeMapper<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> TypeMapper<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self { TypeMapper { registry } }

    pub fn map(&self, expr: &TypeExpression) -> Result<Type, TypeError> {
        if !expr.is_generic() {
            return self.registry.resolve(&expr.name);
        }

        let name = expr.name.as_str();
        match name {
            "Option" => Ok(Type::Option(Box::new(self.single_parameter(expr)?))),
            "List" => Ok(Type::List(Box::new(self.single_parameter(expr)?))),
            "VarArgs" | "MultiResultVec" | "Variadic" => {
                Ok(Type::Variadic(Box::new(self.single_parameter(expr)?)))
            }
            "OptionalArg" | "OptionalResult" | "Optional" => {
                Ok(Type::Optional(Box::new(self.single_parameter(expr)?)))
            }
            _ => {
                let (stem, arity) = split_arity_suffix(name);
                match stem {
                    "MultiArg" | "MultiResult" | "tuple" | "Composite" => {
                        if let Some(arity) = arity {
                            if arity != expr.type_parameters.len() {
                                return Err(TypeError::GenericArity(
                                    name.to_owned(),
                                    arity,
                                    expr.type_parameters.len(),
                                ));
                            }
                        }
                        Ok(Type::Composite(self.all_parameters(expr)?))
                    }
                    _ => Err(TypeError::UnknownAlias(name.to_owned())),
                }
            }
        }
    }

    fn single_parameter(&self, expr: &TypeExpression) -> Result<Type, TypeError> {
        if expr.type_parameters.len() != 1 {
            return Err(TypeError::GenericArity(expr.name.clone(), 1, expr.type_parameters.len()));
        }
        self.map(&expr.type_parameters[0])
    }

    fn all_parameters(&self, expr: &TypeExpression) -> Result<Vec<Type>, TypeError> {
        expr.type_parameters.iter().map(|param| self.map(param)).collect()
    }
}

/// Splits a trailing decimal arity off an alias name (`"MultiArg2"` →
/// `("MultiArg", Some(2))`).
fn split_arity_suffix(name: &str) -> (&str, Option<usize>) {
    let stem_len = name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if stem_len == name.len() {
        return (name, None);
    }
    let arity = name[stem_len..].parse().ok();
    (&name[..stem_len], arity)
}

/// Parses and maps a textual type expression in one step.
pub fn map_type_expression(registry: &TypeRegistry, expr: &str) -> Result<Type, TypeError> {
    let parsed = parse_type_expression(expr)?;
    TypeMapper::new(registry).map(&parsed)
}

/// Resolves the token-per-nesting-level representation of a type, used by some
/// ABI documents for struct fields: `["Optional", "List", "Address"]` denotes
/// `Optional<List<Address>>`.
///
/// Only the innermost token may itself be a bracketed expression; the outer
/// tokens are single-parameter generic names. The result must agree with the
/// bracketed-string path for the equivalent expression.
pub fn resolve_type_names<'a, I>(registry: &TypeRegistry, tokens: I) -> Result<Type, TypeError>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut tokens = tokens.into_iter().rev();
    let innermost = tokens
        .next()
        .ok_or_else(|| TypeError::TypeExpression {
            expr: String::new(),
            reason: s!("empty type name token list"),
        })?;
    let mut expr = parse_type_expression(innermost)?;
    for token in tokens {
        expr = TypeExpression::generic(token.trim(), [expr]);
    }
    TypeMapper::new(registry).map(&expr)
}

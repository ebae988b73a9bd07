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

use crate::TypeError;

/// Parse tree of a textual generic-type expression, before any name
/// resolution: `Name ("<" Expr ("," Expr)* ">")?`, arbitrarily nested.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeExpression {
    pub name: String,
    pub type_parameters: Vec<TypeExpression>,
}

impl TypeExpression {
    pub fn plain(name: impl Into<String>) -> Self {
        TypeExpression {
            name: name.into(),
            type_parameters: vec![],
        }
    }

    pub fn generic(name: impl Into<String>, type_parameters: impl IntoIterator<Item = TypeExpression>) -> Self {
        TypeExpression {
            name: name.into(),
            type_parameters: type_parameters.into_iter().collect(),
        }
    }

    pub fn is_generic(&self) -> bool { !self.type_parameters.is_empty() }
}

/// Parses a textual type expression (e.g. `"MultiResultVec<MultiResult<i32,bytes>>"`)
/// into a [`TypeExpression`] tree, left to right.
///
/// Whitespace around names and a trailing comma before `>` are tolerated.
/// Unbalanced brackets, empty names and stray characters fail with
/// [`TypeError::TypeExpression`] carrying the offending expression.
pub fn parse_type_expression(expr: &str) -> Result<TypeExpression, TypeError> {
    let mut cursor = Cursor { expr, pos: 0 };
    cursor.skip_whitespace();
    let parsed = cursor.expression()?;
    cursor.skip_whitespace();
    if !cursor.is_exhausted() {
        return Err(cursor.fail("unexpected trailing characters"));
    }
    Ok(parsed)
}

struct Cursor<'e> {
    expr: &'e str,
    pos: usize,
}

impl Cursor<'_> {
    fn fail(&self, reason: &str) -> TypeError {
        TypeError::TypeExpression {
            expr: self.expr.to_owned(),
            reason: reason.to_owned(),
        }
    }

    fn is_exhausted(&self) -> bool { self.pos >= self.expr.len() }

    fn peek(&self) -> Option<u8> { self.expr.as_bytes().get(self.pos).copied() }

    fn bump(&mut self) { self.pos += 1; }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(byte) if byte.is_ascii_whitespace()) {
            self.bump();
        }
    }

    fn identifier(&mut self) -> Result<String, TypeError> {
        let start = self.pos;
        while matches!(self.peek(), Some(byte) if byte.is_ascii_alphanumeric() || byte == b'_') {
            self.bump();
        }
        if self.pos == start {
            return Err(self.fail("empty type name"));
        }
        Ok(self.expr[start..self.pos].to_owned())
    }

    fn expression(&mut self) -> Result<TypeExpression, TypeError> {
        let name = self.identifier()?;
        self.skip_whitespace();

        if self.peek() != Some(b'<') {
            return Ok(TypeExpression::plain(name));
        }
        self.bump();
        self.skip_whitespace();

        let mut type_parameters = vec![self.expression()?];
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'>') => {
                    self.bump();
                    break;
                }
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                    // Trailing comma right before the closing bracket.
                    if self.peek() == Some(b'>') {
                        self.bump();
                        break;
                    }
                    type_parameters.push(self.expression()?);
                }
                Some(_) => return Err(self.fail("unexpected character in type parameter list")),
                None => return Err(self.fail("unbalanced angle brackets")),
            }
        }

        Ok(TypeExpression::generic(name, type_parameters))
    }
}

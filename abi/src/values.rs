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

use amplify::Bytes32;
use num_bigint::{BigInt, BigUint, Sign};

use crate::{EnumType, NumericType, StructType, Type, ValueTypingError};

/// A native value paired with its [`Type`].
///
/// The shape of a `TypedValue` always matches its declared type: every
/// constructor which could produce a mismatch (struct arity, list element
/// homogeneity, enum discriminant validity, numeric range) validates at
/// construction and returns [`ValueTypingError`] instead of deferring the
/// failure to encode time.
///
/// Structural equality between two values is the `Eq` implementation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypedValue {
    Bool(bool),
    Numeric(NumericValue),
    Bytes(Vec<u8>),
    Address(Bytes32),
    H256(Bytes32),
    TokenIdentifier(String),
    List(ListValue),
    Option(OptionValue),
    Optional(OptionalValue),
    Variadic(VariadicValue),
    Composite(CompositeValue),
    Struct(StructValue),
    Enum(EnumValue),
}

impl TypedValue {
    /// The declared type of this value.
    pub fn ty(&self) -> Type {
        match self {
            TypedValue::Bool(_) => Type::Bool,
            TypedValue::Numeric(numeric) => Type::Numeric(numeric.ty),
            TypedValue::Bytes(_) => Type::Bytes,
            TypedValue::Address(_) => Type::Address,
            TypedValue::H256(_) => Type::H256,
            TypedValue::TokenIdentifier(_) => Type::TokenIdentifier,
            TypedValue::List(list) => Type::List(Box::new(list.item_type.clone())),
            TypedValue::Option(option) => Type::Option(Box::new(option.inner_type.clone())),
            TypedValue::Optional(optional) => Type::Optional(Box::new(optional.inner_type.clone())),
            TypedValue::Variadic(variadic) => Type::Variadic(Box::new(variadic.item_type.clone())),
            TypedValue::Composite(composite) => Type::Composite(composite.item_types.clone()),
            TypedValue::Struct(strukt) => Type::Struct(strukt.ty.clone()),
            TypedValue::Enum(en) => Type::Enum(en.ty.clone()),
        }
    }

    pub fn bool(value: bool) -> Self { TypedValue::Bool(value) }

    pub fn u8(value: u8) -> Self { TypedValue::Numeric(NumericValue::u8(value)) }
    pub fn u16(value: u16) -> Self { TypedValue::Numeric(NumericValue::u16(value)) }
    pub fn u32(value: u32) -> Self { TypedValue::Numeric(NumericValue::u32(value)) }
    pub fn u64(value: u64) -> Self { TypedValue::Numeric(NumericValue::u64(value)) }
    pub fn i8(value: i8) -> Self { TypedValue::Numeric(NumericValue::i8(value)) }
    pub fn i16(value: i16) -> Self { TypedValue::Numeric(NumericValue::i16(value)) }
    pub fn i32(value: i32) -> Self { TypedValue::Numeric(NumericValue::i32(value)) }
    pub fn i64(value: i64) -> Self { TypedValue::Numeric(NumericValue::i64(value)) }

    pub fn big_uint(value: impl Into<BigUint>) -> Self { TypedValue::Numeric(NumericValue::big_uint(value)) }
    pub fn big_int(value: impl Into<BigInt>) -> Self { TypedValue::Numeric(NumericValue::big_int(value)) }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Self { TypedValue::Bytes(value.into()) }

    pub fn address(bytes: [u8; 32]) -> Self { TypedValue::Address(Bytes32::from(bytes)) }
    pub fn h256(bytes: [u8; 32]) -> Self { TypedValue::H256(Bytes32::from(bytes)) }

    pub fn address_from_slice(slice: &[u8]) -> Result<Self, ValueTypingError> {
        Ok(TypedValue::Address(bytes32_from_slice(slice)?))
    }

    pub fn h256_from_slice(slice: &[u8]) -> Result<Self, ValueTypingError> {
        Ok(TypedValue::H256(bytes32_from_slice(slice)?))
    }

    pub fn token_identifier(value: impl Into<String>) -> Self { TypedValue::TokenIdentifier(value.into()) }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericValue> {
        match self {
            TypedValue::Numeric(numeric) => Some(numeric),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TypedValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

fn bytes32_from_slice(slice: &[u8]) -> Result<Bytes32, ValueTypingError> {
    let array =
        <[u8; 32]>::try_from(slice).map_err(|_| ValueTypingError::InvalidByteLength(slice.len()))?;
    Ok(Bytes32::from(array))
}

/// An arbitrary-precision integer plus the numeric type constraining it.
///
/// Fields are private on purpose: the shape checks in the constructors are
/// the only way to produce a value, so downstream code never meets an
/// out-of-range magnitude.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NumericValue {
    value: BigInt,
    ty: NumericType,
}

impl NumericValue {
    /// Pairs a magnitude with a numeric type, rejecting negative magnitudes
    /// for unsigned types and out-of-range magnitudes for fixed widths.
    pub fn new(value: BigInt, ty: NumericType) -> Result<Self, ValueTypingError> {
        if !ty.signed && value.sign() == Sign::Minus {
            return Err(ValueTypingError::NegativeUnsigned(value, ty));
        }
        if let Some(width) = ty.size_in_bytes {
            let bits = 8 * width as u32;
            let fits = if ty.signed {
                let bound = BigInt::from(1u8) << (bits - 1);
                value >= -bound.clone() && value < bound
            } else {
                value < (BigInt::from(1u8) << bits)
            };
            if !fits {
                return Err(ValueTypingError::NumericOverflow(value, ty));
            }
        }
        Ok(NumericValue { value, ty })
    }

    pub fn u8(value: u8) -> Self { NumericValue { value: value.into(), ty: NumericType::U8 } }
    pub fn u16(value: u16) -> Self { NumericValue { value: value.into(), ty: NumericType::U16 } }
    pub fn u32(value: u32) -> Self { NumericValue { value: value.into(), ty: NumericType::U32 } }
    pub fn u64(value: u64) -> Self { NumericValue { value: value.into(), ty: NumericType::U64 } }
    pub fn i8(value: i8) -> Self { NumericValue { value: value.into(), ty: NumericType::I8 } }
    pub fn i16(value: i16) -> Self { NumericValue { value: value.into(), ty: NumericType::I16 } }
    pub fn i32(value: i32) -> Self { NumericValue { value: value.into(), ty: NumericType::I32 } }
    pub fn i64(value: i64) -> Self { NumericValue { value: value.into(), ty: NumericType::I64 } }

    pub fn big_uint(value: impl Into<BigUint>) -> Self {
        NumericValue {
            value: BigInt::from_biguint(Sign::Plus, value.into()),
            ty: NumericType::BIG_UINT,
        }
    }

    pub fn big_int(value: impl Into<BigInt>) -> Self {
        NumericValue { value: value.into(), ty: NumericType::BIG_INT }
    }

    pub fn value(&self) -> &BigInt { &self.value }

    pub fn ty(&self) -> NumericType { self.ty }
}

/// Homogeneous dynamic-length sequence of values.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ListValue {
    item_type: Type,
    items: Vec<TypedValue>,
}

impl ListValue {
    pub fn new(item_type: Type, items: Vec<TypedValue>) -> Result<Self, ValueTypingError> {
        check_homogeneous(&item_type, &items)?;
        Ok(ListValue { item_type, items })
    }

    /// Infers the element type from the first item; fails on an empty
    /// sequence since no inference is possible.
    pub fn from_items(items: Vec<TypedValue>) -> Result<Self, ValueTypingError> {
        let item_type = items.first().ok_or(ValueTypingError::EmptyInference)?.ty();
        Self::new(item_type, items)
    }

    pub fn item_type(&self) -> &Type { &self.item_type }

    pub fn items(&self) -> &[TypedValue] { &self.items }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

fn check_homogeneous(item_type: &Type, items: &[TypedValue]) -> Result<(), ValueTypingError> {
    for item in items {
        let found = item.ty();
        if &found != item_type {
            return Err(ValueTypingError::TypeMismatch {
                expected: item_type.clone(),
                found,
            });
        }
    }
    Ok(())
}

/// Zero-or-one value carrying an explicit presence flag on the wire.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct OptionValue {
    inner_type: Type,
    value: Option<Box<TypedValue>>,
}

impl OptionValue {
    pub fn some(value: TypedValue) -> Self {
        OptionValue {
            inner_type: value.ty(),
            value: Some(Box::new(value)),
        }
    }

    pub fn none(inner_type: Type) -> Self { OptionValue { inner_type, value: None } }

    pub fn inner_type(&self) -> &Type { &self.inner_type }

    pub fn is_set(&self) -> bool { self.value.is_some() }

    pub fn value(&self) -> Option<&TypedValue> { self.value.as_deref() }
}

/// Zero-or-one value at the argument level. Unlike [`OptionValue`], an unset
/// optional leaves no trace on the wire at all.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct OptionalValue {
    inner_type: Type,
    value: Option<Box<TypedValue>>,
}

impl OptionalValue {
    pub fn of(value: TypedValue) -> Self {
        OptionalValue {
            inner_type: value.ty(),
            value: Some(Box::new(value)),
        }
    }

    pub fn unset(inner_type: Type) -> Self { OptionalValue { inner_type, value: None } }

    pub fn inner_type(&self) -> &Type { &self.inner_type }

    pub fn is_set(&self) -> bool { self.value.is_some() }

    pub fn value(&self) -> Option<&TypedValue> { self.value.as_deref() }
}

/// Zero-or-more homogeneous values under a single variadic parameter.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VariadicValue {
    item_type: Type,
    items: Vec<TypedValue>,
}

impl VariadicValue {
    pub fn new(item_type: Type, items: Vec<TypedValue>) -> Result<Self, ValueTypingError> {
        check_homogeneous(&item_type, &items)?;
        Ok(VariadicValue { item_type, items })
    }

    pub fn from_items(items: Vec<TypedValue>) -> Result<Self, ValueTypingError> {
        let item_type = items.first().ok_or(ValueTypingError::EmptyInference)?.ty();
        Self::new(item_type, items)
    }

    pub fn empty(item_type: Type) -> Self { VariadicValue { item_type, items: vec![] } }

    pub fn item_type(&self) -> &Type { &self.item_type }

    pub fn items(&self) -> &[TypedValue] { &self.items }
}

/// Fixed-arity heterogeneous tuple of values at the argument level.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CompositeValue {
    item_types: Vec<Type>,
    items: Vec<TypedValue>,
}

impl CompositeValue {
    pub fn new(item_types: Vec<Type>, items: Vec<TypedValue>) -> Result<Self, ValueTypingError> {
        if item_types.len() != items.len() {
            return Err(ValueTypingError::StructArity(
                Type::Composite(item_types.clone()).name(),
                item_types.len(),
                items.len(),
            ));
        }
        for (expected, item) in item_types.iter().zip(&items) {
            let found = item.ty();
            if &found != expected {
                return Err(ValueTypingError::TypeMismatch {
                    expected: expected.clone(),
                    found,
                });
            }
        }
        Ok(CompositeValue { item_types, items })
    }

    pub fn from_items(items: Vec<TypedValue>) -> Self {
        let item_types = items.iter().map(TypedValue::ty).collect();
        CompositeValue { item_types, items }
    }

    pub fn item_types(&self) -> &[Type] { &self.item_types }

    pub fn items(&self) -> &[TypedValue] { &self.items }

    pub fn arity(&self) -> usize { self.item_types.len() }
}

/// Named, ordered fields matching a [`StructType`] definition by position.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StructValue {
    ty: StructType,
    fields: Vec<TypedValue>,
}

impl StructValue {
    pub fn new(ty: StructType, fields: Vec<TypedValue>) -> Result<Self, ValueTypingError> {
        if ty.fields.len() != fields.len() {
            return Err(ValueTypingError::StructArity(ty.name.clone(), ty.fields.len(), fields.len()));
        }
        for (definition, field) in ty.fields.iter().zip(&fields) {
            let found = field.ty();
            if found != definition.ty {
                return Err(ValueTypingError::StructFieldType {
                    strukt: ty.name.clone(),
                    field: definition.name.clone(),
                    expected: definition.ty.clone(),
                    found,
                });
            }
        }
        Ok(StructValue { ty, fields })
    }

    pub fn ty(&self) -> &StructType { &self.ty }

    pub fn fields(&self) -> &[TypedValue] { &self.fields }

    pub fn field(&self, name: &str) -> Option<&TypedValue> {
        let position = self.ty.fields.iter().position(|field| field.name == name)?;
        self.fields.get(position)
    }
}

/// A discriminant byte resolved against an [`EnumType`]'s variant table.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumValue {
    ty: EnumType,
    discriminant: u8,
}

impl EnumValue {
    pub fn from_discriminant(ty: EnumType, discriminant: u8) -> Result<Self, ValueTypingError> {
        if ty.variant_by_discriminant(discriminant).is_none() {
            return Err(ValueTypingError::UnknownDiscriminant(ty.name, discriminant));
        }
        Ok(EnumValue { ty, discriminant })
    }

    pub fn from_name(ty: EnumType, name: &str) -> Result<Self, ValueTypingError> {
        let discriminant = ty.variant_by_name(name).map(|variant| variant.discriminant);
        match discriminant {
            Some(discriminant) => Ok(EnumValue { ty, discriminant }),
            None => Err(ValueTypingError::UnknownVariant(ty.name, name.to_owned())),
        }
    }

    pub fn ty(&self) -> &EnumType { &self.ty }

    pub fn discriminant(&self) -> u8 { self.discriminant }

    pub fn variant_name(&self) -> &str {
        &self
            .ty
            .variant_by_discriminant(self.discriminant)
            .expect("discriminant validity is checked at construction")
            .name
    }
}

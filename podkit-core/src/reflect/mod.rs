// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Structural introspection of plain data aggregates.
//!
//! `#[derive(PodObject)]` only teaches a type how to build itself from an
//! ordered [`InitList`]. Everything else is discovered here by handing the
//! type lists of [`Placeholder`]s and watching what it does with them:
//!
//! - [`counter`] finds the field count by asking how many placeholders the
//!   type accepts,
//! - [`flatten`] lets each placeholder write the registry ids of its field
//!   into an over-allocated id array and compacts the result,
//! - [`descriptor`] memoizes both per type.

use crate::buffer::{BinaryBuffer, TextBuffer, Token};
use crate::error::Error;
use crate::hlist::HList;
use crate::types::PrimitiveKind;
use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

pub mod counter;
pub mod descriptor;
pub mod flatten;
pub mod init;

pub use counter::count_fields;
pub use descriptor::{descriptor, AggregateDescriptor, FieldDescriptor};
pub use init::{InitList, Placeholder};

pub use crate::types::NO_TYPE_ID;

/// Largest top-level field count the counter probes for.
pub const MAX_FIELDS: usize = 64;

/// Largest number of leaves a flattened aggregate may have.
pub const MAX_LEAVES: usize = 1024;

/// How a field contributes to the flattening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldClass {
    Primitive(PrimitiveKind),
    /// Enumeration, carried as its underlying integer kind.
    Enum(PrimitiveKind),
    Aggregate,
}

impl FieldClass {
    pub fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            FieldClass::Primitive(kind) | FieldClass::Enum(kind) => Some(*kind),
            FieldClass::Aggregate => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, FieldClass::Aggregate)
    }
}

/// Anything that may appear as a field of an aggregate: a registered
/// primitive, a `#[derive(PodEnum)]` enumeration or a nested
/// `#[derive(PodObject)]` aggregate.
///
/// Types without an implementation (references, arrays, collections) are
/// rejected at compile time.
pub trait Field: Clone + 'static {
    /// The fully flattened leaf list of this field.
    type Leaves: HList;

    fn class() -> FieldClass;

    /// The value a field takes when its initializer is omitted.
    fn value_init() -> Result<Self, Error>;

    /// Writes the registry ids of this field into its slot of the flattener's
    /// raw id array. `slot.len()` is `size_of::<Self>()`.
    fn emit_raw_ids(slot: &mut [u32]) -> Result<(), Error>;

    fn describe_nested() -> Result<Option<&'static AggregateDescriptor>, Error> {
        Ok(None)
    }

    fn into_leaves(self) -> Self::Leaves;

    /// Visits every leaf in depth-first declaration order.
    fn visit_leaves<V: LeafVisitor>(&self, visitor: &mut V) -> Result<(), Error>;

    fn visit_leaves_mut<V: LeafVisitorMut>(&mut self, visitor: &mut V) -> Result<(), Error>;
}

/// A field that is not decomposed any further.
pub trait Leaf: Field {
    const KIND: PrimitiveKind;

    fn zero() -> Self;

    fn write_bytes(&self, buffer: &mut BinaryBuffer) -> Result<(), Error>;

    fn read_bytes(buffer: &mut BinaryBuffer) -> Result<Self, Error>;

    fn write_text(&self, buffer: &mut TextBuffer, separator: char);

    fn read_text(token: Token<'_>) -> Result<Self, Error>;
}

/// Fieldless enumeration with an integer representation.
pub trait EnumRepr: Leaf {
    type Repr: Leaf + Copy + PartialEq + Display;

    fn to_repr(&self) -> Self::Repr;

    fn from_repr(raw: Self::Repr) -> Option<Self>;
}

/// A plain data aggregate, built from an ordered list of initializers.
pub trait Aggregate: Field {
    /// Shallow field list, nested aggregates kept whole.
    type Fields: HList;

    /// Field names in declaration order; `"0"`, `"1"`, ... for tuple structs.
    const FIELD_NAMES: &'static [&'static str];

    /// Builds `Self` by drawing one initializer per field from `init`, in
    /// declaration order.
    fn aggregate_init(init: &mut InitList<'_>) -> Result<Self, Error>;

    fn to_fields(&self) -> Self::Fields;

    fn into_fields(self) -> Self::Fields;
}

pub trait LeafVisitor {
    fn visit<L: Leaf>(&mut self, leaf: &L) -> Result<(), Error>;
}

pub trait LeafVisitorMut {
    fn visit_mut<L: Leaf>(&mut self, leaf: &mut L) -> Result<(), Error>;
}

/// Value-initializes an aggregate: every field takes its omitted-initializer
/// value, recursively.
pub fn value_init<T: Aggregate>() -> Result<T, Error> {
    init::initialize::<T>(&mut InitList::inert(0))
}

/// Number of top-level fields of `T`.
pub fn field_count<T: Aggregate>() -> Result<usize, Error> {
    Ok(descriptor::<T>()?.field_count)
}

pub fn field_count_of<T: Aggregate>(_: &T) -> Result<usize, Error> {
    field_count::<T>()
}

/// Registry ids of every leaf of `T`, depth-first in declaration order.
pub fn leaf_type_ids<T: Aggregate>() -> Result<&'static [u32], Error> {
    Ok(&descriptor::<T>()?.leaf_ids)
}

pub fn leaf_type_ids_of<T: Aggregate>(_: &T) -> Result<&'static [u32], Error> {
    leaf_type_ids::<T>()
}

/// Per-field classification of `T`.
pub fn type_list<T: Aggregate>() -> Result<&'static [FieldDescriptor], Error> {
    Ok(&descriptor::<T>()?.fields)
}

pub fn enum_write_bytes<E: EnumRepr>(value: &E, buffer: &mut BinaryBuffer) -> Result<(), Error> {
    value.to_repr().write_bytes(buffer)
}

pub fn enum_read_bytes<E: EnumRepr>(buffer: &mut BinaryBuffer) -> Result<E, Error> {
    let raw = E::Repr::read_bytes(buffer)?;
    enum_from_repr(raw)
}

pub fn enum_write_text<E: EnumRepr>(value: &E, buffer: &mut TextBuffer, separator: char) {
    value.to_repr().write_text(buffer, separator)
}

pub fn enum_read_text<E: EnumRepr>(token: Token<'_>) -> Result<E, Error> {
    let raw = E::Repr::read_text(token)?;
    enum_from_repr(raw)
}

fn enum_from_repr<E: EnumRepr>(raw: E::Repr) -> Result<E, Error> {
    E::from_repr(raw).ok_or_else(|| {
        Error::invalid_data(format!(
            "{raw} is not a discriminant of {}",
            type_name::<E>()
        ))
    })
}

/// Parses a plain token with `FromStr`.
pub fn parse_plain<T: FromStr>(token: Token<'_>) -> Result<T, Error> {
    match token {
        Token::Plain(s) => s.parse::<T>().map_err(|_| {
            Error::invalid_data(format!("`{s}` is not a valid {}", type_name::<T>()))
        }),
        quoted => Err(Error::invalid_data(format!(
            "expected a {} but found the literal {}",
            type_name::<T>(),
            quoted.describe()
        ))),
    }
}

/// Implements [`Field`] for a leaf type. The type must already implement
/// [`Leaf`].
#[macro_export]
#[doc(hidden)]
macro_rules! impl_leaf_field {
    ($ty:ty, $class:ident) => {
        impl $crate::reflect::Field for $ty {
            type Leaves = $crate::hlist::HCons<$ty, $crate::hlist::HNil>;

            #[inline(always)]
            fn class() -> $crate::reflect::FieldClass {
                $crate::reflect::FieldClass::$class(<$ty as $crate::reflect::Leaf>::KIND)
            }

            #[inline(always)]
            fn value_init() -> ::core::result::Result<Self, $crate::error::Error> {
                ::core::result::Result::Ok(<$ty as $crate::reflect::Leaf>::zero())
            }

            fn emit_raw_ids(
                slot: &mut [u32],
            ) -> ::core::result::Result<(), $crate::error::Error> {
                $crate::reflect::flatten::emit_leaf_id::<$ty>(slot)
            }

            #[inline(always)]
            fn into_leaves(self) -> Self::Leaves {
                $crate::hlist::HCons {
                    head: self,
                    tail: $crate::hlist::HNil,
                }
            }

            #[inline(always)]
            fn visit_leaves<V: $crate::reflect::LeafVisitor>(
                &self,
                visitor: &mut V,
            ) -> ::core::result::Result<(), $crate::error::Error> {
                visitor.visit(self)
            }

            #[inline(always)]
            fn visit_leaves_mut<V: $crate::reflect::LeafVisitorMut>(
                &mut self,
                visitor: &mut V,
            ) -> ::core::result::Result<(), $crate::error::Error> {
                visitor.visit_mut(self)
            }
        }
    };
}

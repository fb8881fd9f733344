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

use podkit_core::hlist::{HCons, HNil};
use podkit_core::reflect::flatten::emit_aggregate_ids;
use podkit_core::reflect::{count_fields, LeafVisitor, LeafVisitorMut};
use podkit_core::{
    field_count, hlist, value_init, Aggregate, BinaryBuffer, BinarySerializer, Error, Field,
    FieldClass, InitList, MAX_FIELDS,
};
use tests::*;

/// Accepts any number of initializers up to one past the field limit.
#[derive(Clone, Debug)]
struct Bottomless;

impl Aggregate for Bottomless {
    type Fields = HNil;
    const FIELD_NAMES: &'static [&'static str] = &[];

    fn aggregate_init(init: &mut InitList<'_>) -> Result<Self, Error> {
        for _ in 0..=MAX_FIELDS {
            init.field::<u8>()?;
        }
        Ok(Bottomless)
    }

    fn to_fields(&self) -> HNil {
        HNil
    }

    fn into_fields(self) -> HNil {
        HNil
    }
}

impl Field for Bottomless {
    type Leaves = HNil;

    fn class() -> FieldClass {
        FieldClass::Aggregate
    }

    fn value_init() -> Result<Self, Error> {
        Ok(Bottomless)
    }

    fn emit_raw_ids(_: &mut [u32]) -> Result<(), Error> {
        Ok(())
    }

    fn into_leaves(self) -> HNil {
        HNil
    }

    fn visit_leaves<V: LeafVisitor>(&self, _: &mut V) -> Result<(), Error> {
        Ok(())
    }

    fn visit_leaves_mut<V: LeafVisitorMut>(&mut self, _: &mut V) -> Result<(), Error> {
        Ok(())
    }
}

/// Draws no initializer at all.
#[derive(Clone, Debug)]
struct Hollow;

impl Aggregate for Hollow {
    type Fields = HNil;
    const FIELD_NAMES: &'static [&'static str] = &[];

    fn aggregate_init(_: &mut InitList<'_>) -> Result<Self, Error> {
        Ok(Hollow)
    }

    fn to_fields(&self) -> HNil {
        HNil
    }

    fn into_fields(self) -> HNil {
        HNil
    }
}

impl Field for Hollow {
    type Leaves = HNil;

    fn class() -> FieldClass {
        FieldClass::Aggregate
    }

    fn value_init() -> Result<Self, Error> {
        Ok(Hollow)
    }

    fn emit_raw_ids(_: &mut [u32]) -> Result<(), Error> {
        Ok(())
    }

    fn into_leaves(self) -> HNil {
        HNil
    }

    fn visit_leaves<V: LeafVisitor>(&self, _: &mut V) -> Result<(), Error> {
        Ok(())
    }

    fn visit_leaves_mut<V: LeafVisitorMut>(&mut self, _: &mut V) -> Result<(), Error> {
        Ok(())
    }
}

/// Built from a `u8` but visited as an `i32`.
#[derive(Clone, Debug, PartialEq)]
struct Mismatched {
    pub value: u8,
}

impl Aggregate for Mismatched {
    type Fields = HCons<u8, HNil>;
    const FIELD_NAMES: &'static [&'static str] = &["value"];

    fn aggregate_init(init: &mut InitList<'_>) -> Result<Self, Error> {
        Ok(Mismatched {
            value: init.field::<u8>()?,
        })
    }

    fn to_fields(&self) -> Self::Fields {
        hlist![self.value]
    }

    fn into_fields(self) -> Self::Fields {
        hlist![self.value]
    }
}

impl Field for Mismatched {
    type Leaves = HCons<u8, HNil>;

    fn class() -> FieldClass {
        FieldClass::Aggregate
    }

    fn value_init() -> Result<Self, Error> {
        value_init::<Self>()
    }

    fn emit_raw_ids(slot: &mut [u32]) -> Result<(), Error> {
        emit_aggregate_ids::<Self>(slot)
    }

    fn into_leaves(self) -> Self::Leaves {
        hlist![self.value]
    }

    fn visit_leaves<V: LeafVisitor>(&self, visitor: &mut V) -> Result<(), Error> {
        visitor.visit(&(self.value as i32))
    }

    fn visit_leaves_mut<V: LeafVisitorMut>(&mut self, visitor: &mut V) -> Result<(), Error> {
        let mut wide = self.value as i32;
        visitor.visit_mut(&mut wide)?;
        self.value = wide as u8;
        Ok(())
    }
}

#[test]
fn test_too_many_fields() {
    let err = count_fields::<Bottomless>().unwrap_err();
    assert!(err.is_unsupported_type());
    assert!(field_count::<Bottomless>().unwrap_err().is_unsupported_type());
}

#[test]
fn test_no_fields() {
    assert!(count_fields::<Hollow>().unwrap_err().is_unsupported_type());
    let err = field_count::<Hollow>().unwrap_err();
    assert!(err.to_string().contains("Hollow"), "{err}");
}

#[test]
fn test_traversal_must_match_flattening() {
    let serializer = BinarySerializer::<Mismatched>::new().unwrap();
    assert_eq!(serializer.width(), 1);

    let mut buffer = BinaryBuffer::from(vec![0xAA]);
    let err = serializer
        .serialize(&Mismatched { value: 4 }, &mut buffer)
        .unwrap_err();
    assert!(err.is_unsupported_type());
    assert_eq!(buffer.as_slice(), &[0xAA]);

    let mut target = Mismatched { value: 4 };
    assert!(serializer.deserialize(&mut target, &mut buffer).is_err());
    assert_eq!(target, Mismatched { value: 4 });
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn test_binary_underrun_leaves_target_untouched() {
    let serializer = BinarySerializer::<ThreeFieldsWithNestedStruct>::new().unwrap();
    let original = ThreeFieldsWithNestedStruct {
        field1: 2.0,
        field2: Nested {
            field1: 3,
            field2: 'n',
        },
        field3: 'm',
    };
    let bytes = serializer.to_bytes(&original).unwrap();

    let mut buffer = BinaryBuffer::from(bytes[..bytes.len() - 1].to_vec());
    let mut target = original;
    target.field1 = -1.0;
    let before = target;
    let err = serializer.deserialize(&mut target, &mut buffer).unwrap_err();
    assert!(matches!(
        err,
        Error::BufferUnderrun { requested, remaining }
            if requested == serializer.width() && remaining == serializer.width() - 1
    ));
    assert_eq!(target, before);
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn test_empty_buffer_underrun() {
    let serializer = BinarySerializer::<TwoFields>::new().unwrap();
    let mut buffer = BinaryBuffer::new();
    assert!(buffer.is_empty());
    assert!(serializer.read(&mut buffer).unwrap_err().is_buffer_underrun());
}

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

use podkit_core::types::{BOOL, CHAR, F64, I16, I32, I64, STRING, U16, U64};
use podkit_core::{
    descriptor, leaf_type_ids, leaf_type_ids_of, type_list, FieldClass, PrimitiveKind,
};
use podkit_derive::PodObject;
use tests::*;

#[test]
fn test_two_fields() {
    assert_eq!(leaf_type_ids::<TwoFields>().unwrap(), &[CHAR, I32]);
}

#[test]
fn test_ten_fields() {
    assert_eq!(
        leaf_type_ids::<TenFields>().unwrap(),
        &[CHAR, I32, I32, F64, I16, CHAR, I32, I32, F64, I16]
    );
}

#[test]
fn test_enum_leaves_use_repr_ids() {
    assert_eq!(leaf_type_ids::<ThreeFieldsWithEnum>().unwrap(), &[CHAR, U64, I32]);
    let fields = type_list::<ThreeFieldsWithEnum>().unwrap();
    assert_eq!(fields[1].class, FieldClass::Enum(PrimitiveKind::U64));
    assert_eq!(fields[2].class, FieldClass::Enum(PrimitiveKind::I32));
}

#[test]
fn test_nested_struct_is_flattened() {
    assert_eq!(
        leaf_type_ids::<ThreeFieldsWithNestedStruct>().unwrap(),
        &[F64, I32, CHAR, CHAR]
    );
}

#[test]
fn test_two_levels_of_nesting() {
    assert_eq!(
        leaf_type_ids::<TwoFieldsTwoLevelsOfNestedStructs>().unwrap(),
        &[I64, CHAR, I32, CHAR]
    );
    assert_eq!(leaf_type_ids_of(&two_levels()).unwrap().len(), 4);
}

#[test]
fn test_variable_length_leaf() {
    assert_eq!(leaf_type_ids::<WithText>().unwrap(), &[CHAR, STRING, F64]);
    assert_eq!(descriptor::<WithText>().unwrap().fixed_width, None);
}

#[test]
fn test_every_kind() {
    #[derive(PodObject, Clone, Debug, PartialEq)]
    struct EveryKind {
        pub a: u8,
        pub b: u16,
        pub c: u32,
        pub d: u64,
        pub e: u128,
        pub f: usize,
        pub g: i8,
        pub h: i16,
        pub i: i32,
        pub j: i64,
        pub k: i128,
        pub l: isize,
        pub m: char,
        pub n: f32,
        pub o: f64,
        pub p: bool,
        pub q: *const (),
        pub r: *mut (),
        pub s: String,
    }

    let expected: Vec<u32> = (1..=19).collect();
    assert_eq!(leaf_type_ids::<EveryKind>().unwrap(), expected.as_slice());
}

#[test]
fn test_tuple_struct_names() {
    #[derive(PodObject, Clone, Debug, PartialEq)]
    struct Pair(pub u16, pub bool);

    assert_eq!(leaf_type_ids::<Pair>().unwrap(), &[U16, BOOL]);
    let names: Vec<_> = type_list::<Pair>()
        .unwrap()
        .iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["0", "1"]);
}

#[test]
fn test_type_list() {
    let fields = type_list::<ThreeFieldsWithNestedStruct>().unwrap();
    assert_eq!(fields.len(), 3);

    assert_eq!(fields[0].name, "field1");
    assert_eq!(fields[0].class, FieldClass::Primitive(PrimitiveKind::F64));
    assert_eq!((fields[0].leaf_offset, fields[0].leaf_count), (0, 1));
    assert!(fields[0].nested.is_none());

    assert_eq!(fields[1].name, "field2");
    assert_eq!(fields[1].class, FieldClass::Aggregate);
    assert_eq!((fields[1].leaf_offset, fields[1].leaf_count), (1, 2));
    let nested = fields[1].nested.unwrap();
    assert!(std::ptr::eq(nested, descriptor::<Nested>().unwrap()));
    assert!(fields[1].type_name.ends_with("Nested"));

    assert_eq!((fields[2].leaf_offset, fields[2].leaf_count), (3, 1));
}

#[test]
fn test_fixed_width() {
    let size = std::mem::size_of::<char>() + std::mem::size_of::<i32>();
    assert_eq!(descriptor::<TwoFields>().unwrap().fixed_width, Some(size));
    // i64 + char + i32 + char
    assert_eq!(
        descriptor::<TwoFieldsTwoLevelsOfNestedStructs>()
            .unwrap()
            .fixed_width,
        Some(8 + 4 + 4 + 4)
    );
}

#[test]
fn test_descriptor_is_cached() {
    let first = descriptor::<TenFields>().unwrap();
    let second = descriptor::<TenFields>().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.field_count, 10);
    assert_eq!(first.leaf_count(), 10);
    assert_eq!(first.field("field9").unwrap().index, 8);
}

#[test]
fn test_field_lookup_and_leaf_kinds() {
    let desc = descriptor::<ThreeFieldsWithNestedStruct>().unwrap();
    assert_eq!(
        desc.leaf_kinds().unwrap(),
        vec![
            PrimitiveKind::F64,
            PrimitiveKind::I32,
            PrimitiveKind::CHAR,
            PrimitiveKind::CHAR
        ]
    );

    let nested = desc.field("field2").unwrap();
    assert_eq!(nested.index, 1);
    assert!(!nested.class.is_leaf());
    assert_eq!(nested.class.kind(), None);
    assert!(desc.field("missing").is_none());

    let last = desc.field("field3").unwrap();
    assert!(last.class.is_leaf());
    assert_eq!(last.class.kind(), Some(PrimitiveKind::CHAR));

    let with_enum = type_list::<ThreeFieldsWithEnum>().unwrap();
    assert!(with_enum[1].class.is_leaf());
    assert_eq!(with_enum[1].class.kind(), Some(PrimitiveKind::U64));
}

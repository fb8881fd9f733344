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

use podkit_core::hlist::{FlattenFields, HList, IntoTuple};
use podkit_core::{field_count, hlist, leaf_type_ids, Field, TupleExt};
use tests::*;

fn nested_sample() -> ThreeFieldsWithNestedStruct {
    ThreeFieldsWithNestedStruct {
        field1: 1.5,
        field2: Nested {
            field1: 7,
            field2: 'x',
        },
        field3: 'c',
    }
}

#[test]
fn test_shallow_tuple_keeps_nested_whole() {
    let value = nested_sample();
    let shallow = value.shallow_tuple();
    assert_eq!(shallow.len(), field_count::<ThreeFieldsWithNestedStruct>().unwrap());
    assert_eq!(
        shallow,
        hlist![
            1.5,
            Nested {
                field1: 7,
                field2: 'x'
            },
            'c'
        ]
    );
}

#[test]
fn test_leaf_tuple_is_fully_flat() {
    let value = nested_sample();
    let leaves = value.leaf_tuple();
    assert_eq!(leaves.len(), leaf_type_ids::<ThreeFieldsWithNestedStruct>().unwrap().len());
    assert_eq!(leaves, hlist![1.5, 7, 'x', 'c']);
    assert_eq!(value.shallow_tuple().flatten(), leaves);
}

#[test]
fn test_two_levels() {
    let value = two_levels();
    assert_eq!(
        value.to_std_leaf_tuple(),
        (-9_000_000_000i64, 'n', 77, 'z')
    );
    let (first, second) = value.to_std_tuple();
    assert_eq!(first, -9_000_000_000);
    assert_eq!(second, value.field2);
}

#[test]
fn test_standard_tuple_adapters() {
    let value = ten_fields();
    assert_eq!(
        value.to_std_tuple(),
        ('a', 1, -2, 3.25, 4i16, 'Z', i32::MAX, i32::MIN, -0.5, i16::MIN)
    );
    assert_eq!(value.to_std_leaf_tuple(), value.to_std_tuple());
    assert_eq!(<<TenFields as Field>::Leaves as HList>::LEN, 10);
}

#[test]
fn test_enum_leaves() {
    let value = ThreeFieldsWithEnum {
        field1: 'e',
        field2: Wide::Second,
        field3: Sparse::Low,
    };
    assert_eq!(value.to_std_leaf_tuple(), ('e', Wide::Second, Sparse::Low));
}

#[test]
fn test_views_are_copies() {
    let value = WithText {
        field1: 'w',
        field2: "owned".to_string(),
        field3: 0.25,
    };
    let mut leaves = value.leaf_tuple();
    leaves.tail.head.push_str(" and changed");
    assert_eq!(value.field2, "owned");
    let (_, text, _) = value.clone().into_leaf_tuple().into_tuple();
    assert_eq!(text, "owned");
    let (c, text, f) = value.into_shallow_tuple().into_tuple();
    assert_eq!((c, text.as_str(), f), ('w', "owned", 0.25));
}

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

//! Aggregates shared by the integration tests.

use podkit_derive::{PodEnum, PodObject};

#[derive(PodObject, Clone, Copy, Debug, PartialEq)]
pub struct TwoFields {
    pub field1: char,
    pub field2: i32,
}

#[derive(PodObject, Clone, Copy, Debug, PartialEq)]
pub struct TenFields {
    pub field1: char,
    pub field2: i32,
    pub field3: i32,
    pub field4: f64,
    pub field5: i16,
    pub field6: char,
    pub field7: i32,
    pub field8: i32,
    pub field9: f64,
    pub field10: i16,
}

#[derive(PodEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum Wide {
    First,
    Second,
}

#[derive(PodEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum Sparse {
    Low = -3,
    High = 40,
}

#[derive(PodObject, Clone, Copy, Debug, PartialEq)]
pub struct ThreeFieldsWithEnum {
    pub field1: char,
    pub field2: Wide,
    pub field3: Sparse,
}

#[derive(PodObject, Clone, Copy, Debug, PartialEq)]
pub struct Nested {
    pub field1: i32,
    pub field2: char,
}

#[derive(PodObject, Clone, Copy, Debug, PartialEq)]
pub struct ThreeFieldsWithNestedStruct {
    pub field1: f64,
    pub field2: Nested,
    pub field3: char,
}

#[derive(PodObject, Clone, Copy, Debug, PartialEq)]
pub struct NestedWithNested {
    pub field1: char,
    pub field2: Nested,
}

#[derive(PodObject, Clone, Copy, Debug, PartialEq)]
pub struct TwoFieldsTwoLevelsOfNestedStructs {
    pub field1: i64,
    pub field2: NestedWithNested,
}

/// Carries a variable-length leaf: text only.
#[derive(PodObject, Clone, Debug, PartialEq)]
pub struct WithText {
    pub field1: char,
    pub field2: String,
    pub field3: f64,
}

pub fn two_levels() -> TwoFieldsTwoLevelsOfNestedStructs {
    TwoFieldsTwoLevelsOfNestedStructs {
        field1: -9_000_000_000,
        field2: NestedWithNested {
            field1: 'n',
            field2: Nested {
                field1: 77,
                field2: 'z',
            },
        },
    }
}

pub fn ten_fields() -> TenFields {
    TenFields {
        field1: 'a',
        field2: 1,
        field3: -2,
        field4: 3.25,
        field5: 4,
        field6: 'Z',
        field7: i32::MAX,
        field8: i32::MIN,
        field9: -0.5,
        field10: i16::MIN,
    }
}

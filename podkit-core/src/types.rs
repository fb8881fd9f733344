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

//! The type registry: a closed bijection between primitive leaf kinds and
//! small positive ids.

use crate::error::Error;
use crate::reflect::Leaf;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::mem;

/// Id reserved for "no type". The flattener relies on it never being a
/// registered id.
pub const NO_TYPE_ID: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[allow(non_camel_case_types)]
#[repr(u32)]
pub enum PrimitiveKind {
    U8 = 1,
    U16 = 2,
    U32 = 3,
    U64 = 4,
    U128 = 5,
    USIZE = 6,
    I8 = 7,
    I16 = 8,
    I32 = 9,
    I64 = 10,
    I128 = 11,
    ISIZE = 12,
    CHAR = 13,
    F32 = 14,
    F64 = 15,
    BOOL = 16,
    CONST_PTR = 17,
    MUT_PTR = 18,
    // variable length, only the text serializer can carry it
    STRING = 19,
}

pub const U8: u32 = PrimitiveKind::U8 as u32;
pub const U16: u32 = PrimitiveKind::U16 as u32;
pub const U32: u32 = PrimitiveKind::U32 as u32;
pub const U64: u32 = PrimitiveKind::U64 as u32;
pub const U128: u32 = PrimitiveKind::U128 as u32;
pub const USIZE: u32 = PrimitiveKind::USIZE as u32;
pub const I8: u32 = PrimitiveKind::I8 as u32;
pub const I16: u32 = PrimitiveKind::I16 as u32;
pub const I32: u32 = PrimitiveKind::I32 as u32;
pub const I64: u32 = PrimitiveKind::I64 as u32;
pub const I128: u32 = PrimitiveKind::I128 as u32;
pub const ISIZE: u32 = PrimitiveKind::ISIZE as u32;
pub const CHAR: u32 = PrimitiveKind::CHAR as u32;
pub const F32: u32 = PrimitiveKind::F32 as u32;
pub const F64: u32 = PrimitiveKind::F64 as u32;
pub const BOOL: u32 = PrimitiveKind::BOOL as u32;
pub const CONST_PTR: u32 = PrimitiveKind::CONST_PTR as u32;
pub const MUT_PTR: u32 = PrimitiveKind::MUT_PTR as u32;
pub const STRING: u32 = PrimitiveKind::STRING as u32;

pub static ALL_KINDS: [PrimitiveKind; 19] = [
    PrimitiveKind::U8,
    PrimitiveKind::U16,
    PrimitiveKind::U32,
    PrimitiveKind::U64,
    PrimitiveKind::U128,
    PrimitiveKind::USIZE,
    PrimitiveKind::I8,
    PrimitiveKind::I16,
    PrimitiveKind::I32,
    PrimitiveKind::I64,
    PrimitiveKind::I128,
    PrimitiveKind::ISIZE,
    PrimitiveKind::CHAR,
    PrimitiveKind::F32,
    PrimitiveKind::F64,
    PrimitiveKind::BOOL,
    PrimitiveKind::CONST_PTR,
    PrimitiveKind::MUT_PTR,
    PrimitiveKind::STRING,
];

pub static KIND_NAMES: [&str; 19] = [
    "u8",
    "u16",
    "u32",
    "u64",
    "u128",
    "usize",
    "i8",
    "i16",
    "i32",
    "i64",
    "i128",
    "isize",
    "char",
    "f32",
    "f64",
    "bool",
    "*const ()",
    "*mut ()",
    "String",
];

impl PrimitiveKind {
    /// Registry id of this kind. Never [`NO_TYPE_ID`].
    #[inline(always)]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Reverse lookup. Id 0 and ids outside the registry are unsupported.
    pub fn from_id(id: u32) -> Result<PrimitiveKind, Error> {
        PrimitiveKind::try_from(id)
            .map_err(|_| Error::unsupported_type(format!("no primitive kind has id {id}")))
    }

    /// Width of the fixed native image, `None` for variable-length kinds.
    pub const fn width(self) -> Option<usize> {
        match self {
            PrimitiveKind::U8 | PrimitiveKind::I8 | PrimitiveKind::BOOL => Some(1),
            PrimitiveKind::U16 | PrimitiveKind::I16 => Some(2),
            PrimitiveKind::U32 | PrimitiveKind::I32 | PrimitiveKind::F32 => Some(4),
            PrimitiveKind::CHAR => Some(mem::size_of::<char>()),
            PrimitiveKind::U64 | PrimitiveKind::I64 | PrimitiveKind::F64 => Some(8),
            PrimitiveKind::U128 | PrimitiveKind::I128 => Some(16),
            PrimitiveKind::USIZE | PrimitiveKind::ISIZE => Some(mem::size_of::<usize>()),
            PrimitiveKind::CONST_PTR | PrimitiveKind::MUT_PTR => {
                Some(mem::size_of::<*const ()>())
            }
            PrimitiveKind::STRING => None,
        }
    }

    #[inline(always)]
    pub const fn is_fixed_width(self) -> bool {
        self.width().is_some()
    }

    pub fn name(self) -> &'static str {
        KIND_NAMES[(self.id() - 1) as usize]
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry id of the leaf type `L`. For enumerations this is the id of the
/// underlying integer representation.
#[inline(always)]
pub fn lookup<L: Leaf>() -> u32 {
    L::KIND.id()
}

/// Reverse lookup, see [`PrimitiveKind::from_id`].
#[inline(always)]
pub fn reverse_lookup(id: u32) -> Result<PrimitiveKind, Error> {
    PrimitiveKind::from_id(id)
}

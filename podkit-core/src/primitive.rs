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

//! [`Leaf`] implementations for every registered primitive kind.

use crate::buffer::{BinaryBuffer, TextBuffer, Token};
use crate::error::Error;
use crate::impl_leaf_field;
use crate::reflect::{parse_plain, Leaf};
use crate::types::PrimitiveKind;

macro_rules! impl_num_leaf {
    ($ty:ty, $writer:expr, $reader:expr, $kind:expr) => {
        impl Leaf for $ty {
            const KIND: PrimitiveKind = $kind;

            #[inline(always)]
            fn zero() -> Self {
                0 as $ty
            }

            #[inline(always)]
            fn write_bytes(&self, buffer: &mut BinaryBuffer) -> Result<(), Error> {
                $writer(buffer, *self);
                Ok(())
            }

            #[inline(always)]
            fn read_bytes(buffer: &mut BinaryBuffer) -> Result<Self, Error> {
                $reader(buffer)
            }

            fn write_text(&self, buffer: &mut TextBuffer, separator: char) {
                buffer.push_token(&self.to_string(), separator);
            }

            fn read_text(token: Token<'_>) -> Result<Self, Error> {
                parse_plain::<$ty>(token)
            }
        }

        impl_leaf_field!($ty, Primitive);
    };
}

impl_num_leaf!(u8, BinaryBuffer::write_u8, BinaryBuffer::read_u8, PrimitiveKind::U8);
impl_num_leaf!(u16, BinaryBuffer::write_u16, BinaryBuffer::read_u16, PrimitiveKind::U16);
impl_num_leaf!(u32, BinaryBuffer::write_u32, BinaryBuffer::read_u32, PrimitiveKind::U32);
impl_num_leaf!(u64, BinaryBuffer::write_u64, BinaryBuffer::read_u64, PrimitiveKind::U64);
impl_num_leaf!(
    u128,
    BinaryBuffer::write_u128,
    BinaryBuffer::read_u128,
    PrimitiveKind::U128
);
impl_num_leaf!(
    usize,
    BinaryBuffer::write_usize,
    BinaryBuffer::read_usize,
    PrimitiveKind::USIZE
);
impl_num_leaf!(i8, BinaryBuffer::write_i8, BinaryBuffer::read_i8, PrimitiveKind::I8);
impl_num_leaf!(i16, BinaryBuffer::write_i16, BinaryBuffer::read_i16, PrimitiveKind::I16);
impl_num_leaf!(i32, BinaryBuffer::write_i32, BinaryBuffer::read_i32, PrimitiveKind::I32);
impl_num_leaf!(i64, BinaryBuffer::write_i64, BinaryBuffer::read_i64, PrimitiveKind::I64);
impl_num_leaf!(
    i128,
    BinaryBuffer::write_i128,
    BinaryBuffer::read_i128,
    PrimitiveKind::I128
);
impl_num_leaf!(
    isize,
    BinaryBuffer::write_isize,
    BinaryBuffer::read_isize,
    PrimitiveKind::ISIZE
);
// floats print the shortest representation that parses back to the same value
impl_num_leaf!(f32, BinaryBuffer::write_f32, BinaryBuffer::read_f32, PrimitiveKind::F32);
impl_num_leaf!(f64, BinaryBuffer::write_f64, BinaryBuffer::read_f64, PrimitiveKind::F64);

impl Leaf for bool {
    const KIND: PrimitiveKind = PrimitiveKind::BOOL;

    fn zero() -> Self {
        false
    }

    fn write_bytes(&self, buffer: &mut BinaryBuffer) -> Result<(), Error> {
        buffer.write_bool(*self);
        Ok(())
    }

    fn read_bytes(buffer: &mut BinaryBuffer) -> Result<Self, Error> {
        match buffer.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::invalid_data(format!("{other} is not a bool byte"))),
        }
    }

    fn write_text(&self, buffer: &mut TextBuffer, separator: char) {
        buffer.push_token(if *self { "1" } else { "0" }, separator);
    }

    fn read_text(token: Token<'_>) -> Result<Self, Error> {
        match token {
            Token::Plain("1") => Ok(true),
            Token::Plain("0") => Ok(false),
            other => Err(Error::invalid_data(format!(
                "{} is not a bool token",
                other.describe()
            ))),
        }
    }
}

impl_leaf_field!(bool, Primitive);

impl Leaf for char {
    const KIND: PrimitiveKind = PrimitiveKind::CHAR;

    fn zero() -> Self {
        '\0'
    }

    fn write_bytes(&self, buffer: &mut BinaryBuffer) -> Result<(), Error> {
        buffer.write_u32(*self as u32);
        Ok(())
    }

    fn read_bytes(buffer: &mut BinaryBuffer) -> Result<Self, Error> {
        let raw = buffer.read_u32()?;
        char::from_u32(raw)
            .ok_or_else(|| Error::invalid_data(format!("{raw:#x} is not a unicode scalar")))
    }

    fn write_text(&self, buffer: &mut TextBuffer, separator: char) {
        let mut utf8 = [0u8; 4];
        buffer.push_quoted(self.encode_utf8(&mut utf8), '\'', separator);
    }

    fn read_text(token: Token<'_>) -> Result<Self, Error> {
        if let Token::Quoted {
            delimiter: '\'',
            text,
        } = &token
        {
            let mut chars = text.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(c);
            }
        }
        Err(Error::invalid_data(format!(
            "{} is not a char literal",
            token.describe()
        )))
    }
}

impl_leaf_field!(char, Primitive);

impl Leaf for String {
    const KIND: PrimitiveKind = PrimitiveKind::STRING;

    fn zero() -> Self {
        String::new()
    }

    fn write_bytes(&self, _: &mut BinaryBuffer) -> Result<(), Error> {
        Err(Error::unsupported_type("String has no fixed-width binary image"))
    }

    fn read_bytes(_: &mut BinaryBuffer) -> Result<Self, Error> {
        Err(Error::unsupported_type("String has no fixed-width binary image"))
    }

    fn write_text(&self, buffer: &mut TextBuffer, separator: char) {
        buffer.push_quoted(self, '"', separator);
    }

    fn read_text(token: Token<'_>) -> Result<Self, Error> {
        match token {
            Token::Quoted {
                delimiter: '"',
                text,
            } => Ok(text),
            other => Err(Error::invalid_data(format!(
                "{} is not a string literal",
                other.describe()
            ))),
        }
    }
}

impl_leaf_field!(String, Primitive);

macro_rules! impl_ptr_leaf {
    ($ty:ty, $kind:expr, $null:expr, $from_addr:expr) => {
        impl Leaf for $ty {
            const KIND: PrimitiveKind = $kind;

            fn zero() -> Self {
                $null
            }

            fn write_bytes(&self, buffer: &mut BinaryBuffer) -> Result<(), Error> {
                buffer.write_usize(*self as usize);
                Ok(())
            }

            fn read_bytes(buffer: &mut BinaryBuffer) -> Result<Self, Error> {
                Ok($from_addr(buffer.read_usize()?))
            }

            fn write_text(&self, buffer: &mut TextBuffer, separator: char) {
                buffer.push_token(&(*self as usize).to_string(), separator);
            }

            fn read_text(token: Token<'_>) -> Result<Self, Error> {
                Ok($from_addr(parse_plain::<usize>(token)?))
            }
        }

        impl_leaf_field!($ty, Primitive);
    };
}

// opaque addresses, never dereferenced
impl_ptr_leaf!(
    *const (),
    PrimitiveKind::CONST_PTR,
    std::ptr::null(),
    |addr: usize| addr as *const ()
);
impl_ptr_leaf!(
    *mut (),
    PrimitiveKind::MUT_PTR,
    std::ptr::null_mut(),
    |addr: usize| addr as *mut ()
);

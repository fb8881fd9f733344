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

use crate::buffer::TextBuffer;
use crate::config::Config;
use crate::error::Error;
use crate::reflect::{
    descriptor, value_init, Aggregate, AggregateDescriptor, Leaf, LeafVisitor, LeafVisitorMut,
};
use crate::serializer::LeafCursor;
use std::marker::PhantomData;

/// Writes the leaves of `T` as separator-terminated text tokens.
///
/// Numbers are decimal, `bool` is `1`/`0`, pointers are decimal addresses,
/// `char` and `String` are quoted escaped literals. Unlike
/// [`BinarySerializer`](crate::serializer::BinarySerializer) this handles
/// `String` leaves.
pub struct TextSerializer<T: Aggregate> {
    descriptor: &'static AggregateDescriptor,
    config: Config,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Aggregate> TextSerializer<T> {
    pub fn new() -> Result<Self, Error> {
        Ok(TextSerializer {
            descriptor: descriptor::<T>()?,
            config: Config::default(),
            _marker: PhantomData,
        })
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn descriptor(&self) -> &'static AggregateDescriptor {
        self.descriptor
    }

    /// Appends one token per leaf. On failure the buffer is left as it was.
    pub fn serialize(&self, value: &T, buffer: &mut TextBuffer) -> Result<(), Error> {
        let start = buffer.len();
        let mut writer = TokenWriter {
            cursor: LeafCursor::new(&self.descriptor.leaf_ids),
            separator: self.config.separator,
            buffer,
        };
        let result = value
            .visit_leaves(&mut writer)
            .and_then(|()| writer.cursor.finish());
        if result.is_err() {
            buffer.truncate(start);
        }
        result
    }

    /// Overwrites every leaf of `value` from the buffer. On failure neither
    /// `value` nor the read position change.
    pub fn deserialize(&self, value: &mut T, buffer: &mut TextBuffer) -> Result<(), Error> {
        let start = buffer.cursor();
        let mut staged = value.clone();
        let mut reader = TokenReader {
            cursor: LeafCursor::new(&self.descriptor.leaf_ids),
            separator: self.config.separator,
            buffer,
        };
        let result = staged
            .visit_leaves_mut(&mut reader)
            .and_then(|()| reader.cursor.finish());
        match result {
            Ok(()) => {
                *value = staged;
                Ok(())
            }
            Err(err) => {
                buffer.set_cursor(start);
                Err(err)
            }
        }
    }

    /// Reads a fresh instance, starting from the value-initialized one.
    pub fn read(&self, buffer: &mut TextBuffer) -> Result<T, Error> {
        let mut value = value_init::<T>()?;
        self.deserialize(&mut value, buffer)?;
        Ok(value)
    }

    pub fn to_text(&self, value: &T) -> Result<String, Error> {
        let mut buffer = TextBuffer::new();
        self.serialize(value, &mut buffer)?;
        Ok(buffer.into_string())
    }
}

struct TokenWriter<'a> {
    cursor: LeafCursor,
    separator: char,
    buffer: &'a mut TextBuffer,
}

impl LeafVisitor for TokenWriter<'_> {
    fn visit<L: Leaf>(&mut self, leaf: &L) -> Result<(), Error> {
        self.cursor.advance::<L>()?;
        leaf.write_text(self.buffer, self.separator);
        Ok(())
    }
}

struct TokenReader<'a> {
    cursor: LeafCursor,
    separator: char,
    buffer: &'a mut TextBuffer,
}

impl LeafVisitorMut for TokenReader<'_> {
    fn visit_mut<L: Leaf>(&mut self, leaf: &mut L) -> Result<(), Error> {
        self.cursor.advance::<L>()?;
        *leaf = L::read_text(self.buffer.next_token(self.separator)?)?;
        Ok(())
    }
}

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

use crate::buffer::BinaryBuffer;
use crate::error::Error;
use crate::reflect::{
    descriptor, value_init, Aggregate, AggregateDescriptor, Leaf, LeafVisitor, LeafVisitorMut,
};
use crate::serializer::LeafCursor;
use std::any::type_name;
use std::marker::PhantomData;

/// Packs the leaves of `T` as their native-endian fixed-width images,
/// back to back, with no framing.
///
/// # Examples
///
/// `Point` derives `PodObject`, so this runs from the `podkit` facade:
///
/// ```rust,ignore
/// let serializer = BinarySerializer::<Point>::new()?;
/// let mut buffer = BinaryBuffer::new();
/// serializer.serialize(&point, &mut buffer)?;
/// assert_eq!(serializer.read(&mut buffer)?, point);
/// assert!(buffer.is_empty());
/// ```
pub struct BinarySerializer<T: Aggregate> {
    descriptor: &'static AggregateDescriptor,
    width: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Aggregate> BinarySerializer<T> {
    /// Fails with `UnsupportedType` when a leaf of `T` has no fixed width.
    pub fn new() -> Result<Self, Error> {
        let descriptor = descriptor::<T>()?;
        let width = descriptor.fixed_width.ok_or_else(|| {
            Error::unsupported_type(format!(
                "{} has a variable-length leaf and no binary image",
                type_name::<T>()
            ))
        })?;
        Ok(BinarySerializer {
            descriptor,
            width,
            _marker: PhantomData,
        })
    }

    /// Byte width of one serialized instance.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn descriptor(&self) -> &'static AggregateDescriptor {
        self.descriptor
    }

    /// Appends the image of `value`. On failure the buffer is left as it was.
    pub fn serialize(&self, value: &T, buffer: &mut BinaryBuffer) -> Result<(), Error> {
        let start = buffer.len();
        buffer.reserve(self.width);
        let result = self.write_leaves(value, buffer);
        if result.is_err() {
            buffer.truncate(start);
        }
        result
    }

    fn write_leaves(&self, value: &T, buffer: &mut BinaryBuffer) -> Result<(), Error> {
        let mut writer = LeafWriter {
            cursor: LeafCursor::new(&self.descriptor.leaf_ids),
            buffer,
        };
        value.visit_leaves(&mut writer)?;
        writer.cursor.finish()
    }

    /// Overwrites every leaf of `value` from the buffer. On failure neither
    /// `value` nor the read position change.
    pub fn deserialize(&self, value: &mut T, buffer: &mut BinaryBuffer) -> Result<(), Error> {
        let remaining = buffer.remaining();
        if remaining < self.width {
            return Err(Error::buffer_underrun(self.width, remaining));
        }
        let start = buffer.cursor();
        let mut staged = value.clone();
        match self.read_leaves(&mut staged, buffer) {
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

    fn read_leaves(&self, value: &mut T, buffer: &mut BinaryBuffer) -> Result<(), Error> {
        let mut reader = LeafReader {
            cursor: LeafCursor::new(&self.descriptor.leaf_ids),
            buffer,
        };
        value.visit_leaves_mut(&mut reader)?;
        reader.cursor.finish()
    }

    /// Reads a fresh instance, starting from the value-initialized one.
    pub fn read(&self, buffer: &mut BinaryBuffer) -> Result<T, Error> {
        let mut value = value_init::<T>()?;
        self.deserialize(&mut value, buffer)?;
        Ok(value)
    }

    pub fn to_bytes(&self, value: &T) -> Result<Vec<u8>, Error> {
        let mut buffer = BinaryBuffer::with_capacity(self.width);
        self.serialize(value, &mut buffer)?;
        Ok(buffer.into_bytes())
    }
}

struct LeafWriter<'a> {
    cursor: LeafCursor,
    buffer: &'a mut BinaryBuffer,
}

impl LeafVisitor for LeafWriter<'_> {
    fn visit<L: Leaf>(&mut self, leaf: &L) -> Result<(), Error> {
        self.cursor.advance::<L>()?;
        leaf.write_bytes(self.buffer)
    }
}

struct LeafReader<'a> {
    cursor: LeafCursor,
    buffer: &'a mut BinaryBuffer,
}

impl LeafVisitorMut for LeafReader<'_> {
    fn visit_mut<L: Leaf>(&mut self, leaf: &mut L) -> Result<(), Error> {
        self.cursor.advance::<L>()?;
        *leaf = L::read_bytes(self.buffer)?;
        Ok(())
    }
}

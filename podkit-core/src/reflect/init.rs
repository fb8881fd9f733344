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

use crate::error::Error;
use crate::reflect::{Aggregate, Field, FieldClass};
use std::any::type_name;
use std::mem;

/// What a field learns about its type while converting a placeholder.
#[derive(Clone, Debug)]
pub(crate) struct FieldProbe {
    pub(crate) size: usize,
    pub(crate) type_name: &'static str,
    pub(crate) class: FieldClass,
    pub(crate) nested: Option<&'static crate::reflect::AggregateDescriptor>,
}

/// Where placeholder conversions report.
pub(crate) enum Sink<'a> {
    /// Plain construction, nothing recorded.
    Inert,
    Probe(&'a mut Vec<FieldProbe>),
    /// Raw id array and the slot offset of every supplied field.
    Ids {
        raw: &'a mut [u32],
        offsets: &'a [usize],
    },
}

/// Ordered initializer list handed to [`Aggregate::aggregate_init`].
///
/// The first `supplied` fields receive a [`Placeholder`]; any further field is
/// value-initialized. Placeholders the aggregate does not consume make the
/// construction fail, see [`InitList::consumed_all`].
pub struct InitList<'a> {
    supplied: usize,
    cursor: usize,
    sink: Sink<'a>,
}

impl<'a> InitList<'a> {
    pub(crate) fn new(supplied: usize, sink: Sink<'a>) -> InitList<'a> {
        InitList {
            supplied,
            cursor: 0,
            sink,
        }
    }

    pub fn inert(supplied: usize) -> InitList<'static> {
        InitList::new(supplied, Sink::Inert)
    }

    /// Initializer for the next field, of type `F`.
    pub fn field<F: Field>(&mut self) -> Result<F, Error> {
        let index = self.cursor;
        self.cursor += 1;
        if index >= self.supplied {
            return F::value_init();
        }
        Placeholder {
            index,
            sink: &mut self.sink,
        }
        .convert::<F>()
    }

    pub fn supplied(&self) -> usize {
        self.supplied
    }

    /// Number of initializers drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }

    pub fn consumed_all(&self) -> bool {
        self.cursor >= self.supplied
    }
}

/// An initializer convertible to any field type. Converting records facts
/// about the target type in the list's sink.
pub struct Placeholder<'s, 'a> {
    index: usize,
    sink: &'s mut Sink<'a>,
}

impl Placeholder<'_, '_> {
    pub fn convert<F: Field>(self) -> Result<F, Error> {
        match self.sink {
            Sink::Inert => {}
            Sink::Probe(probes) => probes.push(FieldProbe {
                size: mem::size_of::<F>(),
                type_name: type_name::<F>(),
                class: F::class(),
                nested: F::describe_nested()?,
            }),
            Sink::Ids { raw, offsets } => {
                let start = offsets.get(self.index).copied().ok_or_else(|| {
                    Error::unsupported_type(format!("field {} has no id slot", self.index))
                })?;
                let end = start + mem::size_of::<F>();
                let slot = raw.get_mut(start..end).ok_or_else(|| {
                    Error::unsupported_type(format!(
                        "id slot {start}..{end} of field {} exceeds the layout",
                        self.index
                    ))
                })?;
                F::emit_raw_ids(slot)?;
            }
        }
        F::value_init()
    }
}

/// Runs `T::aggregate_init` and rejects unconsumed placeholders.
pub(crate) fn initialize<T: Aggregate>(init: &mut InitList<'_>) -> Result<T, Error> {
    let value = T::aggregate_init(init)?;
    if !init.consumed_all() {
        return Err(Error::unsupported_type(format!(
            "{} takes {} initializers, {} supplied",
            type_name::<T>(),
            init.drawn(),
            init.supplied()
        )));
    }
    Ok(value)
}

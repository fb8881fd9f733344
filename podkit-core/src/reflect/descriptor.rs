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
use crate::reflect::counter::count_fields;
use crate::reflect::flatten::flatten;
use crate::reflect::init::{initialize, InitList, Sink};
use crate::reflect::{Aggregate, FieldClass};
use crate::types::PrimitiveKind;
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Everything the library knows about an aggregate type. Computed once per
/// type and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateDescriptor {
    pub type_name: &'static str,
    pub field_count: usize,
    pub fields: Vec<FieldDescriptor>,
    /// Registry ids of all leaves, depth-first in declaration order.
    pub leaf_ids: Vec<u32>,
    /// Byte width of the binary image, `None` when a leaf is variable length.
    pub fixed_width: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub index: usize,
    pub name: &'static str,
    pub type_name: &'static str,
    pub class: FieldClass,
    /// Position of this field's first leaf in the leaf id sequence.
    pub leaf_offset: usize,
    pub leaf_count: usize,
    pub nested: Option<&'static AggregateDescriptor>,
}

impl AggregateDescriptor {
    pub fn leaf_count(&self) -> usize {
        self.leaf_ids.len()
    }

    pub fn leaf_kinds(&self) -> Result<Vec<PrimitiveKind>, Error> {
        self.leaf_ids
            .iter()
            .map(|id| PrimitiveKind::from_id(*id))
            .collect()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

type DescriptorMap = HashMap<TypeId, &'static AggregateDescriptor>;

static DESCRIPTORS: OnceLock<RwLock<DescriptorMap>> = OnceLock::new();

/// Cached descriptor of `T`.
///
/// Computation runs outside the lock, so concurrent first requests may each
/// compute; the first insert wins and later ones are dropped.
pub fn descriptor<T: Aggregate>() -> Result<&'static AggregateDescriptor, Error> {
    let key = TypeId::of::<T>();
    let lock = DESCRIPTORS.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(found) = lock
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(*found);
    }
    let computed = compute::<T>().map_err(Error::enhance_unsupported::<T>)?;
    let mut map = lock.write().unwrap_or_else(PoisonError::into_inner);
    let entry = *map
        .entry(key)
        .or_insert_with(|| Box::leak(Box::new(computed)));
    Ok(entry)
}

fn compute<T: Aggregate>() -> Result<AggregateDescriptor, Error> {
    let field_count = count_fields::<T>()?;
    if T::FIELD_NAMES.len() != field_count {
        return Err(Error::unsupported_type(format!(
            "{field_count} fields counted but {} names declared",
            T::FIELD_NAMES.len()
        )));
    }

    let mut probes = Vec::with_capacity(field_count);
    initialize::<T>(&mut InitList::new(field_count, Sink::Probe(&mut probes)))?;
    let flattened = flatten::<T>(field_count, &probes)?;

    let mut fields = Vec::with_capacity(field_count);
    let mut leaf_offset = 0;
    for (index, (probe, leaf_count)) in probes
        .into_iter()
        .zip(flattened.leaf_counts.iter().copied())
        .enumerate()
    {
        let expected = probe.nested.map_or(1, |n| n.leaf_ids.len());
        if leaf_count != expected {
            return Err(Error::unsupported_type(format!(
                "field `{}` flattened to {leaf_count} leaves, expected {expected}",
                T::FIELD_NAMES[index]
            )));
        }
        fields.push(FieldDescriptor {
            index,
            name: T::FIELD_NAMES[index],
            type_name: probe.type_name,
            class: probe.class,
            leaf_offset,
            leaf_count,
            nested: probe.nested,
        });
        leaf_offset += leaf_count;
    }

    let fixed_width = flattened
        .leaf_ids
        .iter()
        .map(|id| PrimitiveKind::from_id(*id).map(PrimitiveKind::width))
        .sum::<Result<Option<usize>, Error>>()?;

    log::debug!(
        "computed descriptor of {}: {field_count} fields, {} leaves",
        type_name::<T>(),
        flattened.leaf_ids.len()
    );
    Ok(AggregateDescriptor {
        type_name: type_name::<T>(),
        field_count,
        fields,
        leaf_ids: flattened.leaf_ids,
        fixed_width,
    })
}

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

//! Leaf id flattening.
//!
//! Every field owns a slot of `size_of::<F>()` entries in a raw id array of
//! `size_of::<T>()` entries; slots are laid out back to back in declaration
//! order. A leaf writes its registry id into the first entry of its slot, a
//! nested aggregate copies its own compacted ids into its slot. No leaf is
//! zero-sized and no registry id is [`NO_TYPE_ID`], so dropping every zero
//! afterwards yields the depth-first leaf sequence.

use crate::bail;
use crate::error::Error;
use crate::reflect::descriptor::descriptor;
use crate::reflect::init::{initialize, FieldProbe, InitList, Sink};
use crate::reflect::{Aggregate, Leaf, MAX_LEAVES, NO_TYPE_ID};
use std::any::type_name;
use std::mem;

/// Result of flattening one aggregate.
pub(crate) struct Flattened {
    pub(crate) leaf_ids: Vec<u32>,
    /// Number of leaves contributed by each top-level field.
    pub(crate) leaf_counts: Vec<usize>,
}

pub fn emit_leaf_id<L: Leaf>(slot: &mut [u32]) -> Result<(), Error> {
    match slot.first_mut() {
        Some(first) => {
            *first = L::KIND.id();
            Ok(())
        }
        None => bail!("{} is zero-sized and cannot carry an id", type_name::<L>()),
    }
}

pub fn emit_aggregate_ids<T: Aggregate>(slot: &mut [u32]) -> Result<(), Error> {
    let ids = &descriptor::<T>()?.leaf_ids;
    match slot.get_mut(..ids.len()) {
        Some(head) => {
            head.copy_from_slice(ids);
            Ok(())
        }
        None => Err(Error::unsupported_type(format!(
            "{} has {} leaves but an id slot of {}",
            type_name::<T>(),
            ids.len(),
            slot.len()
        ))),
    }
}

/// Slot offsets from the probed field sizes, plus the end of the last slot.
fn slot_offsets<T: Aggregate>(probes: &[FieldProbe]) -> Result<Vec<usize>, Error> {
    let mut offsets = Vec::with_capacity(probes.len() + 1);
    let mut next = 0usize;
    for probe in probes {
        offsets.push(next);
        next += probe.size;
    }
    offsets.push(next);
    if next > mem::size_of::<T>() {
        return Err(Error::unsupported_type(format!(
            "fields of {} span {next} bytes, more than its size {}",
            type_name::<T>(),
            mem::size_of::<T>()
        )));
    }
    Ok(offsets)
}

/// Runs the id pass over `T` and compacts the raw array.
pub(crate) fn flatten<T: Aggregate>(
    field_count: usize,
    probes: &[FieldProbe],
) -> Result<Flattened, Error> {
    let offsets = slot_offsets::<T>(probes)?;
    let mut raw = vec![NO_TYPE_ID; mem::size_of::<T>()];
    initialize::<T>(&mut InitList::new(
        field_count,
        Sink::Ids {
            raw: &mut raw,
            offsets: &offsets,
        },
    ))?;
    log::trace!(
        "raw ids of {}: {} entries, {} slots",
        type_name::<T>(),
        raw.len(),
        field_count
    );

    let leaf_counts = offsets
        .windows(2)
        .map(|w| raw[w[0]..w[1]].iter().filter(|id| **id != NO_TYPE_ID).count())
        .collect::<Vec<_>>();
    let leaf_ids = raw
        .into_iter()
        .filter(|id| *id != NO_TYPE_ID)
        .collect::<Vec<_>>();
    if leaf_ids.len() > MAX_LEAVES {
        return Err(Error::unsupported_type(format!(
            "{} has {} leaves, more than {MAX_LEAVES}",
            type_name::<T>(),
            leaf_ids.len()
        )));
    }
    Ok(Flattened {
        leaf_ids,
        leaf_counts,
    })
}

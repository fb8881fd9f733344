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

//! Serializers driven by the leaf id sequence of a type.
//!
//! Both walk the instance with the depth-first leaf visitor and check every
//! visited leaf against the flattened id at the same position, so traversal
//! order and flattening order cannot drift apart.

use crate::error::Error;
use crate::reflect::Leaf;
use std::any::type_name;

pub mod binary;
pub mod text;

pub use binary::BinarySerializer;
pub use text::TextSerializer;

/// Position in the leaf id sequence during a visit.
pub(crate) struct LeafCursor {
    ids: &'static [u32],
    position: usize,
}

impl LeafCursor {
    pub(crate) fn new(ids: &'static [u32]) -> LeafCursor {
        LeafCursor { ids, position: 0 }
    }

    #[inline(always)]
    pub(crate) fn advance<L: Leaf>(&mut self) -> Result<(), Error> {
        match self.ids.get(self.position) {
            Some(&id) if id == L::KIND.id() => {
                self.position += 1;
                Ok(())
            }
            Some(&id) => Err(Error::unsupported_type(format!(
                "leaf {} is a {} but was flattened as id {id}",
                self.position,
                type_name::<L>()
            ))),
            None => Err(Error::unsupported_type(format!(
                "visited more than the {} flattened leaves",
                self.ids.len()
            ))),
        }
    }

    pub(crate) fn finish(&self) -> Result<(), Error> {
        if self.position != self.ids.len() {
            return Err(Error::unsupported_type(format!(
                "visited {} of {} flattened leaves",
                self.position,
                self.ids.len()
            )));
        }
        Ok(())
    }
}

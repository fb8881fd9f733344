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

//! Tuple views over an aggregate instance.
//!
//! Views hold independent copies of the fields; mutating a view never
//! touches the instance.

use crate::hlist::IntoTuple;
use crate::reflect::Aggregate;

pub trait TupleExt: Aggregate {
    /// One element per top-level field, nested aggregates kept whole.
    fn shallow_tuple(&self) -> Self::Fields {
        self.to_fields()
    }

    fn into_shallow_tuple(self) -> Self::Fields {
        self.into_fields()
    }

    /// One element per leaf, depth-first in declaration order.
    fn leaf_tuple(&self) -> Self::Leaves {
        self.clone().into_leaves()
    }

    fn into_leaf_tuple(self) -> Self::Leaves {
        self.into_leaves()
    }

    /// [`TupleExt::shallow_tuple`] as a native tuple.
    fn to_std_tuple(&self) -> <Self::Fields as IntoTuple>::Tuple
    where
        Self::Fields: IntoTuple,
    {
        self.to_fields().into_tuple()
    }

    /// [`TupleExt::leaf_tuple`] as a native tuple.
    fn to_std_leaf_tuple(&self) -> <Self::Leaves as IntoTuple>::Tuple
    where
        Self::Leaves: IntoTuple,
    {
        self.leaf_tuple().into_tuple()
    }
}

impl<T: Aggregate> TupleExt for T {}

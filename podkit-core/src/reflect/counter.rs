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

use crate::ensure;
use crate::error::Error;
use crate::reflect::{Aggregate, InitList, MAX_FIELDS};
use std::any::type_name;

/// Whether `T` can be built from `n` placeholders.
///
/// Omitted trailing initializers are value-initialized, so acceptance is
/// monotonic: every `n` up to the field count is accepted, every larger one
/// rejected.
fn accepts<T: Aggregate>(n: usize) -> Result<bool, Error> {
    let mut init = InitList::inert(n);
    T::aggregate_init(&mut init)?;
    Ok(init.consumed_all())
}

/// Derives the top-level field count of `T` from construction alone, by
/// binary search over the number of placeholders `T` accepts.
///
/// Prefer [`crate::reflect::field_count`], which caches the result.
pub fn count_fields<T: Aggregate>() -> Result<usize, Error> {
    ensure!(
        accepts::<T>(0)?,
        "{} is not aggregate-initializable",
        type_name::<T>()
    );
    ensure!(
        !accepts::<T>(MAX_FIELDS + 1)?,
        "{} has more than {} fields",
        type_name::<T>(),
        MAX_FIELDS
    );
    // accepts(lo) && !accepts(hi)
    let (mut lo, mut hi) = (0, MAX_FIELDS + 1);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if accepts::<T>(mid)? {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    ensure!(lo > 0, "{} has no fields", type_name::<T>());
    log::trace!("{} accepts {lo} initializers", type_name::<T>());
    Ok(lo)
}

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

//! Heterogeneous lists carrying the shallow and flattened field views of an
//! aggregate.
//!
//! Native tuples cannot be concatenated generically, so the views are built
//! as `HCons`/`HNil` chains and converted with [`IntoTuple`] at the edge.

use crate::reflect::Field;

/// Builds an [`HList`] value: `hlist![1u8, 'a']`.
#[macro_export]
macro_rules! hlist {
    () => {
        $crate::hlist::HNil
    };
    ($head:expr $(, $tail:expr)*) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist!($($tail),*),
        }
    };
}

/// Spells an [`HList`] type: `hlist_type!(u8, char)`.
#[macro_export]
macro_rules! hlist_type {
    () => {
        $crate::hlist::HNil
    };
    ($head:ty $(, $tail:ty)*) => {
        $crate::hlist::HCons<$head, $crate::hlist_type!($($tail),*)>
    };
}

/// Destructures an [`HList`]: `let hlist_pat!(a, b) = list;`.
#[macro_export]
macro_rules! hlist_pat {
    () => {
        $crate::hlist::HNil
    };
    ($head:pat $(, $tail:pat)*) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist_pat!($($tail),*),
        }
    };
}

pub trait HList: Sized {
    const LEN: usize;

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    fn prepend<H>(self, head: H) -> HCons<H, Self> {
        HCons { head, tail: self }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HNil;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

impl HList for HNil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

impl<H, T> HCons<H, T> {
    pub fn new(head: H, tail: T) -> Self {
        HCons { head, tail }
    }
}

/// Appends `R` after `Self`.
pub trait Concat<R: HList>: HList {
    type Output: HList;

    fn concat(self, rhs: R) -> Self::Output;
}

impl<R: HList> Concat<R> for HNil {
    type Output = R;

    fn concat(self, rhs: R) -> R {
        rhs
    }
}

impl<H, T: Concat<R>, R: HList> Concat<R> for HCons<H, T> {
    type Output = HCons<H, T::Output>;

    fn concat(self, rhs: R) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.concat(rhs),
        }
    }
}

/// Replaces every element by its leaves and concatenates the results, so a
/// shallow field list becomes the fully flattened leaf list.
pub trait FlattenFields: HList {
    type Output: HList;

    fn flatten(self) -> Self::Output;
}

impl FlattenFields for HNil {
    type Output = HNil;

    fn flatten(self) -> HNil {
        HNil
    }
}

impl<H, T> FlattenFields for HCons<H, T>
where
    H: Field,
    T: FlattenFields,
    H::Leaves: Concat<T::Output>,
{
    type Output = <H::Leaves as Concat<T::Output>>::Output;

    fn flatten(self) -> Self::Output {
        self.head.into_leaves().concat(self.tail.flatten())
    }
}

/// Conversion of an [`HList`] into the native tuple of the same elements.
pub trait IntoTuple: HList {
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;
}

impl IntoTuple for HNil {
    type Tuple = ();

    fn into_tuple(self) -> Self::Tuple {}
}

macro_rules! impl_into_tuple {
    ($($T:ident),+) => {
        impl<$($T),+> IntoTuple for hlist_type!($($T),+) {
            type Tuple = ($($T,)+);

            #[allow(non_snake_case)]
            fn into_tuple(self) -> Self::Tuple {
                let hlist_pat!($($T),+) = self;
                ($($T,)+)
            }
        }
    };
}

impl_into_tuple!(A);
impl_into_tuple!(A, B);
impl_into_tuple!(A, B, C);
impl_into_tuple!(A, B, C, D);
impl_into_tuple!(A, B, C, D, E);
impl_into_tuple!(A, B, C, D, E, F);
impl_into_tuple!(A, B, C, D, E, F, G);
impl_into_tuple!(A, B, C, D, E, F, G, H);
impl_into_tuple!(A, B, C, D, E, F, G, H, I);
impl_into_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_into_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_into_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_into_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_into_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_into_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

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

//! # Podkit
//!
//! Structural introspection for plain data aggregates: field counts,
//! flattened leaf type ids, tuple views and flat binary/text serializers,
//! with no hand-written schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use podkit::{
//!     field_count, leaf_type_ids, BinaryBuffer, BinarySerializer, PodEnum, PodObject,
//!     TupleExt,
//! };
//!
//! #[derive(PodEnum, Clone, Copy, Debug, PartialEq)]
//! #[repr(u64)]
//! enum Unit {
//!     Meters,
//!     Feet,
//! }
//!
//! #[derive(PodObject, Clone, Debug, PartialEq)]
//! struct Span {
//!     pub start: i32,
//!     pub end: i32,
//! }
//!
//! #[derive(PodObject, Clone, Debug, PartialEq)]
//! struct Measure {
//!     pub weight: f64,
//!     pub span: Span,
//!     pub unit: Unit,
//! }
//!
//! # fn main() -> Result<(), podkit::Error> {
//! assert_eq!(field_count::<Measure>()?, 3);
//! // f64, i32, i32, u64
//! assert_eq!(leaf_type_ids::<Measure>()?, &[15, 9, 9, 4]);
//!
//! let m = Measure { weight: 2.5, span: Span { start: 1, end: 4 }, unit: Unit::Feet };
//! assert_eq!(m.to_std_leaf_tuple(), (2.5, 1, 4, Unit::Feet));
//!
//! let serializer = BinarySerializer::<Measure>::new()?;
//! let mut buffer = BinaryBuffer::new();
//! serializer.serialize(&m, &mut buffer)?;
//! assert_eq!(serializer.read(&mut buffer)?, m);
//! assert!(buffer.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Aggregates
//!
//! A type qualifies when it is a non-generic struct whose fields are all
//! `pub` and each field is a registered primitive (`u8`..`u128`, `usize`,
//! `i8`..`i128`, `isize`, `char`, `f32`, `f64`, `bool`, `*const ()`,
//! `*mut ()`, `String`), a `#[derive(PodEnum)]` enum or another
//! `#[derive(PodObject)]` struct. Anything else fails to compile.
//!
//! `String` leaves are only accepted by the text serializer;
//! [`BinarySerializer::new`] rejects types containing them.
//!
//! ## Errors
//!
//! All fallible operations return [`Error`]: `UnsupportedType` for types the
//! library cannot decompose or serialize, `BufferUnderrun` for reads past the
//! end of a buffer and `InvalidData` for malformed buffer content. Failed
//! operations leave buffers and targets untouched.
//!
//! ## Logging
//!
//! Descriptor computation is logged through the `log` facade at `debug`
//! level, flattener passes at `trace`. No logger is installed.
//!
//! The derives generate paths into `podkit_core`, so crates using them also
//! depend on `podkit-core` directly.

pub use podkit_core::{
    buffer::{BinaryBuffer, TextBuffer},
    config::Config,
    descriptor,
    error::Error,
    field_count, field_count_of, hlist, hlist_pat, hlist_type, leaf_type_ids, leaf_type_ids_of,
    type_list,
    types::PrimitiveKind,
    Aggregate, AggregateDescriptor, BinarySerializer, FieldClass, FieldDescriptor, IntoTuple,
    TextSerializer, TupleExt,
};
pub use podkit_derive::{PodEnum, PodObject};

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

//! # Podkit Core
//!
//! Core of the podkit introspection library: field counting, leaf flattening,
//! tuple views and serializers for plain data aggregates, all derived from
//! how a type is constructed rather than from a hand-written schema.
//!
//! ## Architecture
//!
//! - **`types`**: the registry of primitive leaf kinds and their ids
//! - **`reflect`**: field counter, flattener and the per-type descriptor cache
//! - **`hlist`** / **`tuple`**: shallow and flattened tuple views
//! - **`buffer`**: caller-owned binary and text streams
//! - **`serializer`**: binary and text serializers over the leaf sequence
//! - **`config`**: text serializer options
//! - **`error`**: error type and the `ensure!` / `bail!` macros
//!
//! ## Key Concepts
//!
//! An aggregate is a struct whose fields are all public primitives,
//! enumerations or nested aggregates. `#[derive(PodObject)]` (from
//! `podkit-derive`) only implements [`reflect::Aggregate::aggregate_init`]:
//! build `Self` from an ordered list of initializers, value-initializing any
//! field past the end of the list. The field count is then the largest list
//! length the type accepts, and the leaf ids are written by the initializers
//! themselves as each one is converted to its field's type.
//!
//! Leaf ids are process-local; they are not a wire format.
//!
//! ## Usage
//!
//! This crate is typically used through the `podkit` crate, which re-exports
//! the derive macros. On its own it still offers the type registry and the
//! leaf codecs.
//!
//! ```rust
//! use podkit_core::types::{lookup, reverse_lookup, PrimitiveKind};
//! use podkit_core::{BinaryBuffer, Leaf};
//!
//! assert_eq!(lookup::<char>(), 13);
//! assert_eq!(reverse_lookup(9)?, PrimitiveKind::I32);
//!
//! let mut buffer = BinaryBuffer::new();
//! 'x'.write_bytes(&mut buffer)?;
//! assert_eq!(char::read_bytes(&mut buffer)?, 'x');
//! # Ok::<(), podkit_core::Error>(())
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod hlist;
pub mod primitive;
pub mod reflect;
pub mod serializer;
pub mod tuple;
pub mod types;

pub use buffer::{BinaryBuffer, TextBuffer, Token};
pub use config::Config;
pub use error::Error;
pub use hlist::{Concat, FlattenFields, HCons, HList, HNil, IntoTuple};
pub use reflect::{
    descriptor, field_count, field_count_of, leaf_type_ids, leaf_type_ids_of, type_list,
    value_init, Aggregate, AggregateDescriptor, EnumRepr, Field, FieldClass, FieldDescriptor,
    InitList, Leaf, MAX_FIELDS, MAX_LEAVES,
};
pub use serializer::{BinarySerializer, TextSerializer};
pub use tuple::TupleExt;
pub use types::{PrimitiveKind, NO_TYPE_ID};

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

//! # Podkit Derive Macros
//!
//! ## Available Macros
//!
//! ### `#[derive(PodObject)]`
//!
//! Marks a struct as a plain data aggregate. The macro emits a single piece
//! of real logic, construction from an ordered initializer list; field
//! counting, leaf flattening, tuple views and serialization are derived from
//! it by `podkit-core`.
//!
//! **Supported Types:**
//! - Structs with named fields
//! - Tuple structs
//!
//! Every field must be `pub` and be a registered primitive, a `PodEnum`, or
//! another `PodObject`. Generic structs, unions, empty structs and structs
//! with more than 64 fields are rejected at compile time.
//!
//! ### `#[derive(PodEnum)]`
//!
//! Marks a fieldless enum with an explicit integer `#[repr(..)]` as a leaf.
//! It flattens to the registry id of its representation type and is
//! serialized as that integer.
//!
//! **Example:**
//! ```rust,ignore
//! use podkit_derive::{PodEnum, PodObject};
//!
//! #[derive(PodEnum, Clone, Copy, Debug, PartialEq)]
//! #[repr(u8)]
//! enum Channel {
//!     Red,
//!     Green,
//!     Blue,
//! }
//!
//! #[derive(PodObject, Clone, Debug, PartialEq)]
//! struct Pixel {
//!     pub channel: Channel,
//!     pub level: f32,
//! }
//! ```
//!
//! Both derives require `Clone`. Generated code refers to `::podkit_core`, so
//! the deriving crate must depend on `podkit-core`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro for plain data aggregates.
///
/// # Example
///
/// ```rust,ignore
/// use podkit_derive::PodObject;
///
/// #[derive(PodObject, Clone, Debug, PartialEq)]
/// struct Reading {
///     pub sensor: u16,
///     pub value: f64,
/// }
/// ```
#[proc_macro_derive(PodObject)]
pub fn proc_macro_derive_pod_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_aggregate(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for fieldless enumerations used as leaves.
#[proc_macro_derive(PodEnum)]
pub fn proc_macro_derive_pod_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

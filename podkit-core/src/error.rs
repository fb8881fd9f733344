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

//! Error type shared by the registry, the reflection passes and both
//! serializer families.
//!
//! Error constructors sit on every buffer read and every placeholder pass, so
//! they are `#[cold]` and `#[track_caller]`; keep those attributes when adding
//! new constructors.

use std::borrow::Cow;

use thiserror::Error;

/// Error type for podkit introspection and serialization.
///
/// # Always Use Static Constructor Functions
///
/// Build errors through [`Error::unsupported_type`],
/// [`Error::buffer_underrun`] and [`Error::invalid_data`] rather than the
/// variant syntax.
///
/// ```rust
/// use podkit_core::error::Error;
///
/// let err = Error::unsupported_type("`String` has no fixed-width image");
/// let err = Error::buffer_underrun(8, 3);
/// let err = Error::invalid_data(format!("{} is not a bool byte", 7));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The type is not a decomposable aggregate, exceeds a supported bound,
    /// or contains a leaf kind the registry does not know.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported_type`] instead.
    #[error("Unsupported type: {0}")]
    UnsupportedType(Cow<'static, str>),

    /// A read asked for more bytes or tokens than the buffer still holds.
    ///
    /// Do not construct this variant directly; use [`Error::buffer_underrun`] instead.
    #[error("Buffer underrun: requested {requested}, remaining {remaining}")]
    BufferUnderrun { requested: usize, remaining: usize },

    /// Buffer content that does not decode to a valid leaf value.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_data`] instead.
    #[error("Invalid data: {0}")]
    InvalidData(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::UnsupportedType`] from a string or static message.
    ///
    /// # Example
    /// ```
    /// use podkit_core::error::Error;
    ///
    /// let err = Error::unsupported_type("unions are not aggregates");
    /// let err = Error::unsupported_type(format!("{} fields exceed the limit", 65));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_type<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::UnsupportedType(s.into())
    }

    /// Creates a new [`Error::BufferUnderrun`] with the requested and the
    /// remaining amount (bytes for binary buffers, tokens or chars for text).
    ///
    /// # Example
    /// ```
    /// use podkit_core::error::Error;
    ///
    /// let err = Error::buffer_underrun(4, 1);
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_underrun(requested: usize, remaining: usize) -> Self {
        Error::BufferUnderrun {
            requested,
            remaining,
        }
    }

    /// Creates a new [`Error::InvalidData`] from a string or static message.
    ///
    /// # Example
    /// ```
    /// use podkit_core::error::Error;
    ///
    /// let err = Error::invalid_data("unterminated escape");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::InvalidData(s.into())
    }

    /// Appends the Rust type name to an [`Error::UnsupportedType`] message.
    /// Other errors are returned unchanged.
    ///
    /// # Example
    /// ```
    /// use podkit_core::error::Error;
    ///
    /// let err = Error::unsupported_type("no fixed-width image");
    /// let enhanced = Error::enhance_unsupported::<String>(err);
    /// // "no fixed-width image (type: alloc::string::String)"
    /// ```
    #[inline(never)]
    pub fn enhance_unsupported<T: ?Sized + 'static>(err: Error) -> Error {
        if let Error::UnsupportedType(s) = err {
            let mut msg = s.into_owned();
            msg.push_str(" (type: ");
            msg.push_str(std::any::type_name::<T>());
            msg.push(')');
            Error::unsupported_type(msg)
        } else {
            err
        }
    }

    /// Whether this is an [`Error::UnsupportedType`].
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Error::UnsupportedType(_))
    }

    /// Whether this is an [`Error::BufferUnderrun`].
    pub fn is_buffer_underrun(&self) -> bool {
        matches!(self, Error::BufferUnderrun { .. })
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// A bare message becomes an [`Error::UnsupportedType`].
///
/// # Examples
/// ```
/// use podkit_core::ensure;
/// use podkit_core::error::Error;
///
/// fn check_count(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, "aggregate has no fields");
///     ensure!(n <= 64, "{} fields exceed the limit", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unsupported_type($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unsupported_type(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::UnsupportedType`].
///
/// # Examples
/// ```
/// use podkit_core::bail;
/// use podkit_core::error::Error;
///
/// fn reject() -> Result<(), Error> {
///     bail!("pointer-owned structures are not aggregates");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::unsupported_type($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::unsupported_type(format!($fmt, $($arg)*)))
    };
}

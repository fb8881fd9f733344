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

pub const DEFAULT_SEPARATOR: char = ' ';

/// Configuration for the text serializer.
///
/// Holds the token separator. The binary serializer has no knobs: its image
/// is fully determined by the leaf sequence of the type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Character written after every token and skipped between tokens.
    pub separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the separator.
    ///
    /// The separator must never occur inside an unquoted token, so
    /// alphanumerics, quotes, backslash, signs, `.` and `_` are refused.
    pub fn separator(mut self, separator: char) -> Result<Self, Error> {
        if !is_valid_separator(separator) {
            return Err(Error::invalid_data(format!(
                "{separator:?} cannot separate text tokens"
            )));
        }
        self.separator = separator;
        Ok(self)
    }

    /// Get the token separator.
    #[inline(always)]
    pub fn get_separator(&self) -> char {
        self.separator
    }
}

fn is_valid_separator(c: char) -> bool {
    !(c.is_alphanumeric() || matches!(c, '"' | '\'' | '\\' | '+' | '-' | '.' | '_'))
}

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

//! Caller-owned streams used by the serializers.
//!
//! Both buffers are append-only on the write side and strictly sequential on
//! the read side. "Empty" always means "no unread content", regardless of how
//! much has been written.

use crate::error::Error;
use byteorder::{ByteOrder, NativeEndian};
use std::mem;

/// Byte stream holding native-endian fixed-width leaf images.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct BinaryBuffer {
    bf: Vec<u8>,
    cursor: usize,
}

impl BinaryBuffer {
    pub fn new() -> BinaryBuffer {
        BinaryBuffer::default()
    }

    pub fn with_capacity(capacity: usize) -> BinaryBuffer {
        BinaryBuffer {
            bf: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Total number of bytes written, read or not.
    pub fn len(&self) -> usize {
        self.bf.len()
    }

    /// Whether every written byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    pub fn slice_after_cursor(&self) -> &[u8] {
        &self.bf[self.cursor..]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bf
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bf.reserve(additional);
    }

    pub fn clear(&mut self) {
        // keep capacity
        self.bf.clear();
        self.cursor = 0;
    }

    /// Drops everything written after `len`. Never cuts into consumed bytes.
    pub fn truncate(&mut self, len: usize) {
        self.bf.truncate(len.max(self.cursor));
    }

    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.bf.len());
    }

    #[inline(always)]
    fn grow(&mut self, n: usize) -> &mut [u8] {
        let start = self.bf.len();
        self.bf.resize(start + n, 0);
        &mut self.bf[start..]
    }

    pub fn write_bytes(&mut self, v: &[u8]) -> usize {
        self.bf.extend_from_slice(v);
        v.len()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bf.push(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.bf.push(value as u8);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.bf.push(value as u8);
    }

    pub fn write_u16(&mut self, value: u16) {
        NativeEndian::write_u16(self.grow(2), value);
    }

    pub fn write_i16(&mut self, value: i16) {
        NativeEndian::write_i16(self.grow(2), value);
    }

    pub fn write_u32(&mut self, value: u32) {
        NativeEndian::write_u32(self.grow(4), value);
    }

    pub fn write_i32(&mut self, value: i32) {
        NativeEndian::write_i32(self.grow(4), value);
    }

    pub fn write_u64(&mut self, value: u64) {
        NativeEndian::write_u64(self.grow(8), value);
    }

    pub fn write_i64(&mut self, value: i64) {
        NativeEndian::write_i64(self.grow(8), value);
    }

    pub fn write_u128(&mut self, value: u128) {
        NativeEndian::write_u128(self.grow(16), value);
    }

    pub fn write_i128(&mut self, value: i128) {
        NativeEndian::write_i128(self.grow(16), value);
    }

    pub fn write_f32(&mut self, value: f32) {
        NativeEndian::write_f32(self.grow(4), value);
    }

    pub fn write_f64(&mut self, value: f64) {
        NativeEndian::write_f64(self.grow(8), value);
    }

    pub fn write_usize(&mut self, value: usize) {
        self.bf.extend_from_slice(&value.to_ne_bytes());
    }

    pub fn write_isize(&mut self, value: isize) {
        self.bf.extend_from_slice(&value.to_ne_bytes());
    }

    /// Consumes `n` bytes, or fails without moving the cursor.
    pub fn read_bytes(&mut self, n: usize) -> Result<&[u8], Error> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(Error::buffer_underrun(n, remaining));
        }
        let start = self.cursor;
        self.cursor += n;
        Ok(&self.bf[start..self.cursor])
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(NativeEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        Ok(NativeEndian::read_i16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(NativeEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        Ok(NativeEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        Ok(NativeEndian::read_u64(self.read_bytes(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        Ok(NativeEndian::read_i64(self.read_bytes(8)?))
    }

    pub fn read_u128(&mut self) -> Result<u128, Error> {
        Ok(NativeEndian::read_u128(self.read_bytes(16)?))
    }

    pub fn read_i128(&mut self) -> Result<i128, Error> {
        Ok(NativeEndian::read_i128(self.read_bytes(16)?))
    }

    pub fn read_f32(&mut self) -> Result<f32, Error> {
        Ok(NativeEndian::read_f32(self.read_bytes(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        Ok(NativeEndian::read_f64(self.read_bytes(8)?))
    }

    pub fn read_usize(&mut self) -> Result<usize, Error> {
        let mut raw = [0u8; mem::size_of::<usize>()];
        raw.copy_from_slice(self.read_bytes(mem::size_of::<usize>())?);
        Ok(usize::from_ne_bytes(raw))
    }

    pub fn read_isize(&mut self) -> Result<isize, Error> {
        let mut raw = [0u8; mem::size_of::<isize>()];
        raw.copy_from_slice(self.read_bytes(mem::size_of::<isize>())?);
        Ok(isize::from_ne_bytes(raw))
    }
}

impl From<Vec<u8>> for BinaryBuffer {
    fn from(bf: Vec<u8>) -> Self {
        BinaryBuffer { bf, cursor: 0 }
    }
}

/// A token handed out by [`TextBuffer::next_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Run of characters up to the next separator.
    Plain(&'a str),
    /// Quoted literal with escapes already resolved.
    Quoted { delimiter: char, text: String },
}

impl Token<'_> {
    pub fn describe(&self) -> String {
        match self {
            Token::Plain(s) => format!("`{s}`"),
            Token::Quoted { delimiter, text } => format!("{delimiter}{text}{delimiter}"),
        }
    }
}

/// Text stream of separator-terminated tokens.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> TextBuffer {
        TextBuffer::default()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether every written token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.text.len()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn remaining_str(&self) -> &str {
        &self.text[self.cursor..]
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Drops everything written after `len` bytes. Never cuts into consumed
    /// text. `len` must be a length previously returned by [`TextBuffer::len`].
    pub fn truncate(&mut self, len: usize) {
        let len = len.max(self.cursor);
        if self.text.is_char_boundary(len) {
            self.text.truncate(len);
        }
    }

    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.len());
    }

    /// Appends a token verbatim followed by `separator`.
    pub fn push_token(&mut self, token: &str, separator: char) {
        self.text.push_str(token);
        self.text.push(separator);
    }

    /// Appends `text` as an escaped literal between `delimiter`s, followed by
    /// `separator`.
    pub fn push_quoted(&mut self, text: &str, delimiter: char, separator: char) {
        self.text.push(delimiter);
        escape_into(&mut self.text, text);
        self.text.push(delimiter);
        self.text.push(separator);
    }

    /// Skips separators and consumes the next token plus one trailing
    /// separator. Fails with `BufferUnderrun` when nothing is left or a
    /// literal is unterminated; the cursor only moves on success.
    pub fn next_token(&mut self, separator: char) -> Result<Token<'_>, Error> {
        let rest = &self.text[self.cursor..];
        let skipped = rest.len() - rest.trim_start_matches(separator).len();
        let start = self.cursor + skipped;
        let body = &self.text[start..];
        let first = match body.chars().next() {
            Some(c) => c,
            None => return Err(Error::buffer_underrun(1, 0)),
        };
        if first == '"' || first == '\'' {
            let (text, consumed) = unescape_literal(&body[first.len_utf8()..], first)?;
            let end = start + first.len_utf8() + consumed;
            self.cursor = skip_one(&self.text, end, separator);
            return Ok(Token::Quoted {
                delimiter: first,
                text,
            });
        }
        let len = body.find(separator).unwrap_or(body.len());
        let end = start + len;
        self.cursor = skip_one(&self.text, end, separator);
        Ok(Token::Plain(&self.text[start..end]))
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        TextBuffer { text, cursor: 0 }
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        TextBuffer::from(text.to_string())
    }
}

fn skip_one(text: &str, at: usize, separator: char) -> usize {
    if text[at..].starts_with(separator) {
        at + separator.len_utf8()
    } else {
        at
    }
}

/// Escapes backslash, both quote kinds and every control character so that
/// the literal can be delimited by either quote.
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{{{:x}}}", c as u32));
            }
            c => out.push(c),
        }
    }
}

/// Reads an escaped literal up to the closing `delimiter`. Returns the
/// unescaped text and the number of bytes consumed, closing delimiter
/// included.
fn unescape_literal(body: &str, delimiter: char) -> Result<(String, usize), Error> {
    let mut text = String::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == delimiter {
            return Ok((text, i + c.len_utf8()));
        }
        if c != '\\' {
            text.push(c);
            continue;
        }
        let escaped = match chars.next() {
            Some((_, e)) => e,
            None => break,
        };
        match escaped {
            '\\' => text.push('\\'),
            '"' => text.push('"'),
            '\'' => text.push('\''),
            'n' => text.push('\n'),
            'r' => text.push('\r'),
            't' => text.push('\t'),
            '0' => text.push('\0'),
            'u' => {
                if !matches!(chars.next(), Some((_, '{'))) {
                    return Err(Error::invalid_data("expected `{` after `\\u`"));
                }
                let mut code = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, h)) if h.is_ascii_hexdigit() && code.len() < 6 => code.push(h),
                        Some((_, h)) => {
                            return Err(Error::invalid_data(format!(
                                "unexpected {h:?} in unicode escape"
                            )))
                        }
                        None => return Err(Error::buffer_underrun(1, 0)),
                    }
                }
                let decoded = u32::from_str_radix(&code, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        Error::invalid_data(format!("\\u{{{code}}} is not a unicode scalar"))
                    })?;
                text.push(decoded);
            }
            other => {
                return Err(Error::invalid_data(format!("unknown escape `\\{other}`")));
            }
        }
    }
    // ran out of input before the closing delimiter
    Err(Error::buffer_underrun(1, 0))
}

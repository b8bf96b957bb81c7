// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::constants::NEWLINE;
use super::error::Error;
use super::error::ErrorKind;

/// Byte reader with one byte of lookahead.
///
/// `line` and `column` are 1-based and always describe the byte that the
/// next call to [`Cursor::next`] will return.
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    idx: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Cursor<'a> {
        Self {
            buf,
            idx: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.buf.get(self.idx).copied()
    }

    #[inline]
    pub(crate) fn next(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.idx += 1;
        self.column += 1;
        if c == NEWLINE {
            self.column = 1;
            self.line += 1;
        }
        Some(c)
    }

    #[inline]
    pub(crate) fn eof(&self) -> bool {
        self.idx >= self.buf.len()
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.idx
    }

    /// Bytes consumed since `start`.
    #[inline]
    pub(crate) fn consumed_since(&self, start: usize) -> &'a [u8] {
        &self.buf[start..self.idx]
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.line, self.column)
    }
}

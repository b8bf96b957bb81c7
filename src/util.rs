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

use super::constants::*;

/// Returns the NUL-terminated run starting at `offset`, without the terminator.
#[inline]
pub(crate) fn c_bytes(buf: &[u8], offset: usize) -> &[u8] {
    let tail = buf.get(offset..).unwrap_or_default();
    match memchr::memchr(NUL, tail) {
        Some(len) => &tail[..len],
        None => tail,
    }
}

#[inline]
pub(crate) fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

#[inline]
pub(crate) fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

#[inline]
pub(crate) fn is_number_start(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'.' | b'+' | b'-')
}

#[inline]
pub(crate) fn is_quote(c: u8) -> bool {
    c == DOUBLE_QUOTE || c == SINGLE_QUOTE
}

#[inline]
pub(crate) fn is_exponent(c: u8) -> bool {
    c == b'e' || c == b'E'
}

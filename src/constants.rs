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

// String buffer terminator
pub(crate) const NUL: u8 = b'\0';

// Layout characters
pub(crate) const NEWLINE: u8 = b'\n';
pub(crate) const SPACE: u8 = b' ';
pub(crate) const SLASH: u8 = b'/';

// Punctuation
pub(crate) const OBJECT_BEGIN: u8 = b'{';
pub(crate) const OBJECT_END: u8 = b'}';
pub(crate) const ARRAY_BEGIN: u8 = b'[';
pub(crate) const ARRAY_END: u8 = b']';
pub(crate) const COLON: u8 = b':';
pub(crate) const COMMA: u8 = b',';

// Quotes
pub(crate) const DOUBLE_QUOTE: u8 = b'"';
pub(crate) const SINGLE_QUOTE: u8 = b'\'';

// Literals
pub(crate) const LITERAL_TRUE: &[u8] = b"true";
pub(crate) const LITERAL_FALSE: &[u8] = b"false";
pub(crate) const LITERAL_NULL: &[u8] = b"null";

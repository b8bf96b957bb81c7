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

//! `json5doc` parses JSON5-flavoured text into a compact, read-only tree owned by a [`Document`].
//!
//! ## Accepted syntax
//!
//! - Objects and arrays, with trailing commas: `{a: 1,}`, `[1, 2,]`.
//! - Keys written bare (`name`) or quoted (`"name"`, `'name'`). Keys must start with a letter or `_`
//!   and continue with letters, digits or `_`.
//! - Strings in single or double quotes. Bytes between the quotes are copied verbatim; there is no
//!   escape processing, so `'a\nb'` holds a backslash followed by `n`.
//! - Numbers with an optional leading sign, fraction and exponent (`+1`, `.5`, `-2e10`). Every
//!   number is stored as `f64`.
//! - The literals `true`, `false` and `null`.
//! - Line comments starting with `//`.
//!
//! The root must be an object or an array. Anything after the root's closing bracket is ignored.
//!
//! ## Memory layout
//!
//! A document owns one byte buffer holding every string as a NUL-terminated run, plus a pool of
//! object blocks and a pool of array blocks, one per `{` or `[` in the input. Parsed nodes are small
//! tagged values: scalars are stored inline, strings are offsets into the byte buffer and containers
//! are indices into the pools. [`Value`], [`Object`] and [`Array`] borrow the document they came
//! from, so they can be read concurrently but cannot outlive the document or survive a re-parse.
//!
//! Object keys are stored as the hash of the key text plus its offset. Lookups compare the hash
//! first and then the key bytes. When a key repeats, the first occurrence wins.
//!
//! ## Example
//!
//! ```
//! use json5doc::{Document, ErrorKind};
//!
//! let mut doc = Document::new();
//! doc.parse(
//!     r#"{
//!         // service settings
//!         name: 'api',
//!         "port": 8080,
//!         hosts: ["a", "b",],
//!     }"#,
//! )
//! .unwrap();
//!
//! let root = doc.root().as_object();
//! assert_eq!(root.find("port").map(|v| v.get_int(0)), Some(8080));
//! assert_eq!(root.find("hosts").unwrap().as_array().len(), 2);
//!
//! let err = doc.parse("42").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidRoot);
//! ```

#![allow(clippy::uninlined_format_args)]

mod constants;
mod cursor;
mod document;
mod error;
#[cfg(feature = "serde_json")]
mod from;
mod options;
mod parser;
mod util;
mod value;
mod view;

pub use document::Document;
pub use error::Error;
pub use error::ErrorKind;
pub use error::ReadError;
pub use error::Result;
pub use options::NumberSyntax;
pub use options::ParseOptions;
pub use options::DEFAULT_MAX_DEPTH;
pub use value::Value;
pub use value::ValueKind;
pub use view::Array;
pub use view::ArrayIter;
pub use view::Object;
pub use view::ObjectIter;

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

use std::ffi::CStr;
use std::fmt::Debug;
use std::fmt::Formatter;

use crate::document::Document;
use crate::view::Array;
use crate::view::Object;

/// Index of an array block in the document's array pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ArrayId(usize);

/// Index of an object block in the document's object pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ObjectId(usize);

impl ArrayId {
    pub(crate) fn new(index: usize) -> Self {
        ArrayId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl ObjectId {
    pub(crate) fn new(index: usize) -> Self {
        ObjectId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A parsed node as stored in the arena.
///
/// Scalars are held inline. Strings and containers are handles that only
/// resolve against the document that produced them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) enum Node {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    /// Offset of a NUL-terminated run in the string buffer.
    String(usize),
    Array(ArrayId),
    Object(ObjectId),
}

/// An object key: the hash of the key text and its offset in the string buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HashedKey {
    pub(crate) hash: u64,
    pub(crate) offset: usize,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Property {
    pub(crate) key: HashedKey,
    pub(crate) value: Node,
}

/// The discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

/// A read-only node of a parsed [`Document`].
///
/// A `Value` borrows its document, so it can neither outlive it nor survive
/// a re-parse. All getters are total: on a type mismatch they return the
/// caller-supplied default.
#[derive(Clone, Copy)]
pub struct Value<'a> {
    pub(crate) doc: &'a Document,
    pub(crate) node: Node,
}

impl<'a> Value<'a> {
    pub(crate) fn new(doc: &'a Document, node: Node) -> Value<'a> {
        Self { doc, node }
    }

    pub fn kind(&self) -> ValueKind {
        match self.node {
            Node::Null => ValueKind::Null,
            Node::Boolean(_) => ValueKind::Boolean,
            Node::Number(_) => ValueKind::Number,
            Node::String(_) => ValueKind::String,
            Node::Array(_) => ValueKind::Array,
            Node::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.node, Node::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self.node, Node::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self.node, Node::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.node, Node::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.node, Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.node, Node::Object(_))
    }

    pub fn get_bool(&self, default: bool) -> bool {
        match self.node {
            Node::Boolean(v) => v,
            _ => default,
        }
    }

    /// Truncates the stored `f64` with an `as` cast, saturating at the
    /// bounds of `i32` and mapping NaN to 0.
    pub fn get_int(&self, default: i32) -> i32 {
        match self.node {
            Node::Number(v) => v as i32,
            _ => default,
        }
    }

    pub fn get_float(&self, default: f32) -> f32 {
        match self.node {
            Node::Number(v) => v as f32,
            _ => default,
        }
    }

    pub fn get_double(&self, default: f64) -> f64 {
        match self.node {
            Node::Number(v) => v,
            _ => default,
        }
    }

    /// The string as stored in the document, NUL terminator included.
    pub fn get_c_str(&self, default: &'a CStr) -> &'a CStr {
        match self.node {
            Node::String(offset) => self.doc.c_str_at(offset).unwrap_or(default),
            _ => default,
        }
    }

    /// The string bytes, unvalidated.
    ///
    /// Strings are stored NUL-terminated, so a string containing a NUL byte
    /// ends at its first NUL: `['a\0b']` yields `b"a"`.
    pub fn get_bytes(&self, default: &'a [u8]) -> &'a [u8] {
        match self.node {
            Node::String(offset) => self.doc.bytes_at(offset),
            _ => default,
        }
    }

    /// The string as UTF-8. Returns `default` for non-strings and for
    /// strings whose bytes are not valid UTF-8.
    pub fn get_str(&self, default: &'a str) -> &'a str {
        match self.node {
            Node::String(offset) => std::str::from_utf8(self.doc.bytes_at(offset)).unwrap_or(default),
            _ => default,
        }
    }

    /// Object view of this value, empty unless the value is an object.
    pub fn as_object(&self) -> Object<'a> {
        Object::new(*self)
    }

    /// Array view of this value, empty unless the value is an array.
    pub fn as_array(&self) -> Array<'a> {
        Array::new(*self)
    }
}

impl Debug for Value<'_> {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        match self.node {
            Node::Null => formatter.debug_tuple("Null").finish(),
            Node::Boolean(v) => formatter.debug_tuple("Boolean").field(&v).finish(),
            Node::Number(v) => formatter.debug_tuple("Number").field(&v).finish(),
            Node::String(_) => formatter
                .debug_tuple("String")
                .field(&String::from_utf8_lossy(self.get_bytes(b"")))
                .finish(),
            Node::Array(_) => {
                formatter.write_str("Array(")?;
                formatter.debug_list().entries(self.as_array()).finish()?;
                formatter.write_str(")")
            }
            Node::Object(_) => {
                formatter.write_str("Object(")?;
                formatter.debug_map().entries(self.as_object()).finish()?;
                formatter.write_str(")")
            }
        }
    }
}

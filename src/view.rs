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

use std::fmt::Debug;
use std::fmt::Formatter;
use std::iter::FusedIterator;

use hashbrown::hash_table;

use crate::document::Document;
use crate::document::ObjectTable;
use crate::value::Node;
use crate::value::Property;
use crate::value::Value;

/// Keyed view over an object value.
///
/// Built from a non-object value it is simply empty. Iteration order is
/// unspecified and does not follow the source text.
#[derive(Clone, Copy)]
pub struct Object<'a> {
    doc: &'a Document,
    table: Option<&'a ObjectTable>,
}

impl<'a> Object<'a> {
    pub fn new(value: Value<'a>) -> Object<'a> {
        let table = match value.node {
            Node::Object(id) => value.doc.object(id),
            _ => None,
        };
        Self {
            doc: value.doc,
            table,
        }
    }

    pub fn len(&self) -> usize {
        self.table.map_or(0, |t| t.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, key: &str) -> Option<Value<'a>> {
        let table = self.table?;
        let key = key.as_bytes();
        let hash = self.doc.hash_key(key);
        table
            .find(hash, |p| {
                p.key.hash == hash && self.doc.bytes_at(p.key.offset) == key
            })
            .map(|p| Value::new(self.doc, p.value))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> ObjectIter<'a> {
        ObjectIter {
            doc: self.doc,
            inner: self.table.map(|t| t.iter()),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = Value<'a>> + 'a {
        self.iter().map(|(_, v)| v)
    }
}

impl<'a> From<Value<'a>> for Object<'a> {
    fn from(value: Value<'a>) -> Self {
        Object::new(value)
    }
}

impl<'a> IntoIterator for Object<'a> {
    type Item = (&'a str, Value<'a>);
    type IntoIter = ObjectIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Object<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct ObjectIter<'a> {
    doc: &'a Document,
    inner: Option<hash_table::Iter<'a, Property>>,
}

impl<'a> Iterator for ObjectIter<'a> {
    type Item = (&'a str, Value<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let property = self.inner.as_mut()?.next()?;
        // Keys are restricted to ASCII identifier bytes by the parser.
        let key = std::str::from_utf8(self.doc.bytes_at(property.key.offset)).unwrap_or_default();
        Some((key, Value::new(self.doc, property.value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for ObjectIter<'_> {}

impl FusedIterator for ObjectIter<'_> {}

/// Ordered view over an array value.
///
/// Built from a non-array value it is simply empty.
#[derive(Clone, Copy)]
pub struct Array<'a> {
    doc: &'a Document,
    items: &'a [Node],
}

impl<'a> Array<'a> {
    pub fn new(value: Value<'a>) -> Array<'a> {
        let items: &'a [Node] = match value.node {
            Node::Array(id) => value.doc.array(id),
            _ => &[],
        };
        Self {
            doc: value.doc,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value<'a>> {
        self.items.get(index).map(|n| Value::new(self.doc, *n))
    }

    pub fn first(&self) -> Option<Value<'a>> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Value<'a>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> ArrayIter<'a> {
        ArrayIter {
            doc: self.doc,
            inner: self.items.iter(),
        }
    }
}

impl<'a> From<Value<'a>> for Array<'a> {
    fn from(value: Value<'a>) -> Self {
        Array::new(value)
    }
}

impl<'a> IntoIterator for Array<'a> {
    type Item = Value<'a>;
    type IntoIter = ArrayIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Array<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct ArrayIter<'a> {
    doc: &'a Document,
    inner: std::slice::Iter<'a, Node>,
}

impl<'a> Iterator for ArrayIter<'a> {
    type Item = Value<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|n| Value::new(self.doc, *n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ArrayIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|n| Value::new(self.doc, *n))
    }
}

impl ExactSizeIterator for ArrayIter<'_> {}

impl FusedIterator for ArrayIter<'_> {}

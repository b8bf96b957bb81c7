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
use std::io::Read;
use std::str::FromStr;

use ahash::RandomState;
use hashbrown::HashTable;
use tracing::debug;

use super::constants::NUL;
use super::error::ReadError;
use super::error::Result;
use super::options::ParseOptions;
use super::parser::Parser;
use super::util::c_bytes;
use super::value::ArrayId;
use super::value::Node;
use super::value::ObjectId;
use super::value::Property;
use super::value::Value;

pub(crate) type ObjectTable = HashTable<Property>;

/// Owning context of one parse.
///
/// The document holds every string byte and container block produced by
/// [`Document::parse`] together with the root node. Values handed out by
/// [`Document::root`] borrow the document; parsing again requires exclusive
/// access and discards all previous storage.
///
/// ```
/// use json5doc::Document;
///
/// let mut doc = Document::new();
/// doc.parse("{ name: 'json5doc', tags: ['fast', 'small',], }").unwrap();
///
/// let root = doc.root().as_object();
/// assert_eq!(root.find("name").unwrap().get_str(""), "json5doc");
/// assert_eq!(root.find("tags").unwrap().as_array().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    options: ParseOptions,
    hasher: RandomState,
    // Offset 0 always holds a NUL so that offset 0 reads as the empty string.
    pub(crate) strings: Vec<u8>,
    pub(crate) objects: Vec<ObjectTable>,
    pub(crate) arrays: Vec<Vec<Node>>,
    root: Node,
}

impl Default for Document {
    fn default() -> Self {
        Self::with_options(ParseOptions::default())
    }
}

impl Document {
    pub fn new() -> Document {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Document {
        Self {
            options,
            hasher: RandomState::new(),
            strings: vec![NUL],
            objects: Vec::new(),
            arrays: Vec::new(),
            root: Node::Null,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses `src`, replacing everything the document held before.
    ///
    /// The root must be an object or an array; bytes after the closing
    /// bracket of the root are ignored. On failure the root is left `null`.
    pub fn parse(&mut self, src: impl AsRef<[u8]>) -> Result<()> {
        let src = src.as_ref();
        debug!(len = src.len(), "parsing document");
        self.reset();

        let result = Parser::new(self, src).parse();
        match result {
            Ok(root) => {
                self.root = root;
                debug!(
                    strings = self.strings.len(),
                    objects = self.objects.len(),
                    arrays = self.arrays.len(),
                    "parsed document"
                );
                Ok(())
            }
            Err(err) => {
                debug!(
                    kind = ?err.kind(),
                    line = err.line(),
                    column = err.column(),
                    "failed to parse document"
                );
                Err(err)
            }
        }
    }

    /// Reads `reader` to the end and parses the collected bytes.
    pub fn parse_reader<R: Read>(&mut self, mut reader: R) -> std::result::Result<(), ReadError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.parse(buf)?;
        Ok(())
    }

    pub fn root(&self) -> Value<'_> {
        Value::new(self, self.root)
    }

    fn reset(&mut self) {
        self.root = Node::Null;
        self.strings.clear();
        self.strings.push(NUL);
        self.objects.clear();
        self.arrays.clear();
    }

    pub(crate) fn hash_key(&self, key: &[u8]) -> u64 {
        self.hasher.hash_one(key)
    }

    pub(crate) fn alloc_object(&mut self) -> ObjectId {
        let id = ObjectId::new(self.objects.len());
        self.objects.push(ObjectTable::new());
        id
    }

    pub(crate) fn alloc_array(&mut self) -> ArrayId {
        let id = ArrayId::new(self.arrays.len());
        self.arrays.push(Vec::new());
        id
    }

    pub(crate) fn object(&self, id: ObjectId) -> Option<&ObjectTable> {
        self.objects.get(id.index())
    }

    pub(crate) fn array(&self, id: ArrayId) -> &[Node] {
        self.arrays.get(id.index()).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn bytes_at(&self, offset: usize) -> &[u8] {
        c_bytes(&self.strings, offset)
    }

    pub(crate) fn c_str_at(&self, offset: usize) -> Option<&CStr> {
        let tail = self.strings.get(offset..)?;
        CStr::from_bytes_until_nul(tail).ok()
    }
}

impl FromStr for Document {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut doc = Document::new();
        doc.parse(s)?;
        Ok(doc)
    }
}

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

use hashbrown::hash_table::Entry;
use tracing::trace;

use super::constants::*;
use super::cursor::Cursor;
use super::document::Document;
use super::document::ObjectTable;
use super::error::Error;
use super::error::ErrorKind;
use super::error::Result;
use super::options::NumberSyntax;
use super::util::c_bytes;
use super::util::is_exponent;
use super::util::is_identifier_char;
use super::util::is_identifier_start;
use super::util::is_number_start;
use super::util::is_quote;
use super::value::HashedKey;
use super::value::Node;
use super::value::Property;

/// Classification of the next significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Identifier,
    String,
    Number,
    Colon,
    Comma,
    ObjectBegin,
    ObjectEnd,
    ArrayBegin,
    ArrayEnd,
}

// Recursive-descent parser over JSON5-flavoured text.
// There is no separate lexing pass: `peek_next_token` only classifies the
// next byte and each `parse_*` routine consumes its own lexeme, writing
// strings and containers straight into the document arena.
pub(crate) struct Parser<'a, 'd> {
    doc: &'d mut Document,
    cursor: Cursor<'a>,
    number_syntax: NumberSyntax,
    max_depth: Option<usize>,
    depth: usize,
}

impl<'a, 'd> Parser<'a, 'd> {
    pub(crate) fn new(doc: &'d mut Document, buf: &'a [u8]) -> Parser<'a, 'd> {
        let options = *doc.options();
        Self {
            doc,
            cursor: Cursor::new(buf),
            number_syntax: options.get_number_syntax(),
            max_depth: options.get_max_depth(),
            depth: 0,
        }
    }

    pub(crate) fn parse(&mut self) -> Result<Node> {
        match self.peek_next_token()? {
            Token::ArrayBegin => self.parse_array(),
            Token::ObjectBegin => self.parse_object(),
            _ => Err(self.error(ErrorKind::InvalidRoot)),
        }
    }

    #[inline]
    fn error(&self, kind: ErrorKind) -> Error {
        self.cursor.error(kind)
    }

    fn peek_next_token(&mut self) -> Result<Token> {
        let mut in_comment = false;
        while let Some(c) = self.cursor.peek() {
            if c == NEWLINE {
                in_comment = false;
            } else if in_comment || c <= SPACE {
                // skip
            } else if c == SLASH {
                self.cursor.next();
                if self.cursor.peek() != Some(SLASH) {
                    return Err(self.error(ErrorKind::SyntaxError));
                }
                in_comment = true;
            } else {
                return match c {
                    OBJECT_BEGIN => Ok(Token::ObjectBegin),
                    OBJECT_END => Ok(Token::ObjectEnd),
                    ARRAY_BEGIN => Ok(Token::ArrayBegin),
                    ARRAY_END => Ok(Token::ArrayEnd),
                    COLON => Ok(Token::Colon),
                    COMMA => Ok(Token::Comma),
                    c if is_identifier_start(c) => Ok(Token::Identifier),
                    c if is_number_start(c) => Ok(Token::Number),
                    c if is_quote(c) => Ok(Token::String),
                    _ => Err(self.error(ErrorKind::SyntaxError)),
                };
            }
            self.cursor.next();
        }
        Err(self.error(ErrorKind::UnexpectedEnd))
    }

    fn parse_value(&mut self) -> Result<Node> {
        match self.peek_next_token()? {
            Token::Number => self.parse_number(),
            Token::String => Ok(Node::String(self.parse_string()?)),
            Token::Identifier => self.parse_literal(),
            Token::ObjectBegin => self.parse_object(),
            Token::ArrayBegin => self.parse_array(),
            _ => Err(self.error(ErrorKind::SyntaxError)),
        }
    }

    fn enter_container(&mut self) -> Result<()> {
        self.depth += 1;
        match self.max_depth {
            Some(max) if self.depth > max => Err(self.error(ErrorKind::SyntaxError)),
            _ => Ok(()),
        }
    }

    fn parse_object(&mut self) -> Result<Node> {
        self.enter_container()?;
        // The block is reserved before the members are parsed so blocks are
        // numbered in the order their `{` appears.
        let id = self.doc.alloc_object();
        let mut table = ObjectTable::new();
        self.parse_properties(&mut table)?;
        self.doc.objects[id.index()] = table;
        self.depth -= 1;
        Ok(Node::Object(id))
    }

    fn parse_array(&mut self) -> Result<Node> {
        self.enter_container()?;
        let id = self.doc.alloc_array();
        let mut values = Vec::new();
        self.parse_values(&mut values)?;
        self.doc.arrays[id.index()] = values;
        self.depth -= 1;
        Ok(Node::Array(id))
    }

    fn parse_properties(&mut self, table: &mut ObjectTable) -> Result<()> {
        self.cursor.next(); // consume '{'

        let mut expect_comma = false;
        while !self.cursor.eof() {
            let key = match self.peek_next_token()? {
                Token::Identifier | Token::String => {
                    if expect_comma {
                        return Err(self.error(ErrorKind::CommaExpected));
                    }
                    self.parse_identifier()?
                }
                Token::ObjectEnd => {
                    self.cursor.next(); // consume '}'
                    return Ok(());
                }
                Token::Comma => {
                    if !expect_comma {
                        return Err(self.error(ErrorKind::SyntaxError));
                    }
                    self.cursor.next(); // consume ','
                    expect_comma = false;
                    continue;
                }
                _ if expect_comma => return Err(self.error(ErrorKind::CommaExpected)),
                _ => return Err(self.error(ErrorKind::SyntaxError)),
            };

            if self.peek_next_token()? != Token::Colon {
                return Err(self.error(ErrorKind::SyntaxError));
            }
            self.cursor.next(); // consume ':'

            let value = self.parse_value()?;
            self.insert_property(table, key, value);
            expect_comma = true;
        }
        Err(self.error(ErrorKind::UnexpectedEnd))
    }

    // Inserts if absent, so the first occurrence of a key wins.
    fn insert_property(&self, table: &mut ObjectTable, offset: usize, value: Node) {
        let strings = &self.doc.strings;
        let key = c_bytes(strings, offset);
        let hash = self.doc.hash_key(key);
        let entry = table.entry(
            hash,
            |p| p.key.hash == hash && c_bytes(strings, p.key.offset) == key,
            |p| p.key.hash,
        );
        match entry {
            Entry::Occupied(_) => {
                trace!(key = %String::from_utf8_lossy(key), "duplicate key ignored");
            }
            Entry::Vacant(entry) => {
                entry.insert(Property {
                    key: HashedKey { hash, offset },
                    value,
                });
            }
        }
    }

    fn parse_values(&mut self, values: &mut Vec<Node>) -> Result<()> {
        self.cursor.next(); // consume '['

        let mut expect_comma = false;
        while !self.cursor.eof() {
            let token = self.peek_next_token()?;
            if token == Token::ArrayEnd {
                self.cursor.next(); // consume ']'
                return Ok(());
            }
            if expect_comma {
                if token != Token::Comma {
                    return Err(self.error(ErrorKind::CommaExpected));
                }
                self.cursor.next(); // consume ','
                expect_comma = false;
                continue;
            }

            values.push(self.parse_value()?);
            expect_comma = true;
        }
        Err(self.error(ErrorKind::UnexpectedEnd))
    }

    /// Scans a number token and converts it with a strict float parse.
    ///
    /// The first byte (sign, digit or `.`) is always taken. What follows
    /// depends on [`NumberSyntax`]: only digits, or the full JSON5 decimal
    /// form with fraction and exponent.
    fn parse_number(&mut self) -> Result<Node> {
        let start = self.cursor.position();
        let mut prev = self.cursor.next().unwrap_or(NUL);

        while let Some(c) = self.cursor.peek() {
            let accept = match self.number_syntax {
                NumberSyntax::DigitsOnly => c.is_ascii_digit(),
                NumberSyntax::Json5 => {
                    c.is_ascii_digit()
                        || c == b'.'
                        || is_exponent(c)
                        || (matches!(c, b'+' | b'-') && is_exponent(prev))
                }
            };
            if !accept {
                break;
            }
            self.cursor.next();
            prev = c;
        }

        let text = self.cursor.consumed_since(start);
        match fast_float2::parse::<f64, _>(text) {
            Ok(v) => Ok(Node::Number(v)),
            Err(_) => Err(self.error(ErrorKind::SyntaxError)),
        }
    }

    /// Copies a quoted string into the arena and returns its offset.
    ///
    /// Bytes are taken verbatim up to the matching quote; backslashes carry
    /// no meaning, so a string cannot contain its own quote character.
    fn parse_string(&mut self) -> Result<usize> {
        let quote = self.cursor.next().unwrap_or(DOUBLE_QUOTE);
        let offset = self.doc.strings.len();
        loop {
            match self.cursor.next() {
                Some(c) if c == quote => break,
                Some(c) => self.doc.strings.push(c),
                None => return Err(self.error(ErrorKind::UnexpectedEnd)),
            }
        }
        self.doc.strings.push(NUL);
        Ok(offset)
    }

    /// Reads an object key, bare (`name`) or quoted (`"name"`, `'name'`).
    ///
    /// Both forms must start with a letter or `_` and continue with
    /// letters, digits or `_`. A quoted key must close with the quote that
    /// opened it.
    fn parse_identifier(&mut self) -> Result<usize> {
        let offset = self.doc.strings.len();

        let quote = self.cursor.peek().filter(|c| is_quote(*c));
        if quote.is_some() {
            self.cursor.next(); // consume quote
            match self.cursor.peek() {
                Some(c) if is_identifier_start(c) => {}
                _ => return Err(self.error(ErrorKind::SyntaxError)),
            }
        }

        while let Some(c) = self.cursor.next() {
            self.doc.strings.push(c);
            match self.cursor.peek() {
                Some(c) if is_identifier_char(c) => {}
                _ => break,
            }
        }

        if let Some(quote) = quote {
            if self.cursor.next() != Some(quote) {
                return Err(self.error(ErrorKind::SyntaxError));
            }
        }

        self.doc.strings.push(NUL);
        Ok(offset)
    }

    fn parse_literal(&mut self) -> Result<Node> {
        let (data, node) = match self.cursor.peek() {
            Some(b't') => (LITERAL_TRUE, Node::Boolean(true)),
            Some(b'f') => (LITERAL_FALSE, Node::Boolean(false)),
            Some(b'n') => (LITERAL_NULL, Node::Null),
            _ => return Err(self.error(ErrorKind::InvalidLiteral)),
        };
        for &v in data {
            if self.cursor.next() != Some(v) {
                return Err(self.error(ErrorKind::InvalidLiteral));
            }
        }
        Ok(node)
    }
}

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

use core::fmt::Display;
use core::fmt::Formatter;
use std::io;

/// The category of a parse failure.
///
/// The discriminants are stable and can be compared as plain integers.
/// `BooleanExpected` through `ArrayExpected` are reserved and never produced
/// by the parser.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    None = 0,
    InvalidRoot,
    UnexpectedEnd,
    SyntaxError,
    InvalidLiteral,
    CommaExpected,
    BooleanExpected,
    NumberExpected,
    StringExpected,
    ObjectExpected,
    ArrayExpected,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            ErrorKind::None => f.write_str("no error"),
            ErrorKind::InvalidRoot => f.write_str("root must be an object or an array"),
            ErrorKind::UnexpectedEnd => f.write_str("unexpected end of input"),
            ErrorKind::SyntaxError => f.write_str("syntax error"),
            ErrorKind::InvalidLiteral => f.write_str("invalid literal"),
            ErrorKind::CommaExpected => f.write_str("expected `,`"),
            ErrorKind::BooleanExpected => f.write_str("expected boolean"),
            ErrorKind::NumberExpected => f.write_str("expected number"),
            ErrorKind::StringExpected => f.write_str("expected string"),
            ErrorKind::ObjectExpected => f.write_str("expected object"),
            ErrorKind::ArrayExpected => f.write_str("expected array"),
        }
    }
}

impl From<ErrorKind> for i32 {
    fn from(kind: ErrorKind) -> Self {
        kind as i32
    }
}

/// A parse failure with the 1-based position of the byte about to be read
/// when it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
    line: usize,
    column: usize,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, line {}, column {}", self.kind, self.line, self.column)
    }
}

impl std::error::Error for Error {}

impl From<Error> for i32 {
    fn from(err: Error) -> Self {
        err.kind.into()
    }
}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

/// Failure of [`Document::parse_reader`](crate::Document::parse_reader).
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    Parse(Error),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "failed to read input: {}", err),
            ReadError::Parse(err) => Display::fmt(err, f),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl From<Error> for ReadError {
    fn from(err: Error) -> Self {
        ReadError::Parse(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

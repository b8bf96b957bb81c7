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

/// How far a number token extends after its first byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberSyntax {
    /// Digits, `.`, `e`/`E` and a sign directly after the exponent letter.
    /// Accepts `1.5`, `.5`, `5.`, `-2e10` and `+1E-3`.
    #[default]
    Json5,
    /// Digits only. The token ends at the first `.` or exponent letter,
    /// so `[1.5]` fails with a missing comma at the `.`.
    DigitsOnly,
}

/// Container nesting allowed by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options applied by every [`Document::parse`](crate::Document::parse) call.
///
/// Nesting is limited to [`DEFAULT_MAX_DEPTH`] unless changed with
/// [`ParseOptions::max_depth`] or lifted with [`ParseOptions::unlimited_depth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub(crate) number_syntax: NumberSyntax,
    pub(crate) max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            number_syntax: NumberSyntax::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_syntax(mut self, syntax: NumberSyntax) -> Self {
        self.number_syntax = syntax;
        self
    }

    /// Limits container nesting. The root container is depth 1; opening a
    /// container deeper than `depth` is a syntax error.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Removes the nesting limit. Parsing recurses once per level, so
    /// deeply nested input can then exhaust the thread's stack.
    pub fn unlimited_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn get_number_syntax(&self) -> NumberSyntax {
        self.number_syntax
    }

    pub fn get_max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

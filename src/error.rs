// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The single error type the parser can produce.
//!
//! Parsing stops at the first point no grammar alternative matches; there is
//! no recovery and no partial AST (see the crate-level docs).

/// A CQL3 syntax error: where it happened, what the grammar expected there,
/// and what was actually found.
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[error("parse error at byte {offset}: expected {expected}, found {found}")]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseError {
    /// Byte offset into the original input where the error was detected.
    pub offset: usize,
    /// What the grammar expected at `offset`.
    pub expected: String,
    /// What was actually found at `offset` (a token's text, or `"<eof>"`).
    pub found: String,
}

impl ParseError {
    pub fn new(offset: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        ParseError {
            offset,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Recomputes the 1-based `(line, column)` of `self.offset` against the
    /// original input. Not stored on the error itself since the parser only
    /// borrows the input transiently.
    pub fn line_col(&self, input: &str) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;
        for (i, c) in input.char_indices() {
            if i >= self.offset {
                break;
            }
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

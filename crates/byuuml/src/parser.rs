// Dweve byuuML - Indentation-Structured Markup Parser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Document construction.
//!
//! Drives the pipeline: the [`LineScanner`] yields logical lines, the
//! indentation stack machine assembles them into a forest, and the forest
//! is frozen into a [`Document`].
//!
//! # Basic Usage
//!
//! ```rust
//! use byuuml::Document;
//!
//! let input = b"\
//! // build settings
//! target name=app kind=bin
//!   flags:-O2
//!     :-Wall
//!   source=main.c
//! ";
//!
//! let doc = Document::from_bytes(input).unwrap();
//! let target = doc.get("target").unwrap();
//!
//! assert_eq!(target.child("kind").unwrap().data(), b"bin");
//! assert_eq!(target.child("flags").unwrap().data(), b"-O2\n-Wall");
//! assert_eq!(target.children().count(), 4);
//! ```

use crate::config::ParserConfig;
use crate::document::{freeze, Document};
use crate::error::{ParseError, ParseResult};
use crate::node::NodeBuilder;
use crate::scanner::LineScanner;
use crate::stack::IndentStack;
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;
use tracing::debug;

/// Run the scanner and stack machine over `source`. Returns the forest and
/// the number of logical lines read.
fn build_forest<R: BufRead>(
    source: R,
    config: &ParserConfig,
) -> ParseResult<(Vec<NodeBuilder>, usize)> {
    let mut scanner = LineScanner::with_config(source, config);
    let mut stack = IndentStack::new(config);
    let mut lines = 0usize;

    while let Some((line_number, line)) = scanner.next_line()? {
        lines += 1;
        stack.push_line(line_number, line)?;
    }

    Ok((stack.finish()?, lines))
}

impl Document {
    /// Parse a document from a buffered byte source with default limits.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`]; construction stops at the first one.
    pub fn parse<R: BufRead>(source: R) -> ParseResult<Self> {
        Self::parse_with_config(source, &ParserConfig::default())
    }

    /// Parse a document from a buffered byte source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use byuuml::{Document, ParseError, ParserConfig};
    ///
    /// let config = ParserConfig::default().with_max_depth(2);
    /// let err = Document::parse_with_config(&b"a\n b\n  c"[..], &config).unwrap_err();
    /// assert!(matches!(err, ParseError::TooDeep { line: 3, .. }));
    /// ```
    pub fn parse_with_config<R: BufRead>(source: R, config: &ParserConfig) -> ParseResult<Self> {
        let (roots, lines) = build_forest(source, config)?;
        let doc = freeze(roots);
        debug!(
            lines,
            roots = doc.len(),
            nodes = doc.node_count(),
            "document parsed"
        );
        Ok(doc)
    }

    /// Parse a document held in memory.
    pub fn from_bytes(input: &[u8]) -> ParseResult<Self> {
        Self::parse(input)
    }

    /// Parse a document from an unbuffered reader such as a file or socket.
    pub fn from_reader<R: Read>(reader: R) -> ParseResult<Self> {
        Self::parse(BufReader::new(reader))
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

/// Parse a document held in memory with default limits.
///
/// # Examples
///
/// ```rust
/// let doc = byuuml::parse(b"greeting=\"hello world\"").unwrap();
/// assert_eq!(doc.get("greeting").unwrap().data(), b"hello world");
/// ```
pub fn parse(input: &[u8]) -> ParseResult<Document> {
    Document::from_bytes(input)
}

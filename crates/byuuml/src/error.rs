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

//! Error types for document construction.
//!
//! Every failure is fatal: a malformed document yields no [`Document`](crate::Document).
//! Line-scoped errors carry the 1-based physical line number and, where one
//! exists, the offending line's content with indentation stripped.
//!
//! # Error Categories
//!
//! - **I/O Errors**: the byte source failed
//! - **Syntax Errors**: a single line could not be parsed (`InvalidNodeName`,
//!   `UnterminatedQuote`, `BlankIndentedLine`)
//! - **Structure Errors**: the indentation does not describe a tree
//!   (`NoParent`, `InvalidIndentation`, `EmptyDocument`)
//! - **Limit Errors**: a configured bound was exceeded (`TooDeep`, `LineTooLong`)
//!
//! # Examples
//!
//! ```rust
//! use byuuml::{Document, ParseError};
//!
//! let err = "root\n  child\n one".parse::<Document>().unwrap_err();
//! assert!(matches!(err, ParseError::InvalidIndentation { line: 3, .. }));
//! assert_eq!(err.line(), Some(3));
//! ```

use thiserror::Error;

/// Errors that can occur while building a document.
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error from the byte source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The line does not start with a valid name character.
    #[error("Invalid node name at line {line}: {content}")]
    InvalidNodeName { line: usize, content: String },

    /// A `="` data section has no closing quote.
    #[error("Unterminated quoted data at line {line}: {content}")]
    UnterminatedQuote { line: usize, content: String },

    /// A line holding nothing but spaces and tabs. Nothing is left once the
    /// indentation is stripped, so only the line number is kept.
    #[error("Blank indented line at line {line}")]
    BlankIndentedLine { line: usize },

    /// The first node of the document is indented.
    #[error("Indented node has no parent at line {line}: {content}")]
    NoParent { line: usize, content: String },

    /// The indentation matches no open ancestor.
    #[error("Invalid indentation level {indent} at line {line}: {content}")]
    InvalidIndentation {
        line: usize,
        indent: usize,
        content: String,
    },

    /// Nesting exceeds the configured maximum depth.
    #[error("Document too deep at line {line}: depth {depth} exceeds limit {limit}: {content}")]
    TooDeep {
        line: usize,
        depth: usize,
        limit: usize,
        content: String,
    },

    /// A logical line exceeds the configured maximum length.
    #[error("Line {line} too long: {length} bytes exceeds limit {limit}")]
    LineTooLong {
        line: usize,
        length: usize,
        limit: usize,
    },

    /// No nodes at all (empty input, or only blank lines and comments).
    #[error("Empty document")]
    EmptyDocument,
}

impl ParseError {
    /// Create an invalid node name error.
    #[inline]
    pub fn invalid_node_name(line: usize, content: &[u8]) -> Self {
        Self::InvalidNodeName {
            line,
            content: lossy(content),
        }
    }

    /// Create an unterminated quote error.
    #[inline]
    pub fn unterminated_quote(line: usize, content: &[u8]) -> Self {
        Self::UnterminatedQuote {
            line,
            content: lossy(content),
        }
    }

    /// Create a missing parent error.
    #[inline]
    pub fn no_parent(line: usize, content: &[u8]) -> Self {
        Self::NoParent {
            line,
            content: lossy(content),
        }
    }

    /// Create an invalid indentation error.
    #[inline]
    pub fn invalid_indentation(line: usize, indent: usize, content: &[u8]) -> Self {
        Self::InvalidIndentation {
            line,
            indent,
            content: lossy(content),
        }
    }

    /// Create a nesting depth error.
    #[inline]
    pub fn too_deep(line: usize, depth: usize, limit: usize, content: &[u8]) -> Self {
        Self::TooDeep {
            line,
            depth,
            limit,
            content: lossy(content),
        }
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidNodeName { line, .. }
            | Self::UnterminatedQuote { line, .. }
            | Self::BlankIndentedLine { line }
            | Self::NoParent { line, .. }
            | Self::InvalidIndentation { line, .. }
            | Self::TooDeep { line, .. }
            | Self::LineTooLong { line, .. } => Some(*line),
            Self::Io(_) | Self::EmptyDocument => None,
        }
    }

    /// Get the offending line's content if available.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::InvalidNodeName { content, .. }
            | Self::UnterminatedQuote { content, .. }
            | Self::NoParent { content, .. }
            | Self::InvalidIndentation { content, .. }
            | Self::TooDeep { content, .. } => Some(content),
            _ => None,
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Result type for document construction.
pub type ParseResult<T> = Result<T, ParseError>;

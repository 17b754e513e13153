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

//! Indentation stack machine.
//!
//! Turns a flat sequence of indented lines into a nested forest. The stack
//! holds the chain of currently open ancestors; each new line either opens a
//! child of the top entry, appends a data continuation to it, or closes
//! entries until one at the same indentation is found and replaces it with
//! a sibling.

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};
use crate::header::{measure_indentation, parse_header, HeaderError};
use crate::node::NodeBuilder;
use std::cmp::Ordering;
use tracing::trace;

#[derive(Debug)]
struct OpenNode {
    level: usize,
    node: NodeBuilder,
}

/// Stack of open nodes plus the list of finished top-level nodes.
#[derive(Debug)]
pub(crate) struct IndentStack {
    open: Vec<OpenNode>,
    roots: Vec<NodeBuilder>,
    max_depth: usize,
}

impl IndentStack {
    pub(crate) fn new(config: &ParserConfig) -> Self {
        Self {
            // Most documents are shallow.
            open: Vec::with_capacity(5),
            roots: Vec::new(),
            max_depth: config.max_depth,
        }
    }

    /// Feed one logical line, indentation included.
    pub(crate) fn push_line(&mut self, line: usize, raw: &[u8]) -> ParseResult<()> {
        let level = measure_indentation(raw);
        let content = &raw[level..];
        if content.is_empty() {
            return Err(ParseError::BlankIndentedLine { line });
        }

        let Some(top) = self.open.last_mut() else {
            if level != 0 {
                return Err(ParseError::no_parent(line, content));
            }
            trace!(line, "first node");
            let node = parse_node(line, content)?;
            self.open.push(OpenNode { level, node });
            return self.check_depth(line, content);
        };

        match level.cmp(&top.level) {
            Ordering::Greater => {
                if let Some(text) = content.strip_prefix(b":") {
                    trace!(line, level, "data continuation");
                    top.node.append_continuation(text);
                } else {
                    trace!(line, level, "child");
                    let node = parse_node(line, content)?;
                    self.open.push(OpenNode { level, node });
                }
            }
            Ordering::Equal | Ordering::Less => {
                trace!(line, level, depth = self.open.len(), "sibling");
                self.unwind_to(line, level, content)?;
                let node = parse_node(line, content)?;
                self.close_top();
                self.open.push(OpenNode { level, node });
            }
        }
        self.check_depth(line, content)
    }

    /// Close everything still open and hand back the top-level nodes.
    pub(crate) fn finish(mut self) -> ParseResult<Vec<NodeBuilder>> {
        if self.open.is_empty() {
            return Err(ParseError::EmptyDocument);
        }
        while !self.open.is_empty() {
            self.close_top();
        }
        Ok(self.roots)
    }

    /// Close entries deeper than `level`; the new top must sit exactly at
    /// `level`.
    fn unwind_to(&mut self, line: usize, level: usize, content: &[u8]) -> ParseResult<()> {
        while self.open.last().is_some_and(|top| top.level > level) {
            self.close_top();
        }
        match self.open.last() {
            Some(top) if top.level == level => Ok(()),
            _ => Err(ParseError::invalid_indentation(line, level, content)),
        }
    }

    /// Pop the top entry, close it and attach it to its parent or the roots.
    fn close_top(&mut self) {
        let Some(OpenNode { mut node, .. }) = self.open.pop() else {
            return;
        };
        node.close();
        match self.open.last_mut() {
            Some(parent) => parent.node.push_child(node),
            None => self.roots.push(node),
        }
    }

    fn check_depth(&self, line: usize, content: &[u8]) -> ParseResult<()> {
        if self.open.len() > self.max_depth {
            return Err(ParseError::too_deep(
                line,
                self.open.len(),
                self.max_depth,
                content,
            ));
        }
        Ok(())
    }
}

fn parse_node(line: usize, content: &[u8]) -> ParseResult<NodeBuilder> {
    match parse_header(content, false) {
        Ok((node, _)) => Ok(node),
        Err(HeaderError::InvalidNodeName) => Err(ParseError::invalid_node_name(line, content)),
        Err(HeaderError::UnterminatedQuote) => Err(ParseError::unterminated_quote(line, content)),
    }
}

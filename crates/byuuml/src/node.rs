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

//! Mutable node used while a document is being assembled.

use std::mem;

/// A node under construction.
///
/// The parser builds a forest of these and freezes it into a
/// [`Document`](crate::Document) once the input is exhausted. They can also be
/// assembled by hand and handed to [`Document::from_nodes`](crate::Document::from_nodes).
///
/// While the parser holds a node open, data set from the node's own line
/// carries one trailing `\n` so that continuation lines can be appended; the
/// break is removed when the node is closed.
///
/// # Examples
///
/// ```rust
/// use byuuml::NodeBuilder;
///
/// let node = NodeBuilder::new("server")
///     .with_data("primary")
///     .with_child(NodeBuilder::new("port").with_data("8080"));
///
/// assert_eq!(node.name(), "server");
/// assert_eq!(node.data(), b"primary");
/// assert_eq!(node.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeBuilder {
    name: String,
    data: Vec<u8>,
    children: Vec<NodeBuilder>,
}

impl NodeBuilder {
    /// Create a node with no data and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Replace the node's data.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: NodeBuilder) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: NodeBuilder) {
        self.children.push(child);
    }

    /// The node's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The node's children in document order.
    #[inline]
    pub fn children(&self) -> &[NodeBuilder] {
        &self.children
    }

    /// Total number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Set data parsed from a header line. Data on a node that can receive
    /// continuations gets the trailing break reserved for them.
    pub(crate) fn open_data(&mut self, data: &[u8], continuable: bool) {
        self.data.clear();
        self.data.extend_from_slice(data);
        if continuable {
            self.data.push(b'\n');
        }
    }

    /// Append one data continuation line.
    pub(crate) fn append_continuation(&mut self, text: &[u8]) {
        self.data.extend_from_slice(text);
        self.data.push(b'\n');
    }

    /// Strip the trailing break reserved for continuations.
    pub(crate) fn close(&mut self) {
        if !self.data.is_empty() {
            self.data.pop();
        }
    }

    pub(crate) fn into_parts(mut self) -> (String, Vec<u8>, Vec<NodeBuilder>) {
        (
            mem::take(&mut self.name),
            mem::take(&mut self.data),
            mem::take(&mut self.children),
        )
    }
}

impl Drop for NodeBuilder {
    fn drop(&mut self) {
        // Unlink descendants first so deep chains never drop recursively.
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

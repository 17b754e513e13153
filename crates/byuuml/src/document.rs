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

//! Immutable document tree.
//!
//! All nodes of a document live in one arena. The children of any node (and
//! the top-level nodes) occupy a contiguous index range, so traversal is a
//! walk over ranges and dropping a document is a flat deallocation with no
//! recursion, however deep or wide the tree is.

use crate::node::NodeBuilder;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: Box<str>,
    data: Box<[u8]>,
    children: Range<usize>,
}

/// A parsed document: an ordered forest of read-only nodes.
///
/// Build one with [`Document::parse`], [`Document::from_bytes`],
/// `str::parse`, or [`Document::from_nodes`].
///
/// # Examples
///
/// ```rust
/// use byuuml::Document;
///
/// let doc: Document = "server name=\"main host\"\n  port=8080\nclient".parse().unwrap();
///
/// let names: Vec<_> = doc.roots().map(|node| node.name()).collect();
/// assert_eq!(names, ["server", "client"]);
///
/// let server = doc.get("server").unwrap();
/// assert_eq!(server.child("name").unwrap().data(), b"main host");
/// assert_eq!(server.child("port").unwrap().data_str(), Some("8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: Vec<Entry>,
    roots: Range<usize>,
}

impl Document {
    /// Build a document from an already assembled forest.
    ///
    /// Names are taken as given; no validation is performed.
    pub fn from_nodes(roots: Vec<NodeBuilder>) -> Self {
        freeze(roots)
    }

    /// Iterate the top-level nodes in document order.
    #[inline]
    pub fn roots(&self) -> Children<'_> {
        Children {
            doc: self,
            range: self.roots.clone(),
        }
    }

    /// Same as [`roots`](Self::roots).
    #[inline]
    pub fn iter(&self) -> Children<'_> {
        self.roots()
    }

    /// Number of top-level nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True when the document has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes, attributes included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    /// First top-level node with the given name.
    pub fn get(&self, name: &str) -> Option<Node<'_>> {
        self.roots().find(|node| node.name() == name)
    }

    /// Look a node up by its [`index`](Node::index).
    pub fn node(&self, index: usize) -> Option<Node<'_>> {
        (index < self.entries.len()).then_some(Node { doc: self, index })
    }

    /// Every node in depth-first pre-order (document order).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![self.roots.clone()],
        }
    }

    /// Number of levels in the tree; 0 for an empty document.
    pub fn depth(&self) -> usize {
        // Children always sit at higher indices than their parent.
        let mut depths = vec![1usize; self.entries.len()];
        for (index, entry) in self.entries.iter().enumerate() {
            let depth = depths[index] + 1;
            for child in entry.children.clone() {
                depths[child] = depth;
            }
        }
        depths.into_iter().max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = Node<'a>;
    type IntoIter = Children<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots()
    }
}

/// Convert a finished forest into the arena layout.
///
/// Breadth-first: the roots take the first indices, then each node's children
/// are placed as one contiguous block in the order their parents were placed.
pub(crate) fn freeze(roots: Vec<NodeBuilder>) -> Document {
    let capacity = roots.iter().map(NodeBuilder::subtree_len).sum();
    let mut entries: Vec<Entry> = Vec::with_capacity(capacity);
    let mut queue: VecDeque<Vec<NodeBuilder>> = VecDeque::new();

    let root_range = place(roots, &mut entries, &mut queue);
    // The queue holds one child list per placed entry, in entry order.
    let mut parent = 0;
    while let Some(children) = queue.pop_front() {
        let range = place(children, &mut entries, &mut queue);
        entries[parent].children = range;
        parent += 1;
    }

    Document {
        entries,
        roots: root_range,
    }
}

fn place(
    group: Vec<NodeBuilder>,
    entries: &mut Vec<Entry>,
    queue: &mut VecDeque<Vec<NodeBuilder>>,
) -> Range<usize> {
    let start = entries.len();
    for node in group {
        let (name, data, children) = node.into_parts();
        entries.push(Entry {
            name: name.into_boxed_str(),
            data: data.into_boxed_slice(),
            children: 0..0,
        });
        queue.push_back(children);
    }
    start..entries.len()
}

/// A read-only handle to one node of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    index: usize,
}

impl<'a> Node<'a> {
    #[inline]
    fn entry(&self) -> &'a Entry {
        &self.doc.entries[self.index]
    }

    /// The node's name.
    #[inline]
    pub fn name(&self) -> &'a str {
        &self.entry().name
    }

    /// The node's data; empty when none was given.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        &self.entry().data
    }

    /// The node's data as text, if it is valid UTF-8.
    pub fn data_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.data()).ok()
    }

    /// The node's children (inline attributes first, then nested lines).
    #[inline]
    pub fn children(&self) -> Children<'a> {
        Children {
            doc: self.doc,
            range: self.entry().children.clone(),
        }
    }

    /// True when the node has at least one child.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.entry().children.is_empty()
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<Node<'a>> {
        self.children().find(|child| child.name() == name)
    }

    /// All children with the given name, in document order.
    pub fn children_named(self, name: &'a str) -> impl Iterator<Item = Node<'a>> {
        self.children().filter(move |child| child.name() == name)
    }

    /// Position of this node in its document, stable for the document's
    /// lifetime.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name())
            .field("data", &String::from_utf8_lossy(self.data()))
            .field("children", &self.children().len())
            .finish()
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.index == other.index
    }
}

impl Eq for Node<'_> {}

/// Iterator over sibling nodes.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    doc: &'a Document,
    range: Range<usize>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.doc;
        self.range.next().map(|index| Node { doc, index })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let doc = self.doc;
        self.range.next_back().map(|index| Node { doc, index })
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

/// Depth-first pre-order iterator over a whole document.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<Range<usize>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let range = self.stack.last_mut()?;
            match range.next() {
                Some(index) => {
                    let children = self.doc.entries[index].children.clone();
                    if !children.is_empty() {
                        self.stack.push(children);
                    }
                    return Some(Node {
                        doc: self.doc,
                        index,
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Descendants<'_> {}

/// Structural export as `[{ "name", "data", "children": [...] }]`, data as
/// lossy UTF-8.
///
/// Serializers recurse once per level, so nesting is capped at
/// [`MAX_SERIALIZE_DEPTH`](crate::MAX_SERIALIZE_DEPTH) levels; anything
/// deeper fails with a serializer error rather than exhausting the stack.
#[cfg(feature = "serde")]
pub mod serialize {
    use super::{Children, Document, Node};
    use serde::ser::{Error, Serialize, SerializeStruct, Serializer};

    /// Deepest nesting the `Serialize` impls will descend into.
    pub const MAX_SERIALIZE_DEPTH: usize = 128;

    impl Serialize for Document {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Level {
                nodes: self.roots(),
                depth: 1,
            }
            .serialize(serializer)
        }
    }

    impl Serialize for Children<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Level {
                nodes: self.clone(),
                depth: 1,
            }
            .serialize(serializer)
        }
    }

    impl Serialize for Node<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Nested {
                node: *self,
                depth: 1,
            }
            .serialize(serializer)
        }
    }

    /// One sibling list, `depth` levels below the starting point.
    struct Level<'a> {
        nodes: Children<'a>,
        depth: usize,
    }

    impl Serialize for Level<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let depth = self.depth;
            serializer.collect_seq(self.nodes.clone().map(|node| Nested { node, depth }))
        }
    }

    struct Nested<'a> {
        node: Node<'a>,
        depth: usize,
    }

    impl Serialize for Nested<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.depth > MAX_SERIALIZE_DEPTH {
                return Err(S::Error::custom(format_args!(
                    "node nesting exceeds {} levels",
                    MAX_SERIALIZE_DEPTH
                )));
            }
            let mut node = serializer.serialize_struct("Node", 3)?;
            node.serialize_field("name", self.node.name())?;
            node.serialize_field("data", &String::from_utf8_lossy(self.node.data()))?;
            node.serialize_field(
                "children",
                &Level {
                    nodes: self.node.children(),
                    depth: self.depth + 1,
                },
            )?;
            node.end()
        }
    }
}

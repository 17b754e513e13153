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

//! Single-line node grammar.
//!
//! A header line (indentation already stripped) reads:
//!
//! ```text
//! name                      no data
//! name:any text at all      data is the rest of the line
//! name=value                data runs to the next space
//! name="quoted value"       data runs to the next quote, no escapes
//! name attr attr=v a="x y"  inline attribute children
//! name=v attr // comment    trailing comment ends the line
//! ```

use crate::node::NodeBuilder;
use memchr::memchr;

/// Failure while parsing one header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderError {
    InvalidNodeName,
    UnterminatedQuote,
}

/// Check whether a byte may appear in a node name (`[A-Za-z0-9.-]`).
#[inline]
pub fn is_valid_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'.'
}

/// Check whether a string is a valid node name.
///
/// # Examples
///
/// ```rust
/// use byuuml::is_valid_name;
///
/// assert!(is_valid_name("net.tcp-port2"));
/// assert!(!is_valid_name(""));
/// assert!(!is_valid_name("has space"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_valid_name_char)
}

/// Count leading spaces and tabs. Each counts as one column.
#[inline]
pub(crate) fn measure_indentation(line: &[u8]) -> usize {
    line.iter()
        .take_while(|&&b| b == b' ' || b == b'\t')
        .count()
}

/// Parse one node header.
///
/// Attribute nodes (`is_attribute`) take no attributes of their own and get
/// no continuation break on their data. Returns the node and whatever part of
/// the line it did not consume; for a non-attribute node that is always empty.
pub(crate) fn parse_header(
    line: &[u8],
    is_attribute: bool,
) -> Result<(NodeBuilder, &[u8]), HeaderError> {
    let name_len = line.iter().take_while(|&&b| is_valid_name_char(b)).count();
    if name_len == 0 {
        return Err(HeaderError::InvalidNodeName);
    }
    // Name bytes are ASCII.
    let name: String = line[..name_len].iter().map(|&b| char::from(b)).collect();
    let mut node = NodeBuilder::new(name);
    let continuable = !is_attribute;

    let mut rest = &line[name_len..];
    match rest.first() {
        None => {}
        Some(b'=') => {
            rest = &rest[1..];
            if let Some(quoted) = rest.strip_prefix(b"\"") {
                let close = memchr(b'"', quoted).ok_or(HeaderError::UnterminatedQuote)?;
                node.open_data(&quoted[..close], continuable);
                rest = &quoted[close + 1..];
            } else {
                let end = memchr(b' ', rest).unwrap_or(rest.len());
                node.open_data(&rest[..end], continuable);
                rest = &rest[end..];
            }
        }
        Some(b':') => {
            node.open_data(&rest[1..], continuable);
            rest = &rest[rest.len()..];
        }
        Some(b' ') => rest = &rest[1..],
        Some(_) => {}
    }

    if !is_attribute {
        loop {
            let spaces = rest.iter().take_while(|&&b| b == b' ').count();
            rest = &rest[spaces..];
            if rest.is_empty() || rest.starts_with(b"//") {
                rest = &rest[rest.len()..];
                break;
            }
            let (attribute, remaining) = parse_header(rest, true)?;
            node.push_child(attribute);
            rest = remaining;
        }
    }

    Ok((node, rest))
}

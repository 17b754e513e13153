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

//! Parser configuration and resource limits.

/// Configurable limits for document construction.
///
/// These bound the resources a single document can consume: the depth of
/// the open-node stack and the size of the scratch buffer used to stitch a
/// logical line together from several chunks.
///
/// # Examples
///
/// ```rust
/// use byuuml::ParserConfig;
///
/// let config = ParserConfig::default();
/// assert_eq!(config.max_depth, 50);
///
/// let shallow = ParserConfig::default().with_max_depth(4);
/// assert_eq!(shallow.max_depth, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth (default: 50).
    ///
    /// Checked after each line against the number of open nodes, so a
    /// document exactly `max_depth` levels deep is accepted.
    pub max_depth: usize,

    /// Maximum logical line length in bytes (default: 1MB).
    ///
    /// Measured on the raw line, indentation included.
    pub max_line_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            max_line_length: 1_000_000,
        }
    }
}

impl ParserConfig {
    /// Create a configuration with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_line_length: usize::MAX,
        }
    }

    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum logical line length.
    #[must_use]
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }
}

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

//! Property-based tests for tree structure.

use super::{forest, name, render};
use byuuml::{parse, Document, ParseError, ParserConfig};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: Rendering a forest and parsing it back gives the same tree.
    #[test]
    fn prop_rendered_forest_parses_back(roots in forest()) {
        let input = render(&roots);
        let parsed = parse(input.as_bytes()).unwrap();
        prop_assert_eq!(parsed, Document::from_nodes(roots));
    }

    /// Property: N unindented lines give N roots.
    #[test]
    fn prop_root_count(names in prop::collection::vec(name(), 1..100)) {
        let input = names.join("\n");
        let doc = parse(input.as_bytes()).unwrap();
        prop_assert_eq!(doc.len(), names.len());
        prop_assert_eq!(doc.node_count(), names.len());
        let parsed: Vec<_> = doc.roots().map(|n| n.name().to_string()).collect();
        prop_assert_eq!(parsed, names);
    }

    /// Property: A chain is accepted exactly when it fits the depth limit.
    #[test]
    fn prop_depth_limit(depth in 1usize..80, limit in 1usize..80) {
        let input: String = (0..depth)
            .map(|i| format!("{}n\n", " ".repeat(i)))
            .collect();
        let config = ParserConfig::default().with_max_depth(limit);
        let result = Document::parse_with_config(input.as_bytes(), &config);

        if depth <= limit {
            prop_assert_eq!(result.unwrap().depth(), depth);
        } else {
            let is_too_deep = matches!(
                result,
                Err(ParseError::TooDeep { line, .. }) if line == limit + 1
            );
            prop_assert!(is_too_deep);
        }
    }

    /// Property: Descendants visit every node exactly once.
    #[test]
    fn prop_descendants_cover_all_nodes(roots in forest()) {
        let doc = Document::from_nodes(roots);
        let mut seen: Vec<_> = doc.descendants().map(|n| n.index()).collect();
        prop_assert_eq!(seen.len(), doc.node_count());
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), doc.node_count());
    }

    /// Property: Continuation lines join with a newline, in order.
    #[test]
    fn prop_continuation_joins_lines(
        lines in prop::collection::vec("[a-z0-9 =:\"]{0,10}", 1..10)
    ) {
        let mut input = format!("text:{}\n", lines[0]);
        for line in &lines[1..] {
            input.push_str(&format!("  :{}\n", line));
        }
        let doc = parse(input.as_bytes()).unwrap();
        let text = doc.get("text").unwrap();
        let joined = lines.join("\n");
        prop_assert_eq!(text.data(), joined.as_bytes());
        prop_assert!(!text.has_children());
    }
}

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

//! Property-based tests for the single-line grammar.

use super::name;
use byuuml::{is_valid_name, is_valid_name_char, parse};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: Quoted data comes back verbatim.
    #[test]
    fn prop_quoted_data_verbatim(key in name(), value in "[^\"\r\n]{0,40}") {
        let input = format!("{}=\"{}\"", key, value);
        let doc = parse(input.as_bytes()).unwrap();
        let node = doc.get(&key).unwrap();
        prop_assert_eq!(node.data(), value.as_bytes());
        prop_assert!(!node.has_children());
    }

    /// Property: Unquoted data stops at the first space.
    #[test]
    fn prop_unquoted_data_to_space(key in name(), value in "[a-z0-9=:/.]{0,20}") {
        let input = format!("{}={} extra", key, value);
        let doc = parse(input.as_bytes()).unwrap();
        let node = doc.get(&key).unwrap();
        prop_assert_eq!(node.data(), value.as_bytes());
        prop_assert_eq!(node.children().len(), 1);
    }

    /// Property: Attributes keep their order and values.
    #[test]
    fn prop_attributes_in_order(
        attrs in prop::collection::vec((name(), "[a-z0-9 ]{0,8}"), 0..8)
    ) {
        let mut input = String::from("node");
        for (key, value) in &attrs {
            input.push_str(&format!(" {}=\"{}\"", key, value));
        }
        input.push_str(" // trailing");

        let doc = parse(input.as_bytes()).unwrap();
        let parsed: Vec<_> = doc
            .get("node")
            .unwrap()
            .children()
            .map(|c| (c.name().to_string(), String::from_utf8_lossy(c.data()).into_owned()))
            .collect();
        prop_assert_eq!(parsed, attrs);
    }

    /// Property: A line parses only if it starts with a name, and that name
    /// is exactly the leading run of name characters.
    #[test]
    fn prop_name_is_leading_run(candidate in "[ -~]{1,6}") {
        prop_assume!(!candidate.starts_with("//"));
        let head_len = candidate
            .bytes()
            .take_while(|&b| is_valid_name_char(b))
            .count();

        match parse(candidate.as_bytes()) {
            Ok(doc) => {
                prop_assert!(head_len > 0);
                let root = doc.roots().next().unwrap();
                prop_assert_eq!(root.name(), &candidate[..head_len]);
                prop_assert!(is_valid_name(root.name()));
            }
            Err(_) => prop_assert!(head_len == 0 || candidate.len() > head_len),
        }
    }
}

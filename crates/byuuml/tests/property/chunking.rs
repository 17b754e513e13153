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

//! Property-based tests for chunk boundary independence.

use super::{forest, render};
use crate::common::Chunks;
use byuuml::{parse, Document};
use proptest::prelude::*;

/// Collapse a parse result into something comparable.
fn outcome(result: byuuml::ParseResult<Document>) -> Result<Document, (Option<usize>, String)> {
    result.map_err(|err| (err.line(), err.to_string()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: Splitting a valid document anywhere yields the same tree.
    #[test]
    fn prop_chunking_preserves_document(
        roots in forest(),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..6)
    ) {
        let input = render(&roots);
        let bytes = input.as_bytes();
        let mut offsets: Vec<usize> = cuts.iter().map(|i| i.index(bytes.len() + 1)).collect();
        offsets.sort_unstable();

        let whole = parse(bytes).unwrap();
        let chunked = Document::parse(Chunks::split_at(bytes, &offsets).buffered()).unwrap();
        prop_assert_eq!(whole, chunked);
    }

    /// Property: Arbitrary bytes give the same outcome whole or byte by byte.
    #[test]
    fn prop_chunking_preserves_outcome(
        bytes in prop::collection::vec(
            prop::sample::select(b"ab=:\" /\t\r\n\xff".to_vec()),
            0..64
        )
    ) {
        let whole = outcome(parse(&bytes));
        let chunked = outcome(Document::parse(Chunks::fixed(&bytes, 1).buffered()));
        prop_assert_eq!(whole, chunked);
    }

    /// Property: Line terminator style does not affect the document.
    #[test]
    fn prop_terminator_style_irrelevant(roots in forest()) {
        let lf = render(&roots);
        let crlf = lf.replace('\n', "\r\n");
        let cr = lf.replace('\n', "\r");
        let expected = parse(lf.as_bytes()).unwrap();
        prop_assert_eq!(&parse(crlf.as_bytes()).unwrap(), &expected);
        prop_assert_eq!(&parse(cr.as_bytes()).unwrap(), &expected);
    }
}

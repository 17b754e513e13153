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

#![no_main]

use byuuml::Document;
use libfuzzer_sys::fuzz_target;
use std::io::BufReader;

/// Fuzz target for document construction.
///
/// Parses the input once as a single buffer and once through a tiny read
/// buffer so that nearly every line is stitched across chunk boundaries.
///
/// # Running the Fuzzer
///
/// ```bash
/// cargo install cargo-fuzz
/// cd crates/byuuml
/// cargo fuzz run fuzz_parse -- -max_len=100000
/// ```
///
/// # Expected Behavior
///
/// - Parsing never panics; malformed input is always an `Err`
/// - Both readings agree on the document or on the failing line
/// - A parsed document can always be traversed to the end
fuzz_target!(|data: &[u8]| {
    let whole = Document::from_bytes(data);
    let chunked = Document::parse(BufReader::with_capacity(3, data));

    match (&whole, &chunked) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            assert_eq!(a.descendants().count(), a.node_count());
        }
        (Err(a), Err(b)) => assert_eq!(a.line(), b.line()),
        _ => panic!("chunking changed the outcome"),
    }
});

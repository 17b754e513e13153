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

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{BufReader, Read};

/// Reader that hands out one predefined chunk per `read` call, so tests
/// control exactly where chunk boundaries fall.
pub struct Chunks(VecDeque<Vec<u8>>);

impl Chunks {
    /// Split `input` at the given byte offsets.
    pub fn split_at(input: &[u8], cuts: &[usize]) -> Self {
        let mut chunks = VecDeque::new();
        let mut start = 0;
        for &cut in cuts {
            let cut = cut.clamp(start, input.len());
            if cut > start {
                chunks.push_back(input[start..cut].to_vec());
            }
            start = cut;
        }
        if start < input.len() {
            chunks.push_back(input[start..].to_vec());
        }
        Self(chunks)
    }

    /// Split `input` into pieces of `size` bytes.
    pub fn fixed(input: &[u8], size: usize) -> Self {
        Self(input.chunks(size.max(1)).map(<[u8]>::to_vec).collect())
    }

    /// Wrap in a buffered reader large enough to hold any single chunk.
    pub fn buffered(self) -> BufReader<Self> {
        BufReader::with_capacity(64 * 1024, self)
    }
}

impl Read for Chunks {
    fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
        let Some(mut chunk) = self.0.pop_front() else {
            return Ok(0);
        };
        let n = chunk.len().min(out.len());
        out[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            self.0.push_front(chunk.split_off(n));
        }
        Ok(n)
    }
}

/// Flatten a document into `(depth, name, data)` rows in document order.
pub fn outline(doc: &byuuml::Document) -> Vec<(usize, String, Vec<u8>)> {
    let mut rows = Vec::new();
    let mut stack: Vec<(usize, byuuml::Node<'_>)> = doc.roots().rev().map(|n| (0, n)).collect();
    while let Some((depth, node)) = stack.pop() {
        rows.push((depth, node.name().to_string(), node.data().to_vec()));
        stack.extend(node.children().rev().map(|c| (depth + 1, c)));
    }
    rows
}

/// Install a test-friendly tracing subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

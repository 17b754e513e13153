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

//! Dataset generators for benchmarks
//!
//! Generates byuuML documents of various sizes and shapes. Every generator
//! is seeded, so repeated runs measure identical input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;

const SEED: u64 = 0x6279_7575;

/// Dataset size categories
#[derive(Debug, Clone, Copy)]
pub enum DatasetSize {
    /// Small: ~10 records
    Small,
    /// Medium: ~100 records
    Medium,
    /// Large: ~1,000 records
    Large,
    /// Stress: ~10,000 records
    Stress,
}

impl DatasetSize {
    pub fn count(&self) -> usize {
        match self {
            DatasetSize::Small => 10,
            DatasetSize::Medium => 100,
            DatasetSize::Large => 1_000,
            DatasetSize::Stress => 10_000,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DatasetSize::Small => "small",
            DatasetSize::Medium => "medium",
            DatasetSize::Large => "large",
            DatasetSize::Stress => "stress",
        }
    }
}

/// All sizes in ascending order.
pub const SIZES: [DatasetSize; 4] = [
    DatasetSize::Small,
    DatasetSize::Medium,
    DatasetSize::Large,
    DatasetSize::Stress,
];

fn word(rng: &mut StdRng) -> String {
    let len = rng.gen_range(3..10);
    (0..len).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

/// Generate a cartridge-style manifest with `count` records.
///
/// Each record mixes every header form: attributes, quoted and unquoted data,
/// colon data with continuations, trailing comments, and nested children.
pub fn generate_manifest(count: usize) -> String {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut out = String::from("// generated manifest\n");
    for i in 0..count {
        let _ = writeln!(
            out,
            "game id={} region={} title=\"{} {}\"",
            i,
            ["NTSC", "PAL"][i % 2],
            word(&mut rng),
            word(&mut rng)
        );
        let _ = writeln!(out, "  board type=\"SHVC-{}\"", rng.gen_range(1..99));
        for _ in 0..rng.gen_range(1..4) {
            let _ = writeln!(
                out,
                "    memory type=ROM size=0x{:x} content={} // bank",
                rng.gen_range(0x1000..0x40_0000),
                word(&mut rng)
            );
        }
        let _ = writeln!(out, "  notes:{}", word(&mut rng));
        for _ in 0..rng.gen_range(0..3) {
            let _ = writeln!(out, "    :{} {}", word(&mut rng), word(&mut rng));
        }
    }
    out
}

/// Generate `count` flat top-level lines.
pub fn generate_flat(count: usize) -> String {
    let mut out = String::with_capacity(count * 16);
    for i in 0..count {
        let _ = writeln!(out, "entry{}=value{}", i, i);
    }
    out
}

/// Generate a single chain `depth` levels deep.
pub fn generate_deep(depth: usize) -> String {
    let mut out = String::new();
    for i in 0..depth {
        let _ = writeln!(out, "{}level{} n={}", " ".repeat(i), i, i);
    }
    out
}

/// Generate one node with `count` data continuation lines.
pub fn generate_text(count: usize) -> String {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut out = String::from("text:begin\n");
    for _ in 0..count {
        let _ = writeln!(out, "  :{} {} {}", word(&mut rng), word(&mut rng), word(&mut rng));
    }
    out
}

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

//! byuuML Parser
//!
//! A parser for byuuML, a line-oriented markup where nesting is expressed
//! only by indentation. Every line declares a named node, optionally with
//! data and inline attribute children:
//!
//! ```text
//! // comment
//! cartridge region=NTSC
//!   board type="SHVC 1A3M"
//!     memory type=ROM size=0x100000
//!   notes:first line of notes
//!     :second line of notes
//! ```
//!
//! # Features
//!
//! - **Chunk Agnostic**: Input can arrive in arbitrarily sized pieces; lines
//!   that cross chunk boundaries are stitched, all others are read in place
//! - **Strict**: Any malformed line aborts construction with a line-numbered
//!   error; there are no partial documents
//! - **Read-only Output**: The finished [`Document`] is immutable, `Send` and
//!   `Sync`, and stored in a flat arena
//! - **Bounded**: Nesting depth and line length are limited by
//!   [`ParserConfig`]
//!
//! # Usage
//!
//! ```rust
//! use byuuml::Document;
//!
//! let doc: Document = "\
//! cartridge region=NTSC
//!   board type=\"SHVC 1A3M\"
//!     memory type=ROM size=0x100000
//! ".parse().unwrap();
//!
//! let board = doc.get("cartridge").unwrap().child("board").unwrap();
//! assert_eq!(board.child("type").unwrap().data(), b"SHVC 1A3M");
//!
//! let memory = board.child("memory").unwrap();
//! let attrs: Vec<_> = memory.children().map(|a| (a.name(), a.data())).collect();
//! assert_eq!(attrs, [("type", &b"ROM"[..]), ("size", &b"0x100000"[..])]);
//! ```
//!
//! # Reading From Files
//!
//! ```rust,no_run
//! use byuuml::Document;
//! use std::fs::File;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::from_reader(File::open("manifest.bml")?)?;
//! for node in doc.descendants() {
//!     println!("{} = {:?}", node.name(), node.data_str());
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod document;
mod error;
mod header;
mod node;
mod parser;
mod scanner;
mod stack;

pub use config::ParserConfig;
pub use document::{Children, Descendants, Document, Node};
#[cfg(feature = "serde")]
pub use document::serialize::MAX_SERIALIZE_DEPTH;
pub use error::{ParseError, ParseResult};
pub use header::{is_valid_name, is_valid_name_char};
pub use node::NodeBuilder;
pub use parser::parse;
pub use scanner::LineScanner;

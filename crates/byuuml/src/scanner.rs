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

//! Logical line scanner.
//!
//! Reassembles logical lines from a byte source that hands out bytes in
//! arbitrary chunks, and drops full-line comments.
//!
//! This module is primarily an internal implementation detail of
//! [`Document`](crate::Document) construction, but is exposed for advanced
//! use cases such as line-level tooling.

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};
use memchr::memchr2;
use std::io::{BufRead, ErrorKind};
use std::ops::Range;
use tracing::trace;

#[inline]
fn is_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

#[inline]
fn check_length(length: usize, limit: usize, line: usize) -> ParseResult<()> {
    if length > limit {
        return Err(ParseError::LineTooLong {
            line,
            length,
            limit,
        });
    }
    Ok(())
}

/// Where the bytes of the current line live.
#[derive(Debug, Clone)]
enum Span {
    /// Inside the source's buffer, not yet consumed.
    Source(Range<usize>),
    /// Stitched together from several chunks in the scratch buffer.
    Scratch,
}

/// Physical line counter. `\r\n` counts as one break, every other
/// terminator byte counts as one.
#[derive(Debug, Default)]
struct LineCounter {
    breaks: usize,
    after_cr: bool,
}

impl LineCounter {
    fn skip(&mut self, run: &[u8]) {
        for &b in run {
            if b == b'\n' && self.after_cr {
                self.after_cr = false;
                continue;
            }
            self.breaks += 1;
            self.after_cr = b == b'\r';
        }
    }

    fn begin_line(&mut self) -> usize {
        self.after_cr = false;
        self.breaks + 1
    }
}

/// Chunked logical line scanner.
///
/// Pulls bytes from any [`BufRead`]: `fill_buf` supplies the bytes currently
/// available (an empty slice means end of stream) and `consume` releases
/// them. Lines are split on runs of `\n` and `\r` (interchangeable), so
/// empty lines never surface, and lines starting with `//` are skipped.
///
/// A line that lies entirely within the source's current buffer is returned
/// without copying. A line that crosses a chunk boundary is stitched together
/// in an internal scratch buffer.
///
/// The source must honour the usual `BufRead` contract that `fill_buf`
/// returns the same unconsumed bytes again when called twice without an
/// intervening `consume`.
///
/// # Examples
///
/// ```rust
/// use byuuml::LineScanner;
///
/// let input: &[u8] = b"first\r\n// note\n\n  second";
/// let mut scanner = LineScanner::new(input);
///
/// assert_eq!(scanner.next_line().unwrap(), Some((1, &b"first"[..])));
/// assert_eq!(scanner.next_line().unwrap(), Some((4, &b"  second"[..])));
/// assert_eq!(scanner.next_line().unwrap(), None);
/// ```
pub struct LineScanner<R> {
    source: R,
    scratch: Vec<u8>,
    /// Source bytes backing the last returned line, consumed on the next call.
    pending: usize,
    counter: LineCounter,
    line_number: usize,
    max_line_length: usize,
}

impl<R: BufRead> LineScanner<R> {
    /// Create a new scanner with default limits.
    pub fn new(source: R) -> Self {
        Self::with_config(source, &ParserConfig::default())
    }

    /// Create a scanner honouring `config.max_line_length`.
    pub fn with_config(source: R, config: &ParserConfig) -> Self {
        Self {
            source,
            scratch: Vec::new(),
            pending: 0,
            counter: LineCounter::default(),
            line_number: 0,
            max_line_length: config.max_line_length,
        }
    }

    /// Physical line number (1-based) of the last line returned, or 0 before
    /// the first call.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next logical line with its line number, skipping comments.
    ///
    /// Returns `Ok(None)` once the source is exhausted. The returned slice
    /// never contains a line terminator and is never empty.
    pub fn next_line(&mut self) -> ParseResult<Option<(usize, &[u8])>> {
        loop {
            let Some(span) = self.advance()? else {
                return Ok(None);
            };
            let line_number = self.line_number;
            if self.bytes(&span)?.starts_with(b"//") {
                trace!(line = line_number, "skipping comment line");
                continue;
            }
            return self.bytes(&span).map(|line| Some((line_number, line)));
        }
    }

    /// Release the source. Bytes after the last returned line stay unread.
    pub fn into_inner(mut self) -> R {
        self.source.consume(self.pending);
        self.source
    }

    fn bytes(&mut self, span: &Span) -> ParseResult<&[u8]> {
        match span {
            Span::Source(range) => Ok(&self.source.fill_buf()?[range.clone()]),
            Span::Scratch => Ok(&self.scratch),
        }
    }

    /// Locate the next logical line, comments included.
    fn advance(&mut self) -> ParseResult<Option<Span>> {
        if self.pending > 0 {
            self.source.consume(self.pending);
            self.pending = 0;
        }
        self.scratch.clear();

        loop {
            let buf = match self.source.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                // End of stream: whatever was accumulated is the final line.
                return Ok((!self.scratch.is_empty()).then_some(Span::Scratch));
            }
            let len = buf.len();

            let start = if self.scratch.is_empty() {
                match buf.iter().position(|&b| !is_terminator(b)) {
                    Some(start) => {
                        self.counter.skip(&buf[..start]);
                        self.line_number = self.counter.begin_line();
                        start
                    }
                    None => {
                        self.counter.skip(buf);
                        self.source.consume(len);
                        continue;
                    }
                }
            } else {
                0
            };

            match memchr2(b'\n', b'\r', &buf[start..]) {
                Some(offset) => {
                    let end = start + offset;
                    self.pending = end;
                    if self.scratch.is_empty() {
                        check_length(end - start, self.max_line_length, self.line_number)?;
                        return Ok(Some(Span::Source(start..end)));
                    }
                    check_length(
                        self.scratch.len() + end,
                        self.max_line_length,
                        self.line_number,
                    )?;
                    self.scratch.extend_from_slice(&buf[..end]);
                    return Ok(Some(Span::Scratch));
                }
                None => {
                    check_length(
                        self.scratch.len() + len - start,
                        self.max_line_length,
                        self.line_number,
                    )?;
                    self.scratch.extend_from_slice(&buf[start..]);
                    self.source.consume(len);
                    trace!(
                        line = self.line_number,
                        buffered = self.scratch.len(),
                        "line crosses chunk boundary"
                    );
                }
            }
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token-driving parser loop.
//!
//! The [`Parser`] has no grammar: it pulls tokens until `EOF`, reports each
//! one to an optional [`DiagnosticSink`] and counts them by kind.
//!
//! ```rust
//! use std::sync::Arc;
//! use phec_lexer::{Parser, TokenKind, TracingSink};
//!
//! let parser = Parser::new().with_sink(Arc::new(TracingSink));
//! let summary = parser.parse("if x / 2 ");
//!
//! assert_eq!(summary.count(TokenKind::Keyword), 1);
//! assert_eq!(summary.count(TokenKind::DivPunctuator), 1);
//! assert_eq!(summary.total(), 4);
//! ```

mod sink;

pub use sink::{DiagnosticSink, TokenEvent, TracingSink};

use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::lexer::{TokenKind, Tokenizer, TokenizerOptions};
use crate::{Error, Result};

/// Per-kind token counts for one or more sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    counts: [usize; TokenKind::ALL.len()],
}

impl ParseSummary {
    /// Counts one token of `kind`.
    pub fn record(&mut self, kind: TokenKind) {
        self.counts[kind.index()] += 1;
    }

    /// Number of tokens of `kind` seen.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts[kind.index()]
    }

    /// Number of tokens seen, not counting `EOF`.
    pub fn total(&self) -> usize {
        TokenKind::ALL
            .iter()
            .filter(|kind| **kind != TokenKind::Eof)
            .map(|kind| self.count(*kind))
            .sum()
    }

    /// Adds the counts of `other` to this summary.
    pub fn merge(&mut self, other: &ParseSummary) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for ParseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for kind in TokenKind::ALL {
            if kind == TokenKind::Eof {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", kind, self.count(kind))?;
            first = false;
        }
        Ok(())
    }
}

/// Drives a [`Tokenizer`] over a source until end of input.
#[derive(Clone, Default)]
pub struct Parser {
    options: TokenizerOptions,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Parser {
    /// Creates a parser with default tokenizer options and no sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with explicit tokenizer options.
    pub fn with_options(options: TokenizerOptions) -> Self {
        Self {
            options,
            sink: None,
        }
    }

    /// Installs the diagnostic sink, replacing any previous one.
    pub fn set_sink(&mut self, sink: Arc<dyn DiagnosticSink>) {
        self.sink = Some(sink);
    }

    /// Builder form of [`set_sink`](Parser::set_sink).
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.set_sink(sink);
        self
    }

    /// The options each tokenizer is created with.
    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Tokenizes `source` to the end, reporting every token (including the
    /// final `EOF`) to the sink.
    pub fn parse(&self, source: &str) -> ParseSummary {
        let mut tokenizer = Tokenizer::with_options(source, self.options);
        if let Some(sink) = &self.sink {
            tokenizer.set_sink(Arc::clone(sink));
        }
        let mut summary = ParseSummary::default();

        loop {
            let kind = tokenizer.next_token();
            summary.record(kind);

            if kind == TokenKind::Eof {
                break;
            }
        }

        summary
    }

    /// Reads a UTF-8 file and parses it.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseSummary> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse(&source))
    }

    /// Parses several sources, one tokenizer each, in input order.
    #[cfg(feature = "parallel")]
    pub fn parse_all<S>(&self, sources: &[S]) -> Vec<ParseSummary>
    where
        S: AsRef<str> + Sync,
    {
        sources
            .par_iter()
            .map(|source| self.parse(source.as_ref()))
            .collect()
    }

    /// Parses several sources, one tokenizer each, in input order.
    #[cfg(not(feature = "parallel"))]
    pub fn parse_all<S>(&self, sources: &[S]) -> Vec<ParseSummary>
    where
        S: AsRef<str>,
    {
        sources
            .iter()
            .map(|source| self.parse(source.as_ref()))
            .collect()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("options", &self.options)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # phec-lexer
//!
//! A small lexical analyzer for ECMAScript-like source text.
//!
//! ## Overview
//!
//! This crate provides:
//! - A single-pass [`Tokenizer`] that classifies source text into six token
//!   kinds (keywords, punctuators, division punctuators, numeric literals,
//!   identifier names and end-of-file)
//! - A [`Parser`] driver that walks the token stream and reports each token
//!   to an optional [`DiagnosticSink`]
//!
//! The tokenizer is a deliberately simple state machine: it accumulates
//! characters until whitespace, a semicolon or a punctuator character ends
//! the literal, and it only recognizes a keyword when whitespace (or the end
//! of input) follows it.
//!
//! ## Quick Start
//!
//! ```rust
//! use phec_lexer::{Tokenizer, TokenKind};
//!
//! let mut tokenizer = Tokenizer::new("var x = 42;");
//!
//! assert_eq!(tokenizer.next_token(), TokenKind::Keyword);
//! assert_eq!(tokenizer.literal(), "var");
//! assert_eq!(tokenizer.next_token(), TokenKind::IdentifierName);
//! assert_eq!(tokenizer.next_token(), TokenKind::Punctuator);
//! assert_eq!(tokenizer.next_token(), TokenKind::NumericLiteral);
//! assert_eq!(tokenizer.numeric_value(), Some(42));
//! assert_eq!(tokenizer.next_token(), TokenKind::Eof);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod lexer;
pub mod parser;

pub use error::{Error, Result};
pub use lexer::{
    ReservedWords, Span, Token, TokenKind, Tokenizer, TokenizerOptions, TrailingLiteral,
    WhitespaceMode,
};
pub use parser::{DiagnosticSink, ParseSummary, Parser, TokenEvent, TracingSink};

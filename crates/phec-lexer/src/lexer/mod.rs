// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for ECMAScript-like source code.
//!
//! The tokenizer transforms source text into a stream of classified tokens
//! that can be consumed by the [`Parser`](crate::Parser) driver.
//!
//! ## Structure
//!
//! - `cursor.rs` - `Cursor` over the source with one character of pushback
//! - `tables.rs` - Keyword, punctuator and division-punctuator tables
//! - `options.rs` - `TokenizerOptions` and the option enums
//! - `token.rs` - `Token`, `TokenKind` and `Span` definitions
//! - `tokenizer.rs` - Main `Tokenizer` state machine
//!
//! ## Usage
//!
//! ```rust
//! use phec_lexer::lexer::{TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new("if x == 1 ");
//!
//! loop {
//!     let kind = tokenizer.next_token();
//!     if kind == TokenKind::Eof {
//!         break;
//!     }
//!     println!("{}: {}", kind, tokenizer.literal());
//! }
//! ```

mod cursor;
mod options;
mod token;
mod tokenizer;

pub mod tables;

pub use cursor::Cursor;
pub use options::{ReservedWords, TokenizerOptions, TrailingLiteral, WhitespaceMode};
pub use token::{Span, Token, TokenKind};
pub use tokenizer::Tokenizer;

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the tokenizer.

use std::fmt;

/// A span in the source code, representing a range of characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `offset`.
    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token produced by the tokenizer.
///
/// The literal borrows from the source, so `literal == &source[span]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact text consumed for the token
    pub literal: &'a str,
    /// The span in the source code
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, literal: &'a str, span: Span) -> Self {
        Self {
            kind,
            literal,
            span,
        }
    }

    /// Parses the literal of a numeric token.
    ///
    /// Returns `None` for other kinds and for values that overflow `u64`.
    pub fn numeric_value(&self) -> Option<u64> {
        match self.kind {
            TokenKind::NumericLiteral => self.literal.parse().ok(),
            _ => None,
        }
    }
}

/// The different kinds of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of file
    Eof,
    /// Reserved word followed by whitespace or end of input
    Keyword,
    /// Operator or punctuation other than the division forms
    Punctuator,
    /// `/` or `/=`
    DivPunctuator,
    /// Run of ASCII digits
    NumericLiteral,
    /// Any other literal
    IdentifierName,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Eof,
        TokenKind::Keyword,
        TokenKind::Punctuator,
        TokenKind::DivPunctuator,
        TokenKind::NumericLiteral,
        TokenKind::IdentifierName,
    ];

    /// The upper-case name used in diagnostics, e.g. `DIV_PUNCTUATOR`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::DivPunctuator => "DIV_PUNCTUATOR",
            TokenKind::NumericLiteral => "NUMERIC_LITERAL",
            TokenKind::IdentifierName => "IDENTIFIER_NAME",
        }
    }

    /// Position of this kind in [`TokenKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true for both punctuator kinds.
    pub fn is_punctuator(self) -> bool {
        matches!(self, TokenKind::Punctuator | TokenKind::DivPunctuator)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

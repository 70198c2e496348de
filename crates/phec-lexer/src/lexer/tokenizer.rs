// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The tokenizer that produces tokens from source text.

use std::fmt;
use std::sync::Arc;

use super::{Cursor, Span, Token, TokenKind, TokenizerOptions, TrailingLiteral, tables};
use crate::parser::{DiagnosticSink, TokenEvent};

/// A tokenizer for ECMAScript-like source code.
///
/// Each call to [`next_token`](Tokenizer::next_token) consumes characters
/// until exactly one token is recognized and returns its kind. The text of
/// that token stays available through [`literal`](Tokenizer::literal) until
/// the next call.
///
/// Recognition rules, applied per character:
///
/// 1. `;` ends the current literal and is otherwise skipped.
/// 2. A punctuator character ends a non-empty literal and is pushed back so
///    it starts the next token.
/// 3. Whitespace ends a non-empty literal; with an empty literal it is
///    skipped.
/// 4. Anything else is appended. The literal is then a keyword if it is
///    reserved and whitespace (or the end of input) follows, a punctuator or
///    division punctuator if it matches exactly, or keeps accumulating.
///
/// A literal ended by rule 1-3 is a numeric literal when it is all ASCII
/// digits and an identifier name otherwise.
///
/// An optional [`DiagnosticSink`] receives one event per call.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    options: TokenizerOptions,
    literal: Span,
    kind: TokenKind,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, TokenizerOptions::default())
    }

    /// Creates a new tokenizer with explicit options.
    pub fn with_options(source: &'a str, options: TokenizerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            literal: Span::empty_at(0),
            kind: TokenKind::Eof,
            sink: None,
        }
    }

    /// Installs the diagnostic sink, replacing any previous one.
    pub fn set_sink(&mut self, sink: Arc<dyn DiagnosticSink>) {
        self.sink = Some(sink);
    }

    /// Builder form of [`set_sink`](Tokenizer::set_sink).
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.set_sink(sink);
        self
    }

    /// Scans the next token and returns its kind.
    ///
    /// Once `Eof` has been returned, every further call returns `Eof`
    /// without touching any state.
    pub fn next_token(&mut self) -> TokenKind {
        let kind = self.scan();
        self.kind = kind;

        if let Some(sink) = &self.sink {
            sink.record(&TokenEvent {
                kind,
                literal: self.literal(),
                span: self.literal,
            });
        }

        kind
    }

    /// The text of the token last returned; empty after `Eof`.
    pub fn literal(&self) -> &'a str {
        &self.cursor.source()[self.literal.start..self.literal.end]
    }

    /// The span of the token last returned.
    pub fn span(&self) -> Span {
        self.literal
    }

    /// The kind last returned by [`next_token`](Tokenizer::next_token).
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token last returned, as a value.
    pub fn token(&self) -> Token<'a> {
        Token::new(self.kind, self.literal(), self.literal)
    }

    /// The integer value of the last token.
    ///
    /// Only meaningful right after a `NumericLiteral`; `None` otherwise, and
    /// also when the digits overflow `u64`.
    pub fn numeric_value(&self) -> Option<u64> {
        self.token().numeric_value()
    }

    /// Current byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The options this tokenizer was built with.
    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    fn scan(&mut self) -> TokenKind {
        self.reset_literal();

        loop {
            let Some(ch) = self.cursor.bump() else {
                return self.end_of_input();
            };

            let forced_break = if ch == ';' {
                true
            } else if tables::is_break_character(ch) && !self.literal.is_empty() {
                let unread = self.cursor.unread();
                debug_assert!(unread, "break character must be pushed back");
                true
            } else {
                false
            };

            if forced_break || self.options.whitespace.is_whitespace(ch) {
                if !self.literal.is_empty() {
                    return self.classify_literal();
                }
                self.reset_literal();
                continue;
            }

            self.literal.end = self.cursor.position();
            let literal = self.literal();

            if self.options.reserved_words.contains(literal) && self.followed_by_whitespace() {
                return TokenKind::Keyword;
            }

            if tables::is_punctuator(literal) {
                return TokenKind::Punctuator;
            }

            if tables::is_division_punctuator(literal) {
                return TokenKind::DivPunctuator;
            }
        }
    }

    fn end_of_input(&mut self) -> TokenKind {
        if !self.literal.is_empty() && self.options.trailing_literal == TrailingLiteral::Flush {
            return self.classify_literal();
        }
        self.reset_literal();
        TokenKind::Eof
    }

    fn classify_literal(&self) -> TokenKind {
        if tables::is_numeric_literal(self.literal()) {
            TokenKind::NumericLiteral
        } else {
            TokenKind::IdentifierName
        }
    }

    fn followed_by_whitespace(&self) -> bool {
        self.cursor
            .peek()
            .is_none_or(|next| self.options.whitespace.is_whitespace(next))
    }

    fn reset_literal(&mut self) {
        self.literal = Span::empty_at(self.cursor.position());
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token();
        match self.kind() {
            TokenKind::Eof => None,
            _ => Some(self.token()),
        }
    }
}

impl fmt::Debug for Tokenizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("cursor", &self.cursor)
            .field("options", &self.options)
            .field("literal", &self.literal)
            .field("kind", &self.kind)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

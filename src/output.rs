// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Terminal rendering of tokens and summaries.

use owo_colors::OwoColorize;
use phec_lexer::{DiagnosticSink, ParseSummary, TokenEvent, TokenKind};

/// Color `text` by the kind of token it belongs to.
pub fn paint(kind: TokenKind, text: &str) -> String {
    match kind {
        _ if kind.is_punctuator() => text.cyan().to_string(),
        TokenKind::Keyword => text.magenta().bold().to_string(),
        TokenKind::NumericLiteral => text.yellow().to_string(),
        TokenKind::Eof => text.dimmed().to_string(),
        _ => text.to_string(),
    }
}

/// One listing line: span, kind and the literal (debug-quoted so control
/// characters stay visible).
pub fn format_event(event: &TokenEvent<'_>) -> String {
    let span = format!("{:>5}..{:<5}", event.span.start, event.span.end);
    let kind = format!("{:<16}", event.kind.name());
    match event.kind {
        TokenKind::Eof => format!("{} {}", span.dimmed(), paint(event.kind, &kind)),
        _ => format!(
            "{} {} {}",
            span.dimmed(),
            paint(event.kind, &kind),
            paint(event.kind, &format!("{:?}", event.literal))
        ),
    }
}

/// One summary line.
pub fn format_summary(label: &str, summary: &ParseSummary) -> String {
    format!(
        "{} {} {}",
        label.white().bold(),
        format!("{} tokens", summary.total()).green(),
        format!("({summary})").dimmed()
    )
}

/// Prints every token the parser reports.
#[derive(Debug, Default)]
pub struct ListingSink;

impl DiagnosticSink for ListingSink {
    fn record(&self, event: &TokenEvent<'_>) {
        println!("{}", format_event(event));
    }
}

/// Removes SGR color sequences from `s`.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

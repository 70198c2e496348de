// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Diagnostic hook for the token loop.

use std::fmt;

use crate::lexer::{Span, TokenKind};

/// One token as seen by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenEvent<'a> {
    /// Kind returned by the tokenizer
    pub kind: TokenKind,
    /// Text of the token; empty for `EOF`
    pub literal: &'a str,
    /// Where the token sits in the source
    pub span: Span,
}

impl fmt::Display for TokenEvent<'_> {
    /// Formats as `KIND: literal`, or just `EOF`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str(self.kind.name()),
            kind => write!(f, "{}: {}", kind, self.literal),
        }
    }
}

/// Receives one debug event per token from the [`Parser`](super::Parser).
///
/// Sinks only observe; they cannot change what the tokenizer produces.
pub trait DiagnosticSink: Send + Sync {
    /// Records a token event.
    fn record(&self, event: &TokenEvent<'_>);
}

/// Forwards token events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &TokenEvent<'_>) {
        tracing::debug!(
            kind = event.kind.name(),
            literal = event.literal,
            start = event.span.start,
            end = event.span.end,
            "{event}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug)]
    struct CapturedEvent {
        level: Level,
        kind: Option<String>,
        literal: Option<String>,
        message: Option<String>,
    }

    impl Visit for CapturedEvent {
        fn record_str(&mut self, field: &Field, value: &str) {
            match field.name() {
                "kind" => self.kind = Some(value.to_string()),
                "literal" => self.literal = Some(value.to_string()),
                _ => {}
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.message = Some(format!("{value:?}"));
            }
        }
    }

    struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut captured = CapturedEvent {
                level: *event.metadata().level(),
                kind: None,
                literal: None,
                message: None,
            };
            event.record(&mut captured);
            self.events.lock().unwrap().push(captured);
        }
    }

    #[test]
    fn test_event_display() {
        let event = TokenEvent {
            kind: TokenKind::Keyword,
            literal: "if",
            span: Span::new(0, 2),
        };
        assert_eq!(event.to_string(), "KEYWORD: if");
    }

    #[test]
    fn test_eof_event_display() {
        let event = TokenEvent {
            kind: TokenKind::Eof,
            literal: "",
            span: Span::empty_at(9),
        };
        assert_eq!(event.to_string(), "EOF");
    }

    #[test]
    fn test_tracing_sink_emits_debug_event_per_token() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            events: Arc::clone(&events),
        });

        tracing::subscriber::with_default(subscriber, || {
            Parser::new().with_sink(Arc::new(TracingSink)).parse("if x ");
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        let expected = [
            ("KEYWORD", "if", "KEYWORD: if"),
            ("IDENTIFIER_NAME", "x", "IDENTIFIER_NAME: x"),
            ("EOF", "", "EOF"),
        ];
        for (event, (kind, literal, message)) in events.iter().zip(expected) {
            assert_eq!(event.level, Level::DEBUG);
            assert_eq!(event.kind.as_deref(), Some(kind));
            assert_eq!(event.literal.as_deref(), Some(literal));
            assert_eq!(event.message.as_deref(), Some(message));
        }
    }
}

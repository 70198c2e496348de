//! Tokenizer integration tests
//!
//! Exercises the public tokenizer and parser APIs end to end, including the
//! stream properties that must hold for arbitrary input.

use phec_lexer::lexer::tables;
use phec_lexer::{
    Parser, Span, Token, TokenKind, Tokenizer, TokenizerOptions, TrailingLiteral, WhitespaceMode,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    Tokenizer::new(src).map(|t| t.kind).collect()
}

fn literals(src: &str) -> Vec<&str> {
    Tokenizer::new(src).map(|t| t.literal).collect()
}

/// Bytes that were skipped rather than consumed into a literal.
fn skipped_bytes(src: &str, options: TokenizerOptions) -> usize {
    src.chars()
        .filter(|&c| c == ';' || options.whitespace.is_whitespace(c))
        .map(char::len_utf8)
        .sum()
}

#[test]
fn test_function_declaration() {
    let src = "function add ( a , b ) { return a+b ; }";
    assert_eq!(
        literals(src),
        vec!["function", "add", "(", "a", ",", "b", ")", "{", "return", "a", "+", "b", "}"]
    );
    assert_eq!(
        kinds(src),
        vec![
            TokenKind::Keyword,
            TokenKind::IdentifierName,
            TokenKind::Punctuator,
            TokenKind::IdentifierName,
            TokenKind::Punctuator,
            TokenKind::IdentifierName,
            TokenKind::Punctuator,
            TokenKind::Punctuator,
            TokenKind::Keyword,
            TokenKind::IdentifierName,
            TokenKind::Punctuator,
            TokenKind::IdentifierName,
            TokenKind::Punctuator,
        ]
    );
}

#[test]
fn test_call_without_spaces() {
    // Without whitespace after it, `if` is an identifier name.
    assert_eq!(literals("if(x){y}"), vec!["if", "(", "x", ")", "{", "y", "}"]);
    assert_eq!(kinds("if(x)")[0], TokenKind::IdentifierName);
}

#[test]
fn test_numeric_accessor_contract() {
    let mut tokenizer = Tokenizer::new("7 007 18446744073709551616");
    assert_eq!(tokenizer.next_token(), TokenKind::NumericLiteral);
    assert_eq!(tokenizer.numeric_value(), Some(7));
    assert_eq!(tokenizer.next_token(), TokenKind::NumericLiteral);
    assert_eq!(tokenizer.literal(), "007");
    assert_eq!(tokenizer.numeric_value(), Some(7));
    assert_eq!(tokenizer.next_token(), TokenKind::NumericLiteral);
    assert_eq!(tokenizer.numeric_value(), None);
}

#[test]
fn test_literal_is_overwritten_per_call() {
    let mut tokenizer = Tokenizer::new("a b");
    tokenizer.next_token();
    let first = tokenizer.literal();
    tokenizer.next_token();
    assert_eq!(first, "a");
    assert_eq!(tokenizer.literal(), "b");
    assert_eq!(tokenizer.span(), Span::new(2, 3));
}

#[test]
fn test_byte_order_mark_is_skipped() {
    assert_eq!(literals("\u{FEFF}var x"), vec!["var", "x"]);
}

#[test]
fn test_parser_counts_match_iterator() {
    let src = "for (var i = 0; i < 10; i++) { total /= i }";
    let tokens: Vec<Token<'_>> = Tokenizer::new(src).collect();
    let summary = Parser::new().parse(src);
    assert_eq!(summary.total(), tokens.len());
    for kind in TokenKind::ALL {
        if kind == TokenKind::Eof {
            continue;
        }
        let expected = tokens.iter().filter(|t| t.kind == kind).count();
        assert_eq!(summary.count(kind), expected, "{kind}");
    }
}

#[test]
fn test_parse_file_reads_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.js");
    std::fs::write(&path, "var answer = 42;").unwrap();

    let summary = Parser::new().parse_file(&path).unwrap();
    assert_eq!(summary.count(TokenKind::Keyword), 1);
    assert_eq!(summary.count(TokenKind::NumericLiteral), 1);
    assert_eq!(summary.total(), 4);
}

fn any_options() -> impl Strategy<Value = TokenizerOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(extended, drop)| TokenizerOptions {
        whitespace: if extended {
            WhitespaceMode::Extended
        } else {
            WhitespaceMode::Faithful
        },
        trailing_literal: if drop {
            TrailingLiteral::Drop
        } else {
            TrailingLiteral::Flush
        },
        ..TokenizerOptions::default()
    })
}

/// Source-like text biased toward the characters the state machine cares about.
fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(' '),
            Just(';'),
            Just('\t'),
            Just('\n'),
            Just('\u{FEFF}'),
            prop::sample::select(vec!['+', '=', '/', '>', '(', '}', '.', '!', '&', '|']),
            prop::char::range('0', '9'),
            prop::char::range('a', 'z'),
            any::<char>(),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_whitespace_only_is_eof(src in "[ \u{FEFF};]{0,32}") {
        let mut tokenizer = Tokenizer::new(&src);
        prop_assert_eq!(tokenizer.next_token(), TokenKind::Eof);
        prop_assert_eq!(tokenizer.position(), src.len());
    }

    #[test]
    fn prop_keyword_then_space(index in 0..tables::KEYWORDS.len(), tail in "[a-z ]{0,8}") {
        let keyword = tables::KEYWORDS[index];
        let src = format!("{keyword} {tail}");
        let mut tokenizer = Tokenizer::new(&src);
        prop_assert_eq!(tokenizer.next_token(), TokenKind::Keyword);
        prop_assert_eq!(tokenizer.literal(), keyword);
    }

    #[test]
    fn prop_digits_are_numeric(value in any::<u64>()) {
        let src = value.to_string();
        let mut tokenizer = Tokenizer::new(&src);
        prop_assert_eq!(tokenizer.next_token(), TokenKind::NumericLiteral);
        prop_assert_eq!(tokenizer.numeric_value(), Some(value));
    }

    #[test]
    fn prop_literals_are_source_slices(src in source_text(), options in any_options()) {
        let mut last_end = 0;
        for token in Tokenizer::with_options(&src, options) {
            prop_assert!(!token.literal.is_empty());
            prop_assert!(token.span.start >= last_end);
            prop_assert_eq!(&src[token.span.start..token.span.end], token.literal);
            last_end = token.span.end;
        }
    }

    #[test]
    fn prop_flush_round_trips_length(src in source_text(), extended in any::<bool>()) {
        let options = TokenizerOptions {
            whitespace: if extended { WhitespaceMode::Extended } else { WhitespaceMode::Faithful },
            ..TokenizerOptions::default()
        };
        let consumed: usize = Tokenizer::with_options(&src, options)
            .map(|t| t.span.len())
            .sum();
        prop_assert_eq!(consumed + skipped_bytes(&src, options), src.len());
    }

    #[test]
    fn prop_terminates_and_stays_at_eof(src in source_text(), options in any_options()) {
        let mut tokenizer = Tokenizer::with_options(&src, options);
        let mut calls = 0;
        while tokenizer.next_token() != TokenKind::Eof {
            calls += 1;
            prop_assert!(calls <= src.len(), "more tokens than bytes");
        }
        let position = tokenizer.position();
        prop_assert_eq!(position, src.len());
        for _ in 0..3 {
            prop_assert_eq!(tokenizer.next_token(), TokenKind::Eof);
            prop_assert_eq!(tokenizer.position(), position);
            prop_assert_eq!(tokenizer.literal(), "");
        }
    }

    #[test]
    fn prop_parse_all_matches_sequential(sources in prop::collection::vec(source_text(), 0..8)) {
        let parser = Parser::new();
        let parallel = parser.parse_all(sources.as_slice());
        let sequential: Vec<_> = sources.iter().map(|s| parser.parse(s)).collect();
        prop_assert_eq!(parallel, sequential);
    }
}

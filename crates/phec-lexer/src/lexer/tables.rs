// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Classification tables.
//!
//! Every table is process-wide, read-only data. The slices are the source of
//! truth; the hashed sets behind the `is_*` helpers are built from them on
//! first use.
//!
//! ## Reserved Words
//!
//! | Table | Contents |
//! |-------|----------|
//! | [`KEYWORDS`] | `break`, `do`, `instanceof`, ... (ES5 keywords) |
//! | [`FUTURE_RESERVED_WORDS`] | `class`, `enum`, `extends`, `super`, `const`, `export`, `import` |
//! | [`STRICT_RESERVED_WORDS`] | `implements`, `let`, `private`, ... |
//!
//! ## Punctuators
//!
//! [`PUNCTUATORS`] holds every operator up to four characters (`>>>=`).
//! The tokenizer checks it after each appended character and stops at the
//! first exact match, so an entry whose first character is itself an entry
//! (`==`, `++`, `>>>=`) is never produced: `==` scans as `=` followed by `=`.
//!
//! [`DIVISION_PUNCTUATORS`] holds `/` and `/=`, which a full lexer would have
//! to disambiguate from regular expression literals.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Reserved keywords.
pub static KEYWORDS: &[&str] = &[
    "break",
    "do",
    "instanceof",
    "typeof",
    "case",
    "else",
    "new",
    "var",
    "catch",
    "finally",
    "return",
    "void",
    "continue",
    "for",
    "switch",
    "while",
    "debugger",
    "function",
    "this",
    "with",
    "default",
    "if",
    "throw",
    "delete",
    "in",
    "try",
];

/// Words reserved for future use in every mode.
pub static FUTURE_RESERVED_WORDS: &[&str] =
    &["class", "enum", "extends", "super", "const", "export", "import"];

/// Words reserved for future use in strict mode code.
pub static STRICT_RESERVED_WORDS: &[&str] = &[
    "implements",
    "let",
    "private",
    "public",
    "interface",
    "package",
    "protected",
    "static",
    "yield",
];

/// Operator and punctuation strings, excluding the division forms.
pub static PUNCTUATORS: &[&str] = &[
    "{", "}", "(", ")", "[", "]", ".", ";", ",", "<", ">", "<=", ">=", "==", "!=", "===", "!==",
    "+", "-", "*", "%", "++", "--", "<<", ">>", ">>>", "&", "|", "^", "!", "~", "&&", "||", "?",
    ":", "=", "+=", "-=", "*=", "%=", "<<=", ">>=", ">>>=", "&=", "|=", "^=",
];

/// Division punctuators.
pub static DIVISION_PUNCTUATORS: &[&str] = &["/", "/="];

/// Characters skipped as whitespace in faithful mode.
///
/// U+FEFF is the byte-order mark; its UTF-8 encoding starts with `0xEF`.
pub static WHITESPACE_CHARACTERS: &[char] = &[' ', '\u{FEFF}'];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static FUTURE_RESERVED_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| FUTURE_RESERVED_WORDS.iter().copied().collect());

static STRICT_RESERVED_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| STRICT_RESERVED_WORDS.iter().copied().collect());

static PUNCTUATOR_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PUNCTUATORS.iter().copied().collect());

static BREAK_CHARACTERS: LazyLock<FxHashSet<char>> = LazyLock::new(|| {
    PUNCTUATORS
        .iter()
        .chain(DIVISION_PUNCTUATORS)
        .flat_map(|p| p.chars())
        .collect()
});

/// Checks if `word` is a keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Checks if `word` is a future reserved word.
pub fn is_future_reserved_word(word: &str) -> bool {
    FUTURE_RESERVED_SET.contains(word)
}

/// Checks if `word` is reserved in strict mode code only.
pub fn is_strict_reserved_word(word: &str) -> bool {
    STRICT_RESERVED_SET.contains(word)
}

/// Checks if `literal` exactly matches a punctuator.
pub fn is_punctuator(literal: &str) -> bool {
    PUNCTUATOR_SET.contains(literal)
}

/// Checks if `literal` is `/` or `/=`.
pub fn is_division_punctuator(literal: &str) -> bool {
    DIVISION_PUNCTUATORS.contains(&literal)
}

/// Checks if `ch` occurs in any punctuator or division punctuator.
///
/// Seeing one of these after a non-empty literal ends that literal.
pub fn is_break_character(ch: char) -> bool {
    BREAK_CHARACTERS.contains(&ch)
}

/// Checks if `literal` is a non-empty run of ASCII digits.
pub fn is_numeric_literal(literal: &str) -> bool {
    !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit())
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Tokenizer options.
//!
//! The defaults reproduce the classic behavior: only space and the
//! byte-order mark are whitespace, only the ES5 keywords are reserved, and a
//! literal still pending at end of input is emitted as a final token.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tables;
use crate::{Error, Result};

/// Options controlling how the [`Tokenizer`](super::Tokenizer) classifies text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerOptions {
    /// Which characters are skipped as whitespace
    pub whitespace: WhitespaceMode,
    /// Which reserved-word tables the keyword check consults
    pub reserved_words: ReservedWords,
    /// What happens to a literal still pending at end of input
    pub trailing_literal: TrailingLiteral,
}

/// Whitespace classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WhitespaceMode {
    /// Space and U+FEFF only. Tabs and line breaks are ordinary characters.
    #[default]
    Faithful,
    /// Every Unicode whitespace character and line terminator, plus U+FEFF.
    Extended,
}

impl WhitespaceMode {
    /// Checks if `ch` is skipped as whitespace under this mode.
    pub fn is_whitespace(self, ch: char) -> bool {
        match self {
            WhitespaceMode::Faithful => tables::WHITESPACE_CHARACTERS.contains(&ch),
            WhitespaceMode::Extended => ch == '\u{FEFF}' || ch.is_whitespace(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            WhitespaceMode::Faithful => "faithful",
            WhitespaceMode::Extended => "extended",
        }
    }
}

/// Reserved-word tables recognized as keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ReservedWords {
    /// [`KEYWORDS`](tables::KEYWORDS) only
    #[default]
    Keywords,
    /// Keywords plus [`FUTURE_RESERVED_WORDS`](tables::FUTURE_RESERVED_WORDS)
    FutureReserved,
    /// Keywords, future reserved words and
    /// [`STRICT_RESERVED_WORDS`](tables::STRICT_RESERVED_WORDS)
    Strict,
}

impl ReservedWords {
    /// Checks if `word` is reserved under this set.
    pub fn contains(self, word: &str) -> bool {
        if tables::is_keyword(word) {
            return true;
        }
        match self {
            ReservedWords::Keywords => false,
            ReservedWords::FutureReserved => tables::is_future_reserved_word(word),
            ReservedWords::Strict => {
                tables::is_future_reserved_word(word) || tables::is_strict_reserved_word(word)
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            ReservedWords::Keywords => "keywords",
            ReservedWords::FutureReserved => "future-reserved",
            ReservedWords::Strict => "strict",
        }
    }
}

/// Handling of a literal that is still accumulating when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TrailingLiteral {
    /// Emit it as a numeric literal or identifier name before `Eof`.
    #[default]
    Flush,
    /// Discard it and report `Eof` straight away.
    Drop,
}

impl TrailingLiteral {
    fn name(self) -> &'static str {
        match self {
            TrailingLiteral::Flush => "flush",
            TrailingLiteral::Drop => "drop",
        }
    }
}

impl FromStr for WhitespaceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faithful" => Ok(WhitespaceMode::Faithful),
            "extended" => Ok(WhitespaceMode::Extended),
            _ => Err(Error::InvalidOption {
                option: "whitespace",
                value: s.to_string(),
                expected: "faithful, extended",
            }),
        }
    }
}

impl FromStr for ReservedWords {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keywords" => Ok(ReservedWords::Keywords),
            "future-reserved" => Ok(ReservedWords::FutureReserved),
            "strict" => Ok(ReservedWords::Strict),
            _ => Err(Error::InvalidOption {
                option: "reserved-words",
                value: s.to_string(),
                expected: "keywords, future-reserved, strict",
            }),
        }
    }
}

impl FromStr for TrailingLiteral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flush" => Ok(TrailingLiteral::Flush),
            "drop" => Ok(TrailingLiteral::Drop),
            _ => Err(Error::InvalidOption {
                option: "trailing-literal",
                value: s.to_string(),
                expected: "flush, drop",
            }),
        }
    }
}

impl fmt::Display for WhitespaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ReservedWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TrailingLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TokenizerOptions::default();
        assert_eq!(options.whitespace, WhitespaceMode::Faithful);
        assert_eq!(options.reserved_words, ReservedWords::Keywords);
        assert_eq!(options.trailing_literal, TrailingLiteral::Flush);
    }

    #[test]
    fn test_faithful_whitespace() {
        let mode = WhitespaceMode::Faithful;
        assert!(mode.is_whitespace(' '));
        assert!(mode.is_whitespace('\u{FEFF}'));
        assert!(!mode.is_whitespace('\t'));
        assert!(!mode.is_whitespace('\n'));
        assert!(!mode.is_whitespace('\u{0B}'));
        assert!(!mode.is_whitespace('\\'));
    }

    #[test]
    fn test_latin_small_i_with_diaeresis_is_never_whitespace() {
        assert!(!WhitespaceMode::Faithful.is_whitespace('\u{EF}'));
        assert!(!WhitespaceMode::Extended.is_whitespace('\u{EF}'));
        assert!(WhitespaceMode::Faithful.is_whitespace('\u{FEFF}'));
    }

    #[test]
    fn test_extended_whitespace() {
        let mode = WhitespaceMode::Extended;
        for ch in [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}', '\u{A0}', '\u{FEFF}', '\u{2028}'] {
            assert!(mode.is_whitespace(ch), "{ch:?} should be whitespace");
        }
        assert!(!mode.is_whitespace('a'));
        assert!(!mode.is_whitespace(';'));
    }

    #[test]
    fn test_reserved_word_sets() {
        assert!(ReservedWords::Keywords.contains("while"));
        assert!(!ReservedWords::Keywords.contains("class"));
        assert!(ReservedWords::FutureReserved.contains("class"));
        assert!(!ReservedWords::FutureReserved.contains("let"));
        assert!(ReservedWords::Strict.contains("let"));
        assert!(ReservedWords::Strict.contains("class"));
        assert!(ReservedWords::Strict.contains("while"));
        assert!(!ReservedWords::Strict.contains("foo"));
    }

    #[test]
    fn test_parse_option_names() {
        assert_eq!("extended".parse::<WhitespaceMode>().unwrap(), WhitespaceMode::Extended);
        assert_eq!(" Faithful ".parse::<WhitespaceMode>().unwrap(), WhitespaceMode::Faithful);
        assert_eq!(
            "future-reserved".parse::<ReservedWords>().unwrap(),
            ReservedWords::FutureReserved
        );
        assert_eq!("strict".parse::<ReservedWords>().unwrap(), ReservedWords::Strict);
        assert_eq!("drop".parse::<TrailingLiteral>().unwrap(), TrailingLiteral::Drop);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "tabs".parse::<WhitespaceMode>().unwrap_err();
        assert!(matches!(err, Error::InvalidOption { option: "whitespace", .. }));
        assert!("es2024".parse::<ReservedWords>().is_err());
        assert!("keep".parse::<TrailingLiteral>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in [WhitespaceMode::Faithful, WhitespaceMode::Extended] {
            assert_eq!(mode.to_string().parse::<WhitespaceMode>().unwrap(), mode);
        }
        for set in [ReservedWords::Keywords, ReservedWords::FutureReserved, ReservedWords::Strict] {
            assert_eq!(set.to_string().parse::<ReservedWords>().unwrap(), set);
        }
        for trailing in [TrailingLiteral::Flush, TrailingLiteral::Drop] {
            assert_eq!(trailing.to_string().parse::<TrailingLiteral>().unwrap(), trailing);
        }
    }
}

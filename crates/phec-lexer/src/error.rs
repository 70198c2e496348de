// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the lexer crate.
//!
//! Tokenization itself never fails; errors only come from reading sources
//! and from parsing option names.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for lexer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around tokenization
#[derive(Debug, Error)]
pub enum Error {
    /// An option was given a value it does not accept
    #[error("invalid value '{value}' for option '{option}' (expected one of: {expected})")]
    InvalidOption {
        /// Option name
        option: &'static str,
        /// Rejected value
        value: String,
        /// Accepted values, comma separated
        expected: &'static str,
    },

    /// A source file could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

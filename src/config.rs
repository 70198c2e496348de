// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Configuration management for phec.
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults
//! 2. Global file `<config dir>/phec/config.toml`
//! 3. Project file `./phec.toml`
//! 4. File given with `--config`
//! 5. `PHEC_WHITESPACE`, `PHEC_RESERVED_WORDS`, `PHEC_TRAILING_LITERAL`
//! 6. Command-line flags (applied by the caller)
//!
//! Files are TOML:
//!
//! ```toml
//! [tokenizer]
//! whitespace = "extended"
//! reserved_words = "strict"
//! trailing_literal = "flush"
//! ```

use phec_lexer::{ReservedWords, TokenizerOptions, TrailingLiteral, WhitespaceMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "phec.toml";

/// Prefix of the environment variables read by [`Config::load`].
const ENV_PREFIX: &str = "PHEC_";

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML or has unknown keys
    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An option value was rejected
    #[error(transparent)]
    Option(#[from] phec_lexer::Error),

    /// The configuration could not be rendered
    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Effective configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Options handed to every tokenizer
    pub tokenizer: TokenizerOptions,
}

/// On-disk layout; every key is optional so files only override what they name.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    tokenizer: TokenizerOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TokenizerOverrides {
    whitespace: Option<WhitespaceMode>,
    reserved_words: Option<ReservedWords>,
    trailing_literal: Option<TrailingLiteral>,
}

impl Config {
    /// Load configuration from default locations, then `extra` if given,
    /// then the environment.
    pub fn load(extra: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(global_config_path) = global_config_path() {
            if global_config_path.exists() {
                config.merge_from_file(&global_config_path)?;
            }
        }

        let project_config_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            config.merge_from_file(&project_config_path)?;
        }

        if let Some(path) = extra {
            config.merge_from_file(path)?;
        }

        config.load_from_vars(std::env::vars())?;

        Ok(config)
    }

    /// Merge configuration from a TOML file.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        self.apply(file.tokenizer);
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(())
    }

    /// Apply `PHEC_*` variables from `vars`.
    pub fn load_from_vars<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(config_key) = key.strip_prefix(ENV_PREFIX) {
                let config_key = config_key.to_lowercase().replace('_', "-");
                self.set(&config_key, &value)?;
            }
        }
        Ok(())
    }

    /// Set a configuration value by name. Unknown names are ignored.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "whitespace" => self.tokenizer.whitespace = value.parse()?,
            "reserved-words" => self.tokenizer.reserved_words = value.parse()?,
            "trailing-literal" => self.tokenizer.trailing_literal = value.parse()?,
            _ => {}
        }
        Ok(())
    }

    /// Render as TOML, in the same layout the files use.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn apply(&mut self, overrides: TokenizerOverrides) {
        if let Some(whitespace) = overrides.whitespace {
            self.tokenizer.whitespace = whitespace;
        }
        if let Some(reserved_words) = overrides.reserved_words {
            self.tokenizer.reserved_words = reserved_words;
        }
        if let Some(trailing_literal) = overrides.trailing_literal {
            self.tokenizer.trailing_literal = trailing_literal;
        }
    }
}

/// Path of the user-wide configuration file.
fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("phec").join("config.toml"))
}

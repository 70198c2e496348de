// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Phec - a tokenizer for ECMAScript-like source, written in Rust
//!
//! This is the main entry point for the phec CLI/REPL.
//!
//! ## Features
//!
//! - Token listing for files, inline code or stdin
//! - Per-kind summaries, tokenized in parallel across files
//! - Interactive REPL with tokenizer-driven highlighting and history

mod config;
mod output;
mod repl;

use clap::Parser as _;
use owo_colors::OwoColorize;
use phec_lexer::{
    ParseSummary, Parser, ReservedWords, TokenizerOptions, TracingSink, TrailingLiteral,
    WhitespaceMode,
};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::Config;
use output::ListingSink;

#[derive(clap::Parser)]
#[command(
    name = "phec",
    about = "Tokenizer for ECMAScript-like source",
    version,
    author = "Pegasus Heavy Industries"
)]
struct Cli {
    /// Source files to tokenize
    files: Vec<PathBuf>,

    /// Tokenize source given on the command line
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// Start interactive REPL
    #[arg(short = 'i', long = "interactive", alias = "repl")]
    interactive: bool,

    /// Print per-kind token counts instead of the tokens
    #[arg(short = 's', long)]
    summary: bool,

    /// Additional configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Whitespace handling: faithful or extended
    #[arg(long, value_name = "MODE")]
    whitespace: Option<WhitespaceMode>,

    /// Reserved words: keywords, future-reserved or strict
    #[arg(long = "reserved", value_name = "SET")]
    reserved_words: Option<ReservedWords>,

    /// Literal pending at end of input: flush or drop
    #[arg(long = "trailing", value_name = "MODE")]
    trailing_literal: Option<TrailingLiteral>,

    /// Print the effective configuration and exit
    #[arg(long)]
    show_config: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// Command-line flags are the last configuration layer.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(whitespace) = self.whitespace {
            config.tokenizer.whitespace = whitespace;
        }
        if let Some(reserved_words) = self.reserved_words {
            config.tokenizer.reserved_words = reserved_words;
        }
        if let Some(trailing_literal) = self.trailing_literal {
            config.tokenizer.trailing_literal = trailing_literal;
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    if cli.show_config {
        print!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let options = config.tokenizer;
    tracing::debug!(?options, "effective tokenizer options");

    if let Some(code) = &cli.eval {
        run_source("<eval>", code, options, cli.summary);
        Ok(ExitCode::SUCCESS)
    } else if !cli.files.is_empty() {
        Ok(exit_code(run_files(&cli.files, options, cli.summary)))
    } else if cli.interactive || std::io::stdin().is_terminal() {
        Ok(run_repl(options))
    } else {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        run_source("<stdin>", &source, options, cli.summary);
        Ok(ExitCode::SUCCESS)
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "phec=debug,phec_lexer=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Tokenize a single in-memory source.
fn run_source(label: &str, source: &str, options: TokenizerOptions, summary: bool) {
    if summary {
        let parser = Parser::with_options(options).with_sink(Arc::new(TracingSink));
        println!("{}", output::format_summary(label, &parser.parse(source)));
    } else {
        Parser::with_options(options)
            .with_sink(Arc::new(ListingSink))
            .parse(source);
    }
}

/// Tokenize files. Unreadable files are reported and skipped; returns false
/// if any were.
fn run_files(files: &[PathBuf], options: TokenizerOptions, summary: bool) -> bool {
    let mut failed = false;

    if summary {
        let mut labels = Vec::with_capacity(files.len());
        let mut sources = Vec::with_capacity(files.len());
        for path in files {
            match std::fs::read_to_string(path) {
                Ok(source) => {
                    labels.push(path.display().to_string());
                    sources.push(source);
                }
                Err(e) => {
                    report_error(&format!("{}: {}", path.display(), e));
                    failed = true;
                }
            }
        }

        let parser = Parser::with_options(options).with_sink(Arc::new(TracingSink));
        let summaries = parser.parse_all(&sources);

        let mut total = ParseSummary::default();
        for (label, summary) in labels.iter().zip(&summaries) {
            println!("{}", output::format_summary(label, summary));
            total.merge(summary);
        }
        if summaries.len() > 1 {
            println!("{}", output::format_summary("total", &total));
        }
    } else {
        let parser = Parser::with_options(options).with_sink(Arc::new(ListingSink));
        for path in files {
            if files.len() > 1 {
                println!("{}", format!("==> {} <==", path.display()).white().bold());
            }
            if let Err(e) = parser.parse_file(path) {
                report_error(&e.to_string());
                failed = true;
            }
        }
    }

    !failed
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Start the interactive REPL
fn run_repl(options: TokenizerOptions) -> ExitCode {
    match repl::Repl::new(options) {
        Ok(mut repl) => {
            if let Err(e) = repl.run() {
                report_error(&format!("REPL failed: {e:?}"));
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&format!("Failed to initialize REPL: {e:?}"));
            ExitCode::FAILURE
        }
    }
}

fn report_error(message: &str) {
    eprintln!("{}: {}", "Error".red().bold(), message);
}

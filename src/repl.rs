// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive tokenizer REPL.
//!
//! Every line typed is run through the tokenizer and its tokens are listed.

use owo_colors::OwoColorize;
use phec_lexer::lexer::tables;
use phec_lexer::{Parser, Tokenizer, TokenizerOptions};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use crate::output::{self, ListingSink};

/// REPL configuration constants
const HISTORY_FILE: &str = ".phec_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
    Options,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            "options" | "o" => Some((ReplCommand::Options, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Tokenize a file"),
            (".options", "Show the active tokenizer options"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints and
/// tokenizer-driven highlighting
struct PhecHelper {
    options: TokenizerOptions,
    /// Reserved words and REPL commands for completion
    words: Vec<&'static str>,
}

impl PhecHelper {
    fn new(options: TokenizerOptions) -> Self {
        let mut words: Vec<&'static str> = tables::KEYWORDS
            .iter()
            .chain(tables::FUTURE_RESERVED_WORDS)
            .chain(tables::STRICT_RESERVED_WORDS)
            .copied()
            .filter(|word| options.reserved_words.contains(word))
            .collect();
        words.extend(
            ReplCommand::all_commands()
                .iter()
                .filter_map(|&(usage, _)| usage.split_whitespace().next()),
        );
        words.sort_unstable();

        Self { options, words }
    }

    fn current_word(line: &str, pos: usize) -> (usize, &str) {
        let start = line[..pos]
            .rfind(|c: char| !c.is_alphanumeric() && c != '_' && c != '.')
            .map(|i| i + 1)
            .unwrap_or(0);
        (start, &line[start..pos])
    }
}

impl Completer for PhecHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (_, word) = Self::current_word(line, pos);
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|candidate| candidate.starts_with(word))
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for PhecHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let (_, word) = Self::current_word(line, pos);
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|candidate| candidate.starts_with(word) && candidate.len() > word.len())
            .map(|candidate| (&candidate[word.len()..]).dimmed().to_string())
    }
}

impl Highlighter for PhecHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }
        Cow::Owned(highlight_source(line, self.options))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Colors each token of `line` the way the tokenizer classifies it, leaving
/// skipped characters as they are.
fn highlight_source(line: &str, options: TokenizerOptions) -> String {
    let mut result = String::with_capacity(line.len() * 2);
    let mut last = 0;

    for token in Tokenizer::with_options(line, options) {
        result.push_str(&line[last..token.span.start]);
        result.push_str(&output::paint(token.kind, token.literal));
        last = token.span.end;
    }
    result.push_str(&line[last..]);

    result
}

impl Validator for PhecHelper {}

impl Helper for PhecHelper {}

/// The interactive tokenizer REPL
pub struct Repl {
    parser: Parser,
    editor: Editor<PhecHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(options: TokenizerOptions) -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(PhecHelper::new(options)));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("phec")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let _ = editor.load_history(&history_path);

        Ok(Self {
            parser: Parser::with_options(options).with_sink(Arc::new(ListingSink)),
            editor,
            history_path,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(&line) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.tokenize_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(err) = self.editor.save_history(&self.history_path) {
            tracing::warn!("Could not save history to {}: {}", self.history_path.display(), err);
        }

        println!();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Phec Tokenizer".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        let options = self.parser.options();
        println!(
            "  {}",
            format!(
                "whitespace={} reserved={} trailing={}",
                options.whitespace, options.reserved_words, options.trailing_literal
            )
            .dimmed()
        );
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn format_prompt(&self) -> String {
        format!("{} ", "phec>".bright_green().bold())
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                println!(
                    "{} {}",
                    "phec".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
                CommandResult::Continue
            }
            ReplCommand::Load => {
                match arg {
                    Some(path) => self.load_file(path),
                    None => eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    ),
                }
                CommandResult::Continue
            }
            ReplCommand::Options => {
                let options = self.parser.options();
                println!("{:18} {}", "whitespace".cyan(), options.whitespace);
                println!("{:18} {}", "reserved_words".cyan(), options.reserved_words);
                println!("{:18} {}", "trailing_literal".cyan(), options.trailing_literal);
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!("  {:16} {}", "Ctrl+C".yellow(), "Cancel current input".dimmed());
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!("  {:16} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
    }

    fn load_file(&mut self, path: &str) {
        match self.parser.parse_file(path) {
            Ok(summary) => println!("{}", output::format_summary(path, &summary)),
            Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
        }
    }

    fn tokenize_and_print(&mut self, input: &str) {
        let summary = self.parser.parse(input);
        tracing::debug!(tokens = summary.total(), "tokenized REPL input");
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

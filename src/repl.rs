// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive tokenizer shell.
//!
//! Each entered line is run through the lexer and echoed back with its
//! tokens coloured by kind. Dot-commands control the session.

use inflight_html::RuleSet;
use inflight_js::{TokenKind, keywords, tokenize};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::Result;

const HISTORY_FILE: &str = ".inflight_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
    Rules,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;
        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        let command = match cmd.as_str() {
            "help" | "h" | "?" => ReplCommand::Help,
            "exit" | "quit" | "q" => ReplCommand::Exit,
            "clear" | "cls" => ReplCommand::Clear,
            "version" | "v" => ReplCommand::Version,
            "load" | "l" => ReplCommand::Load,
            "rules" | "r" => ReplCommand::Rules,
            _ => return None,
        };
        Some((command, arg))
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Tokenize a JavaScript file"),
            (".rules", "List custom attribute rules"),
        ]
    }
}

/// Completion, hints, highlighting and validation for rustyline
struct InflightHelper {
    words: Vec<&'static str>,
}

impl InflightHelper {
    fn new() -> Self {
        let mut words: Vec<&'static str> = keywords::iter().map(|k| k.as_str()).collect();
        words.extend([".help", ".exit", ".clear", ".version", ".load", ".rules"]);
        words.sort_unstable();
        Self { words }
    }

    fn candidates<'w>(&'w self, word: &'w str) -> impl Iterator<Item = &'static str> + 'w {
        self.words
            .iter()
            .copied()
            .filter(move |candidate| candidate.starts_with(word) && candidate.len() > word.len())
    }

    /// The dimmed remainder of the first candidate for `word`.
    fn completion_hint(&self, word: &str) -> Option<String> {
        if word.len() < 2 {
            return None;
        }
        self.candidates(word).next().map(|candidate| {
            let rest = &candidate[word.len()..];
            rest.dimmed().to_string()
        })
    }
}

/// Byte offset where the word ending at `line`'s end starts. Always a char
/// boundary.
fn word_start(line: &str) -> usize {
    line.char_indices()
        .rev()
        .find(|&(_, c)| !c.is_alphanumeric() && c != '_' && c != '$' && c != '.')
        .map_or(0, |(i, c)| i + c.len_utf8())
}

impl Completer for InflightHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(&line[..pos]);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches = self
            .candidates(word)
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate[word.len()..].to_string(),
            })
            .collect();
        Ok((pos, matches))
    }
}

impl Hinter for InflightHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }
        self.completion_hint(&line[word_start(line)..])
    }
}

impl Highlighter for InflightHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }
        let result = tokenize(line.as_bytes());
        let mut painted: String = result.tokens.iter().map(commands::paint_token).collect();
        let consumed: usize = result.tokens.iter().map(|t| t.span.len()).sum();
        if let Some(rest) = line.get(consumed..) {
            painted.push_str(&rest.red().to_string());
        }
        Cow::Owned(painted)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for InflightHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_open_block_comment(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

impl Helper for InflightHelper {}

/// Returns true if the input stops inside an unterminated `/* ...` comment.
fn is_open_block_comment(input: &str) -> bool {
    let result = tokenize(input.as_bytes());
    result.error
        && result
            .tokens
            .last()
            .is_some_and(|t| t.kind == TokenKind::Comment && t.text.starts_with(b"/*"))
}

/// The interactive tokenizer shell
pub struct Repl {
    editor: Editor<InflightHelper, DefaultHistory>,
    history_path: PathBuf,
    rules: RuleSet,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(rules: RuleSet) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(InflightHelper::new()));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inflight")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = editor.load_history(&history_path);

        Ok(Self {
            editor,
            history_path,
            rules,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            let prompt = format!("{} ", "inflight>".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    print_tokens(line.as_bytes());
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
                    let _ = self.editor.save_history(&self.history_path);
                    return Err(err.into());
                }
            }
        }

        if let Err(err) = self.editor.save_history(&self.history_path) {
            tracing::debug!(path = %self.history_path.display(), %err, "could not save history");
        }
        Ok(())
    }

    fn print_banner(&self) {
        println!();
        println!(
            "  {} {}{}",
            "inflight".bright_cyan().bold(),
            "v".dimmed(),
            env!("CARGO_PKG_VERSION").bright_yellow()
        );
        println!("  {}", "JavaScript tokenizer shell".dimmed());
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => {
                println!(
                    "{} {}",
                    "inflight".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
            }
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(Path::new(path)),
                None => eprintln!(
                    "{}: {} {}",
                    "Error".red().bold(),
                    ".load".cyan(),
                    "requires a file path".dimmed()
                ),
            },
            ReplCommand::Rules => commands::rules(&self.rules),
        }
        CommandResult::Continue
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();
        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }
        println!();
        println!("{}", "Anything else is tokenized and echoed back.".dimmed());
        println!();
    }

    fn load_file(&self, path: &Path) {
        match commands::read_file(path) {
            Ok(source) => print_tokens(&source),
            Err(err) => eprintln!("{}: {}", "Error".red().bold(), err),
        }
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

fn print_tokens(source: &[u8]) {
    let result = tokenize(source);
    let painted: String = result.tokens.iter().map(commands::paint_token).collect();
    println!("{painted}");

    let significant = result.significant().count();
    print!("{}", format!("{} tokens, {} significant", result.tokens.len(), significant).dimmed());
    match commands::error_offset(&result) {
        Some(offset) => println!(", {}", format!("malformed token at byte {offset}").red()),
        None => println!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_command_parse() {
        assert!(matches!(
            ReplCommand::parse(".help"),
            Some((ReplCommand::Help, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".EXIT"),
            Some((ReplCommand::Exit, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".load  test.js "),
            Some((ReplCommand::Load, Some("test.js")))
        ));
        assert!(matches!(
            ReplCommand::parse(".rules"),
            Some((ReplCommand::Rules, None))
        ));
        assert!(ReplCommand::parse(".bogus").is_none());
        assert!(ReplCommand::parse("a.b").is_none());
    }

    #[test]
    fn test_open_block_comment() {
        assert!(is_open_block_comment("a /* still"));
        assert!(!is_open_block_comment("a /* done */"));
        assert!(!is_open_block_comment("'open string"));
    }

    #[test]
    fn test_candidates() {
        let helper = InflightHelper::new();
        let found: Vec<_> = helper.candidates("ty").collect();
        assert_eq!(found, vec!["typeof"]);
        assert!(helper.candidates(".ru").any(|c| c == ".rules"));
        assert_eq!(helper.candidates("typeof").count(), 0);
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("a = ty"), 4);
        assert_eq!(word_start(".lo"), 0);
        assert_eq!(word_start("x"), 0);
        assert_eq!(word_start("a€"), 4);
        assert_eq!(word_start("1 €ty"), 5);
        assert_eq!(word_start("(€ty"), 4);
        assert_eq!(word_start("ñ.lo"), 0);
    }

    #[test]
    fn test_hint_slices_on_char_boundaries() {
        let helper = InflightHelper::new();
        for line in ["a€", "x = «ty", "€", "ñ.lo"] {
            let word = &line[word_start(line)..];
            let _ = helper.candidates(word).count();
        }
        let line = "x = «ty";
        assert_eq!(&line[word_start(line)..], "ty");
        assert_eq!(
            helper.completion_hint(&line[word_start(line)..]),
            Some("peof".dimmed().to_string())
        );
        assert_eq!(helper.completion_hint("t"), None);
    }
}

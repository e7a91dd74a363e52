//! CLI argument parsing for inflight.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::{InflightError, Result};

/// inflight - JavaScript tokenizer and HTML resource classifier for rewriting filters
#[derive(Parser, Debug)]
#[command(name = "inflight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, env = "INFLIGHT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenize a JavaScript file
    #[command(alias = "tokenize")]
    Lex(LexArgs),

    /// Classify the resource attribute of an HTML element
    #[command(alias = "scan")]
    Classify(ClassifyArgs),

    /// List the configured custom attribute rules
    Rules,
}

#[derive(Args, Debug, Clone)]
pub struct LexArgs {
    /// JavaScript file to tokenize
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print per-kind token counts instead of every token
    #[arg(short, long)]
    pub summary: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Tag name, e.g. `link`
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Attributes in declaration order
    #[arg(value_name = "NAME=VALUE")]
    pub attributes: Vec<String>,

    /// Mark an attribute as having failed to decode
    #[arg(long, value_name = "NAME")]
    pub tainted: Vec<String>,
}

/// One attribute given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeArg {
    pub name: String,
    pub value: Option<String>,
}

impl AttributeArg {
    /// Parses `NAME` or `NAME=VALUE`. Surrounding quotes on the value are
    /// stripped.
    pub fn parse(arg: &str) -> Result<Self> {
        let (name, value) = match arg.split_once('=') {
            Some((name, value)) => (name.trim(), Some(unquote(value))),
            None => (arg.trim(), None),
        };
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(InflightError::InvalidAttribute(arg.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            value: value.map(str::to_string),
        })
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

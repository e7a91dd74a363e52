// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! inflight - inspect what an in-flight rewriting filter sees.
//!
//! This is the main entry point for the inflight CLI/REPL.
//!
//! ## Features
//!
//! - Tokenize JavaScript files with the permissive lexer
//! - Classify HTML elements by the resource they reference
//! - Interactive tokenizer shell with coloured output and history

mod cli;
mod commands;
mod config;
mod error;
mod repl;

use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The log level may come from the config, so warnings about its
    // contents are emitted once the subscriber is installed.
    let config = Config::load(cli.config.as_deref());
    let level = match (&config, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Ok(config), false) => config.log.level.clone(),
        (Err(_), false) => config::LogConfig::default().level,
    };
    init_tracing(&level);

    let result = config.and_then(|config| run(&cli, config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {}", "Error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, config: Config) -> Result<()> {
    config.warn_unmatchable_rules();
    tracing::debug!(rules = config.rules.len(), "configuration loaded");

    match &cli.command {
        Some(Commands::Lex(args)) => commands::lex(args),
        Some(Commands::Classify(args)) => commands::classify(args, &config.rules),
        Some(Commands::Rules) => {
            commands::rules(&config.rules);
            Ok(())
        }
        None => repl::Repl::new(config.rules)?.run(),
    }
}

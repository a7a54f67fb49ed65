//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Lexi
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `resolve`: Look up a key for a language code and print the rendered text
//! - `check`: Run dictionary checks (duplicate keys, missing locales, etc.)
//! - `init`: Initialize lexi configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Dictionary file path (overrides config file)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// The dictionary key to look up
    pub key: String,

    /// Language code to resolve for (default: the configured default locale)
    #[arg(long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a key for a language code and print the rendered text
    Resolve(ResolveCommand),
    /// Check the dictionary for issues (duplicate keys, missing locales, untranslated values)
    Check(CheckCommand),
    /// Initialize a new .lexirc.json configuration file
    Init,
}

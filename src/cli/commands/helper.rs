use std::env;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::dictionary::{LoadResult, load_dictionary};
use crate::issues::{Issue, Severity};

/// Everything a command needs: the effective config and the loaded dictionary.
pub struct CommandContext {
    pub config: Config,
    pub load: LoadResult,
}

/// Load config and dictionary for a command run.
///
/// Config is discovered by walking up from the current directory; CLI flags
/// override the file values before validation.
pub fn load_context(common: &CommonArgs) -> Result<CommandContext> {
    let cwd = env::current_dir().context("Failed to get current directory")?;

    let mut config = load_config(&cwd)?.config;

    if let Some(dictionary) = &common.dictionary {
        config.dictionary = dictionary.to_string_lossy().into_owned();
    }
    if let Some(default_locale) = &common.default_locale {
        config.default_locale = default_locale.clone();
    }
    config.validate()?;

    let dict_path = cwd.join(&config.dictionary);
    let load = load_dictionary(&dict_path)?;

    Ok(CommandContext { config, load })
}

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    keys_checked: usize,
    locales_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    CommandResult {
        summary,
        error_count,
        exit_on_errors,
        issues,
        keys_checked,
        locales_checked,
    }
}

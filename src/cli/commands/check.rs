use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::{finish, load_context},
    {CommandResult, CommandSummary},
};

use crate::{
    issues::Issue,
    rules::{
        duplicate_key::check_duplicate_keys, empty_value::check_empty_values,
        missing_locale::check_missing_locales, unknown_locale::check_unknown_locales,
        untranslated::check_untranslated,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Duplicate,
    MissingLocale,
    Empty,
    UnknownLocale,
    Untranslated,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Duplicate,
            CheckRule::MissingLocale,
            CheckRule::Empty,
            CheckRule::UnknownLocale,
            CheckRule::Untranslated,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = load_context(&cmd.common)?;
    let dict = &ctx.load.dictionary;

    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::Duplicate => {
                let issues = check_duplicate_keys(dict.file_path(), &ctx.load.scanned_keys);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateKey));
            }
            CheckRule::MissingLocale => {
                let issues = check_missing_locales(dict, &ctx.config.locales);
                all_issues.extend(issues.into_iter().map(Issue::MissingLocale));
            }
            CheckRule::Empty => {
                let issues = check_empty_values(dict);
                all_issues.extend(issues.into_iter().map(Issue::EmptyValue));
            }
            CheckRule::UnknownLocale => {
                let issues = check_unknown_locales(dict, &ctx.config.locales);
                all_issues.extend(issues.into_iter().map(Issue::UnknownLocale));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated(dict, &ctx.config.default_locale);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
        }
    }

    // Entries rejected at load time are always reported, whatever the
    // rule selection.
    all_issues.extend(ctx.load.invalid.iter().cloned().map(Issue::InvalidEntry));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        dict.len(),
        ctx.config.locales.len(),
        true,
    ))
}

use anyhow::Result;

use super::super::args::ResolveCommand;
use super::{
    helper::load_context,
    {CommandResult, CommandSummary, ResolveSummary},
};

/// Look up a key for a language code.
///
/// The lookup never fails: an unknown key echoes back as its own text and a
/// missing language variant renders as a blank. Both still exit 0.
pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let ctx = load_context(&cmd.common)?;

    let lang = cmd
        .lang
        .unwrap_or_else(|| ctx.config.default_locale.clone());
    let resolution = ctx.load.dictionary.resolution(&cmd.key, &lang);

    Ok(CommandResult {
        summary: CommandSummary::Resolve(ResolveSummary {
            key: cmd.key,
            lang,
            resolution,
        }),
        error_count: 0,
        exit_on_errors: true,
        issues: Vec::new(),
        keys_checked: 0,
        locales_checked: 0,
    })
}

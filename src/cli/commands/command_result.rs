use crate::dictionary::Resolution;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Resolve(ResolveSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub key: String,
    pub lang: String,
    pub resolution: Resolution,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lexi commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of dictionary keys that were checked.
    pub keys_checked: usize,
    /// Number of configured locales the keys were checked against.
    pub locales_checked: usize,
}

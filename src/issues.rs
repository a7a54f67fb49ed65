//! Issue types for dictionary check results.
//!
//! Each issue is self-contained with everything the reporter needs: the
//! entry context (location, key, value, raw source line), a severity, and
//! a rule identifier.

use enum_dispatch::enum_dispatch;

use crate::dictionary::{DictContext, DictLocation};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateKey,
    InvalidEntry,
    MissingLocale,
    EmptyValue,
    UnknownLocale,
    Untranslated,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::InvalidEntry => write!(f, "invalid-entry"),
            Rule::MissingLocale => write!(f, "missing-locale"),
            Rule::EmptyValue => write!(f, "empty-value"),
            Rule::UnknownLocale => write!(f, "unknown-locale"),
            Rule::Untranslated => write!(f, "untranslated"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Top-level key defined more than once in the dictionary file.
///
/// Duplicate definitions are a data-entry error: the later definition
/// silently shadows the earlier one when the JSON is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    /// Context at the redefinition site.
    pub context: DictContext,
    /// Line of the first definition.
    pub first_line: usize,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateKey
    }
}

/// Entry whose value is not an object of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntryIssue {
    pub context: DictContext,
    /// Why the entry was rejected.
    pub reason: String,
}

impl InvalidEntryIssue {
    pub fn new(
        location: DictLocation,
        key: impl Into<String>,
        source_line: impl Into<String>,
        reason: String,
    ) -> Self {
        Self {
            context: DictContext::new(location, key, "", source_line),
            reason,
        }
    }

    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::InvalidEntry
    }
}

/// Entry missing one or more of the configured locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLocaleIssue {
    pub context: DictContext,
    /// Configured locales absent from the entry, in config order.
    pub missing_in: Vec<String>,
}

impl MissingLocaleIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingLocale
    }
}

/// Locale present on the entry with an empty string value.
///
/// An empty value is valid data (it renders as a blank) but usually means
/// the translation was never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyValueIssue {
    pub context: DictContext,
    /// The locale whose value is empty.
    pub locale: String,
}

impl EmptyValueIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyValue
    }
}

/// Entry carries a language code not declared in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocaleIssue {
    pub context: DictContext,
    /// The undeclared code.
    pub locale: String,
}

impl UnknownLocaleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownLocale
    }
}

/// Value identical to the default locale (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: DictContext,
    /// The default (authoring) locale code.
    pub default_locale: String,
    /// Locales where the value is identical to the default, sorted.
    pub identical_in: Vec<String>,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A dictionary issue found during a check run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateKey(DuplicateKeyIssue),
    InvalidEntry(InvalidEntryIssue),
    MissingLocale(MissingLocaleIssue),
    EmptyValue(EmptyValueIssue),
    UnknownLocale(UnknownLocaleIssue),
    Untranslated(UntranslatedIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DuplicateKey(_) => DuplicateKeyIssue::severity(),
            Issue::InvalidEntry(_) => InvalidEntryIssue::severity(),
            Issue::MissingLocale(_) => MissingLocaleIssue::severity(),
            Issue::EmptyValue(_) => EmptyValueIssue::severity(),
            Issue::UnknownLocale(_) => UnknownLocaleIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::DuplicateKey(_) => DuplicateKeyIssue::rule(),
            Issue::InvalidEntry(_) => InvalidEntryIssue::rule(),
            Issue::MissingLocale(_) => MissingLocaleIssue::rule(),
            Issue::EmptyValue(_) => EmptyValueIssue::rule(),
            Issue::UnknownLocale(_) => UnknownLocaleIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// The entry context this issue points at.
    fn context(&self) -> &DictContext;

    /// Primary message to display (usually the key).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateKeyIssue {
    fn context(&self) -> &DictContext {
        &self.context
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("first defined at line {}", self.first_line))
    }

    fn hint(&self) -> Option<&str> {
        Some("keep one definition per key and merge the language values")
    }
}

impl Report for InvalidEntryIssue {
    fn context(&self) -> &DictContext {
        &self.context
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.reason.clone())
    }
}

impl Report for MissingLocaleIssue {
    fn context(&self) -> &DictContext {
        &self.context
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.context.value,
            self.missing_in.join(", ")
        ))
    }
}

impl Report for EmptyValueIssue {
    fn context(&self) -> &DictContext {
        &self.context
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("empty value for '{}'", self.locale))
    }
}

impl Report for UnknownLocaleIssue {
    fn context(&self) -> &DictContext {
        &self.context
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") code '{}' is not declared in the config",
            self.context.value, self.locale
        ))
    }
}

impl Report for UntranslatedIssue {
    fn context(&self) -> &DictContext {
        &self.context
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") identical in: {}",
            self.context.value,
            self.identical_in.join(", ")
        ))
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let a = &self.context().location;
        let b = &other.context().location;

        a.file_path
            .cmp(&b.file_path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.col.cmp(&b.col))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================

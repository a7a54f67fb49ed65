//! Detect values identical to the default locale's value.
//!
//! An identical value often means the translator copied the source text
//! over as a placeholder. Values with no alphabetic characters (numbers,
//! separators, symbols) legitimately read the same in every language and
//! are skipped.

use crate::dictionary::Dictionary;
use crate::issues::UntranslatedIssue;
use crate::utils::contains_alphabetic;

/// Report entries whose non-default values equal the default locale's value.
pub fn check_untranslated(dict: &Dictionary, default_locale: &str) -> Vec<UntranslatedIssue> {
    let mut issues = Vec::new();

    for entry in dict.entries() {
        let Some(reference) = entry.get(default_locale) else {
            continue;
        };
        if !contains_alphabetic(reference) {
            continue;
        }

        let identical_in: Vec<String> = entry
            .langs()
            .into_iter()
            .filter(|lang| *lang != default_locale && entry.get(lang) == Some(reference))
            .map(str::to_string)
            .collect();

        if !identical_in.is_empty() {
            issues.push(UntranslatedIssue {
                context: entry.context_with(reference),
                default_locale: default_locale.to_string(),
                identical_in,
            });
        }
    }

    issues.sort_by(|a, b| {
        a.context
            .location
            .line
            .cmp(&b.context.location.line)
            .then_with(|| a.context.key.cmp(&b.context.key))
    });
    issues
}

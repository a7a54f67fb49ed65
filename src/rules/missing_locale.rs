//! Detect entries missing a configured language code.
//!
//! A missing code is worse than an empty value: the lookup returns nothing
//! at all and the UI renders a blank with no trace in the data.

use crate::dictionary::Dictionary;
use crate::issues::MissingLocaleIssue;

/// Report every entry that lacks one or more of the configured locales.
pub fn check_missing_locales(dict: &Dictionary, locales: &[String]) -> Vec<MissingLocaleIssue> {
    let mut issues = Vec::new();

    for entry in dict.entries() {
        let missing_in: Vec<String> = locales
            .iter()
            .filter(|locale| entry.get(locale).is_none())
            .cloned()
            .collect();

        if !missing_in.is_empty() {
            // Show the value from the first code the entry does have.
            let display_value = entry
                .langs()
                .first()
                .and_then(|lang| entry.get(lang))
                .unwrap_or("")
                .to_string();

            issues.push(MissingLocaleIssue {
                context: entry.context_with(display_value),
                missing_in,
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

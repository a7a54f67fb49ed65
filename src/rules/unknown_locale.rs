//! Detect language codes the config does not declare.
//!
//! A value under an undeclared code is unreachable through the configured
//! locales, so it is probably a typo ("ne" for "en") or leftover data.

use crate::dictionary::Dictionary;
use crate::issues::UnknownLocaleIssue;

/// Report every (key, locale) pair whose code is not in the configured list.
pub fn check_unknown_locales(dict: &Dictionary, locales: &[String]) -> Vec<UnknownLocaleIssue> {
    let mut issues = Vec::new();

    for entry in dict.entries() {
        for lang in entry.langs() {
            if !locales.iter().any(|locale| locale == lang) {
                let value = entry.get(lang).unwrap_or("").to_string();
                issues.push(UnknownLocaleIssue {
                    context: entry.context_with(value),
                    locale: lang.to_string(),
                });
            }
        }
    }

    issues.sort_by(|a, b| {
        a.context
            .location
            .line
            .cmp(&b.context.location.line)
            .then_with(|| a.context.key.cmp(&b.context.key))
            .then_with(|| a.locale.cmp(&b.locale))
    });
    issues
}

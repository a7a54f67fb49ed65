/// Check if a string contains at least one alphabetic character.
///
/// Used to decide whether a value is worth checking for translation:
/// numbers, punctuation and symbols read the same in every language.
/// Covers all Unicode scripts, not just ASCII.
///
/// # Examples
///
/// ```
/// use lexi::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Search"));
/// assert!(contains_alphabetic("সার্চ"));
/// assert!(contains_alphabetic("v1.2"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(s: &str) -> bool {
    s.chars().any(|c| c.is_alphabetic())
}

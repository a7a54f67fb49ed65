//! Check rules over a loaded dictionary.
//!
//! Each rule is a pure function from the dictionary (or the raw key scan)
//! to a list of issues, sorted by line then key for stable output.
//!
//! ## Module structure
//!
//! - `duplicate_key`: top-level keys defined more than once in the file
//! - `missing_locale`: entries missing a configured language code
//! - `empty_value`: entries carrying an empty string for a code
//! - `unknown_locale`: entries carrying a code the config does not declare
//! - `untranslated`: values identical to the default locale's value

pub mod duplicate_key;
pub mod empty_value;
pub mod missing_locale;
pub mod unknown_locale;
pub mod untranslated;

pub use duplicate_key::check_duplicate_keys;
pub use empty_value::check_empty_values;
pub use missing_locale::check_missing_locales;
pub use unknown_locale::check_unknown_locales;
pub use untranslated::check_untranslated;

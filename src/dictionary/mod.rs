//! The translation table and lookup contract.
//!
//! A [`Dictionary`] is loaded once from a JSON file at startup and never
//! mutated afterwards, so shared references can be read from any number of
//! callers without locking.

use std::collections::HashMap;

pub mod parser;

pub use parser::{LoadResult, load_dictionary};

// ============================================================
// Locations and Contexts
// ============================================================

/// A position inside the dictionary file (1-based line and column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl DictLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Context for reporting an issue against a dictionary entry.
///
/// Carries the raw source line so the reporter can show the offending text
/// with a caret, the same way compiler diagnostics do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictContext {
    pub location: DictLocation,
    pub key: String,
    pub value: String,
    pub source_line: String,
}

impl DictContext {
    pub fn new(
        location: DictLocation,
        key: impl Into<String>,
        value: impl Into<String>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
            source_line: source_line.into(),
        }
    }
}

// ============================================================
// Entries
// ============================================================

/// A single dictionary entry: one key with its per-language strings.
#[derive(Debug, Clone)]
pub struct Entry {
    pub key: String,
    /// Language code -> stored string. An empty string is a valid
    /// (untranslated) value and is distinct from an absent code.
    pub values: HashMap<String, String>,
    /// Where the key is defined in the dictionary file.
    pub location: DictLocation,
    /// Raw text of the line the key is defined on.
    pub source_line: String,
}

impl Entry {
    /// Get the stored string for a language code, if the code exists.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.values.get(lang).map(String::as_str)
    }

    /// Language codes present on this entry, sorted for deterministic output.
    pub fn langs(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.values.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    /// Build a report context for this entry with the given display value.
    pub fn context_with(&self, value: impl Into<String>) -> DictContext {
        DictContext::new(
            self.location.clone(),
            self.key.clone(),
            value,
            self.source_line.clone(),
        )
    }
}

// ============================================================
// Resolution
// ============================================================

/// Outcome of a lookup, for callers that need to know which case occurred.
///
/// [`Dictionary::resolve`] collapses this to the plain lookup contract;
/// the CLI `resolve` command uses the full classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The key exists and has a stored string for the requested language
    /// (possibly empty).
    Translated(String),
    /// The key is not in the table; the key itself is the rendered text.
    KeyFallback(String),
    /// The key exists but carries no value for the requested language.
    Missing,
}

impl Resolution {
    /// The text a caller should render: the stored string, the key itself,
    /// or a blank for a missing language variant. Never a failure.
    pub fn rendered(&self) -> &str {
        match self {
            Resolution::Translated(value) => value,
            Resolution::KeyFallback(key) => key,
            Resolution::Missing => "",
        }
    }
}

// ============================================================
// Dictionary
// ============================================================

/// The translation table: key -> (language code -> string).
///
/// Immutable after load; exposes no mutating API.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    file_path: String,
    entries: HashMap<String, Entry>,
}

impl Dictionary {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            entries: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, entry: Entry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Path of the file this dictionary was loaded from.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys as an iterator (unordered; callers sort as needed).
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// All entries as an iterator (unordered; callers sort as needed).
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a key for a language code.
    ///
    /// Total over its input domain and never fails:
    ///
    /// 1. Unknown key -> `Some(key)` unchanged, so callers can pass arbitrary
    ///    labels through safely (identity fallback).
    /// 2. Known key without a value for `lang` -> `None`; callers must treat
    ///    a missing translation as a blank render, not an error.
    /// 3. Otherwise -> the stored string, including the empty string.
    pub fn resolve<'a>(&'a self, key: &'a str, lang: &str) -> Option<&'a str> {
        match self.entries.get(key) {
            Some(entry) => entry.get(lang),
            None => Some(key),
        }
    }

    /// Resolve a key and report which of the three lookup cases occurred.
    pub fn resolution(&self, key: &str, lang: &str) -> Resolution {
        match self.entries.get(key) {
            Some(entry) => match entry.get(lang) {
                Some(value) => Resolution::Translated(value.to_string()),
                None => Resolution::Missing,
            },
            None => Resolution::KeyFallback(key.to_string()),
        }
    }
}

// ============================================================
// Tests
// ============================================================

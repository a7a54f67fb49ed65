//! Dictionary file loading.
//!
//! The file is parsed twice: `serde_json` provides the data, and a raw-text
//! scan provides what the parsed value cannot — the line/column of every
//! top-level key occurrence, including duplicates that the JSON object
//! representation silently collapses.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::dictionary::{DictLocation, Dictionary, Entry};
use crate::issues::InvalidEntryIssue;

/// A top-level key occurrence found by the raw-text scanner, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedKey {
    pub key: String,
    pub line: usize,
    pub col: usize,
    /// Raw text of the line the key appears on.
    pub source_line: String,
}

/// Result of loading a dictionary file.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub dictionary: Dictionary,
    /// Every top-level key occurrence, duplicates included.
    pub scanned_keys: Vec<ScannedKey>,
    /// Entries excluded from the dictionary because of their shape.
    pub invalid: Vec<InvalidEntryIssue>,
}

/// Load a dictionary from a JSON file.
///
/// IO and JSON syntax errors are hard errors; a malformed entry inside an
/// otherwise valid file is excluded and reported via [`LoadResult::invalid`]
/// so the rest of the dictionary stays usable.
pub fn load_dictionary(path: &Path) -> Result<LoadResult> {
    if !path.exists() {
        bail!(
            "Dictionary file '{}' does not exist.\n\
             Hint: Check your .lexirc.json 'dictionary' setting.",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dictionary file: {:?}", path))?;

    let Value::Object(root) = json else {
        bail!(
            "Dictionary file '{}' must contain a JSON object at the top level.",
            path.display()
        );
    };

    let file_path = path.to_string_lossy().to_string();
    let scanned_keys = scan_top_level_keys(&content);
    let mut dictionary = Dictionary::new(file_path.clone());
    let mut invalid = Vec::new();

    for (key, value) in &root {
        let (location, source_line) = key_location(&file_path, &scanned_keys, key);

        match value {
            Value::Object(langs) if !langs.is_empty() => {
                match entry_values(langs) {
                    Ok(values) => dictionary.insert(Entry {
                        key: key.clone(),
                        values,
                        location,
                        source_line,
                    }),
                    Err(reason) => invalid.push(InvalidEntryIssue::new(
                        location,
                        key,
                        source_line,
                        reason,
                    )),
                }
            }
            Value::Object(_) => invalid.push(InvalidEntryIssue::new(
                location,
                key,
                source_line,
                "entry has no language codes".to_string(),
            )),
            other => invalid.push(InvalidEntryIssue::new(
                location,
                key,
                source_line,
                format!("entry value is {}, expected an object of strings", json_type(other)),
            )),
        }
    }

    Ok(LoadResult {
        dictionary,
        scanned_keys,
        invalid,
    })
}

fn entry_values(
    langs: &serde_json::Map<String, Value>,
) -> std::result::Result<std::collections::HashMap<String, String>, String> {
    let mut values = std::collections::HashMap::with_capacity(langs.len());
    for (lang, value) in langs {
        match value {
            Value::String(s) => {
                values.insert(lang.clone(), s.clone());
            }
            other => {
                return Err(format!(
                    "value for code '{}' is {}, expected a string",
                    lang,
                    json_type(other)
                ));
            }
        }
    }
    Ok(values)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Location of a key's first definition; falls back to 1:1 if the scanner
/// did not see it (exotic escapes in the key).
fn key_location(
    file_path: &str,
    scanned: &[ScannedKey],
    key: &str,
) -> (DictLocation, String) {
    scanned
        .iter()
        .find(|sk| sk.key == key)
        .map(|sk| {
            (
                DictLocation::new(file_path, sk.line, sk.col),
                sk.source_line.clone(),
            )
        })
        .unwrap_or_else(|| (DictLocation::new(file_path, 1, 1), String::new()))
}

/// Scan the raw JSON text for top-level object keys.
///
/// Tracks string/escape state and brace depth; a string directly inside the
/// root object that is followed by `:` is a top-level key. Columns are
/// 1-based character positions of the opening quote.
pub fn scan_top_level_keys(content: &str) -> Vec<ScannedKey> {
    let lines: Vec<&str> = content.lines().collect();
    let mut keys = Vec::new();

    let mut depth: usize = 0;
    let mut line: usize = 1;
    let mut col: usize = 0;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
            col = 0;
            continue;
        }
        col += 1;

        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '"' => {
                let key_line = line;
                let key_col = col;
                let mut text = String::new();
                let mut escaped = false;

                while let Some(sc) = chars.next() {
                    if sc == '\n' {
                        line += 1;
                        col = 0;
                        continue;
                    }
                    col += 1;
                    if escaped {
                        escaped = false;
                        text.push(sc);
                        continue;
                    }
                    match sc {
                        '\\' => escaped = true,
                        '"' => break,
                        _ => text.push(sc),
                    }
                }

                // A key is a string followed (modulo whitespace) by ':'.
                while let Some(&next) = chars.peek() {
                    if !next.is_whitespace() {
                        break;
                    }
                    chars.next();
                    if next == '\n' {
                        line += 1;
                        col = 0;
                    } else {
                        col += 1;
                    }
                }

                if depth == 1 && chars.peek() == Some(&':') {
                    let source_line = lines
                        .get(key_line - 1)
                        .map(|l| (*l).to_string())
                        .unwrap_or_default();
                    keys.push(ScannedKey {
                        key: text,
                        line: key_line,
                        col: key_col,
                        source_line,
                    });
                }
            }
            _ => {}
        }
    }

    keys
}

// ============================================================
// Tests
// ============================================================

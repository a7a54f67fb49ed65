//! Lexi - bilingual dictionary resolver and checker
//!
//! Lexi is a CLI tool and library for working with the flat JSON dictionaries
//! that back bilingual UIs. It resolves keys the way the UI would render them
//! and checks the dictionary for duplicate keys, missing locales, and
//! untranslated values.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `dictionary`: The translation table, its loader, and the lookup contract
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Check rules for dictionary issues
//! - `status`: Stock level classification for inventory labels
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod issues;
pub mod rules;
pub mod status;
pub mod utils;

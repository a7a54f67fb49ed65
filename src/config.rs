use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lexirc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the dictionary JSON file.
    #[serde(default = "default_dictionary")]
    pub dictionary: String,
    /// Language codes every entry is expected to carry.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    /// The authoring locale, used as the reference for the untranslated check.
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
}

fn default_dictionary() -> String {
    "./dict.json".to_string()
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string(), "bn".to_string()]
}

fn default_default_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            locales: default_locales(),
            default_locale: default_default_locale(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the locale list is empty or contains duplicates,
    /// or if `defaultLocale` is not one of the declared locales.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("'locales' must declare at least one language code");
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            if !seen.insert(locale.as_str()) {
                bail!("Duplicate language code in 'locales': \"{}\"", locale);
            }
        }

        if !self.locales.contains(&self.default_locale) {
            bail!(
                "'defaultLocale' (\"{}\") must be one of the declared locales: {}",
                self.default_locale,
                self.locales.join(", ")
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

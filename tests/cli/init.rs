use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("dictionary").is_some(),
        "Config should have 'dictionary' field"
    );
    assert!(
        parsed.get("locales").is_some(),
        "Config should have 'locales' field"
    );
    assert!(
        parsed.get("defaultLocale").is_some(),
        "Config should have 'defaultLocale' field"
    );

    assert_eq!(parsed["dictionary"], "./dict.json");
    assert_eq!(parsed["locales"][0], "en");
    assert_eq!(parsed["locales"][1], "bn");
    assert_eq!(parsed["defaultLocale"], "en");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Created .lexirc.json"));

    assert!(test.root().join(".lexirc.json").exists());

    let content = test.read_file(".lexirc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lexirc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "dict.json",
        r#"{ "search": { "en": "Search", "bn": "সার্চ" } }"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("no issues found"));

    Ok(())
}

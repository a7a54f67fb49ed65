use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

const DICT: &str = r#"{
  "search": { "en": "Search", "bn": "সার্চ" },
  "delete": { "en": "Delete", "bn": "ডিলিট" },
  "publishedAt": { "en": "Published At", "bn": "" },
  "location": { "en": "Location" }
}"#;

#[test]
fn test_resolve_stored_value() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;

    let output = test.resolve_command("search", "en").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Search\n");

    Ok(())
}

#[test]
fn test_resolve_bangla_value() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;

    let output = test.resolve_command("search", "bn").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "সার্চ\n");

    Ok(())
}

#[test]
fn test_resolve_unknown_key_echoes_key() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;

    let output = test.resolve_command("doesNotExist", "bn").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "doesNotExist\n");

    Ok(())
}

#[test]
fn test_resolve_missing_language_renders_blank() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;

    // "location" has no "bn" value at all. Still exit 0.
    let output = test.resolve_command("location", "bn").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "\n");

    Ok(())
}

#[test]
fn test_resolve_empty_stored_value_renders_blank() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;

    let output = test.resolve_command("publishedAt", "bn").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "\n");

    Ok(())
}

#[test]
fn test_resolve_defaults_to_default_locale() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;

    let output = test.command().args(["resolve", "delete"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Delete\n");

    Ok(())
}

#[test]
fn test_resolve_verbose_notes_fallback() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;

    let output = test
        .command()
        .args(["resolve", "doesNotExist", "--lang", "bn", "--verbose"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "doesNotExist\n");
    assert!(stderr_of(&output).contains("not in the dictionary"));

    Ok(())
}

#[test]
fn test_resolve_verbose_notes_missing_language() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;

    let output = test
        .command()
        .args(["resolve", "location", "--lang", "bn", "-v"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_of(&output).contains("no value for 'bn'"));

    Ok(())
}

#[test]
fn test_resolve_missing_dictionary_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lexirc.json", r#"{ "dictionary": "./nope.json" }"#)?;

    let output = test.resolve_command("search", "en").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Error:"));
    assert!(stderr_of(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_resolve_dictionary_override_flag() -> Result<()> {
    let test = CliTest::with_dictionary(DICT)?;
    test.write_file("other.json", r#"{ "search": { "en": "Find", "bn": "খোঁজ" } }"#)?;

    let output = test
        .command()
        .args(["resolve", "search", "--lang", "en", "--dictionary", "./other.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Find\n");

    Ok(())
}

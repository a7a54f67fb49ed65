use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

const CLEAN_DICT: &str = r#"{
  "search": { "en": "Search", "bn": "সার্চ" },
  "delete": { "en": "Delete", "bn": "ডিলিট" }
}"#;

#[test]
fn test_check_clean_dictionary() -> Result<()> {
    let test = CliTest::with_dictionary(CLEAN_DICT)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Checked 2 keys, 2 locales"));
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_duplicate_key_fails() -> Result<()> {
    let dict = r#"{
  "name": { "en": "Name", "bn": "নাম" },
  "phone": { "en": "Phone", "bn": "ফোন" },
  "name": { "en": "Name", "bn": "নাম" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("error: \"name\""));
    assert!(stdout.contains("duplicate-key"));
    assert!(stdout.contains("first defined at line 2"));

    Ok(())
}

#[test]
fn test_check_missing_locale_fails() -> Result<()> {
    let dict = r#"{
  "search": { "en": "Search", "bn": "সার্চ" },
  "location": { "en": "Location" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("error: \"location\""));
    assert!(stdout.contains("missing-locale"));
    assert!(stdout.contains("missing in: bn"));

    Ok(())
}

#[test]
fn test_check_warnings_do_not_fail() -> Result<()> {
    let dict = r#"{
  "search": { "en": "Search", "bn": "সার্চ" },
  "publishedAt": { "en": "Published At", "bn": "" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("warning: \"publishedAt\""));
    assert!(stdout.contains("empty-value"));
    assert!(stdout.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_check_untranslated_warning() -> Result<()> {
    let dict = r#"{
  "search": { "en": "Search", "bn": "সার্চ" },
  "Category": { "en": "Category", "bn": "Category" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("warning: \"Category\""));
    assert!(stdout.contains("untranslated"));
    assert!(stdout.contains("identical in: bn"));

    Ok(())
}

#[test]
fn test_check_symbol_values_not_flagged_untranslated() -> Result<()> {
    let dict = r#"{
  "percent": { "en": "%", "bn": "%" },
  "separator": { "en": "- / -", "bn": "- / -" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_unknown_locale_warning() -> Result<()> {
    let dict = r#"{
  "search": { "en": "Search", "bn": "সার্চ", "hi": "खोज" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("unknown-locale"));
    assert!(stdout.contains("code 'hi' is not declared"));

    Ok(())
}

#[test]
fn test_check_invalid_entry_always_reported() -> Result<()> {
    let dict = r#"{
  "search": { "en": "Search", "bn": "সার্চ" },
  "broken": 42
}"#;
    let test = CliTest::with_dictionary(dict)?;

    // Rule selection does not mute load-time issues.
    let output = test.command().args(["check", "empty"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("error: \"broken\""));
    assert!(stdout.contains("invalid-entry"));

    Ok(())
}

#[test]
fn test_check_rule_selection() -> Result<()> {
    let dict = r#"{
  "publishedAt": { "en": "Published At", "bn": "" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    // Only the duplicate rule runs, so the empty value is not reported.
    let output = test.command().args(["check", "duplicate"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_missing_dictionary_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lexirc.json", r#"{ "dictionary": "./missing.json" }"#)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Error:"));

    Ok(())
}

#[test]
fn test_check_invalid_json_dictionary() -> Result<()> {
    let test = CliTest::with_dictionary("{ not json")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Error:"));

    Ok(())
}

#[test]
fn test_check_default_locale_override() -> Result<()> {
    let dict = r#"{
  "search": { "en": "সার্চ", "bn": "সার্চ" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    // With bn as the reference locale, the identical en value is flagged.
    let output = test
        .command()
        .args(["check", "untranslated", "--default-locale", "bn"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("untranslated"));
    assert!(stdout.contains("identical in: en"));

    Ok(())
}

#[test]
fn test_check_reports_location_and_source() -> Result<()> {
    let dict = r#"{
  "search": { "en": "Search", "bn": "সার্চ" },
  "location": { "en": "Location" }
}"#;
    let test = CliTest::with_dictionary(dict)?;

    let output = test.check_command().output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("dict.json:3:3"));
    assert!(stdout.contains("\"location\": { \"en\": \"Location\" }"));
    assert!(stdout.contains("^"));

    Ok(())
}

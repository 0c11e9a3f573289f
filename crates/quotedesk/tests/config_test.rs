//! Tests for layered settings.

use quotedesk::{EnvOverrides, QuotedeskConfig, QuotedeskErrorKind};
use std::{collections::HashMap, path::PathBuf};

fn write_config(name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("quotedesk-{}-{}.toml", name, std::process::id()));
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_defaults_without_file() -> anyhow::Result<()> {
    let config = QuotedeskConfig::load_with(None, &EnvOverrides::default())?;

    assert_eq!(config.extractor().model(), "gpt-4o");
    assert_eq!(config.sheet().title(), "Quotes");
    assert_eq!(config.sheet().expected_columns().len(), 9);
    assert_eq!(config.webhook().bind(), "0.0.0.0:3000");
    assert_eq!(config.webhook().path(), "/api/webhook");
    assert_eq!(config.webhook().verify_token(), "api_webhook_token");
    Ok(())
}

#[test]
fn test_file_values_and_overrides() -> anyhow::Result<()> {
    let path = write_config(
        "layers",
        r#"
[extractor]
model = "gpt-4o-mini"
api_key = "from-file"
temperature = 0.1

[sheet]
title = "Juan's Quotes"
expected_columns = ["Name", "Status"]

[webhook]
bind = "127.0.0.1:8080"
"#,
    )?;

    let overrides = EnvOverrides {
        openai_api_key: Some("from-env".into()),
        spreadsheet_id: Some("sheet123".into()),
        ..Default::default()
    };
    let config = QuotedeskConfig::load_with(Some(&path), &overrides)?;
    std::fs::remove_file(&path)?;

    assert_eq!(config.extractor().model(), "gpt-4o-mini");
    assert_eq!(config.extractor().api_key().as_deref(), Some("from-env"));
    assert_eq!(*config.extractor().temperature(), Some(0.1));
    assert_eq!(config.sheet().title(), "Juan's Quotes");
    assert_eq!(config.sheet().spreadsheet_id().as_deref(), Some("sheet123"));
    assert_eq!(config.sheet().expected_columns(), &vec!["Name".to_string(), "Status".to_string()]);
    assert_eq!(config.webhook().bind(), "127.0.0.1:8080");
    assert_eq!(config.webhook().path(), "/api/webhook");
    Ok(())
}

#[test]
fn test_missing_explicit_file_fails() {
    let path = std::env::temp_dir().join("quotedesk-does-not-exist.toml");
    let err = QuotedeskConfig::load_with(Some(&path), &EnvOverrides::default()).unwrap_err();
    assert!(matches!(err.kind(), QuotedeskErrorKind::Config(_)));
}

#[test]
fn test_bind_override() -> anyhow::Result<()> {
    let config = QuotedeskConfig::load_with(None, &EnvOverrides::default())?.with_bind("127.0.0.1:9000");
    assert_eq!(config.webhook().bind(), "127.0.0.1:9000");
    assert_eq!(config.webhook().verify_token(), "api_webhook_token");
    Ok(())
}

#[test]
fn test_expected_columns_from_environment() -> anyhow::Result<()> {
    let vars = HashMap::from([
        (
            "QUOTEDESK_SHEET__EXPECTED_COLUMNS".to_string(),
            "Name, Status".to_string(),
        ),
        ("QUOTEDESK_SHEET__TITLE".to_string(), "Env Quotes".to_string()),
    ]);
    let config = QuotedeskConfig::load_with_env(None, &EnvOverrides::default(), Some(vars))?;

    assert_eq!(
        config.sheet().expected_columns(),
        &vec!["Name".to_string(), "Status".to_string()]
    );
    assert_eq!(config.sheet().title(), "Env Quotes");
    Ok(())
}

#[test]
fn test_relative_webhook_path_is_rejected() -> anyhow::Result<()> {
    let path = write_config(
        "relative-path",
        r#"
[webhook]
path = "api/webhook"
"#,
    )?;

    let result = QuotedeskConfig::load_with(Some(&path), &EnvOverrides::default());
    std::fs::remove_file(&path)?;

    let err = result.unwrap_err();
    assert!(matches!(err.kind(), QuotedeskErrorKind::Config(_)));
    Ok(())
}

//! Console command handler.

use quotedesk::{GoogleSheetsStore, OpenAICompatibleClient, QuotedeskConfig, SheetAssistant, console};
use std::path::PathBuf;
use tokio::io::BufReader;

/// Handle the `console` command
pub async fn handle_console_command(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = QuotedeskConfig::load(config_path.as_deref())?;

    let store = GoogleSheetsStore::from_config(config.sheet())?;
    let extractor = OpenAICompatibleClient::from_config(config.extractor())?;
    let assistant = SheetAssistant::new(
        store,
        extractor,
        config.sheet().title().clone(),
        config.sheet().expected_columns().clone(),
    );

    tracing::info!(sheet = %assistant.title(), "Starting console");
    console::run(
        &assistant,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;
    Ok(())
}

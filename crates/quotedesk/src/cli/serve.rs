//! Webhook command handler.

use quotedesk::{OpenAICompatibleClient, QuotedeskConfig};
use std::{path::PathBuf, sync::Arc};

/// Handle the `serve` command
pub async fn handle_serve_command(
    config_path: Option<PathBuf>,
    bind: Option<String>,
) -> anyhow::Result<()> {
    let mut config = QuotedeskConfig::load(config_path.as_deref())?;
    if let Some(bind) = bind {
        config = config.with_bind(bind);
    }

    let extractor = Arc::new(OpenAICompatibleClient::from_config(config.extractor())?);
    tracing::info!(bind = %config.webhook().bind(), "Starting webhook listener");

    quotedesk::serve(config.webhook(), extractor).await?;
    Ok(())
}

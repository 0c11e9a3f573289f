//! Messaging webhook listener for Quotedesk.
//!
//! Answers the platform's subscription handshake and, for every inbound text
//! message, asks the intent extractor for lead details and logs them. The
//! listener never writes to the row store.

#![warn(missing_docs)]

mod api;
mod config;
mod lead;
mod payload;

pub use api::{WebhookState, create_router};
pub use config::{
    DEFAULT_BIND, DEFAULT_PATH, DEFAULT_VERIFY_TOKEN, WebhookConfig, WebhookConfigBuilder,
};
pub use lead::{LEAD_EXTRACTION_INSTRUCTIONS, LeadDetails, extract_lead};
pub use payload::{
    Change, ChangeValue, Entry, InboundMessage, TextBody, TextMessage, WebhookEvent,
};

use quotedesk_error::{HttpError, QuotedeskResult};
use quotedesk_interface::IntentExtractor;
use std::sync::Arc;
use tracing::info;

/// Serves the webhook until Ctrl-C.
///
/// # Errors
///
/// Fails when the address cannot be bound or the server stops with an error.
pub async fn serve(config: &WebhookConfig, extractor: Arc<dyn IntentExtractor>) -> QuotedeskResult<()> {
    let app = create_router(config, extractor)?;

    let listener = tokio::net::TcpListener::bind(config.bind().as_str())
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", config.bind(), e)))?;
    info!(bind = %config.bind(), path = %config.path(), "Webhook listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down webhook");
        })
        .await
        .map_err(|e| HttpError::new(format!("Webhook server failed: {}", e)))?;
    Ok(())
}

//! HTTP routes for the messaging webhook.

use crate::{WebhookConfig, WebhookEvent, extract_lead};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use quotedesk_error::QuotedeskResult;
use quotedesk_interface::IntentExtractor;
use serde_json::json;
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info, instrument, warn};

/// Shared, read-only listener state.
#[derive(Clone)]
pub struct WebhookState {
    /// Token the handshake must present
    pub verify_token: Arc<str>,
    /// Extractor used for lead details
    pub extractor: Arc<dyn IntentExtractor>,
}

impl WebhookState {
    /// Creates listener state.
    pub fn new(verify_token: impl Into<Arc<str>>, extractor: Arc<dyn IntentExtractor>) -> Self {
        Self {
            verify_token: verify_token.into(),
            extractor,
        }
    }
}

/// Creates the webhook router: the handshake and event routes on the
/// configured path, plus `/health`. Event bodies are not size limited;
/// every delivery is acknowledged.
///
/// # Errors
///
/// Fails when the configured path is not a mountable route.
pub fn create_router(
    config: &WebhookConfig,
    extractor: Arc<dyn IntentExtractor>,
) -> QuotedeskResult<Router> {
    config.validate()?;
    let state = WebhookState::new(config.verify_token().as_str(), extractor);

    Ok(Router::new()
        .route("/health", get(health_check))
        .route(config.path(), get(verify).post(receive))
        .layer(DefaultBodyLimit::disable())
        .with_state(state))
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Subscription handshake: echo the challenge when mode and token check out.
#[instrument(skip_all)]
async fn verify(
    State(state): State<WebhookState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mode = params.get("hub.mode").map(String::as_str);
    let token = params.get("hub.verify_token").map(String::as_str);

    match (mode, token, params.get("hub.challenge")) {
        (Some("subscribe"), Some(token), Some(challenge)) if token == &*state.verify_token => {
            info!("Webhook verified");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain")],
                challenge.clone(),
            )
                .into_response()
        }
        _ => {
            warn!(mode = ?mode, "Webhook verification rejected");
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

/// Event delivery: extract lead details from each text message and log them.
///
/// Always acknowledges with 200 so the platform does not redeliver.
#[instrument(skip_all, fields(bytes = body.len()))]
async fn receive(State(state): State<WebhookState>, body: Bytes) -> impl IntoResponse {
    match serde_json::from_slice::<WebhookEvent>(&body) {
        Ok(event) => {
            let messages = event.text_messages();
            debug!(object = ?event.object, messages = messages.len(), "Event received");
            for message in messages {
                match extract_lead(state.extractor.as_ref(), &message.body).await {
                    Ok(lead) => info!(from = %message.from, ?lead, "Lead details extracted"),
                    Err(e) => warn!(from = %message.from, error = %e, "Lead extraction failed"),
                }
            }
        }
        Err(e) => warn!(error = %e, "Ignoring undecodable event"),
    }

    (StatusCode::OK, Json(json!({ "status": "event_received" })))
}

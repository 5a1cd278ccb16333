//! HTTP API for the ISR relay.
//!
//! The CMS posts one webhook per lifecycle event; the relay turns it into a
//! hook call and answers once the frontend has been notified (or not).

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use isr_model::{ContentType, LifecycleEvent, TrackedEntity};
use isr_revalidate::LifecycleHooks;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Shared state for the webhook routes.
pub struct AppState {
    pub hooks: Arc<dyn LifecycleHooks>,
    /// When set, webhooks must carry `Authorization: Bearer <token>`.
    pub webhook_token: Option<String>,
}

/// Body the CMS sends for an entry lifecycle webhook.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WebhookEnvelope {
    pub event: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub entry: Option<TrackedEntity>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WebhookResponse {
    pub outcome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl WebhookResponse {
    fn new(outcome: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            detail: None,
        }
    }

    fn with_detail(outcome: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            detail: Some(detail.into()),
        }
    }
}

fn authorized(state: &AppState, headers: &HeaderMap) -> bool {
    let Some(token) = &state.webhook_token else {
        return true;
    };
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|presented| tokens_match(presented.as_bytes(), token.as_bytes()))
}

/// Compares tokens without short-circuiting on the first differing byte.
fn tokens_match(presented: &[u8], expected: &[u8]) -> bool {
    if presented.len() != expected.len() {
        return false;
    }
    presented
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

async fn lifecycle_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(envelope): Json<WebhookEnvelope>,
) -> (StatusCode, Json<WebhookResponse>) {
    if !authorized(&state, &headers) {
        warn!("Rejected lifecycle webhook with missing or invalid token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(WebhookResponse::new("unauthorized")),
        );
    }

    let event = match LifecycleEvent::from_webhook(&envelope.event) {
        Ok(event) => event,
        Err(e) => {
            debug!("Ignoring webhook: {}", e);
            return (
                StatusCode::ACCEPTED,
                Json(WebhookResponse::with_detail("ignored", e.to_string())),
            );
        }
    };

    // Prefer the full uid; older CMS versions only send the model name.
    let model = envelope.uid.as_deref().or(envelope.model.as_deref());
    let content_type = match model.map(ContentType::from_model) {
        Some(Ok(content_type)) => content_type,
        Some(Err(e)) => {
            debug!("Ignoring webhook: {}", e);
            return (
                StatusCode::ACCEPTED,
                Json(WebhookResponse::with_detail("ignored", e.to_string())),
            );
        }
        None => {
            debug!("Ignoring {} webhook without a model", envelope.event);
            return (
                StatusCode::ACCEPTED,
                Json(WebhookResponse::with_detail("ignored", "no model")),
            );
        }
    };

    let Some(entry) = envelope.entry else {
        warn!("{} webhook for {} carried no entry", envelope.event, content_type);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(WebhookResponse::with_detail("invalid", "missing entry")),
        );
    };

    let outcome = state.hooks.on_event(event, content_type, &entry).await;
    (StatusCode::OK, Json(WebhookResponse::new(outcome.as_str())))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the HTTP router over the given hooks.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhooks/lifecycle", post(lifecycle_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

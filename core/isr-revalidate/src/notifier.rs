//! Best-effort delivery to the frontend revalidation endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, info, warn};

use crate::config::{DeliveryContract, RevalidationConfig};
use crate::error::{RevalidateError, RevalidateResult};
use crate::payload::RevalidationPayload;

/// Header carrying the shared secret under the path-list contract.
pub const SECRET_HEADER: &str = "x-revalidate-secret";

/// What happened to a single notification. Never an error: delivery failures
/// are logged and reported here, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// No frontend URL configured; nothing was sent.
    NotConfigured,
    /// The write made no page stale (e.g. missing slug); nothing was sent.
    NothingToRevalidate,
    /// The frontend acknowledged with a 2xx.
    Delivered,
    /// Transport error or non-2xx response. Not retried.
    Failed,
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::NotConfigured => "not_configured",
            DeliveryOutcome::NothingToRevalidate => "nothing_to_revalidate",
            DeliveryOutcome::Delivered => "delivered",
            DeliveryOutcome::Failed => "failed",
        }
    }

    /// Whether an HTTP request was issued.
    pub fn attempted(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered | DeliveryOutcome::Failed)
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Posts revalidation payloads to `{frontend_url}/api/revalidate`.
///
/// Holds no mutable state; concurrent calls issue independent requests.
#[derive(Debug, Clone)]
pub struct Notifier {
    config: RevalidationConfig,
    client: Client,
}

impl Notifier {
    pub fn new(config: RevalidationConfig) -> RevalidateResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RevalidationConfig {
        &self.config
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Sends one payload. Exactly one request when configured, none otherwise.
    pub async fn revalidate(&self, payload: &RevalidationPayload) -> DeliveryOutcome {
        if !self.is_enabled() {
            warn!("FRONTEND_URL not configured, skipping revalidation");
            return DeliveryOutcome::NotConfigured;
        }

        let url = self.config.revalidate_url();
        info!("Calling {} for {}", url, payload.summary());

        match self.send(&url, payload).await {
            Ok(result) => {
                info!("Revalidation succeeded: {}", result);
                DeliveryOutcome::Delivered
            }
            // The frontend accepted the request; only its reply was unreadable.
            Err(RevalidateError::Serialization(e)) => {
                warn!("Revalidation succeeded but response was not JSON: {}", e);
                DeliveryOutcome::Delivered
            }
            Err(e) => {
                match e.status() {
                    Some(status) => error!("Revalidation failed with status {}: {}", status, e),
                    None => error!("Revalidation error: {}", e),
                }
                DeliveryOutcome::Failed
            }
        }
    }

    async fn send(&self, url: &str, payload: &RevalidationPayload) -> RevalidateResult<serde_json::Value> {
        let mut request = self.client.post(url).json(payload);

        if let Some(credential) = &self.config.credential {
            request = match self.config.contract {
                DeliveryContract::Paths => request.header(SECRET_HEADER, credential),
                DeliveryContract::Type => request.bearer_auth(credential),
            };
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RevalidateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&text)?)
    }
}

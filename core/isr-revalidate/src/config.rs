//! Process-wide revalidation configuration.
//!
//! Read once at startup and handed to the [`Notifier`](crate::Notifier).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{RevalidateError, RevalidateResult};

/// Which request contract the frontend's `/api/revalidate` endpoint speaks.
///
/// The two are not interchangeable: body shape and auth header must both match
/// the deployed receiver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryContract {
    /// `{paths, entityType, entityId, locale?}` with `x-revalidate-secret`.
    #[default]
    Paths,
    /// `{type, slug?, locale?}` with `Authorization: Bearer`.
    Type,
}

impl DeliveryContract {
    fn parse(value: &str) -> RevalidateResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "paths" => Ok(DeliveryContract::Paths),
            "type" => Ok(DeliveryContract::Type),
            other => Err(RevalidateError::Config(format!(
                "REVALIDATE_CONTRACT must be 'paths' or 'type', got '{other}'"
            ))),
        }
    }
}

/// Revalidation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevalidationConfig {
    /// Frontend base URL. Empty disables delivery entirely.
    pub frontend_url: String,
    /// Shared credential; sent as the header the contract dictates.
    pub credential: Option<String>,
    pub contract: DeliveryContract,
    /// Locale used when the locale provider fails.
    pub default_locale: String,
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub request_timeout_secs: Option<u64>,
}

impl Default for RevalidationConfig {
    fn default() -> Self {
        Self {
            frontend_url: String::new(),
            credential: None,
            contract: DeliveryContract::Paths,
            default_locale: "en".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl RevalidationConfig {
    /// Builds the config from process environment variables.
    pub fn from_env() -> RevalidateResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// Keys: `FRONTEND_URL`, `REVALIDATE_CONTRACT`, `REVALIDATE_SECRET` (paths
    /// contract), `REVALIDATE_TOKEN` (type contract), `DEFAULT_LOCALE`,
    /// `REVALIDATE_TIMEOUT_SECS`.
    pub fn from_lookup<F>(lookup: F) -> RevalidateResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let contract = match non_empty("REVALIDATE_CONTRACT") {
            Some(value) => DeliveryContract::parse(&value)?,
            None => DeliveryContract::default(),
        };

        let credential = match contract {
            DeliveryContract::Paths => non_empty("REVALIDATE_SECRET"),
            DeliveryContract::Type => non_empty("REVALIDATE_TOKEN"),
        };

        let request_timeout_secs = non_empty("REVALIDATE_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    RevalidateError::Config(format!(
                        "REVALIDATE_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            frontend_url: lookup("FRONTEND_URL")
                .unwrap_or_default()
                .trim()
                .trim_end_matches('/')
                .to_string(),
            credential,
            contract,
            default_locale: non_empty("DEFAULT_LOCALE").unwrap_or_else(|| "en".to_string()),
            request_timeout_secs,
        })
    }

    fn base_url(&self) -> &str {
        self.frontend_url.trim().trim_end_matches('/')
    }

    /// Whether a frontend is configured at all. A bare `/` does not count.
    pub fn is_enabled(&self) -> bool {
        !self.base_url().is_empty()
    }

    /// Full URL of the frontend revalidation endpoint.
    pub fn revalidate_url(&self) -> String {
        format!("{}/api/revalidate", self.base_url())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

//! Locale resolution.
//!
//! Locales are looked up again for every lifecycle event; there is no cache.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::{RevalidateError, RevalidateResult};

/// Source of the active locale codes.
#[async_trait]
pub trait LocaleProvider: Send + Sync {
    /// Returns the locale codes currently enabled in the CMS.
    async fn locales(&self) -> RevalidateResult<Vec<String>>;
}

/// A fixed locale list.
#[derive(Debug, Clone, Default)]
pub struct StaticLocales(pub Vec<String>);

impl StaticLocales {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(codes.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl LocaleProvider for StaticLocales {
    async fn locales(&self) -> RevalidateResult<Vec<String>> {
        Ok(self.0.clone())
    }
}

/// One entry of the CMS i18n locale listing. Only `code` is used.
#[derive(Debug, Deserialize)]
struct LocaleEntry {
    code: String,
}

/// Reads locales from the CMS i18n endpoint (`GET {cms_url}/api/i18n/locales`).
#[derive(Debug, Clone)]
pub struct HttpLocaleProvider {
    base_url: String,
    api_token: Option<String>,
    client: Client,
}

impl HttpLocaleProvider {
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> RevalidateResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(base_url, api_token, client))
    }

    /// Reuses an existing HTTP client.
    pub fn with_client(base_url: impl Into<String>, api_token: Option<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_token: api_token.filter(|t| !t.is_empty()),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/i18n/locales", self.base_url)
    }
}

#[async_trait]
impl LocaleProvider for HttpLocaleProvider {
    async fn locales(&self) -> RevalidateResult<Vec<String>> {
        let mut request = self.client.get(self.endpoint());
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RevalidateError::Locale(format!("locale request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RevalidateError::Locale(format!("{status} - {body}")));
        }

        let entries: Vec<LocaleEntry> = response
            .json()
            .await
            .map_err(|e| RevalidateError::Locale(format!("failed to parse locale list: {e}")))?;

        Ok(entries.into_iter().map(|l| l.code).collect())
    }
}

/// Asks the provider for locales, falling back to `[default_locale]` on any
/// failure.
pub async fn resolve_locales(provider: &dyn LocaleProvider, default_locale: &str) -> Vec<String> {
    match provider.locales().await {
        Ok(locales) => {
            debug!("Resolved locales: {:?}", locales);
            locales
        }
        Err(e) => {
            error!("Error fetching locales, using default '{}': {}", default_locale, e);
            vec![default_locale.to_string()]
        }
    }
}

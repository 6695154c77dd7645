//! HTTP client for the remote scripting backend.

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::backend::action::BackendAction;

/// Client for the single remote backend endpoint.
///
/// Every gateway operation maps to exactly one POST here; there are no
/// retries and no timeout beyond the transport default. Replies are returned
/// as raw JSON so handlers can relay them unchanged.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    url: Url,
}

impl BackendClient {
    pub fn new(url: Url) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send one action-tagged payload and return the backend's JSON body.
    ///
    /// Non-2xx statuses and undecodable bodies surface as errors; the caller
    /// maps them to the localized 500 envelope.
    pub async fn dispatch(&self, action: &BackendAction) -> reqwest::Result<Value> {
        let response = self
            .http
            .post(self.url.clone())
            .json(action)
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}

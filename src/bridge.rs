//! HTTP bridge to the chat backend.
//!
//! One POST per user message, no timeout, no retry, no in-flight guard.
//! Concurrent sends are allowed and resolve in whatever order the network
//! produces; the caller appends each outcome as it completes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::WidgetConfig;
use crate::transcript::Link;

/// Outbound body for the `/chat` endpoint.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    /// Trimmed user message.
    pub message: &'a str,
}

/// Decoded reply from the `/chat` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    /// Reply text.
    pub reply: String,
    /// Related links. Absent, `null`, or non-array values decode as empty,
    /// and malformed array entries are skipped.
    #[serde(default, deserialize_with = "lenient_links")]
    pub links: Vec<Link>,
}

fn lenient_links<'de, D>(deserializer: D) -> Result<Vec<Link>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let Some(items) = value.as_array() else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .filter_map(|item| serde_json::from_value::<Link>(item.clone()).ok())
        .collect())
}

/// Errors surfaced by a chat exchange.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The request failed in transit or the body did not decode as a reply.
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the backend `/chat` endpoint.
///
/// One instance per widget. `Clone` is cheap (the inner `reqwest::Client`
/// is reference-counted), so each submission moves a copy into its task.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    /// Build a client for the configured backend.
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.chat_endpoint(),
            api_key: config.api_key().to_owned(),
        }
    }

    /// POST one user message and decode the reply.
    ///
    /// The HTTP status is not inspected: any body that decodes as a
    /// [`ChatReply`] is shown, anything else errors and takes the
    /// unavailability path in the caller.
    pub async fn send(&self, message: &str) -> Result<ChatReply, BridgeError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-API-Key", &self.api_key)
            .json(&ChatRequest { message })
            .send()
            .await?;
        Ok(response.json::<ChatReply>().await?)
    }
}

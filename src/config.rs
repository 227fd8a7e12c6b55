//! Widget configuration.
//!
//! Read once when the widget mounts and immutable afterwards. The wasm boot
//! path fills it from the host page's `LNC_CONFIG` global; library consumers
//! construct it explicitly and hand it to [`mount`](crate::mount).

use thiserror::Error;

/// Errors that prevent the widget from mounting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `backendUrl` was absent, empty, or nothing but whitespace and slashes.
    #[error("missing backendUrl in widget configuration")]
    MissingBackendUrl,
}

/// Immutable widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    backend_url: String,
    api_key: String,
}

impl WidgetConfig {
    /// Build a validated configuration.
    ///
    /// The backend URL is trimmed and trailing `/` characters are stripped,
    /// so the request target is always `<backend_url>/chat` with a single
    /// separator. An empty result is rejected: without a backend there is
    /// nothing to mount.
    pub fn new(
        backend_url: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let backend_url = backend_url.as_ref().trim().trim_end_matches('/');
        if backend_url.is_empty() {
            return Err(ConfigError::MissingBackendUrl);
        }
        Ok(Self {
            backend_url: backend_url.to_owned(),
            api_key: api_key.into(),
        })
    }

    /// Base URL of the chat backend, without a trailing slash.
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Static key sent as the `X-API-Key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Full URL of the chat endpoint.
    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.backend_url)
    }

    /// Read the configuration from the host page's `LNC_CONFIG` global.
    ///
    /// Missing or non-string fields read as empty, which for the backend URL
    /// means [`ConfigError::MissingBackendUrl`].
    #[cfg(target_arch = "wasm32")]
    pub fn from_global() -> Result<Self, ConfigError> {
        let cfg = global_field(&js_sys::global().into(), "LNC_CONFIG");
        let backend_url = string_field(&cfg, "backendUrl");
        let api_key = string_field(&cfg, "apiKey");
        Self::new(backend_url, api_key)
    }
}

#[cfg(target_arch = "wasm32")]
fn global_field(target: &wasm_bindgen::JsValue, key: &str) -> wasm_bindgen::JsValue {
    js_sys::Reflect::get(target, &wasm_bindgen::JsValue::from_str(key))
        .unwrap_or(wasm_bindgen::JsValue::UNDEFINED)
}

#[cfg(target_arch = "wasm32")]
fn string_field(target: &wasm_bindgen::JsValue, key: &str) -> String {
    global_field(target, key).as_string().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        let config = WidgetConfig::new("http://api.example.com///", "k").unwrap();
        assert_eq!(config.backend_url(), "http://api.example.com");
        assert_eq!(config.chat_endpoint(), "http://api.example.com/chat");
    }

    #[test]
    fn plain_url_is_kept_verbatim() {
        let config = WidgetConfig::new("http://api.example.com", "k").unwrap();
        assert_eq!(config.chat_endpoint(), "http://api.example.com/chat");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let config = WidgetConfig::new("  http://api.example.com/ \n", "k").unwrap();
        assert_eq!(config.backend_url(), "http://api.example.com");
    }

    #[test]
    fn empty_backend_url_is_rejected() {
        assert_eq!(
            WidgetConfig::new("", "k").unwrap_err(),
            ConfigError::MissingBackendUrl
        );
    }

    #[test]
    fn whitespace_or_slash_only_backend_url_is_rejected() {
        assert!(WidgetConfig::new("   ", "k").is_err());
        assert!(WidgetConfig::new("///", "k").is_err());
        assert!(WidgetConfig::new(" /// ", "k").is_err());
    }

    #[test]
    fn api_key_is_preserved() {
        let config = WidgetConfig::new("http://api.example.com", "secret").unwrap();
        assert_eq!(config.api_key(), "secret");
    }
}

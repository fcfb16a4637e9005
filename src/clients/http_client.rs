//! HTTP transport for Zoho Inventory API communication.
//!
//! This module provides the [`HttpClient`] type, which sends a
//! [`PreparedRequest`] and returns the raw status and body text. Envelope
//! decoding happens one layer up.

use std::collections::HashMap;

use crate::clients::errors::InventoryError;
use crate::clients::http_request::{HttpMethod, PreparedRequest};
use crate::config::{BaseUrl, InventoryConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content type of POST bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Status and body text of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The undecoded body.
    pub body: String,
}

/// HTTP transport for the Zoho Inventory API.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - Sending the prepared URL and body with the right method
/// - Mapping connection-level failures to [`InventoryError::Transport`]
///
/// The connection for each call is scoped to [`HttpClient::send`] and is
/// released when the call returns, on success and failure alike.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL all aliases are joined onto.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &InventoryConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Zoho Inventory API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a prepared request and reads the whole response body.
    ///
    /// Any HTTP status is returned as a [`RawResponse`]; only failures of the
    /// exchange itself become errors.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Transport`] if the connection fails or the
    /// body cannot be read.
    pub async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, InventoryError> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body.clone());
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn create_test_config() -> InventoryConfig {
        InventoryConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let config = InventoryConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .base_url(BaseUrl::new("https://inventory.zoho.eu/api/v1").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(client.base_url().as_ref(), "https://inventory.zoho.eu/api/v1");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Zoho Inventory API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = InventoryConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_token_is_not_a_header() {
        let client = HttpClient::new(&create_test_config());

        assert!(client
            .default_headers()
            .values()
            .all(|value| !value.contains("test-token")));
    }
}

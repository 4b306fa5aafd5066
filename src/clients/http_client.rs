//! HTTP client for Admin API communication.
//!
//! This module provides the [`HttpClient`] type for posting JSON payloads to
//! the configured Admin API endpoint.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{AdminClientConfig, ApiUrl};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Admin API.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - The request timeout from configuration
/// - JSON body parsing and error serialization
///
/// Authentication headers are supplied per request by the GraphQL layer,
/// since the session token changes over the client's lifetime.
///
/// `HttpClient` is `Send + Sync`.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    api_url: ApiUrl,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use vendure_admin::ApiUrl;
    /// use vendure_admin::clients::HttpClient;
    ///
    /// let url = ApiUrl::new("https://shop.example.com/admin-api").unwrap();
    /// let client = HttpClient::new(&url, Duration::from_secs(10), None).unwrap();
    /// assert_eq!(client.api_url().as_ref(), "https://shop.example.com/admin-api");
    /// ```
    pub fn new(
        api_url: &ApiUrl,
        timeout: Duration,
        user_agent_prefix: Option<&str>,
    ) -> Result<Self, HttpError> {
        let user_agent_prefix = user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Vendure Admin Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.clone(),
            default_headers,
        })
    }

    /// Creates a new HTTP client from a full client configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::new`].
    pub fn from_config(config: &AdminClientConfig) -> Result<Self, HttpError> {
        Self::new(config.api_url(), config.timeout(), config.user_agent_prefix())
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts a request to the Admin API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error or timeout occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        let header_map = Self::build_header_map(&headers)?;

        let body = request
            .body
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        tracing::debug!(url = %self.api_url, "Sending Admin API request");

        let res = self
            .client
            .post(self.api_url.as_ref())
            .headers(header_map)
            .body(body)
            .send()
            .await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::error!(code, request_id = ?response.request_id(), "Admin API request failed");

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (key, value) in headers {
            let invalid = || InvalidHttpRequestError::InvalidHeader { name: key.clone() };
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            map.insert(name, value);
        }
        Ok(map)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response into a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "message", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert("request_id".to_string(), serde_json::json!(request_id));
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_url() -> ApiUrl {
        ApiUrl::new("https://shop.example.com/admin-api").unwrap()
    }

    #[test]
    fn test_client_construction() {
        let client = HttpClient::new(&test_url(), Duration::from_secs(10), None).unwrap();
        assert_eq!(client.api_url(), &test_url());
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&test_url(), Duration::from_secs(10), None).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Vendure Admin Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client =
            HttpClient::new(&test_url(), Duration::from_secs(10), Some("MyApp/1.0")).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_and_content_type_are_json() {
        let client = HttpClient::new(&test_url(), Duration::from_secs(10), None).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_serialize_error_includes_known_fields_and_reference() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        let response = HttpResponse::new(
            400,
            headers,
            json!({"errors": [{"message": "bad"}], "ignored": true}),
        );

        let message = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed["errors"][0]["message"], "bad");
        assert!(parsed.get("ignored").is_none());
        assert_eq!(parsed["request_id"], "req-9");
    }

    #[test]
    fn test_build_header_map_rejects_invalid_names() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "x".to_string());
        assert!(matches!(
            HttpClient::build_header_map(&headers),
            Err(InvalidHttpRequestError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}

//! HTTP response type.

use std::collections::HashMap;

/// Response header carrying a freshly issued session token.
///
/// Vendure sets it on responses to `login` when the server uses the bearer
/// token method.
pub const AUTH_TOKEN_HEADER: &str = "vendure-auth-token";

/// An HTTP response from the Admin API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the session token issued by the server, if any.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.header(AUTH_TOKEN_HEADER).filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 403, 404, 429, 500, 502] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_request_id_extraction() {
        let response = HttpResponse::new(200, headers(&[("x-request-id", "abc-123")]), json!({}));
        assert_eq!(response.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("content-type", "application/json")]), json!({}));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_auth_token_extraction() {
        let response =
            HttpResponse::new(200, headers(&[("vendure-auth-token", "tok-1")]), json!({}));
        assert_eq!(response.auth_token(), Some("tok-1"));

        let empty = HttpResponse::new(200, headers(&[("vendure-auth-token", "")]), json!({}));
        assert!(empty.auth_token().is_none());

        let missing = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(missing.auth_token().is_none());
    }
}

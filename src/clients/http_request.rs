//! HTTP request type and its builder.
//!
//! Every request to the Admin API is a JSON `POST` to the configured
//! endpoint, so a request is just a body plus optional extra headers.

use std::collections::HashMap;

use crate::clients::errors::InvalidHttpRequestError;

/// An HTTP request to be sent to the Admin API.
///
/// # Example
///
/// ```rust
/// use vendure_admin::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::builder()
///     .body(json!({"query": "query { me { id } }"}))
///     .header("vendure-token", "default-channel")
///     .build()
///     .unwrap();
///
/// assert!(request.extra_headers.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The JSON body.
    pub body: Option<serde_json::Value>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if no body is set.
    pub const fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody);
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug, Default)]
pub struct HttpRequestBuilder {
    body: Option<serde_json::Value>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            body: self.body,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_creates_valid_request() {
        let request = HttpRequest::builder()
            .body(json!({"query": "{ me { id } }"}))
            .build()
            .unwrap();

        assert_eq!(request.body, Some(json!({"query": "{ me { id } }"})));
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_verify_requires_body() {
        let result = HttpRequest::builder().build();
        assert!(matches!(result, Err(InvalidHttpRequestError::MissingBody)));
    }

    #[test]
    fn test_builder_merges_single_headers() {
        let mut initial = HashMap::new();
        initial.insert("X-One".to_string(), "1".to_string());

        let request = HttpRequest::builder()
            .body(json!({}))
            .extra_headers(initial)
            .header("X-Two", "2")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(headers.get("X-One"), Some(&"1".to_string()));
        assert_eq!(headers.get("X-Two"), Some(&"2".to_string()));
    }
}

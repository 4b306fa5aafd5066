//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use vendure_admin::{ApiUrl, ConfigError};
//!
//! let result = ApiUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or validating client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API URL cannot be empty.
    #[error("API URL cannot be empty. Please provide the URL of the Vendure Admin API.")]
    EmptyApiUrl,

    /// API URL is not a valid absolute URL.
    #[error("Invalid API URL '{url}'. Expected an absolute URL such as 'https://shop.example.com/admin-api'.")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty.")]
    EmptyAuthToken,

    /// Timeout must be greater than zero.
    #[error("Invalid timeout '{value}'. Expected a positive number of milliseconds.")]
    InvalidTimeout {
        /// The rejected timeout value, as provided.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_url_error_message() {
        let message = ConfigError::EmptyApiUrl.to_string();
        assert!(message.contains("API URL cannot be empty"));
    }

    #[test]
    fn test_invalid_api_url_error_message() {
        let error = ConfigError::InvalidApiUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_url" };
        let message = error.to_string();
        assert!(message.contains("api_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiUrl;
        let _: &dyn std::error::Error = &error;
    }
}

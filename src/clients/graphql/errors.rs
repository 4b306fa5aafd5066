//! GraphQL-specific error types.
//!
//! - [`GraphqlError::Http`]: Wraps underlying HTTP errors
//! - [`GraphqlError::Graphql`]: The server answered with `errors` and no `data`
//! - [`GraphqlError::Deserialize`]: A payload did not match the expected shape
//!
//! When a response carries both `data` and `errors`, the data is returned and
//! the errors are only logged, so partial results stay usable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpError;

/// A single entry of a GraphQL response's `errors` array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human readable error message.
    pub message: String,
    /// Path of the field that failed, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    /// Server specific metadata, such as the error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl ApiError {
    /// Returns the `extensions.code` value, if present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(serde_json::Value::as_str)
    }
}

/// Error type for GraphQL operations.
///
/// # Example
///
/// ```rust
/// use vendure_admin::clients::graphql::{ApiError, GraphqlError};
///
/// let error = GraphqlError::Graphql {
///     errors: vec![ApiError {
///         message: "You are not currently authorized to perform this action".to_string(),
///         ..ApiError::default()
///     }],
/// };
/// assert!(error.to_string().contains("not currently authorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server rejected the operation and returned no data.
    #[error("GraphQL request failed: {}", join_messages(.errors))]
    Graphql {
        /// The errors reported by the server.
        errors: Vec<ApiError>,
    },

    /// A response payload could not be decoded.
    #[error("Failed to decode GraphQL payload: {0}")]
    Deserialize(#[from] serde_json::Error),
}

fn join_messages(errors: &[ApiError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

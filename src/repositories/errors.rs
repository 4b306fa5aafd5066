//! Error type for repository operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use vendure_admin::repositories::{CustomerRepository, RepositoryError};
//!
//! match repository.delete("5").await {
//!     Err(RepositoryError::Unsupported { resource, operation }) => {
//!         println!("{resource} cannot {operation}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//!     Ok(deleted) => println!("deleted: {deleted}"),
//! }
//! ```

use thiserror::Error;

use crate::client::ClientError;
use crate::repositories::ResourceOperation;

/// Error type for repository and service operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The resource has no document for this operation.
    #[error("{resource} does not support the {operation} operation")]
    Unsupported {
        /// The resource name, such as `Order`.
        resource: &'static str,
        /// The requested operation.
        operation: ResourceOperation,
    },

    /// The response had nothing at the operation's result path.
    #[error("{resource} {operation} returned no result")]
    EmptyResult {
        /// The resource name.
        resource: &'static str,
        /// The operation name.
        operation: &'static str,
    },

    /// The server answered with an error result such as
    /// `EMAIL_ADDRESS_CONFLICT_ERROR`.
    #[error("{resource} operation rejected ({code}): {message}")]
    Rejected {
        /// The resource name.
        resource: &'static str,
        /// The `errorCode` of the result.
        code: String,
        /// The `message` of the result.
        message: String,
    },

    /// The result did not match the expected type.
    #[error("Failed to decode result: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The underlying client failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl RepositoryError {
    /// Returns the underlying client error, if any.
    #[must_use]
    pub const fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(error) => Some(error),
            _ => None,
        }
    }
}

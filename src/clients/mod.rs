//! HTTP and GraphQL transport for the Vendure Admin API.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client posting to the Admin API endpoint
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`graphql::GraphqlClient`]: GraphQL envelope handling on top of [`HttpClient`]
//!
//! # Failure Behavior
//!
//! Requests are attempted exactly once. Non-2xx responses, timeouts and
//! connection failures are returned to the caller without retrying.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, AUTH_TOKEN_HEADER};

pub use graphql::{GraphqlClient, GraphqlError, GraphqlResponse, OperationKind};

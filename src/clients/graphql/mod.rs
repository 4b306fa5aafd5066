//! GraphQL client for the Vendure Admin API.
//!
//! This module provides a GraphQL layer on top of the
//! [`HttpClient`](crate::clients::HttpClient):
//!
//! - [`GraphqlClient`]: posts documents and decodes the GraphQL envelope
//! - [`GraphqlResponse`]: the decoded `data`, non-fatal `errors`, and any issued token
//! - [`GraphqlError`]: error type for GraphQL operations
//! - [`OperationKind`]: query or mutation
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: The operation result
//! - `errors`: Any GraphQL errors (usually still HTTP 200)
//!
//! Responses with `errors` but no `data` become [`GraphqlError::Graphql`];
//! responses carrying both are returned with the errors attached.

mod client;
mod errors;

pub use client::{GraphqlClient, GraphqlResponse, OperationKind};
pub use errors::{ApiError, GraphqlError};

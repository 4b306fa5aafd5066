//! # Vendure Admin API Rust Client
//!
//! A typed async client for the Vendure Admin GraphQL API, covering
//! authentication, products, orders, customers, and global settings.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AdminClientConfig`] and [`AdminClientConfigBuilder`]
//! - Validated newtypes for the API URL and session tokens
//! - An [`AdminClient`] holding the session, usable directly or as a process-wide instance
//! - Session login and logout via the `vendure-auth-token` header
//! - Repositories mapping entity operations to fixed GraphQL documents
//! - Services with lookup and search helpers on top of the repositories
//! - A small dependency-injection [`Container`]
//! - Free functions in [`api`] over the global client
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use vendure_admin::{AdminClient, AdminClientConfig, ApiUrl};
//!
//! let config = AdminClientConfig::builder()
//!     .api_url(ApiUrl::new("http://localhost:3000/admin-api").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! let client = AdminClient::new(config).unwrap();
//! assert!(!client.is_authenticated());
//! ```
//!
//! ## Logging In
//!
//! ```rust,ignore
//! use vendure_admin::AdminClient;
//!
//! let response = client.login("superadmin", "superadmin", false).await?;
//! println!("Session expires at {}", response.expires);
//!
//! // Every later request carries `Authorization: Bearer <token>`
//! let data = client.query(vendure_admin::queries::GET_CURRENT_USER, None).await?;
//! ```
//!
//! ## Repositories and Services
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vendure_admin::models::{ComparisonOperator, ListOptions};
//! use vendure_admin::repositories::ProductRepository;
//! use vendure_admin::services::CustomerService;
//!
//! let client = Arc::new(client);
//! let products = ProductRepository::new(Arc::clone(&client));
//! let page = products
//!     .find_with_pagination(&ListOptions::default().take(10))
//!     .await?;
//!
//! let customers = CustomerService::from_executor(client);
//! let customer = customers.get_customer_by_email("ann@example.com").await?;
//! ```
//!
//! ## Global Instance
//!
//! ```rust,ignore
//! use vendure_admin::{api, AdminClient, AdminClientConfig};
//!
//! AdminClient::get_instance(Some(AdminClientConfig::from_env()?))?;
//! let settings = api::get_admin_settings().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All shared types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Single attempt**: Requests are never retried

pub mod api;
pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod container;
pub mod error;
pub mod models;
pub mod queries;
pub mod repositories;
pub mod services;

#[cfg(test)]
mod test_support;

// Re-export public types at crate root for convenience
pub use client::{AdminClient, ClientError, GraphqlExecutor, OperationOptions};
pub use config::{AdminClientConfig, AdminClientConfigBuilder, ApiUrl, AuthToken, ConfigUpdate};
pub use container::{Container, ContainerError, ServiceToken};
pub use error::ConfigError;
pub use repositories::RepositoryError;

// Re-export transport types
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlResponse, HttpClient, HttpError, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, OperationKind,
};

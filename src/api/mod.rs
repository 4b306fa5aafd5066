//! Free functions over the global [`AdminClient`].
//!
//! Each function resolves the instance created by
//! [`AdminClient::get_instance`] and delegates to the matching repository.
//! Calling any of them before the client is initialized returns
//! [`ClientError::NotInitialized`].
//!
//! # Example
//!
//! ```rust,ignore
//! use vendure_admin::api;
//! use vendure_admin::auth::AuthCredentials;
//! use vendure_admin::models::ListOptions;
//! use vendure_admin::{AdminClient, AdminClientConfig};
//!
//! AdminClient::get_instance(Some(AdminClientConfig::from_env()?))?;
//! api::login_admin(&AuthCredentials::new("superadmin", "superadmin")).await?;
//!
//! let products = api::get_products(&ListOptions::default().take(10)).await?;
//! println!("{} products", products.total_items);
//! ```

mod auth;
mod customers;
mod orders;
mod products;
mod settings;

use std::sync::Arc;

use crate::client::{AdminClient, ClientError};

pub use auth::{execute_custom_operation, get_current_user, login_admin, logout_admin};
pub use customers::{create_customer, get_customer, get_customers, update_customer};
pub use orders::{get_order, get_orders, update_order_status};
pub use products::{create_product, delete_product, get_product, get_products, update_product};
pub use settings::{get_admin_settings, update_admin_settings};

/// The crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the global client.
///
/// # Errors
///
/// Returns [`ClientError::NotInitialized`] if no instance exists yet.
pub fn client() -> Result<Arc<AdminClient>, ClientError> {
    AdminClient::get_instance(None)
}

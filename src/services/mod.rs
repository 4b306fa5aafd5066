//! Services over the repositories.
//!
//! # Overview
//!
//! - [`Service`]: generic get/list/create/update/delete/paginate over a [`Repository`](crate::repositories::Repository)
//! - [`ProductService`], [`OrderService`], [`CustomerService`]: aliases with
//!   lookup and search helpers for each entity
//! - [`SettingsService`]: global settings and their derived values
//! - [`AuthService`]: login, logout and the current user
//! - [`register_services`]: registers all of the above in a [`Container`](crate::container::Container)
//!
//! # Example
//!
//! ```rust,ignore
//! use vendure_admin::models::ListOptions;
//! use vendure_admin::services::ProductService;
//! use vendure_admin::AdminClient;
//!
//! let client = AdminClient::get_instance(None)?;
//! let products = ProductService::from_executor(client);
//! let page = products.search_products("shirt", &ListOptions::default().take(10)).await?;
//! ```

mod auth;
mod base;
mod customer;
mod order;
mod product;
pub mod registry;
mod settings;

pub use auth::AuthService;
pub use base::Service;
pub use customer::CustomerService;
pub use order::OrderService;
pub use product::ProductService;
pub use registry::register_services;
pub use settings::SettingsService;

//! GraphQL documents sent to the Vendure Admin API.
//!
//! Each submodule holds the fixed documents for one area of the API. The
//! documents are plain string constants and can be passed to
//! [`AdminClient::query`](crate::AdminClient::query) or
//! [`AdminClient::mutate`](crate::AdminClient::mutate) directly.

pub mod auth;
pub mod customers;
pub mod orders;
pub mod products;
pub mod settings;

pub use auth::{GET_CURRENT_USER, LOGIN_MUTATION, LOGOUT_MUTATION};
pub use customers::{CREATE_CUSTOMER, GET_CUSTOMER, GET_CUSTOMERS, UPDATE_CUSTOMER};
pub use orders::{GET_ORDER, GET_ORDERS, UPDATE_ORDER_STATUS};
pub use products::{CREATE_PRODUCT, DELETE_PRODUCT, GET_PRODUCT, GET_PRODUCTS, UPDATE_PRODUCT};
pub use settings::{GET_ADMIN_SETTINGS, UPDATE_ADMIN_SETTINGS};

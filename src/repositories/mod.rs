//! Repositories mapping entity operations to fixed GraphQL documents.
//!
//! # Overview
//!
//! - [`GraphqlResource`]: implemented by entity types; declares the document
//!   table for each [`ResourceOperation`]
//! - [`Repository`]: generic find/list/create/update/delete/paginate over a resource
//! - [`ProductRepository`], [`OrderRepository`], [`CustomerRepository`]: aliases
//!   for the supported entities
//! - [`SettingsRepository`]: the global settings singleton
//! - [`value_at_path`]: dotted lookup used to extract each payload
//!
//! # Unsupported Operations
//!
//! | Resource | Unsupported |
//! |---|---|
//! | Order | create, update, delete (use `update_order_status`) |
//! | Customer | delete |

mod customer;
mod errors;
mod operation;
mod order;
mod product;
mod resource;
mod settings;

pub use customer::CustomerRepository;
pub use errors::RepositoryError;
pub use operation::{find_operation, value_at_path, GraphqlOperation, ResourceOperation};
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use resource::{GraphqlResource, Repository};
pub use settings::SettingsRepository;

pub(crate) use operation::extract_result;

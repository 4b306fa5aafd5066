//! Data types exchanged with the Vendure Admin API.
//!
//! All types use camelCase field names on the wire. Entity types keep any
//! fields they do not model in a flattened `extra` map, so documents that
//! select more than the typed subset lose nothing.
//!
//! # Example
//!
//! ```rust
//! use vendure_admin::models::Product;
//! use serde_json::json;
//!
//! let product: Product = serde_json::from_value(json!({
//!     "id": "1",
//!     "name": "Laptop",
//!     "slug": "laptop",
//!     "enabled": true,
//!     "customFields": {"warranty": 2}
//! }))
//! .unwrap();
//!
//! assert_eq!(product.slug, "laptop");
//! assert!(product.extra.contains_key("customFields"));
//! ```

use serde::{Deserialize, Deserializer};

mod common;
mod customer;
mod filter;
mod order;
mod product;
mod settings;

pub use common::{
    DeletionResponse, DeletionResult, ListOptions, LogicalOperator, PaginatedList, SortOrder,
};
pub use customer::{
    Address, CreateCustomerInput, Customer, CustomerOrderSummary, CustomerUser,
    UpdateCustomerInput,
};
pub use filter::{ComparisonOperator, FilterCriteria, FilterValue, LogicalFilter};
pub use order::{
    Fulfillment, Order, OrderAddress, OrderCustomer, OrderLine, OrderLineVariant, OrderStatusUpdateInput,
    Payment,
};
pub use product::{
    Asset, CreateProductInput, Product, ProductTranslationInput, ProductVariant, UpdateProductInput,
};
pub use settings::{AdminSettings, ServerConfig, UpdateAdminSettingsInput};

/// Fields returned by the server that a type does not model.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Reads a JSON `null` as the field type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

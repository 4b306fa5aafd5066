//! Order types.
//!
//! Orders are read-only apart from state transitions, so there are no create
//! or update inputs besides [`OrderStatusUpdateInput`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, Extra};

/// The customer that placed an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    /// Customer ID.
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// A shipping or billing address attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// The variant bought on an order line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineVariant {
    /// Variant ID.
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    /// The owning product (`id`, `name`, `slug`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<serde_json::Value>,
}

/// A line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Line ID.
    pub id: String,

    /// The variant bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_variant: Option<OrderLineVariant>,

    /// Unit price in minor currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_price: i64,

    /// Quantity.
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,

    /// Line total in minor currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_price: i64,
}

/// A payment against an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment ID.
    pub id: String,

    /// Amount in minor currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: i64,

    /// Payment method code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,

    /// Payment state, such as `Settled`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,

    /// Provider transaction ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Provider metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A fulfillment of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    /// Fulfillment ID.
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
}

/// An order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: String,

    /// Human readable order code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,

    /// Order state, such as `PaymentSettled`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,

    /// Whether the order is still an active cart.
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,

    /// Order total in minor currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,

    /// ISO 4217 currency code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_code: String,

    /// When the order was placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_placed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<OrderCustomer>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<OrderLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<OrderAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<OrderAddress>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<Payment>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub fulfillments: Vec<Fulfillment>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Moves an order to a new state.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdateInput {
    /// ID of the order.
    pub order_id: String,
    /// Target state, such as `Shipped`.
    pub status: String,
}

impl OrderStatusUpdateInput {
    /// Creates a status update.
    #[must_use]
    pub fn new(order_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            status: status.into(),
        }
    }
}

//! Customer types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, Extra, PaginatedList};

/// The login account of a registered customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUser {
    /// User ID.
    pub id: String,

    /// Whether the email address has been verified.
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,

    /// Last login time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

/// A customer address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address ID.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub street_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country name, or the country object when selected with subfields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_billing_address: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_shipping_address: bool,
}

/// Summary of an order placed by a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrderSummary {
    /// Order ID.
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    /// Order total in minor currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_placed_at: Option<DateTime<Utc>>,
}

/// A customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
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

    /// The login account; absent for guest customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<CustomerUser>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,

    /// Orders placed by the customer, when selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<PaginatedList<CustomerOrderSummary>>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Input for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Additional input fields, such as `customFields`.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Input for updating a customer. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerInput {
    /// ID of the customer to update.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Additional input fields, such as `customFields`.
    #[serde(flatten)]
    pub extra: Extra,
}

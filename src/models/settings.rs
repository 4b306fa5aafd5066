//! Global settings types.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Extra};

/// Server-level configuration exposed with the global settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Server time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Custom field definitions per entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

/// The global settings of the shop.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    /// Settings ID.
    pub id: String,

    /// Enabled language codes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_languages: Vec<String>,

    /// Whether stock is tracked by default.
    #[serde(default, deserialize_with = "null_as_default")]
    pub track_inventory: bool,

    /// Stock level at which a variant counts as out of stock.
    #[serde(default, deserialize_with = "null_as_default")]
    pub out_of_stock_threshold: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_config: Option<ServerConfig>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Input for updating the global settings. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminSettingsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_inventory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_stock_threshold: Option<i64>,
    /// Additional input fields, such as `customFields`.
    #[serde(flatten)]
    pub extra: Extra,
}

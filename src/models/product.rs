//! Product types.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Extra};

/// An image or file attached to a product or variant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset ID.
    pub id: String,

    /// URL of the preview image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub preview: String,

    /// URL of the original file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant ID.
    pub id: String,

    /// Variant name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Stock keeping unit.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,

    /// Price in minor currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: i64,

    /// Saleable stock level, such as `IN_STOCK`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_level: Option<String>,

    /// Units on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_on_hand: Option<i64>,

    /// Variant assets.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: String,

    /// Product name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// URL slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,

    /// Description, possibly HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the product is visible in the shop.
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,

    /// The main asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_asset: Option<Asset>,

    /// All assets.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,

    /// Variants.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,

    /// Fields not modelled above, such as `customFields`.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Name, slug and description in one language.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductTranslationInput {
    /// Language code, such as `en`.
    pub language_code: String,

    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    /// Whether the product is visible in the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// ID of the featured asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_asset_id: Option<String>,

    /// IDs of all assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_ids: Option<Vec<String>>,

    /// IDs of facet values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_value_ids: Option<Vec<String>>,

    /// Per-language names, slugs and descriptions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub translations: Vec<ProductTranslationInput>,

    /// Additional input fields, such as `customFields`.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Input for updating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductInput {
    /// ID of the product to update.
    pub id: String,

    /// Whether the product is visible in the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// ID of the featured asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_asset_id: Option<String>,

    /// IDs of all assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_ids: Option<Vec<String>>,

    /// IDs of facet values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_value_ids: Option<Vec<String>>,

    /// Per-language names, slugs and descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<ProductTranslationInput>>,

    /// Additional input fields, such as `customFields`.
    #[serde(flatten)]
    pub extra: Extra,
}

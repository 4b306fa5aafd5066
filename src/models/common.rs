//! Pagination, sorting, and deletion types shared by all entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::filter::FilterCriteria;
use super::null_as_default;

/// Sort direction for a list field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// How multiple top-level filter fields are combined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    /// Every field must match.
    #[default]
    And,
    /// Any field may match.
    Or,
}

/// Options for list queries, sent as `$options`.
///
/// # Example
///
/// ```rust
/// use vendure_admin::models::{ComparisonOperator, ListOptions, SortOrder};
///
/// let options = ListOptions::default()
///     .take(10)
///     .skip(20)
///     .sort_by("createdAt", SortOrder::Desc)
///     .filter_field("enabled", ComparisonOperator::Eq(true.into()));
///
/// let json = serde_json::to_value(&options).unwrap();
/// assert_eq!(json["take"], 10);
/// assert_eq!(json["sort"]["createdAt"], "DESC");
/// assert_eq!(json["filter"]["enabled"]["eq"], true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<u32>,

    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// Sort direction per field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<BTreeMap<String, SortOrder>>,

    /// Filter criteria per field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterCriteria>,

    /// How the top-level filter fields are combined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_operator: Option<LogicalOperator>,
}

impl ListOptions {
    /// Sets `take`.
    #[must_use]
    pub const fn take(mut self, take: u32) -> Self {
        self.take = Some(take);
        self
    }

    /// Sets `skip`.
    #[must_use]
    pub const fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Adds a sort field.
    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), order);
        self
    }

    /// Adds or replaces one filter field.
    #[must_use]
    pub fn filter_field(
        mut self,
        field: impl Into<String>,
        value: impl Into<super::FilterValue>,
    ) -> Self {
        self.filter
            .get_or_insert_with(FilterCriteria::new)
            .insert(field.into(), value.into());
        self
    }

    /// Returns a copy of these options whose filter also carries `criteria`.
    ///
    /// Fields in `criteria` replace existing fields of the same name; all
    /// other options are kept.
    #[must_use]
    pub fn with_filter(&self, criteria: FilterCriteria) -> Self {
        let mut options = self.clone();
        options
            .filter
            .get_or_insert_with(FilterCriteria::new)
            .extend(criteria);
        options
    }
}

/// A page of results as returned by list queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedList<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Total number of matching items.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items: u64,

    /// Current page number. Zero when the server does not report it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_page: u64,

    /// Number of pages. Zero when the server does not report it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u64,

    /// Page size. Zero when the server does not report it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub per_page: u64,
}

impl<T> Default for PaginatedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            current_page: 0,
            total_pages: 0,
            per_page: 0,
        }
    }
}

/// Outcome of a delete mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeletionResult {
    /// The entity was deleted.
    Deleted,
    /// The entity was not deleted; see the message.
    NotDeleted,
}

/// The payload of a delete mutation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeletionResponse {
    /// Whether the entity was deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DeletionResult>,

    /// Explanation when the entity was not deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Boolean form of the result, reported by some servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl DeletionResponse {
    /// Returns `true` if the server reported the entity as deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.success == Some(true) || self.result == Some(DeletionResult::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComparisonOperator, FilterValue};
    use serde_json::json;

    #[test]
    fn test_empty_list_options_serialize_to_empty_object() {
        assert_eq!(serde_json::to_value(ListOptions::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_with_filter_overrides_same_field_and_keeps_others() {
        let options = ListOptions::default()
            .take(5)
            .filter_field("enabled", ComparisonOperator::Eq(json!(true)))
            .filter_field("name", ComparisonOperator::Contains("old".to_string()));

        let mut criteria = FilterCriteria::new();
        criteria.insert(
            "name".to_string(),
            FilterValue::Operator(ComparisonOperator::Contains("new".to_string())),
        );
        let merged = options.with_filter(criteria);

        let json = serde_json::to_value(&merged).unwrap();
        assert_eq!(json["take"], 5);
        assert_eq!(json["filter"]["enabled"]["eq"], true);
        assert_eq!(json["filter"]["name"]["contains"], "new");
        // The original options are untouched.
        assert_eq!(
            serde_json::to_value(&options).unwrap()["filter"]["name"]["contains"],
            "old"
        );
    }

    #[test]
    fn test_filter_operator_serializes_uppercase() {
        let options = ListOptions {
            filter_operator: Some(LogicalOperator::Or),
            ..ListOptions::default()
        };
        assert_eq!(serde_json::to_value(options).unwrap()["filterOperator"], "OR");
    }

    #[test]
    fn test_paginated_list_defaults_missing_page_fields() {
        let page: PaginatedList<serde_json::Value> =
            serde_json::from_value(json!({"items": [{"id": "1"}], "totalItems": 1})).unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.current_page, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.per_page, 0);
    }

    #[test]
    fn test_deletion_response_is_deleted() {
        let deleted: DeletionResponse =
            serde_json::from_value(json!({"result": "DELETED", "message": null})).unwrap();
        assert!(deleted.is_deleted());

        let not_deleted: DeletionResponse =
            serde_json::from_value(json!({"result": "NOT_DELETED", "message": "in use"})).unwrap();
        assert!(!not_deleted.is_deleted());
        assert_eq!(not_deleted.message.as_deref(), Some("in use"));

        let legacy: DeletionResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(legacy.is_deleted());
    }
}

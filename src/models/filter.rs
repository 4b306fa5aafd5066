//! Filter criteria for list queries.
//!
//! A [`FilterCriteria`] maps field names to a [`FilterValue`]: a comparison
//! such as `{"contains": "shirt"}`, a nested criteria object for relations
//! such as `customer.id`, a list, or a bare scalar. [`LogicalFilter`] adds
//! `and`/`or`/`not` groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name to filter value.
pub type FilterCriteria = BTreeMap<String, FilterValue>;

/// A single comparison, serialized as a one-key object such as `{"eq": 1}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOperator {
    /// Equal to the value.
    Eq(serde_json::Value),
    /// String contains the value.
    Contains(String),
    /// One of the values.
    In(Vec<serde_json::Value>),
    /// None of the values.
    NotIn(Vec<serde_json::Value>),
    /// Less than.
    Lt(serde_json::Value),
    /// Less than or equal.
    Lte(serde_json::Value),
    /// Greater than.
    Gt(serde_json::Value),
    /// Greater than or equal.
    Gte(serde_json::Value),
    /// Inclusive range, serialized as a two-element array.
    Between(serde_json::Value, serde_json::Value),
    /// Whether the field is null.
    IsNull(bool),
}

/// The value side of a filter field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FilterValue {
    /// A comparison on this field.
    Operator(ComparisonOperator),
    /// A list, used by `and`/`or` groups and list literals.
    List(Vec<FilterValue>),
    /// Criteria on a related entity's fields.
    Nested(FilterCriteria),
    /// A bare scalar.
    Scalar(serde_json::Value),
}

impl From<ComparisonOperator> for FilterValue {
    fn from(operator: ComparisonOperator) -> Self {
        Self::Operator(operator)
    }
}

impl From<FilterCriteria> for FilterValue {
    fn from(criteria: FilterCriteria) -> Self {
        Self::Nested(criteria)
    }
}

impl From<serde_json::Value> for FilterValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Scalar(value)
    }
}

impl FilterValue {
    /// Builds a nested criteria with a single field.
    ///
    /// ```rust
    /// use vendure_admin::models::{ComparisonOperator, FilterValue};
    ///
    /// let value = FilterValue::nested("id", ComparisonOperator::Eq("42".into()));
    /// assert_eq!(serde_json::to_value(&value).unwrap(), serde_json::json!({"id": {"eq": "42"}}));
    /// ```
    #[must_use]
    pub fn nested(field: impl Into<String>, value: impl Into<Self>) -> Self {
        let mut criteria = FilterCriteria::new();
        criteria.insert(field.into(), value.into());
        Self::Nested(criteria)
    }
}

/// Logical grouping of criteria.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogicalFilter {
    /// All of these must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<FilterCriteria>>,

    /// Any of these may match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<FilterCriteria>>,

    /// This must not match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<FilterCriteria>,
}

impl LogicalFilter {
    /// A filter matching any of `criteria`.
    #[must_use]
    pub fn any_of(criteria: Vec<FilterCriteria>) -> Self {
        Self {
            or: Some(criteria),
            ..Self::default()
        }
    }

    /// Writes the set groups into `criteria` as `and`/`or`/`not` fields,
    /// replacing existing groups of the same name.
    pub fn apply_to(self, criteria: &mut FilterCriteria) {
        let list = |groups: Vec<FilterCriteria>| {
            FilterValue::List(groups.into_iter().map(FilterValue::Nested).collect())
        };
        if let Some(and) = self.and {
            criteria.insert("and".to_string(), list(and));
        }
        if let Some(or) = self.or {
            criteria.insert("or".to_string(), list(or));
        }
        if let Some(not) = self.not {
            criteria.insert("not".to_string(), FilterValue::Nested(not));
        }
    }
}

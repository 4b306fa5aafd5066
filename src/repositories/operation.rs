//! Operation tables and result extraction.
//!
//! Every [`GraphqlResource`](crate::repositories::GraphqlResource) declares a
//! static table of [`GraphqlOperation`]s, each pairing a fixed document with
//! the dotted path of its payload inside the response `data`.

use std::fmt;

use crate::clients::OperationKind;
use crate::repositories::RepositoryError;

/// Operations a repository can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch one entity by ID.
    Find,
    /// List entities matching a filter.
    All,
    /// Create an entity.
    Create,
    /// Update an entity.
    Update,
    /// Delete an entity.
    Delete,
    /// Fetch one page of entities.
    Paginate,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Paginate => "paginate",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed GraphQL document bound to a resource operation.
///
/// # Example
///
/// ```rust
/// use vendure_admin::clients::OperationKind;
/// use vendure_admin::queries::GET_PRODUCT;
/// use vendure_admin::repositories::{GraphqlOperation, ResourceOperation};
///
/// const PRODUCT_FIND: GraphqlOperation = GraphqlOperation::query(
///     ResourceOperation::Find,
///     GET_PRODUCT,
///     "product",
/// );
/// assert_eq!(PRODUCT_FIND.kind, OperationKind::Query);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphqlOperation {
    /// The operation this document performs.
    pub operation: ResourceOperation,
    /// Whether the document is a query or a mutation.
    pub kind: OperationKind,
    /// The GraphQL document.
    pub document: &'static str,
    /// Dotted path of the payload inside `data`.
    pub result_path: &'static str,
}

impl GraphqlOperation {
    /// Creates a query operation.
    #[must_use]
    pub const fn query(
        operation: ResourceOperation,
        document: &'static str,
        result_path: &'static str,
    ) -> Self {
        Self {
            operation,
            kind: OperationKind::Query,
            document,
            result_path,
        }
    }

    /// Creates a mutation operation.
    #[must_use]
    pub const fn mutation(
        operation: ResourceOperation,
        document: &'static str,
        result_path: &'static str,
    ) -> Self {
        Self {
            operation,
            kind: OperationKind::Mutation,
            document,
            result_path,
        }
    }
}

/// Finds the entry for `operation` in a resource's table.
#[must_use]
pub fn find_operation(
    operations: &'static [GraphqlOperation],
    operation: ResourceOperation,
) -> Option<&'static GraphqlOperation> {
    operations.iter().find(|entry| entry.operation == operation)
}

/// Looks up a dotted path such as `products.items` inside a JSON value.
///
/// Returns `None` as soon as a segment is missing or `null`. Numeric
/// segments index into arrays. An empty path returns `value` itself.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vendure_admin::repositories::value_at_path;
///
/// let data = json!({"products": {"items": [{"id": "1"}]}});
/// assert_eq!(value_at_path(&data, "products.items.0.id"), Some(&json!("1")));
/// assert_eq!(value_at_path(&data, "products.totalItems"), None);
/// assert_eq!(value_at_path(&data, ""), Some(&data));
/// ```
#[must_use]
pub fn value_at_path<'a>(value: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    if path.is_empty() {
        return Some(value);
    }

    path.split('.').try_fold(value, |current, segment| {
        let next = match current {
            serde_json::Value::Array(items) => {
                segment.parse::<usize>().ok().and_then(|index| items.get(index))
            }
            _ => current.get(segment),
        };
        next.filter(|value| !value.is_null())
    })
}

/// Extracts the payload at `path` and turns `ErrorResult` payloads into
/// [`RepositoryError::Rejected`].
pub(crate) fn extract_result(
    resource: &'static str,
    data: &serde_json::Value,
    path: &str,
) -> Result<Option<serde_json::Value>, RepositoryError> {
    let Some(value) = value_at_path(data, path) else {
        return Ok(None);
    };

    if let Some(code) = value.get("errorCode").and_then(serde_json::Value::as_str) {
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        tracing::warn!(resource, code, message, "Admin API rejected the operation");
        return Err(RepositoryError::Rejected {
            resource,
            code: code.to_string(),
            message: message.to_string(),
        });
    }

    Ok(Some(value.clone()))
}

/// Decodes a payload that must be present.
pub(crate) fn decode_required<D: serde::de::DeserializeOwned>(
    resource: &'static str,
    operation: &'static str,
    value: Option<serde_json::Value>,
) -> Result<D, RepositoryError> {
    let value = value.ok_or(RepositoryError::EmptyResult {
        resource,
        operation,
    })?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TABLE: &[GraphqlOperation] = &[
        GraphqlOperation::query(ResourceOperation::Find, "query { a }", "a"),
        GraphqlOperation::mutation(ResourceOperation::Delete, "mutation { b }", "b"),
    ];

    #[test]
    fn test_find_operation_by_kind() {
        let find = find_operation(TABLE, ResourceOperation::Find).unwrap();
        assert_eq!(find.kind, OperationKind::Query);
        let delete = find_operation(TABLE, ResourceOperation::Delete).unwrap();
        assert_eq!(delete.kind, OperationKind::Mutation);
        assert!(find_operation(TABLE, ResourceOperation::Create).is_none());
    }

    #[test]
    fn test_value_at_path_stops_at_null() {
        let data = json!({"customer": null, "order": {"customer": {"id": "3"}}});
        assert_eq!(value_at_path(&data, "customer"), None);
        assert_eq!(value_at_path(&data, "customer.id"), None);
        assert_eq!(value_at_path(&data, "order.customer.id"), Some(&json!("3")));
        assert_eq!(value_at_path(&data, "order.missing.id"), None);
    }

    #[test]
    fn test_value_at_path_indexes_arrays() {
        let data = json!({"items": [{"id": "a"}, {"id": "b"}]});
        assert_eq!(value_at_path(&data, "items.1.id"), Some(&json!("b")));
        assert_eq!(value_at_path(&data, "items.2.id"), None);
        assert_eq!(value_at_path(&data, "items.x"), None);
    }

    #[test]
    fn test_extract_result_maps_error_results() {
        let data = json!({"createCustomer": {
            "errorCode": "EMAIL_ADDRESS_CONFLICT_ERROR",
            "message": "The email address is not available."
        }});
        let result = extract_result("Customer", &data, "createCustomer");
        assert!(matches!(
            result,
            Err(RepositoryError::Rejected { ref code, .. }) if code == "EMAIL_ADDRESS_CONFLICT_ERROR"
        ));
    }

    #[test]
    fn test_decode_required_reports_empty_result() {
        let result: Result<serde_json::Value, _> = decode_required("Product", "create", None);
        assert!(matches!(
            result,
            Err(RepositoryError::EmptyResult {
                resource: "Product",
                operation: "create"
            })
        ));
    }
}

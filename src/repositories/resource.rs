//! The `GraphqlResource` trait and the generic [`Repository`].
//!
//! A resource type declares its name and a static table of documents; the
//! repository turns entity operations into GraphQL calls and decodes the
//! payload found at each document's result path.
//!
//! # Variables
//!
//! | Operation | Variables |
//! |---|---|
//! | `find_by_id` | `{"id": id}` |
//! | `find_all` | `{"options": {"filter": filter}}` |
//! | `create` | `{"input": input}` |
//! | `update` | `{"input": {"id": id, ...input}}` |
//! | `delete` | `{"id": id}` |
//! | `find_with_pagination` | `{"options": options}` |

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::{AdminClient, GraphqlExecutor};
use crate::clients::OperationKind;
use crate::models::{DeletionResponse, FilterCriteria, ListOptions, PaginatedList};
use crate::repositories::operation::{decode_required, extract_result, find_operation};
use crate::repositories::{GraphqlOperation, RepositoryError, ResourceOperation};

/// An Admin API entity backed by a table of fixed GraphQL documents.
///
/// # Implementing
///
/// ```rust,ignore
/// impl GraphqlResource for Product {
///     type CreateInput = CreateProductInput;
///     type UpdateInput = UpdateProductInput;
///
///     const NAME: &'static str = "Product";
///     const OPERATIONS: &'static [GraphqlOperation] = &[
///         GraphqlOperation::query(ResourceOperation::Find, GET_PRODUCT, "product"),
///         // ...
///     ];
/// }
/// ```
///
/// Operations missing from the table fail with
/// [`RepositoryError::Unsupported`].
pub trait GraphqlResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Input accepted by `create`.
    type CreateInput: Serialize + Send + Sync;

    /// Input accepted by `update`.
    type UpdateInput: Serialize + Send + Sync;

    /// The singular resource name used in errors and logs.
    const NAME: &'static str;

    /// The documents available for this resource.
    const OPERATIONS: &'static [GraphqlOperation];

    /// Returns the document for `operation`, if the resource supports it.
    #[must_use]
    fn operation(operation: ResourceOperation) -> Option<&'static GraphqlOperation> {
        find_operation(Self::OPERATIONS, operation)
    }
}

/// Generic repository for a [`GraphqlResource`].
///
/// `E` is the executor that runs the documents, normally [`AdminClient`].
pub struct Repository<T, E = AdminClient> {
    executor: Arc<E>,
    resource: PhantomData<fn() -> T>,
}

impl<T, E> Clone for Repository<T, E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            resource: PhantomData,
        }
    }
}

impl<T: GraphqlResource, E> fmt::Debug for Repository<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("resource", &T::NAME)
            .finish_non_exhaustive()
    }
}

impl<T, E> Repository<T, E> {
    /// Creates a repository driven by `executor`.
    #[must_use]
    pub const fn new(executor: Arc<E>) -> Self {
        Self {
            executor,
            resource: PhantomData,
        }
    }

    /// Returns the executor.
    #[must_use]
    pub const fn executor(&self) -> &Arc<E> {
        &self.executor
    }
}

impl<T: GraphqlResource, E: GraphqlExecutor> Repository<T, E> {
    async fn run(
        &self,
        operation: ResourceOperation,
        variables: serde_json::Value,
    ) -> Result<Option<serde_json::Value>, RepositoryError> {
        let entry = T::operation(operation).ok_or(RepositoryError::Unsupported {
            resource: T::NAME,
            operation,
        })?;

        tracing::debug!(resource = T::NAME, %operation, "Running repository operation");

        let data = match entry.kind {
            OperationKind::Query => self.executor.query(entry.document, Some(variables)).await?,
            OperationKind::Mutation => {
                self.executor
                    .mutate(entry.document, Some(variables))
                    .await?
            }
        };

        extract_result(T::NAME, &data, entry.result_path)
    }

    /// Fetches one entity. A `null` result yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the call fails or the payload does not decode.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        let value = self
            .run(ResourceOperation::Find, serde_json::json!({ "id": id }))
            .await?;
        Ok(value.map(serde_json::from_value::<T>).transpose()?)
    }

    /// Lists entities matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the call fails or the payload does not decode.
    pub async fn find_all(
        &self,
        filter: Option<&FilterCriteria>,
    ) -> Result<Vec<T>, RepositoryError> {
        let options = filter.map_or_else(
            || serde_json::json!({}),
            |filter| serde_json::json!({ "filter": filter }),
        );
        let value = self
            .run(ResourceOperation::All, serde_json::json!({ "options": options }))
            .await?;
        decode_required(T::NAME, ResourceOperation::All.as_str(), value)
    }

    /// Creates an entity.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the call fails, the server rejects the
    /// input, or nothing is returned.
    pub async fn create(&self, input: &T::CreateInput) -> Result<T, RepositoryError> {
        let value = self
            .run(ResourceOperation::Create, serde_json::json!({ "input": input }))
            .await?;
        decode_required(T::NAME, ResourceOperation::Create.as_str(), value)
    }

    /// Updates entity `id`. Fields of `input` override the `id` key.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the call fails, the server rejects the
    /// input, or nothing is returned.
    pub async fn update(&self, id: &str, input: &T::UpdateInput) -> Result<T, RepositoryError> {
        let mut fields = serde_json::Map::new();
        fields.insert("id".to_string(), serde_json::Value::String(id.to_string()));
        if let serde_json::Value::Object(input) = serde_json::to_value(input)? {
            fields.extend(input);
        }

        let value = self
            .run(
                ResourceOperation::Update,
                serde_json::json!({ "input": fields }),
            )
            .await?;
        decode_required(T::NAME, ResourceOperation::Update.as_str(), value)
    }

    /// Deletes entity `id` and reports whether the server deleted it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the call fails or nothing is returned.
    pub async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let value = self
            .run(ResourceOperation::Delete, serde_json::json!({ "id": id }))
            .await?;

        let deleted = match value {
            Some(serde_json::Value::Bool(deleted)) => deleted,
            other => {
                let response: DeletionResponse =
                    decode_required(T::NAME, ResourceOperation::Delete.as_str(), other)?;
                if !response.is_deleted() {
                    tracing::warn!(
                        resource = T::NAME,
                        id,
                        message = ?response.message,
                        "Entity was not deleted"
                    );
                }
                response.is_deleted()
            }
        };
        Ok(deleted)
    }

    /// Fetches one page of entities.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the call fails or the payload does not decode.
    pub async fn find_with_pagination(
        &self,
        options: &ListOptions,
    ) -> Result<PaginatedList<T>, RepositoryError> {
        let value = self
            .run(
                ResourceOperation::Paginate,
                serde_json::json!({ "options": options }),
            )
            .await?;
        decode_required(T::NAME, ResourceOperation::Paginate.as_str(), value)
    }
}

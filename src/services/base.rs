//! The generic [`Service`] over a repository.

use std::fmt;
use std::sync::Arc;

use crate::client::{AdminClient, GraphqlExecutor};
use crate::models::{FilterCriteria, ListOptions, PaginatedList};
use crate::repositories::{GraphqlResource, Repository, RepositoryError};

/// Service layer over a [`Repository`].
///
/// The generic operations delegate one to one; entity specific helpers are
/// implemented on the aliases such as [`ProductService`](crate::services::ProductService).
pub struct Service<T, E = AdminClient> {
    repository: Repository<T, E>,
}

impl<T, E> Clone for Service<T, E> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<T: GraphqlResource, E> fmt::Debug for Service<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("repository", &self.repository)
            .finish()
    }
}

impl<T, E> Service<T, E> {
    /// Creates a service over `repository`.
    #[must_use]
    pub const fn new(repository: Repository<T, E>) -> Self {
        Self { repository }
    }

    /// Creates a service with a fresh repository driven by `executor`.
    #[must_use]
    pub const fn from_executor(executor: Arc<E>) -> Self {
        Self::new(Repository::new(executor))
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &Repository<T, E> {
        &self.repository
    }
}

impl<T: GraphqlResource, E: GraphqlExecutor> Service<T, E> {
    /// See [`Repository::find_by_id`].
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    /// See [`Repository::find_all`].
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_all(&self, filter: Option<&FilterCriteria>) -> Result<Vec<T>, RepositoryError> {
        self.repository.find_all(filter).await
    }

    /// See [`Repository::create`].
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn create(&self, input: &T::CreateInput) -> Result<T, RepositoryError> {
        self.repository.create(input).await
    }

    /// See [`Repository::update`].
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn update(&self, id: &str, input: &T::UpdateInput) -> Result<T, RepositoryError> {
        self.repository.update(id, input).await
    }

    /// See [`Repository::delete`].
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        self.repository.delete(id).await
    }

    /// See [`Repository::find_with_pagination`].
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_paginated(
        &self,
        options: &ListOptions,
    ) -> Result<PaginatedList<T>, RepositoryError> {
        self.repository.find_with_pagination(options).await
    }
}

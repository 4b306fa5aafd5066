//! Authentication service.

use std::sync::Arc;

use crate::auth::{AuthCredentials, AuthRepository, AuthResponse, CurrentUser};
use crate::client::{AdminClient, GraphqlExecutor};
use crate::repositories::RepositoryError;

/// Service for logging in and out.
#[derive(Debug)]
pub struct AuthService<E = AdminClient> {
    repository: AuthRepository<E>,
}

impl<E> Clone for AuthService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<E: GraphqlExecutor> AuthService<E> {
    /// Creates a service over `repository`.
    #[must_use]
    pub const fn new(repository: AuthRepository<E>) -> Self {
        Self { repository }
    }

    /// Creates a service with a fresh repository driven by `executor`.
    #[must_use]
    pub const fn from_executor(executor: Arc<E>) -> Self {
        Self::new(AuthRepository::new(executor))
    }

    /// Logs in.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn login(&self, credentials: &AuthCredentials) -> Result<AuthResponse, RepositoryError> {
        self.repository.login(credentials).await
    }

    /// Logs out.
    pub async fn logout(&self) {
        self.repository.logout().await;
    }

    /// Returns the logged-in administrator.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_current_user(&self) -> Result<Option<CurrentUser>, RepositoryError> {
        self.repository.get_current_user().await
    }

    /// Returns `true` if a non-expired session token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.repository.is_authenticated()
    }
}

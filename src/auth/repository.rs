//! Authentication repository.

use std::sync::Arc;

use crate::auth::{AuthCredentials, AuthResponse, CurrentUser};
use crate::client::{AdminClient, GraphqlExecutor};
use crate::queries::auth::GET_CURRENT_USER;
use crate::repositories::{extract_result, RepositoryError};

/// Logs in, logs out, and reads the current administrator.
#[derive(Debug)]
pub struct AuthRepository<E = AdminClient> {
    executor: Arc<E>,
}

impl<E> Clone for AuthRepository<E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<E: GraphqlExecutor> AuthRepository<E> {
    /// Creates a repository driven by `executor`.
    #[must_use]
    pub const fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }

    /// Logs in. The session token is stored on the executor.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Client`] wrapping
    /// [`ClientError::LoginFailed`](crate::ClientError::LoginFailed) when the
    /// credentials are rejected, or any other client failure.
    pub async fn login(&self, credentials: &AuthCredentials) -> Result<AuthResponse, RepositoryError> {
        Ok(self
            .executor
            .login(
                &credentials.email,
                &credentials.password,
                credentials.remember_me,
            )
            .await?)
    }

    /// Returns `true` if the executor holds a usable session token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.executor.is_authenticated()
    }

    /// Ends the session. Never fails; see [`GraphqlExecutor::logout`].
    pub async fn logout(&self) {
        self.executor.logout().await;
    }

    /// Returns the logged-in administrator, or `None` without a session.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the call fails or the payload does not decode.
    pub async fn get_current_user(&self) -> Result<Option<CurrentUser>, RepositoryError> {
        let data = self.executor.query(GET_CURRENT_USER, None).await?;
        let value = extract_result("CurrentUser", &data, "me")?;
        Ok(value.map(serde_json::from_value::<CurrentUser>).transpose()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::auth::{LOGIN_MUTATION, LOGOUT_MUTATION};
    use crate::test_support::RecordingExecutor;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_forwards_credentials() {
        let executor = RecordingExecutor::empty();
        let repository = AuthRepository::new(executor.clone());

        let credentials = AuthCredentials::new("admin@example.com", "secret").remember_me(true);
        let response = repository.login(&credentials).await.unwrap();

        assert_eq!(response.token, "recorded-token");
        let call = executor.last_call();
        assert_eq!(call.document, LOGIN_MUTATION);
        assert_eq!(
            call.variables,
            Some(json!({"username": "admin@example.com", "password": "secret", "rememberMe": true}))
        );
        assert!(executor.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_only_calls_server_when_authenticated() {
        let executor = RecordingExecutor::empty();
        let repository = AuthRepository::new(executor.clone());

        repository.logout().await;
        assert!(executor.calls().is_empty());

        executor.set_authenticated(true);
        repository.logout().await;
        assert_eq!(executor.last_call().document, LOGOUT_MUTATION);
        assert!(!executor.is_authenticated());
    }

    #[tokio::test]
    async fn test_get_current_user() {
        let executor = RecordingExecutor::with_responses([
            json!({"me": {"id": "1", "identifier": "superadmin", "channels": []}}),
            json!({"me": null}),
        ]);
        let repository = AuthRepository::new(executor.clone());

        let user = repository.get_current_user().await.unwrap().unwrap();
        assert_eq!(user.identifier, "superadmin");
        assert_eq!(executor.last_call().document, GET_CURRENT_USER);

        assert!(repository.get_current_user().await.unwrap().is_none());
    }
}

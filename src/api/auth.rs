use crate::auth::{AuthCredentials, AuthRepository, AuthResponse, CurrentUser};
use crate::client::{ClientError, OperationOptions};
use crate::repositories::RepositoryError;

use super::client;

/// Logs in on the global client.
///
/// # Errors
///
/// Returns [`ClientError::NotInitialized`], [`ClientError::LoginFailed`], or
/// any transport failure.
pub async fn login_admin(credentials: &AuthCredentials) -> Result<AuthResponse, ClientError> {
    client()?
        .login(
            &credentials.email,
            &credentials.password,
            credentials.remember_me,
        )
        .await
}

/// Logs out on the global client.
///
/// # Errors
///
/// Returns [`ClientError::NotInitialized`]. The logout itself never fails.
pub async fn logout_admin() -> Result<(), ClientError> {
    client()?.logout().await;
    Ok(())
}

/// Returns the logged-in administrator.
///
/// # Errors
///
/// Returns [`RepositoryError::Client`] if the client is not initialized or
/// the request fails.
pub async fn get_current_user() -> Result<Option<CurrentUser>, RepositoryError> {
    AuthRepository::new(client()?).get_current_user().await
}

/// Runs an arbitrary document on the global client.
///
/// # Errors
///
/// Returns [`ClientError::NotInitialized`] or any request failure.
pub async fn execute_custom_operation(
    document: &str,
    variables: Option<serde_json::Value>,
    options: OperationOptions,
) -> Result<serde_json::Value, ClientError> {
    client()?
        .execute_custom_operation(document, variables, options)
        .await
}

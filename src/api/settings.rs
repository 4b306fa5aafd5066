use crate::models::{AdminSettings, UpdateAdminSettingsInput};
use crate::repositories::{RepositoryError, SettingsRepository};

use super::client;

/// Fetches the global settings.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn get_admin_settings() -> Result<AdminSettings, RepositoryError> {
    SettingsRepository::new(client()?).get_settings().await
}

/// Updates the global settings.
///
/// # Errors
///
/// Returns [`RepositoryError`] on failure, including an uninitialized client.
pub async fn update_admin_settings(
    input: &UpdateAdminSettingsInput,
) -> Result<AdminSettings, RepositoryError> {
    SettingsRepository::new(client()?).update_settings(input).await
}

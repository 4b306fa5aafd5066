//! Global settings service.

use std::sync::Arc;

use crate::client::{AdminClient, GraphqlExecutor};
use crate::models::{AdminSettings, UpdateAdminSettingsInput};
use crate::repositories::{RepositoryError, SettingsRepository};

/// Service for the global settings.
#[derive(Debug)]
pub struct SettingsService<E = AdminClient> {
    repository: SettingsRepository<E>,
}

impl<E> Clone for SettingsService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<E: GraphqlExecutor> SettingsService<E> {
    /// Creates a service over `repository`.
    #[must_use]
    pub const fn new(repository: SettingsRepository<E>) -> Self {
        Self { repository }
    }

    /// Creates a service with a fresh repository driven by `executor`.
    #[must_use]
    pub const fn from_executor(executor: Arc<E>) -> Self {
        Self::new(SettingsRepository::new(executor))
    }

    /// Fetches the global settings.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_settings(&self) -> Result<AdminSettings, RepositoryError> {
        self.repository.get_settings().await
    }

    /// Updates the global settings.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn update_settings(
        &self,
        input: &UpdateAdminSettingsInput,
    ) -> Result<AdminSettings, RepositoryError> {
        self.repository.update_settings(input).await
    }

    /// Returns the enabled language codes.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_available_languages(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(self.get_settings().await?.available_languages)
    }

    /// Returns whether stock is tracked by default.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn is_inventory_tracking_enabled(&self) -> Result<bool, RepositoryError> {
        Ok(self.get_settings().await?.track_inventory)
    }

    /// Returns the out-of-stock threshold.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn get_out_of_stock_threshold(&self) -> Result<i64, RepositoryError> {
        Ok(self.get_settings().await?.out_of_stock_threshold)
    }
}

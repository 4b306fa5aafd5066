//! Global settings repository.
//!
//! Settings are a singleton on the server, so this repository does not go
//! through the [`GraphqlResource`](crate::repositories::GraphqlResource) table.

use std::sync::Arc;

use crate::client::{AdminClient, GraphqlExecutor};
use crate::models::{AdminSettings, UpdateAdminSettingsInput};
use crate::queries::settings::{GET_ADMIN_SETTINGS, UPDATE_ADMIN_SETTINGS};
use crate::repositories::operation::{decode_required, extract_result};
use crate::repositories::RepositoryError;

const RESOURCE: &str = "GlobalSettings";

/// Repository for the global settings.
#[derive(Debug)]
pub struct SettingsRepository<E = AdminClient> {
    executor: Arc<E>,
}

impl<E> Clone for SettingsRepository<E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<E: GraphqlExecutor> SettingsRepository<E> {
    /// Creates a repository driven by `executor`.
    #[must_use]
    pub const fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }

    /// Fetches the global settings.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the call fails or nothing is returned.
    pub async fn get_settings(&self) -> Result<AdminSettings, RepositoryError> {
        let data = self.executor.query(GET_ADMIN_SETTINGS, None).await?;
        let value = extract_result(RESOURCE, &data, "globalSettings")?;
        decode_required(RESOURCE, "get_settings", value)
    }

    /// Updates the global settings.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Rejected`] if the server refuses the change,
    /// or another [`RepositoryError`] if the call fails.
    pub async fn update_settings(
        &self,
        input: &UpdateAdminSettingsInput,
    ) -> Result<AdminSettings, RepositoryError> {
        let variables = serde_json::json!({ "input": input });
        let data = self
            .executor
            .mutate(UPDATE_ADMIN_SETTINGS, Some(variables))
            .await?;
        let value = extract_result(RESOURCE, &data, "updateGlobalSettings")?;
        decode_required(RESOURCE, "update_settings", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::OperationKind;
    use crate::test_support::RecordingExecutor;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_settings() {
        let executor = RecordingExecutor::with_responses([json!({
            "globalSettings": {"id": "1", "availableLanguages": ["en"], "trackInventory": true, "outOfStockThreshold": 0}
        })]);
        let repository = SettingsRepository::new(executor.clone());

        let settings = repository.get_settings().await.unwrap();
        assert_eq!(settings.available_languages, vec!["en"]);
        let call = executor.last_call();
        assert_eq!(call.kind, OperationKind::Query);
        assert_eq!(call.variables, None);
    }

    #[tokio::test]
    async fn test_update_settings_sends_input() {
        let executor = RecordingExecutor::with_responses([json!({
            "updateGlobalSettings": {"id": "1", "availableLanguages": ["en", "de"], "trackInventory": true, "outOfStockThreshold": 0}
        })]);
        let repository = SettingsRepository::new(executor.clone());

        let input = UpdateAdminSettingsInput {
            available_languages: Some(vec!["en".to_string(), "de".to_string()]),
            ..UpdateAdminSettingsInput::default()
        };
        let settings = repository.update_settings(&input).await.unwrap();

        assert_eq!(settings.available_languages.len(), 2);
        assert_eq!(
            executor.last_call().variables,
            Some(json!({"input": {"availableLanguages": ["en", "de"]}}))
        );
    }
}

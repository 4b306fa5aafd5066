//! Global settings documents.

pub const GET_ADMIN_SETTINGS: &str = r"
query GetGlobalSettings {
  globalSettings {
    id
    availableLanguages
    trackInventory
    outOfStockThreshold
    serverConfig {
      timeZone
      customFields
    }
  }
}
";

/// Takes `$input: UpdateGlobalSettingsInput!`.
pub const UPDATE_ADMIN_SETTINGS: &str = r"
mutation UpdateGlobalSettings($input: UpdateGlobalSettingsInput!) {
  updateGlobalSettings(input: $input) {
    ... on GlobalSettings {
      id
      availableLanguages
      trackInventory
      outOfStockThreshold
      serverConfig {
        timeZone
        customFields
      }
    }
    ... on ErrorResult {
      errorCode
      message
    }
  }
}
";

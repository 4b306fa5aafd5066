//! Integration tests for configuration loading and the service container.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use vendure_admin::config::{DEFAULT_TIMEOUT, ENV_API_URL, ENV_AUTH_TOKEN, ENV_TIMEOUT_MS};
use vendure_admin::services::registry::{ADMIN_CLIENT, PRODUCT_SERVICE, SETTINGS_REPOSITORY};
use vendure_admin::services::register_services;
use vendure_admin::{AdminClient, AdminClientConfig, ConfigError, Container};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_from_lookup_reads_all_keys() {
    let config = AdminClientConfig::from_lookup(lookup(&[
        (ENV_API_URL, "https://shop.example.com/admin-api"),
        (ENV_AUTH_TOKEN, "seed-token"),
        (ENV_TIMEOUT_MS, "2500"),
    ]))
    .unwrap();

    assert_eq!(config.api_url().as_ref(), "https://shop.example.com/admin-api");
    assert_eq!(config.auth_token().unwrap().as_ref(), "seed-token");
    assert_eq!(config.timeout(), Duration::from_millis(2500));
}

#[test]
fn test_from_lookup_defaults_timeout() {
    let config =
        AdminClientConfig::from_lookup(lookup(&[(ENV_API_URL, "http://localhost:3000/admin-api")]))
            .unwrap();
    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    assert!(config.auth_token().is_none());
}

#[test]
fn test_from_lookup_requires_url() {
    let error = AdminClientConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(matches!(error, ConfigError::MissingRequiredField { .. }));
}

#[test]
fn test_from_lookup_rejects_bad_timeout() {
    let error = AdminClientConfig::from_lookup(lookup(&[
        (ENV_API_URL, "http://localhost:3000/admin-api"),
        (ENV_TIMEOUT_MS, "soon"),
    ]))
    .unwrap_err();
    assert_eq!(
        error,
        ConfigError::InvalidTimeout {
            value: "soon".to_string()
        }
    );
}

// ============================================================================
// Container
// ============================================================================

#[test]
fn test_register_services_into_container() {
    let config =
        AdminClientConfig::from_lookup(lookup(&[(ENV_API_URL, "http://localhost:3000/admin-api")]))
            .unwrap();
    let client = Arc::new(AdminClient::new(config).unwrap());

    let container = Container::new();
    register_services(&container, Arc::clone(&client));

    assert!(container.has(PRODUCT_SERVICE));
    let resolved = container.get(ADMIN_CLIENT).unwrap();
    assert!(Arc::ptr_eq(&resolved, &client));

    let settings = container.get(SETTINGS_REPOSITORY).unwrap();
    let again = container.get(SETTINGS_REPOSITORY).unwrap();
    assert!(Arc::ptr_eq(&settings, &again));

    assert!(container.remove(PRODUCT_SERVICE));
    assert_eq!(
        container.get(PRODUCT_SERVICE).unwrap_err().to_string(),
        "Service not found: ProductService"
    );
}

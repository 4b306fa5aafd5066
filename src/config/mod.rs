//! Configuration types for the Vendure Admin client.
//!
//! # Overview
//!
//! - [`AdminClientConfig`]: The configuration held by an [`AdminClient`](crate::AdminClient)
//! - [`AdminClientConfigBuilder`]: A builder for constructing [`AdminClientConfig`] instances
//! - [`ConfigUpdate`]: A partial configuration applied on top of an existing one
//! - [`ApiUrl`]: A validated API endpoint URL
//! - [`AuthToken`]: A bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use vendure_admin::{AdminClientConfig, ApiUrl};
//!
//! let config = AdminClientConfig::builder()
//!     .api_url(ApiUrl::new("https://shop.example.com/admin-api").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(5));
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, AuthToken};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Environment variable holding the Admin API URL.
pub const ENV_API_URL: &str = "VENDURE_API_URL";
/// Environment variable holding an initial auth token.
pub const ENV_AUTH_TOKEN: &str = "VENDURE_AUTH_TOKEN";
/// Environment variable holding an initial refresh token.
pub const ENV_REFRESH_TOKEN: &str = "VENDURE_REFRESH_TOKEN";
/// Environment variable holding the request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "VENDURE_TIMEOUT_MS";

/// Configuration for the Vendure Admin client.
///
/// `AdminClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminClientConfig {
    api_url: ApiUrl,
    auth_token: Option<AuthToken>,
    refresh_token: Option<AuthToken>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl AdminClientConfig {
    /// Creates a new builder for constructing an `AdminClientConfig`.
    #[must_use]
    pub fn builder() -> AdminClientConfigBuilder {
        AdminClientConfigBuilder::new()
    }

    /// Builds a configuration from `VENDURE_*` environment variables.
    ///
    /// `VENDURE_API_URL` is required. `VENDURE_AUTH_TOKEN`,
    /// `VENDURE_REFRESH_TOKEN` and `VENDURE_TIMEOUT_MS` are optional; empty
    /// values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the URL variable is not
    /// set, or the validation error of any malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// This backs [`from_env`](Self::from_env) and accepts the same keys.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(url) = get(ENV_API_URL) {
            builder = builder.api_url(ApiUrl::new(url)?);
        }
        if let Some(token) = get(ENV_AUTH_TOKEN) {
            builder = builder.auth_token(AuthToken::new(token)?);
        }
        if let Some(token) = get(ENV_REFRESH_TOKEN) {
            builder = builder.refresh_token(AuthToken::new(token)?);
        }
        if let Some(raw) = get(ENV_TIMEOUT_MS) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidTimeout { value: raw.clone() })?;
            builder = builder.timeout(Duration::from_millis(millis));
        }
        builder.build()
    }

    /// Returns the API URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the initial auth token, if configured.
    #[must_use]
    pub const fn auth_token(&self) -> Option<&AuthToken> {
        self.auth_token.as_ref()
    }

    /// Returns the initial refresh token, if configured.
    #[must_use]
    pub const fn refresh_token(&self) -> Option<&AuthToken> {
        self.refresh_token.as_ref()
    }

    /// Returns the request timeout, or [`DEFAULT_TIMEOUT`] if none was set.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        match self.timeout {
            Some(timeout) => timeout,
            None => DEFAULT_TIMEOUT,
        }
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a copy of this configuration with every field set in `update`
    /// overriding the current value.
    #[must_use]
    pub fn merged(&self, update: &ConfigUpdate) -> Self {
        Self {
            api_url: update.api_url.clone().unwrap_or_else(|| self.api_url.clone()),
            auth_token: update.auth_token.clone().or_else(|| self.auth_token.clone()),
            refresh_token: update
                .refresh_token
                .clone()
                .or_else(|| self.refresh_token.clone()),
            timeout: update.timeout.or(self.timeout),
            user_agent_prefix: update
                .user_agent_prefix
                .clone()
                .or_else(|| self.user_agent_prefix.clone()),
        }
    }
}

// Verify AdminClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminClientConfig>();
};

/// Builder for constructing [`AdminClientConfig`] instances.
///
/// `api_url` is required. Defaults:
///
/// - `timeout`: [`DEFAULT_TIMEOUT`] (10 seconds)
/// - `auth_token`, `refresh_token`, `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct AdminClientConfigBuilder {
    api_url: Option<ApiUrl>,
    auth_token: Option<AuthToken>,
    refresh_token: Option<AuthToken>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl AdminClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets an initial auth token, e.g. one persisted from an earlier login.
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets an initial refresh token.
    #[must_use]
    pub fn refresh_token(mut self, token: AuthToken) -> Self {
        self.refresh_token = Some(token);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AdminClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_url` is not set.
    pub fn build(self) -> Result<AdminClientConfig, ConfigError> {
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;

        Ok(AdminClientConfig {
            api_url,
            auth_token: self.auth_token,
            refresh_token: self.refresh_token,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// A partial configuration used to update a live client.
///
/// Unset fields leave the current value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// New API URL. Changing it rebuilds the transport.
    pub api_url: Option<ApiUrl>,
    /// Replacement auth token.
    pub auth_token: Option<AuthToken>,
    /// Replacement refresh token.
    pub refresh_token: Option<AuthToken>,
    /// New request timeout.
    pub timeout: Option<Duration>,
    /// New user agent prefix.
    pub user_agent_prefix: Option<String>,
}

impl From<AdminClientConfig> for ConfigUpdate {
    fn from(config: AdminClientConfig) -> Self {
        Self {
            api_url: Some(config.api_url),
            auth_token: config.auth_token,
            refresh_token: config.refresh_token,
            timeout: config.timeout,
            user_agent_prefix: config.user_agent_prefix,
        }
    }
}

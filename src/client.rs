//! The Vendure admin client and its process-wide instance.
//!
//! [`AdminClient`] owns the configuration, the GraphQL transport, and the
//! session tokens. Most applications keep one client for the whole process
//! through [`AdminClient::get_instance`]; tests and multi-tenant code can
//! construct independent clients with [`AdminClient::new`].
//!
//! # Example
//!
//! ```rust,ignore
//! use vendure_admin::{AdminClient, AdminClientConfig, ApiUrl};
//!
//! let config = AdminClientConfig::builder()
//!     .api_url(ApiUrl::new("http://localhost:3000/admin-api")?)
//!     .build()?;
//!
//! let client = AdminClient::get_instance(Some(config))?;
//! client.login("superadmin", "superadmin", false).await?;
//!
//! let data = client.query("query { me { id } }", None).await?;
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::auth::{AuthResponse, CurrentUser, TokenStore};
use crate::clients::{GraphqlClient, GraphqlError, OperationKind};
use crate::config::{AdminClientConfig, AuthToken, ConfigUpdate};
use crate::queries::auth::{LOGIN_MUTATION, LOGOUT_MUTATION};

/// How long a freshly issued session token is assumed to be valid.
pub const SESSION_LIFETIME_HOURS: i64 = 24;

static INSTANCE: RwLock<Option<Arc<AdminClient>>> = RwLock::new(None);

/// Errors raised by [`AdminClient`] operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The process-wide client has not been created yet.
    #[error(
        "Vendure admin client is not initialized. Call AdminClient::get_instance with a configuration first."
    )]
    NotInitialized,

    /// The server rejected the login credentials.
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// The login succeeded but no session token was issued.
    #[error("Login response did not include a vendure-auth-token header")]
    MissingAuthToken,

    /// The GraphQL operation failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),
}

/// Options for [`AdminClient::execute_custom_operation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationOptions {
    /// Whether the document is sent as a query or a mutation.
    pub kind: OperationKind,
}

impl OperationOptions {
    /// Options for a mutation.
    #[must_use]
    pub const fn mutation() -> Self {
        Self {
            kind: OperationKind::Mutation,
        }
    }
}

/// Something that can run GraphQL documents against the Admin API and owns
/// the session used to do so.
///
/// Repositories and services are generic over this trait so they can be
/// driven by a recording double in tests.
#[allow(async_fn_in_trait)]
pub trait GraphqlExecutor: Send + Sync {
    /// Runs a query and returns its `data` object.
    async fn query(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError>;

    /// Runs a mutation and returns its `data` object.
    async fn mutate(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError>;

    /// Logs in and stores the issued session token.
    async fn login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthResponse, ClientError>;

    /// Ends the session. Failures are logged, and local tokens are always cleared.
    async fn logout(&self);

    /// Returns `true` if a usable session token is held.
    fn is_authenticated(&self) -> bool;
}

/// Client for the Vendure Admin API.
///
/// `AdminClient` is `Send + Sync`; share it through an `Arc`.
#[derive(Debug)]
pub struct AdminClient {
    config: RwLock<AdminClientConfig>,
    transport: RwLock<Arc<GraphqlClient>>,
    tokens: TokenStore,
}

// Verify AdminClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminClient>();
};

impl AdminClient {
    /// Creates a client. Tokens are seeded from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if the HTTP transport cannot be built.
    pub fn new(config: AdminClientConfig) -> Result<Self, ClientError> {
        let transport = GraphqlClient::new(&config)?;
        let tokens = TokenStore::new(config.auth_token().cloned(), config.refresh_token().cloned());

        Ok(Self {
            config: RwLock::new(config),
            transport: RwLock::new(Arc::new(transport)),
            tokens,
        })
    }

    /// Returns the process-wide client.
    ///
    /// - Without an instance, a configuration creates one.
    /// - With an instance, a configuration is applied to it through
    ///   [`update_config`](Self::update_config).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotInitialized`] when no instance exists and no
    /// configuration is given, or the error of building the transport.
    pub fn get_instance(config: Option<AdminClientConfig>) -> Result<Arc<Self>, ClientError> {
        let mut slot = INSTANCE.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(client) = slot.as_ref() {
            if let Some(config) = config {
                client.update_config(ConfigUpdate::from(config))?;
            }
            return Ok(Arc::clone(client));
        }

        let config = config.ok_or(ClientError::NotInitialized)?;
        let client = Arc::new(Self::new(config)?);
        tracing::debug!(api_url = %client.config().api_url(), "Created Vendure admin client");
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Drops the process-wide client. Clones held elsewhere stay usable.
    pub fn reset_instance() {
        INSTANCE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> AdminClientConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies a partial configuration.
    ///
    /// The transport is rebuilt only when the URL, timeout, or user agent
    /// changes. Tokens are replaced only when the update carries them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if a rebuilt transport cannot be
    /// created. The previous configuration stays in place in that case.
    pub fn update_config(&self, update: ConfigUpdate) -> Result<(), ClientError> {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let next = config.merged(&update);

        let transport_changed = next.api_url() != config.api_url()
            || next.timeout() != config.timeout()
            || next.user_agent_prefix() != config.user_agent_prefix();

        if transport_changed {
            let transport = GraphqlClient::new(&next)?;
            *self.transport.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(transport);
            tracing::debug!(api_url = %next.api_url(), "Rebuilt Admin API transport");
        }

        if let Some(token) = update.auth_token {
            self.tokens.set_auth_token(Some(token));
        }
        if let Some(token) = update.refresh_token {
            self.tokens.set_refresh_token(Some(token));
        }

        *config = next;
        Ok(())
    }

    fn transport(&self) -> Arc<GraphqlClient> {
        Arc::clone(&self.transport.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns the current bearer token.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.tokens.auth_token()
    }

    /// Sets the bearer token. An empty string clears it.
    pub fn set_auth_token(&self, token: impl Into<String>) {
        self.tokens.set_auth_token(AuthToken::new(token).ok());
    }

    /// Returns the current refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.tokens.refresh_token()
    }

    /// Sets the refresh token. An empty string clears it.
    pub fn set_refresh_token(&self, token: impl Into<String>) {
        self.tokens.set_refresh_token(AuthToken::new(token).ok());
    }

    /// Returns `true` if a non-expired bearer token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated()
    }

    /// Logs in with the given credentials.
    ///
    /// The session token is read from the `vendure-auth-token` response
    /// header and stored on this client.
    ///
    /// # Errors
    ///
    /// - [`ClientError::LoginFailed`] if the server answered with an error result
    /// - [`ClientError::MissingAuthToken`] if no session token was issued
    /// - [`ClientError::Graphql`] for transport and GraphQL failures
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthResponse, ClientError> {
        let variables = serde_json::json!({
            "username": username,
            "password": password,
            "rememberMe": remember_me,
        });

        let response = self
            .transport()
            .mutate(LOGIN_MUTATION, Some(variables), None)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Admin login request failed");
                ClientError::from(e)
            })?;

        let login = response
            .data
            .get("login")
            .cloned()
            .unwrap_or(serde_json::Value::Null);

        if let Some(code) = login.get("errorCode").and_then(serde_json::Value::as_str) {
            let message = login
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(code);
            tracing::error!(error_code = code, "Admin login rejected");
            return Err(ClientError::LoginFailed(message.to_string()));
        }

        let token = response
            .auth_token
            .ok_or(ClientError::MissingAuthToken)?;
        let session = AuthToken::new(token.clone()).map_err(|_| ClientError::MissingAuthToken)?;

        let user = if login.is_null() {
            None
        } else {
            Some(serde_json::from_value::<CurrentUser>(login).map_err(GraphqlError::from)?)
        };

        let expires = Utc::now() + chrono::Duration::hours(SESSION_LIFETIME_HOURS);
        self.tokens.set_session(session, expires);
        tracing::debug!(identifier = ?user.as_ref().map(|u| &u.identifier), "Admin login succeeded");

        Ok(AuthResponse {
            token,
            refresh_token: self.tokens.refresh_token(),
            expires,
            user,
        })
    }

    /// Ends the current session.
    ///
    /// The logout mutation is only sent while authenticated. Its failure is
    /// logged and ignored; local tokens are cleared either way.
    pub async fn logout(&self) {
        if self.is_authenticated() {
            if let Err(e) = self.mutate(LOGOUT_MUTATION, None).await {
                tracing::warn!(error = %e, "Admin logout request failed");
            }
        }
        self.tokens.clear();
    }

    /// Runs a query with the current session and returns its `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] on failure.
    pub async fn query(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        self.execute(OperationKind::Query, document, variables).await
    }

    /// Runs a mutation with the current session and returns its `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] on failure.
    pub async fn mutate(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        self.execute(OperationKind::Mutation, document, variables)
            .await
    }

    /// Runs a query and decodes its `data` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] on failure or if `data` does not match `T`.
    pub async fn query_as<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let data = self.query(document, variables).await?;
        Ok(serde_json::from_value(data).map_err(GraphqlError::from)?)
    }

    /// Runs a mutation and decodes its `data` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] on failure or if `data` does not match `T`.
    pub async fn mutate_as<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let data = self.mutate(document, variables).await?;
        Ok(serde_json::from_value(data).map_err(GraphqlError::from)?)
    }

    /// Runs an arbitrary document, as a query unless `options` says otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] on failure.
    pub async fn execute_custom_operation(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
        options: OperationOptions,
    ) -> Result<serde_json::Value, ClientError> {
        self.execute(options.kind, document, variables).await
    }

    async fn execute(
        &self,
        kind: OperationKind,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        let token = self.tokens.auth_token();
        let response = self
            .transport()
            .execute(kind, document, variables, token.as_deref())
            .await?;
        Ok(response.data)
    }
}

impl GraphqlExecutor for AdminClient {
    async fn query(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        Self::query(self, document, variables).await
    }

    async fn mutate(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        Self::mutate(self, document, variables).await
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthResponse, ClientError> {
        Self::login(self, username, password, remember_me).await
    }

    async fn logout(&self) {
        Self::logout(self).await;
    }

    fn is_authenticated(&self) -> bool {
        Self::is_authenticated(self)
    }
}

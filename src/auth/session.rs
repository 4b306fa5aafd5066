//! Session token state for the Admin API.
//!
//! This module provides the [`TokenStore`] type holding the bearer token,
//! the refresh token, and the expiry of the current admin session.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::config::AuthToken;

#[derive(Clone, Debug, Default)]
struct Tokens {
    auth_token: Option<AuthToken>,
    refresh_token: Option<AuthToken>,
    expires: Option<DateTime<Utc>>,
}

/// Thread-safe token state shared by an [`AdminClient`](crate::AdminClient).
///
/// # Thread Safety
///
/// `TokenStore` is `Send + Sync`. Reads and writes go through an internal
/// lock, so a store can be shared by reference across tasks.
///
/// # Example
///
/// ```rust
/// use vendure_admin::auth::TokenStore;
/// use vendure_admin::AuthToken;
///
/// let store = TokenStore::default();
/// assert!(!store.is_authenticated());
///
/// store.set_auth_token(Some(AuthToken::new("session-token").unwrap()));
/// assert!(store.is_authenticated());
/// assert_eq!(store.auth_token().as_deref(), Some("session-token"));
///
/// store.clear();
/// assert!(store.auth_token().is_none());
/// ```
#[derive(Debug, Default)]
pub struct TokenStore {
    inner: RwLock<Tokens>,
}

// Verify TokenStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenStore>();
};

impl TokenStore {
    /// Creates a store seeded with the given tokens and no expiry.
    #[must_use]
    pub fn new(auth_token: Option<AuthToken>, refresh_token: Option<AuthToken>) -> Self {
        Self {
            inner: RwLock::new(Tokens {
                auth_token,
                refresh_token,
                expires: None,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Tokens> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tokens> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current bearer token.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.read()
            .auth_token
            .as_ref()
            .map(|token| token.as_ref().to_string())
    }

    /// Returns the current refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read()
            .refresh_token
            .as_ref()
            .map(|token| token.as_ref().to_string())
    }

    /// Returns when the current bearer token expires, if known.
    #[must_use]
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        self.read().expires
    }

    /// Replaces the bearer token. The expiry is reset.
    pub fn set_auth_token(&self, token: Option<AuthToken>) {
        let mut tokens = self.write();
        tokens.auth_token = token;
        tokens.expires = None;
    }

    /// Replaces the bearer token together with its expiry.
    pub fn set_session(&self, token: AuthToken, expires: DateTime<Utc>) {
        let mut tokens = self.write();
        tokens.auth_token = Some(token);
        tokens.expires = Some(expires);
    }

    /// Replaces the refresh token.
    pub fn set_refresh_token(&self, token: Option<AuthToken>) {
        self.write().refresh_token = token;
    }

    /// Drops both tokens and the expiry.
    pub fn clear(&self) {
        *self.write() = Tokens::default();
    }

    /// Returns `true` if this store holds a bearer token that has not expired.
    ///
    /// Tokens without a known expiry are considered valid.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        let tokens = self.read();
        tokens.auth_token.is_some() && !tokens.expires.is_some_and(|expires| Utc::now() > expires)
    }
}

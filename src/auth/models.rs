//! Authentication data types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A channel the current administrator has access to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Channel ID.
    pub id: String,
    /// Channel code.
    pub code: String,
    /// Channel token, sent as `vendure-token` to select the channel.
    pub token: String,
}

/// The administrator that owns the current session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// User ID.
    pub id: String,
    /// Login identifier, usually the email address.
    pub identifier: String,
    /// Channels the user can access. Empty when not requested.
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// Credentials used to log in.
///
/// The password is masked in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCredentials {
    /// The administrator's identifier, usually an email address.
    pub email: String,
    /// The password.
    pub password: String,
    /// Requests a long-lived session.
    #[serde(default)]
    pub remember_me: bool,
}

impl AuthCredentials {
    /// Creates credentials without `remember_me`.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    /// Sets `remember_me`.
    #[must_use]
    pub const fn remember_me(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }
}

impl fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("email", &self.email)
            .field("password", &"*****")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// The result of a successful login.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The bearer token issued by the server.
    pub token: String,
    /// The refresh token held by the client, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// When the session is assumed to expire.
    pub expires: DateTime<Utc>,
    /// The logged-in user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<CurrentUser>,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"*****")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .field("expires", &self.expires)
            .field("user", &self.user)
            .finish()
    }
}

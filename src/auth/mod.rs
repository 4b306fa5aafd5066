//! Authentication for the Vendure Admin API.
//!
//! # Overview
//!
//! - [`TokenStore`]: Thread-safe bearer and refresh token state
//! - [`AuthRepository`]: Login, logout, and current user lookups
//! - [`AuthCredentials`], [`AuthResponse`], [`CurrentUser`], [`Channel`]: Data types
//!
//! # Session Tokens
//!
//! Vendure issues session tokens through the `vendure-auth-token` response
//! header of the login mutation. The token is then sent back as
//! `Authorization: Bearer <token>` on every request. Sessions are assumed to
//! be valid for 24 hours after login.

mod models;
mod repository;
mod session;

pub use models::{AuthCredentials, AuthResponse, Channel, CurrentUser};
pub use repository::AuthRepository;
pub use session::TokenStore;

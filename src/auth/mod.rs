//! Authentication — client credentials, the bearer token and its lifecycle.
//!
//! ## Flow
//!
//! 1. The client is built with a developer application key and the
//!    `Authorization: Basic ...` value issued by the bank's developer portal.
//! 2. Before each ticket operation the [`TokenManager`] checks the cached
//!    token. A missing or expired token triggers a client-credentials
//!    exchange against `{oauth}/oauth/token`.
//! 3. The returned `access_token` is sent as `Authorization: Bearer ...` on
//!    every billing request until `expires_in` seconds have elapsed.
//!
//! Tokens live in memory only and are never exposed through `Debug`.

pub mod token;

use std::fmt;

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::lenient_seconds;

pub use token::{TokenManager, TokenStatus};

/// OAuth scopes needed to read and register tickets.
pub const OAUTH_SCOPE: &str = "cobrancas.boletos-info cobrancas.boletos-requisicao";

/// Grant type of the token exchange.
pub const GRANT_TYPE: &str = "client_credentials";

// ============================================================================
// Credentials
// ============================================================================

/// Static credentials supplied at client construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    developer_application_key: String,
    basic_auth: String,
}

impl Credentials {
    /// `basic_auth` is the full header value, e.g. `"Basic ZXlK..."`.
    pub fn new(developer_application_key: impl Into<String>, basic_auth: impl Into<String>) -> Self {
        Self {
            developer_application_key: developer_application_key.into(),
            basic_auth: basic_auth.into(),
        }
    }

    /// Build the basic-auth value from an OAuth client id and secret.
    pub fn from_client_secret(
        developer_application_key: impl Into<String>,
        client_id: &str,
        client_secret: &str,
    ) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", client_id, client_secret));
        Self::new(developer_application_key, format!("Basic {}", encoded))
    }

    pub fn developer_application_key(&self) -> &str {
        &self.developer_application_key
    }

    pub(crate) fn basic_auth(&self) -> &str {
        &self.basic_auth
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("developer_application_key", &self.developer_application_key)
            .field("basic_auth", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Token
// ============================================================================

/// A bearer token and the instant it stops being valid.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub(crate) access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Form body of `POST /oauth/token`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TokenRequestForm<'a> {
    pub grant_type: &'a str,
    pub scope: &'a str,
}

impl Default for TokenRequestForm<'static> {
    fn default() -> Self {
        Self {
            grant_type: GRANT_TYPE,
            scope: OAUTH_SCOPE,
        }
    }
}

/// Successful (201) answer of the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_seconds::deserialize")]
    pub expires_in: u64,
}

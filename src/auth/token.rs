//! Token manager — holds the bearer token and re-authenticates only when it is
//! missing or expired.
//!
//! The token is read and then written inside [`TokenManager::ensure_valid`]
//! without a reentrancy guard. Two tasks sharing one client may both see an
//! expired token and authenticate twice; callers that share a client across
//! tasks must serialize operations themselves.

use async_lock::RwLock;
use chrono::{DateTime, Local, TimeDelta, Utc};

use crate::auth::{AccessToken, Credentials, TokenRequestForm, TokenResponse};
use crate::error::BoletoError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::network::Endpoints;
use crate::shared::lifecycle::{self, Marker, Phase};
use crate::shared::Clock;

/// Result of [`TokenManager::ensure_valid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// A usable `Authorization` header value (`Bearer ...`).
    Valid(String),
    /// The token endpoint refused; carries its response.
    Rejected(HttpResponse),
}

/// Everything the token exchange needs from the owning client.
pub(crate) struct AuthContext<'a, T> {
    pub transport: &'a T,
    pub endpoints: Endpoints,
    pub credentials: &'a Credentials,
    pub clock: &'a dyn Clock,
    pub verbose: bool,
}

/// Owner of the cached [`AccessToken`].
#[derive(Debug, Default)]
pub struct TokenManager {
    token: RwLock<Option<AccessToken>>,
}

impl TokenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, valid or not.
    pub async fn current(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    /// Whether a token is held and has not yet expired at `now`.
    pub async fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.is_valid_at(now))
            .unwrap_or(false)
    }

    /// Drop the cached token; the next operation re-authenticates.
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }

    pub(crate) async fn ensure_valid<T: Transport>(
        &self,
        ctx: &AuthContext<'_, T>,
    ) -> Result<TokenStatus, BoletoError> {
        let now = ctx.clock.now();
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_valid_at(now) {
                tracing::debug!(expires_at = %token.expires_at, "reusing access token");
                return Ok(TokenStatus::Valid(token.bearer()));
            }
        }

        self.authenticate(ctx).await
    }

    async fn authenticate<T: Transport>(
        &self,
        ctx: &AuthContext<'_, T>,
    ) -> Result<TokenStatus, BoletoError> {
        lifecycle::emit(ctx.verbose, Phase::Authenticating, Marker::Starting);

        let form = serde_urlencoded::to_string(TokenRequestForm::default()).map_err(|e| {
            BoletoError::Configuration(format!("cannot encode token request: {}", e))
        })?;
        let request = HttpRequest::post(ctx.endpoints.token_url())
            .header("Authorization", ctx.credentials.basic_auth())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .query_param("gw-dev-app-key", ctx.credentials.developer_application_key())
            .body(form);

        let response = match ctx.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                self.clear().await;
                lifecycle::emit(ctx.verbose, Phase::Authenticating, Marker::Error);
                return Err(e.into());
            }
        };

        if response.status != 201 {
            return Ok(self.reject(ctx, response).await);
        }

        let parsed = serde_json::from_str::<TokenResponse>(&response.body)
            .ok()
            .and_then(|r| match r.access_token {
                Some(access_token) if !access_token.is_empty() => {
                    Some((access_token, r.expires_in))
                }
                _ => None,
            });
        let Some((access_token, expires_in)) = parsed else {
            tracing::warn!("token endpoint answered 201 without a usable access_token");
            return Ok(self.reject(ctx, response).await);
        };

        let token = AccessToken {
            access_token,
            expires_at: expiry_after(ctx.clock.now(), expires_in),
        };
        if ctx.verbose {
            tracing::info!(
                expires_at = %token.expires_at,
                "Access token expires at {}",
                local_time_of_day(token.expires_at)
            );
        }
        let bearer = token.bearer();
        *self.token.write().await = Some(token);

        lifecycle::emit(ctx.verbose, Phase::Authenticating, Marker::Done);
        Ok(TokenStatus::Valid(bearer))
    }

    async fn reject<T>(&self, ctx: &AuthContext<'_, T>, response: HttpResponse) -> TokenStatus {
        self.clear().await;
        lifecycle::request_error(ctx.verbose, &response);
        lifecycle::emit(ctx.verbose, Phase::Authenticating, Marker::Error);
        TokenStatus::Rejected(response)
    }
}

/// `HH:MM:SS` in the machine's local zone.
fn local_time_of_day(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%T").to_string()
}

fn expiry_after(now: DateTime<Utc>, expires_in: u64) -> DateTime<Utc> {
    let lifetime = i64::try_from(expires_in)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX);
    now.checked_add_signed(lifetime)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

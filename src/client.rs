//! High-level client — `BoletoClient` with the `tickets()` sub-client.
//!
//! The client owns the transport, the environment selection, the static
//! credentials and the token cache. Ticket operations live in
//! `domain/ticket/client.rs`.

use std::env;
use std::sync::Arc;

use crate::auth::token::AuthContext;
use crate::auth::{Credentials, TokenManager, TokenStatus};
use crate::domain::ticket::client::Tickets;
use crate::domain::ticket::{CancellationStyle, TicketRequests};
use crate::error::BoletoError;
use crate::http::Transport;
use crate::network::Environment;
use crate::shared::{Clock, SystemClock};

#[cfg(feature = "http")]
use crate::http::{ReqwestTransport, TransportConfig};

// Re-export sub-client types for convenience.
pub use crate::domain::ticket::client::Tickets as TicketsClient;

/// The primary entry point for the SDK.
///
/// A client is meant to be driven by one caller at a time: the token cache
/// has no reentrancy guard, so concurrent operations on a shared client can
/// authenticate more than once.
pub struct BoletoClient<T> {
    pub(crate) transport: T,
    pub(crate) environment: Environment,
    pub(crate) credentials: Credentials,
    pub(crate) numero_convenio: Option<u64>,
    pub(crate) verbose: bool,
    pub(crate) cancellation_style: CancellationStyle,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) tokens: TokenManager,
}

#[cfg(feature = "http")]
impl BoletoClient<ReqwestTransport> {
    pub fn builder(credentials: Credentials) -> BoletoClientBuilder {
        BoletoClientBuilder::new(credentials)
    }
}

impl<T: Transport> BoletoClient<T> {
    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tickets(&self) -> Tickets<'_, T> {
        Tickets { client: self }
    }

    // ── Environment ──────────────────────────────────────────────────────

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Switch environments. A cached token is kept: it is only replaced once
    /// it expires, even though it was issued by the other environment's
    /// OAuth server. Call `token_manager().clear()` to force a new one.
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
    }

    pub fn use_sandbox(&mut self) {
        self.set_environment(Environment::Sandbox);
    }

    pub fn use_production(&mut self) {
        self.set_environment(Environment::Production);
    }

    // ── Settings ─────────────────────────────────────────────────────────

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn numero_convenio(&self) -> Option<u64> {
        self.numero_convenio
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    /// Reuse the cached token or fetch a new one if it is missing or expired.
    pub async fn ensure_authenticated(&self) -> Result<TokenStatus, BoletoError> {
        let ctx = AuthContext {
            transport: &self.transport,
            endpoints: self.environment.endpoints(),
            credentials: &self.credentials,
            clock: self.clock.as_ref(),
            verbose: self.verbose,
        };
        self.tokens.ensure_valid(&ctx).await
    }

    /// Whether a non-expired token is cached right now.
    pub async fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated(self.clock.now()).await
    }

    pub(crate) fn requests<'a>(&'a self, authorization: Option<&'a str>) -> TicketRequests<'a> {
        TicketRequests::new(
            self.environment.endpoints(),
            self.credentials.developer_application_key(),
            authorization,
        )
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BoletoClientBuilder {
    credentials: Credentials,
    environment: Environment,
    numero_convenio: Option<u64>,
    verbose: bool,
    cancellation_style: CancellationStyle,
    clock: Arc<dyn Clock>,
    #[cfg(feature = "http")]
    transport_config: TransportConfig,
}

impl BoletoClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            numero_convenio: None,
            verbose: false,
            cancellation_style: CancellationStyle::default(),
            clock: Arc::new(SystemClock),
            #[cfg(feature = "http")]
            transport_config: TransportConfig::default(),
        }
    }

    /// Configure from the process environment:
    ///
    /// | Variable | Meaning |
    /// |---|---|
    /// | `BB_DEVELOPER_APPLICATION_KEY` | `gw-dev-app-key` (required) |
    /// | `BB_BASIC_AUTH` | full `Basic ...` header value |
    /// | `BB_CLIENT_ID` / `BB_CLIENT_SECRET` | used when `BB_BASIC_AUTH` is unset |
    /// | `BB_ENVIRONMENT` | `sandbox` (default) or `production` |
    /// | `BB_NUMERO_CONVENIO` | default agreement number |
    /// | `BB_VERBOSE` | `true` / `1` to log lifecycle markers |
    /// | `BB_VERIFY_TLS` | `false` / `0` to skip certificate checks |
    pub fn from_env() -> Result<Self, BoletoError> {
        let app_key = required_var("BB_DEVELOPER_APPLICATION_KEY")?;
        let credentials = match env::var("BB_BASIC_AUTH") {
            Ok(basic) => Credentials::new(app_key, basic),
            Err(_) => {
                let client_id = required_var("BB_CLIENT_ID")?;
                let client_secret = required_var("BB_CLIENT_SECRET")?;
                Credentials::from_client_secret(app_key, &client_id, &client_secret)
            }
        };

        let mut builder = Self::new(credentials);
        if let Ok(name) = env::var("BB_ENVIRONMENT") {
            builder = builder.environment(name.parse()?);
        }
        if let Ok(convenio) = env::var("BB_NUMERO_CONVENIO") {
            let convenio = convenio.trim().parse().map_err(|_| {
                BoletoError::Configuration(format!(
                    "BB_NUMERO_CONVENIO must be numeric, got {:?}",
                    convenio
                ))
            })?;
            builder = builder.numero_convenio(convenio);
        }
        if let Ok(flag) = env::var("BB_VERBOSE") {
            builder = builder.verbose(parse_flag("BB_VERBOSE", &flag)?);
        }
        #[cfg(feature = "http")]
        let builder = match env::var("BB_VERIFY_TLS") {
            Ok(flag) => builder.verify_tls(parse_flag("BB_VERIFY_TLS", &flag)?),
            Err(_) => builder,
        };
        Ok(builder)
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Agreement number used when a creation payload omits `numeroConvenio`.
    pub fn numero_convenio(mut self, numero_convenio: u64) -> Self {
        self.numero_convenio = Some(numero_convenio);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn cancellation_style(mut self, style: CancellationStyle) -> Self {
        self.cancellation_style = style;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[cfg(feature = "http")]
    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.transport_config = config;
        self
    }

    /// Shorthand for toggling [`TransportConfig::verify_tls`].
    #[cfg(feature = "http")]
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.transport_config.verify_tls = verify;
        self
    }

    /// Build with the default `reqwest` transport.
    #[cfg(feature = "http")]
    pub fn build(self) -> Result<BoletoClient<ReqwestTransport>, BoletoError> {
        let transport = ReqwestTransport::new(&self.transport_config)?;
        Ok(self.build_with_transport(transport))
    }

    /// Build around a caller-provided transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> BoletoClient<T> {
        BoletoClient {
            transport,
            environment: self.environment,
            credentials: self.credentials,
            numero_convenio: self.numero_convenio,
            verbose: self.verbose,
            cancellation_style: self.cancellation_style,
            clock: self.clock,
            tokens: TokenManager::new(),
        }
    }
}

fn required_var(name: &str) -> Result<String, BoletoError> {
    env::var(name).map_err(|_| BoletoError::Configuration(format!("{} is not set", name)))
}

fn parse_flag(name: &str, value: &str) -> Result<bool, BoletoError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(BoletoError::Configuration(format!(
            "{} must be a boolean, got {:?}",
            name, other
        ))),
    }
}

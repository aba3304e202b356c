//! # BB Cobrança SDK
//!
//! A Rust client for the Banco do Brasil billing API (boletos): listing,
//! retrieval, registration and cancellation of payment tickets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Environment registry, ticket payload types, validation, print layout
//! 2. **Auth** — Client credentials + OAuth token lifecycle
//! 3. **HTTP** — `Transport` abstraction, request/response types, `reqwest` transport
//! 4. **High-Level Client** — `BoletoClient` with the `tickets()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bb_cobranca::prelude::*;
//!
//! let client = BoletoClient::builder(Credentials::new("app-key", "Basic ZXlK..."))
//!     .numero_convenio(3128557)
//!     .verbose(true)
//!     .build()?;
//!
//! let filters = ListingFilters::new().with("dataInicioRegistro", "01.03.2026");
//! let outcome = client.tickets().list("A", 452, 123873, &filters).await?;
//! if outcome.is_success() {
//!     let tickets: serde_json::Value = outcome.response().json()?;
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared utilities: clock, formatting, serde helpers.
pub mod shared;

/// Domain modules (vertical slices): ticket, layout.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Environment registry: API and OAuth base URLs.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, token manager.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Transport abstraction and outcome classification.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BoletoClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — ticket
    pub use crate::domain::ticket::{
        find_missing_fields, ticket_id, validate_for_create, CancellationStyle, FinalBeneficiary,
        ListingFilters, Payer, TicketPayload, TicketRequests, TicketStatus,
    };

    // Domain types — layout
    pub use crate::domain::layout::{generate_layout, LayoutParty, TicketLayout};

    // Errors
    pub use crate::error::{BoletoError, TransportError, ValidationError};

    // Network
    pub use crate::network::{Endpoints, Environment};

    // Auth
    pub use crate::auth::{AccessToken, Credentials, TokenManager, TokenStatus};

    // HTTP
    pub use crate::http::{ApiOutcome, HttpRequest, HttpResponse, Method, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::{ReqwestTransport, TransportConfig};

    // Client
    pub use crate::client::{BoletoClient, BoletoClientBuilder, TicketsClient};

    // Clock
    pub use crate::shared::{Clock, SystemClock};
}

//! Ticket (boleto) domain — payload, validation, listing filters, request
//! composition and the `Tickets` sub-client.

pub mod client;
pub mod filters;
pub mod request;
pub mod validation;
pub mod wire;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use client::Tickets;
pub use filters::{ListingFilters, ALLOWED_FILTERS};
pub use request::{CancellationStyle, TicketRequests};
pub use validation::{find_missing_fields, validate_for_create};
pub use wire::{FinalBeneficiary, Payer, TicketPayload};

// ─── TicketStatus ────────────────────────────────────────────────────────────

/// Situation filter of `GET /boletos` (`indicadorSituacao`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    /// `A` — registered and awaiting payment.
    #[serde(rename = "A")]
    Open,
    /// `B` — settled, written off or protested.
    #[serde(rename = "B")]
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "A",
            Self::Closed => "B",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::Open),
            "B" => Ok(Self::Closed),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

// ─── Ticket identifier ───────────────────────────────────────────────────────

/// Build the identifier used in `/boletos/{id}` paths:
/// `"000"` + agreement number + system identifier zero-padded to 10 digits.
///
/// The system identifier may carry leading zeros and surrounding whitespace
/// but must otherwise be all digits.
pub fn ticket_id(numero_convenio: u64, system_identifier: &str) -> Result<String, ValidationError> {
    let digits = system_identifier.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidIdentifier(system_identifier.to_string()));
    }
    let number: u128 = digits
        .parse()
        .map_err(|_| ValidationError::InvalidIdentifier(system_identifier.to_string()))?;
    Ok(format!("000{}{:010}", numero_convenio, number))
}

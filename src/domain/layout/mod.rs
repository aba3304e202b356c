//! Print layout — maps a registration payload onto the fields a boleto
//! renderer prints. Rendering itself (PDF, HTML) is left to the caller.

mod convert;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ticket::TicketPayload;
use crate::error::BoletoError;

/// Banco do Brasil's bank code with check digit, as printed on the slip.
pub const BANK_CODE: &str = "001-9";

/// A person or company as printed on the slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParty {
    pub name: String,
    /// Formatted CPF / CNPJ.
    pub document: String,
    /// One-line postal address, when known.
    pub address: Option<String>,
}

/// Print-ready ticket fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketLayout {
    pub bank_code: String,
    pub agreement: u64,
    pub wallet: u32,
    pub wallet_variation: u32,
    pub billing_modality: u8,
    pub document_number: String,
    pub amount: Decimal,
    /// `1.234,56`
    pub amount_display: String,
    pub due_date: NaiveDate,
    pub issue_date: NaiveDate,
    pub acceptance: String,
    /// Species abbreviation (`DM`, `DS`, ...).
    pub document_kind: String,
    pub partial_payment_allowed: bool,
    pub payer: LayoutParty,
    pub final_beneficiary: LayoutParty,
}

impl TicketLayout {
    /// `dd/mm/yyyy`
    pub fn due_date_display(&self) -> String {
        self.due_date.format("%d/%m/%Y").to_string()
    }

    /// `dd/mm/yyyy`
    pub fn issue_date_display(&self) -> String {
        self.issue_date.format("%d/%m/%Y").to_string()
    }
}

/// Validate `payload` and map it to a [`TicketLayout`].
pub fn generate_layout(payload: &TicketPayload) -> Result<TicketLayout, BoletoError> {
    Ok(TicketLayout::try_from(payload)?)
}

/// Abbreviation of a `codigoTipoTitulo` species code. Codes without a
/// well-known abbreviation are printed as the number itself.
pub fn document_kind(code: u8) -> String {
    let kind = match code {
        1 => "CH",
        2 => "DM",
        4 => "DS",
        12 => "NP",
        17 => "RC",
        31 => "CC",
        32 => "BP",
        99 => "OU",
        other => return other.to_string(),
    };
    kind.to_string()
}

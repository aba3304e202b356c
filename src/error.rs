//! Unified SDK error types.
//!
//! Hard failures (bad configuration, invalid input, broken transport) are
//! returned as [`BoletoError`]. API-level non-success responses are not errors
//! by default: they come back as [`crate::http::ApiOutcome`] values and only
//! become [`BoletoError::Authentication`] / [`BoletoError::Request`] through
//! [`crate::http::ApiOutcome::into_result`].

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum BoletoError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Authentication failed [{status}]: {body}")]
    Authentication { status: u16, body: String },

    #[error("Request error [{status}]: {body}")]
    Request { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Input rejected before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required params was not informed: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("'status' is invalid ({0:?}). Valid options: 'A', 'B'")]
    InvalidStatus(String),

    #[error("system identifier must be numeric, got {0:?}")]
    InvalidIdentifier(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("'{field}' is not a dd.mm.yyyy date: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("no agreement number (numeroConvenio) given and none configured on the client")]
    MissingAgreement,
}

/// Failures raised by a [`crate::http::Transport`] implementation.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Timeout")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_is_comma_joined() {
        let err = ValidationError::MissingFields(vec![
            "dataEmissao".to_string(),
            "pagador.cep".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Required params was not informed: dataEmissao, pagador.cep"
        );
    }

    #[test]
    fn test_validation_converts_into_boleto_error() {
        let err: BoletoError = ValidationError::InvalidStatus("C".to_string()).into();
        assert!(matches!(
            err,
            BoletoError::Validation(ValidationError::InvalidStatus(_))
        ));
    }
}

//! Classification of billing API responses.

use crate::error::BoletoError;
use crate::http::HttpResponse;

/// Result of a ticket operation that reached the network.
///
/// Non-success answers are data, not errors: the raw response is kept so the
/// caller can inspect the API's error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    /// The operation's expected status code came back.
    Success(HttpResponse),
    /// The billing endpoint answered with any other status.
    RequestFailed(HttpResponse),
    /// The OAuth endpoint refused to issue a token; the operation itself was
    /// never sent.
    AuthenticationFailed(HttpResponse),
}

impl ApiOutcome {
    pub(crate) fn classify(response: HttpResponse, expected_status: u16) -> Self {
        if response.status == expected_status {
            Self::Success(response)
        } else {
            Self::RequestFailed(response)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn status(&self) -> u16 {
        self.response().status
    }

    pub fn response(&self) -> &HttpResponse {
        match self {
            Self::Success(r) | Self::RequestFailed(r) | Self::AuthenticationFailed(r) => r,
        }
    }

    pub fn into_response(self) -> HttpResponse {
        match self {
            Self::Success(r) | Self::RequestFailed(r) | Self::AuthenticationFailed(r) => r,
        }
    }

    /// Turn failures into [`BoletoError`] for callers that treat them as fatal.
    pub fn into_result(self) -> Result<HttpResponse, BoletoError> {
        match self {
            Self::Success(r) => Ok(r),
            Self::RequestFailed(r) => Err(BoletoError::Request {
                status: r.status,
                body: r.body,
            }),
            Self::AuthenticationFailed(r) => Err(BoletoError::Authentication {
                status: r.status,
                body: r.body,
            }),
        }
    }
}

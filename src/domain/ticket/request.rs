//! Request composition for the four ticket operations.
//!
//! Every billing request carries `Content-Type: application/json`, the
//! `gw-dev-app-key` query parameter and, when a token is held,
//! `Authorization: Bearer ...`.

use serde::Serialize;

use crate::domain::ticket::filters::ListingFilters;
use crate::domain::ticket::wire::TicketPayload;
use crate::domain::ticket::TicketStatus;
use crate::error::BoletoError;
use crate::http::HttpRequest;
use crate::network::Endpoints;

/// Where `destroy` sends the agreement number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancellationStyle {
    /// `?numeroConvenio=...` on the `/baixar` call.
    #[default]
    Query,
    /// `{"numeroConvenio": ...}` as the JSON body of the `/baixar` call.
    JsonBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelBody {
    numero_convenio: u64,
}

/// Builds [`HttpRequest`]s for the billing endpoints of one environment.
#[derive(Debug, Clone, Copy)]
pub struct TicketRequests<'a> {
    endpoints: Endpoints,
    developer_application_key: &'a str,
    authorization: Option<&'a str>,
}

impl<'a> TicketRequests<'a> {
    /// `authorization` is the full header value (`"Bearer ..."`), if any.
    pub fn new(
        endpoints: Endpoints,
        developer_application_key: &'a str,
        authorization: Option<&'a str>,
    ) -> Self {
        Self {
            endpoints,
            developer_application_key,
            authorization,
        }
    }

    fn prepare(&self, request: HttpRequest) -> HttpRequest {
        let mut request = request
            .header("Content-Type", "application/json")
            .query_param("gw-dev-app-key", self.developer_application_key);
        if let Some(authorization) = self.authorization {
            request = request.header("Authorization", authorization);
        }
        request
    }

    /// `GET /boletos`
    pub fn list(
        &self,
        status: TicketStatus,
        beneficiary_agency: u32,
        beneficiary_account: u64,
        filters: &ListingFilters,
    ) -> HttpRequest {
        let mut request = self
            .prepare(HttpRequest::get(self.endpoints.tickets_url()))
            .query_param("indicadorSituacao", status.as_str())
            .query_param("agenciaBeneficiario", beneficiary_agency.to_string())
            .query_param("contaBeneficiario", beneficiary_account.to_string());
        for (key, value) in filters.allowed() {
            request = request.query_param(key, value);
        }
        request
    }

    /// `GET /boletos/{id}`
    pub fn show(&self, numero_convenio: u64, ticket_id: &str) -> HttpRequest {
        self.prepare(HttpRequest::get(self.endpoints.ticket_url(ticket_id)))
            .query_param("numeroConvenio", numero_convenio.to_string())
    }

    /// `POST /boletos`
    pub fn create(&self, payload: &TicketPayload) -> Result<HttpRequest, BoletoError> {
        let body = serde_json::to_string(payload)?;
        Ok(self
            .prepare(HttpRequest::post(self.endpoints.tickets_url()))
            .body(body))
    }

    /// `POST /boletos/{id}/baixar`
    pub fn destroy(
        &self,
        numero_convenio: u64,
        ticket_id: &str,
        style: CancellationStyle,
    ) -> Result<HttpRequest, BoletoError> {
        let request = self.prepare(HttpRequest::post(self.endpoints.cancel_url(ticket_id)));
        Ok(match style {
            CancellationStyle::Query => {
                request.query_param("numeroConvenio", numero_convenio.to_string())
            }
            CancellationStyle::JsonBody => {
                request.body(serde_json::to_string(&CancelBody { numero_convenio })?)
            }
        })
    }
}

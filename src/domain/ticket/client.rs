//! Tickets sub-client — list, show, create and cancel boletos.

use serde_json::Value;

use crate::auth::TokenStatus;
use crate::client::BoletoClient;
use crate::domain::ticket::filters::ListingFilters;
use crate::domain::ticket::request::TicketRequests;
use crate::domain::ticket::validation::validate_for_create;
use crate::domain::ticket::wire::TicketPayload;
use crate::domain::ticket::{ticket_id, TicketStatus};
use crate::error::{BoletoError, ValidationError};
use crate::http::{ApiOutcome, HttpRequest, Transport};
use crate::shared::lifecycle::{self, Marker, Phase};

pub struct Tickets<'a, T> {
    pub(crate) client: &'a BoletoClient<T>,
}

impl<'a, T: Transport> Tickets<'a, T> {
    /// `GET /boletos` — tickets of a beneficiary account.
    ///
    /// `status` is `"A"` (open) or `"B"` (closed), in any case. Filter keys
    /// outside [`crate::domain::ticket::ALLOWED_FILTERS`] are dropped.
    pub async fn list(
        &self,
        status: &str,
        beneficiary_agency: u32,
        beneficiary_account: u64,
        filters: &ListingFilters,
    ) -> Result<ApiOutcome, BoletoError> {
        let status: TicketStatus = status.parse()?;

        self.execute(Phase::Fetching, 200, |requests| {
            Ok(requests.list(status, beneficiary_agency, beneficiary_account, filters))
        })
        .await
    }

    /// `GET /boletos/{id}` — a single ticket.
    pub async fn show(
        &self,
        numero_convenio: u64,
        system_identifier: &str,
    ) -> Result<ApiOutcome, BoletoError> {
        let id = ticket_id(numero_convenio, system_identifier)?;

        self.execute(Phase::Fetching, 200, |requests| {
            Ok(requests.show(numero_convenio, &id))
        })
        .await
    }

    /// `POST /boletos` — register a ticket.
    ///
    /// A missing `numeroConvenio` is filled from the client configuration.
    /// The payload is validated before anything is sent.
    pub async fn create(&self, mut payload: TicketPayload) -> Result<ApiOutcome, BoletoError> {
        if payload.numero_convenio.is_none() {
            payload.numero_convenio = self.client.numero_convenio;
        }
        validate_for_create(&payload)?;

        self.execute(Phase::Creating, 201, |requests| requests.create(&payload))
            .await
    }

    /// Like [`Tickets::create`], for payloads held as raw JSON.
    pub async fn create_from_value(&self, payload: Value) -> Result<ApiOutcome, BoletoError> {
        if !payload.is_object() {
            return Err(ValidationError::MalformedPayload(
                "payload should be a JSON object".to_string(),
            )
            .into());
        }
        let payload: TicketPayload = serde_json::from_value(payload)
            .map_err(|e| ValidationError::MalformedPayload(e.to_string()))?;

        self.create(payload).await
    }

    /// `POST /boletos/{id}/baixar` — cancel (write off) a ticket.
    pub async fn destroy(
        &self,
        numero_convenio: u64,
        system_identifier: &str,
    ) -> Result<ApiOutcome, BoletoError> {
        let id = ticket_id(numero_convenio, system_identifier)?;
        let style = self.client.cancellation_style;

        self.execute(Phase::Destroying, 200, |requests| {
            requests.destroy(numero_convenio, &id, style)
        })
        .await
    }

    /// Authenticate if needed, build the request, send it and classify the
    /// answer against `expected_status`.
    async fn execute<F>(
        &self,
        phase: Phase,
        expected_status: u16,
        build: F,
    ) -> Result<ApiOutcome, BoletoError>
    where
        F: FnOnce(TicketRequests<'_>) -> Result<HttpRequest, BoletoError>,
    {
        let verbose = self.client.verbose;
        lifecycle::emit(verbose, phase, Marker::Starting);

        let authorization = match self.client.ensure_authenticated().await {
            Ok(TokenStatus::Valid(authorization)) => authorization,
            Ok(TokenStatus::Rejected(response)) => {
                lifecycle::emit(verbose, phase, Marker::Error);
                return Ok(ApiOutcome::AuthenticationFailed(response));
            }
            Err(e) => {
                lifecycle::emit(verbose, phase, Marker::Error);
                return Err(e);
            }
        };

        let request = build(self.client.requests(Some(authorization.as_str())))?;
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = match self.client.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                lifecycle::emit(verbose, phase, Marker::Error);
                return Err(e.into());
            }
        };

        let outcome = ApiOutcome::classify(response, expected_status);
        if outcome.is_success() {
            lifecycle::emit(verbose, phase, Marker::Done);
        } else {
            lifecycle::request_error(verbose, outcome.response());
            lifecycle::emit(verbose, phase, Marker::Error);
        }
        Ok(outcome)
    }
}

//! HTTP layer — transport abstraction, request/response descriptions and
//! outcome classification.
//!
//! The SDK never talks to the network directly. Every call is described as an
//! [`HttpRequest`] and handed to a [`Transport`]; the default transport is
//! [`ReqwestTransport`] (feature `http`).

pub mod outcome;
pub mod transport;

#[cfg(feature = "http")]
pub mod reqwest_transport;

pub use outcome::ApiOutcome;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

#[cfg(feature = "http")]
pub use reqwest_transport::{ReqwestTransport, TransportConfig};

//! Verbose lifecycle markers (`starting` / `done` / `error`) for each phase of
//! a ticket operation.

use crate::http::HttpResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Authenticating,
    Fetching,
    Creating,
    Destroying,
}

impl Phase {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Authenticating => "Authenticating",
            Self::Fetching => "Fetching",
            Self::Creating => "Creating",
            Self::Destroying => "Destroying",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Starting,
    Done,
    Error,
}

impl Marker {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Done => "done",
            Self::Error => "error",
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            Self::Starting => "[...]",
            Self::Done => "[OK]",
            Self::Error => "[ERROR]",
        }
    }
}

pub(crate) fn emit(verbose: bool, phase: Phase, marker: Marker) {
    if !verbose {
        return;
    }
    tracing::info!(
        phase = phase.as_str(),
        marker = marker.as_str(),
        "{} {}",
        phase.as_str(),
        marker.suffix()
    );
}

pub(crate) fn request_error(verbose: bool, response: &HttpResponse) {
    if verbose {
        tracing::warn!(
            status = response.status,
            "[{}] Request error: {}",
            response.status,
            response.body
        );
    } else {
        tracing::debug!(status = response.status, "request returned non-success status");
    }
}

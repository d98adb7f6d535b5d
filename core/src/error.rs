//! Error types for the resource API client.
//!
//! # Design
//! Only fatal conditions are errors. A remote-reported failure (non-200 status)
//! is not an error: it is logged and the operation yields `None`, the same
//! value a caller sees for "not found". Transport failures and malformed
//! success bodies always propagate, tagged with the endpoint and URL.

use crate::action::Action;

/// Errors returned by `ResourceClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The request never produced a response.
    #[error("failed by {endpoint} at endpoint {url}: {source}")]
    Transport {
        endpoint: Action,
        url: String,
        #[source]
        source: TransportError,
    },

    /// A 200 response whose body does not match the expected shape.
    #[error("failed by {endpoint} at endpoint {url}: malformed response body: {source}")]
    Decode {
        endpoint: Action,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The async work item could not be scheduled or did not complete.
    #[error("executor failure: {0}")]
    Executor(String),
}

impl ApiError {
    /// The remote action the failing call targeted, if any.
    pub fn endpoint(&self) -> Option<Action> {
        match self {
            ApiError::Transport { endpoint, .. } | ApiError::Decode { endpoint, .. } => {
                Some(*endpoint)
            }
            _ => None,
        }
    }
}

/// Failure raised by a `Transport` before any status code was seen.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] ureq::Error),

    /// Failure reported by a custom transport.
    #[error("{0}")]
    Other(String),
}

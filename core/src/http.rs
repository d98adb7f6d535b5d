//! HTTP transport for the resource API.
//!
//! # Design
//! Requests and responses are plain data. `ResourceClient` builds an
//! `HttpRequest`, hands its URL to a `Transport`, and interprets the returned
//! `HttpResponse` itself; the transport never looks at status codes. This keeps
//! the facade testable against canned responses and lets callers plug in their
//! own HTTP stack.
//!
//! `UreqTransport` is the default. It treats every status as data and keeps no
//! idle connections, so the socket is released before `get` returns.

use crate::action::Action;
use crate::error::TransportError;

/// A GET request built for one remote action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub action: Action,
    pub url: String,
}

/// Status code and full text body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one HTTP GET and returns the status code and body.
///
/// Implementations must return the body for error statuses as well and must
/// not retry.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<HttpResponse, TransportError> + Send + Sync,
{
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self(url)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_idle_connections(0)
            .max_idle_connections_per_host(0)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut response = self.agent.get(url).call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}

//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The core crate builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — executing the round-trip is delegated through the
//! [`Transport`] trait, the single I/O seam of the crate. This keeps the
//! request/parse logic deterministic and lets tests substitute a scripted
//! transport for the real one.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely across the seam without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `PetClient::build_*` methods. The transport is responsible for
/// executing this request against the network and returning the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then
/// passed to `PetClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the response indicates success. The contract is purely
    /// transport-level: any 2xx status counts, nothing else does.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A transport-level failure: the request never produced a response.
#[derive(Debug, Clone, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// Executes HTTP round-trips for the store.
///
/// Implementations are fire-and-wait: one request, one response, no retry,
/// no timeout, no cancellation.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

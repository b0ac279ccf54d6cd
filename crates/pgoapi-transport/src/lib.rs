//! Transport contract for the pgoapi batch client.
//!
//! The batch layer never moves bytes itself. It hands an ordered list of
//! [`Subrequest`]s to a [`Transport`] and expects back exactly one raw
//! response segment per subrequest, in the same order. Envelope framing,
//! signatures, retries and the HTTP client all live behind this trait.

mod error;

pub use error::TransportError;

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

/// The production RPC endpoint the client talks to before the server
/// hands out a session-specific URL.
pub const DEFAULT_ENDPOINT: &str = "https://pgorelease.nianticlabs.com/plfe/rpc";

/// Target URL for one batch exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates an endpoint from any string-like URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

/// One request inside a batch, as the transport sees it.
///
/// `request_type` is the numeric wire id of the operation; `payload` is
/// the already-encoded request message. The transport treats both as
/// opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subrequest<'a> {
    pub request_type: u32,
    pub payload: &'a [u8],
}

/// Performs one request/response round trip for a whole batch.
///
/// # Contract
///
/// - `exchange` is called at most once per dispatched batch.
/// - On success it returns one response segment per subrequest, with
///   `response[i]` answering `requests[i]`. Implementations must never
///   reorder, merge or drop segments.
/// - Every failure is reported as a [`TransportError`]; the caller does
///   not retry.
///
/// The returned future must be `Send` so a batch can be dispatched from
/// any task on a multi-threaded runtime.
pub trait Transport: Send + Sync + 'static {
    /// Sends every subrequest to `endpoint` in a single exchange.
    fn exchange(
        &self,
        endpoint: &Endpoint,
        requests: &[Subrequest<'_>],
    ) -> impl Future<Output = Result<Vec<Vec<u8>>, TransportError>> + Send;
}

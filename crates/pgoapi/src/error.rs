//! Unified error type for the pgoapi batch client.

use pgoapi_protocol::{ProtocolError, RequestKind};
use pgoapi_transport::TransportError;

/// Top-level error returned by batch construction and dispatch.
///
/// Sub-crate errors convert with `?` through the `#[from]` variants.
/// `EmptyBatch` and `NotAuthenticated` are raised before any network
/// activity; everything else means the exchange was attempted.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The batch had no entries; nothing was sent.
    #[error("cannot dispatch an empty batch")]
    EmptyBatch,

    /// No valid auth ticket was available; nothing was sent.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The exchange failed or returned a response that cannot be split
    /// into one segment per request.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Segment `index` could not be decoded as the response to `kind`.
    /// The whole batch is discarded.
    #[error("response {index} ({kind}) could not be decoded: {source}")]
    Decode {
        index: usize,
        kind: RequestKind,
        #[source]
        source: ProtocolError,
    },

    /// A request message could not be encoded while building a batch.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

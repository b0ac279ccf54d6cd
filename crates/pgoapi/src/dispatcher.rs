//! Sending a batch and decoding its responses.
//!
//! The flow for one [`send`](BatchDispatcher::send):
//!   1. Reject an empty batch or a missing auth ticket, without I/O
//!   2. Turn every entry into a [`Subrequest`] in batch order
//!   3. One [`Transport::exchange`] round trip
//!   4. Check there is exactly one segment per entry
//!   5. Decode segment `i` with entry `i`'s decoder
//!
//! Any failure after step 1 fails the whole call; partial results are
//! never returned.

use pgoapi_protocol::{Codec, DecodedResponse};
use pgoapi_session::AuthState;
use pgoapi_transport::{Endpoint, Subrequest, Transport, TransportError};

use crate::{ApiError, RequestBatch};

/// Dispatches batches over a [`Transport`], gated by an [`AuthState`].
pub struct BatchDispatcher<T, A> {
    transport: T,
    auth: A,
}

impl<T: Transport, A: AuthState> BatchDispatcher<T, A> {
    pub fn new(transport: T, auth: A) -> Self {
        Self { transport, auth }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Sends `batch` to `endpoint` and returns one decoded response per
    /// entry, in batch order.
    ///
    /// # Errors
    /// - [`ApiError::EmptyBatch`] / [`ApiError::NotAuthenticated`] before
    ///   any network activity.
    /// - [`ApiError::Transport`] if the exchange fails or returns the wrong
    ///   number of segments.
    /// - [`ApiError::Decode`] for the first segment that does not parse as
    ///   its entry's response type.
    pub async fn send<C: Codec>(
        &self,
        batch: RequestBatch<C>,
        endpoint: &Endpoint,
    ) -> Result<Vec<DecodedResponse>, ApiError> {
        if batch.is_empty() {
            tracing::warn!(%endpoint, "refusing to dispatch empty batch");
            return Err(ApiError::EmptyBatch);
        }
        if !self.auth.is_authenticated() {
            tracing::warn!(%endpoint, count = batch.len(), "refusing to dispatch: not authenticated");
            return Err(ApiError::NotAuthenticated);
        }

        let (entries, codec) = batch.into_parts();
        let subrequests: Vec<Subrequest<'_>> = entries
            .iter()
            .map(|entry| Subrequest {
                request_type: entry.kind().id(),
                payload: entry.payload(),
            })
            .collect();

        tracing::debug!(%endpoint, count = entries.len(), "dispatching batch");

        let segments = self.transport.exchange(endpoint, &subrequests).await?;

        if segments.len() != entries.len() {
            tracing::warn!(
                expected = entries.len(),
                received = segments.len(),
                "response count mismatch"
            );
            return Err(TransportError::MalformedResponse(format!(
                "{} segments for {} requests",
                segments.len(),
                entries.len()
            ))
            .into());
        }

        let mut responses = Vec::with_capacity(entries.len());
        for (index, (entry, segment)) in entries.iter().zip(&segments).enumerate() {
            let kind = entry.kind();
            match entry.decode(&codec, segment) {
                Ok(response) => {
                    tracing::trace!(index, %kind, bytes = segment.len(), "response decoded");
                    responses.push(response);
                }
                Err(source) => {
                    tracing::warn!(index, %kind, error = %source, "response decode failed");
                    return Err(ApiError::Decode {
                        index,
                        kind,
                        source,
                    });
                }
            }
        }

        tracing::debug!(count = responses.len(), "batch completed");
        Ok(responses)
    }
}

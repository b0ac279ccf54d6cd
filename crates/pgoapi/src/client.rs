//! `ApiClient`: configuration, location and dispatcher in one handle.

use std::sync::Arc;

use pgoapi_protocol::{Codec, DecodedResponse, JsonCodec};
use pgoapi_session::{AuthState, LocationState};
use pgoapi_transport::{Endpoint, Transport};

use crate::{ApiConfig, ApiError, BatchDispatcher, RequestBatch};

/// High-level entry point for building and sending batches.
///
/// # Example
///
/// ```rust,ignore
/// use pgoapi::prelude::*;
///
/// let client = ApiClient::new(ApiConfig::default(), my_transport, session, location);
/// let mut batch = client.batch();
/// batch.simulate_session_start()?;
/// let responses = client.execute(batch).await?;
/// ```
pub struct ApiClient<T, A, C: Codec = JsonCodec> {
    config: ApiConfig,
    dispatcher: BatchDispatcher<T, A>,
    location: Arc<dyn LocationState>,
    codec: C,
}

impl<T: Transport, A: AuthState> ApiClient<T, A, JsonCodec> {
    /// Creates a client that encodes with [`JsonCodec`].
    pub fn new(config: ApiConfig, transport: T, auth: A, location: Arc<dyn LocationState>) -> Self {
        Self::with_codec(config, transport, auth, location, JsonCodec)
    }
}

impl<T, A, C> ApiClient<T, A, C>
where
    T: Transport,
    A: AuthState,
    C: Codec + Clone,
{
    pub fn with_codec(
        config: ApiConfig,
        transport: T,
        auth: A,
        location: Arc<dyn LocationState>,
        codec: C,
    ) -> Self {
        tracing::debug!(endpoint = %config.endpoint, "api client created");
        Self {
            config,
            dispatcher: BatchDispatcher::new(transport, auth),
            location,
            codec,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.config.endpoint
    }

    /// Switches to the session-specific URL the server handed out.
    pub fn set_endpoint(&mut self, endpoint: Endpoint) {
        tracing::info!(from = %self.config.endpoint, to = %endpoint, "api endpoint changed");
        self.config.endpoint = endpoint;
    }

    pub fn dispatcher(&self) -> &BatchDispatcher<T, A> {
        &self.dispatcher
    }

    pub fn location(&self) -> &Arc<dyn LocationState> {
        &self.location
    }

    /// An empty batch wired with this client's codec, location, settings
    /// hash and device.
    pub fn batch(&self) -> RequestBatch<C> {
        RequestBatch::new(self.codec.clone(), Arc::clone(&self.location))
            .with_settings_hash(self.config.settings_hash.clone())
            .with_device(self.config.device.clone())
    }

    /// Sends `batch` to the configured endpoint.
    pub async fn execute(&self, batch: RequestBatch<C>) -> Result<Vec<DecodedResponse>, ApiError> {
        self.dispatcher.send(batch, &self.config.endpoint).await
    }

    /// Sends `batch` to an explicit endpoint, leaving the configured one
    /// unchanged.
    pub async fn send_to(
        &self,
        batch: RequestBatch<C>,
        endpoint: &Endpoint,
    ) -> Result<Vec<DecodedResponse>, ApiError> {
        self.dispatcher.send(batch, endpoint).await
    }
}

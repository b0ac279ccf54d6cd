//! # pgoapi
//!
//! Request batching and typed response decoding for a Pokémon Go API
//! client.
//!
//! The game server accepts many requests in one envelope and answers with
//! one opaque segment per request. This crate lets you queue typed
//! requests into a [`RequestBatch`], send it in one round trip with a
//! [`BatchDispatcher`], and get back a [`DecodedResponse`] per request,
//! each decoded with the parser that belongs to its request.
//!
//! ## Layers
//!
//! ```text
//! pgoapi (this crate)   ← batches, dispatch, client facade
//!     ↕
//! pgoapi-session        ← auth ticket, player location
//! pgoapi-geo            ← S2 cell windows for map queries
//! pgoapi-protocol       ← message catalog, codecs
//! pgoapi-transport      ← Transport trait, endpoints
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pgoapi::prelude::*;
//!
//! # async fn run(transport: impl Transport, session: Arc<AuthSession>) -> Result<(), ApiError> {
//! let location = Arc::new(SharedLocation::new(Coordinates::new(37.7749, -122.4194)?));
//! let client = ApiClient::new(ApiConfig::default(), transport, session, location);
//!
//! let mut batch = client.batch();
//! batch.simulate_session_start()?;
//! let responses = client.execute(batch).await?;
//! assert_eq!(responses.len(), 5);
//! # Ok(())
//! # }
//! ```

mod batch;
mod client;
mod config;
mod dispatcher;
mod error;

pub use batch::{RequestBatch, RequestEntry};
pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_SETTINGS_HASH};
pub use dispatcher::BatchDispatcher;
pub use error::ApiError;

pub use pgoapi_geo as geo;
pub use pgoapi_protocol as protocol;
pub use pgoapi_session as session;
pub use pgoapi_transport as transport;

/// Commonly used types, for `use pgoapi::prelude::*`.
pub mod prelude {
    pub use crate::{ApiClient, ApiConfig, ApiError, BatchDispatcher, RequestBatch, RequestEntry};
    pub use pgoapi_geo::{CellWindow, compute_window};
    pub use pgoapi_protocol::{
        ApiRequest, Codec, Coordinates, DecodedResponse, DeviceInfo, JsonCodec, ProtocolError,
        RequestKind,
    };
    pub use pgoapi_session::{
        AuthProvider, AuthSession, AuthState, AuthTicket, LocationState, SharedLocation,
    };
    pub use pgoapi_transport::{Endpoint, Subrequest, Transport, TransportError};
}

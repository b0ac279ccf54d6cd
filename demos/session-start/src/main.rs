//! Runs the login batch and one map query against a loopback transport.
//!
//! ```text
//! RUST_LOG=debug cargo run -p session-start -- [config.json]
//! ```
//!
//! The optional argument is an `ApiConfig` in JSON; missing fields keep
//! their defaults.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use pgoapi::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Loopback transport
// ---------------------------------------------------------------------------

/// Answers every subrequest with the empty response of its kind, the way a
/// server with nothing to report would.
struct Loopback;

impl Transport for Loopback {
    async fn exchange(
        &self,
        endpoint: &Endpoint,
        requests: &[Subrequest<'_>],
    ) -> Result<Vec<Vec<u8>>, TransportError> {
        tracing::debug!(%endpoint, count = requests.len(), "loopback exchange");
        requests
            .iter()
            .map(|request| {
                let kind = RequestKind::from_id(request.request_type).ok_or_else(|| {
                    TransportError::MalformedResponse(format!(
                        "unknown request type {}",
                        request.request_type
                    ))
                })?;
                DecodedResponse::empty(kind)
                    .encode(&JsonCodec)
                    .map_err(|e| TransportError::MalformedResponse(e.to_string()))
            })
            .collect()
    }
}

fn load_config() -> Result<ApiConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(ApiConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let session = Arc::new(AuthSession::new());
    session.login(AuthTicket::new(
        AuthProvider::Ptc,
        "loopback-token",
        SystemTime::now() + Duration::from_secs(30 * 60),
    ))?;
    let location = Arc::new(SharedLocation::new(Coordinates::new(40.7580, -73.9855)?));

    let mut client = ApiClient::new(
        config,
        Loopback,
        Arc::clone(&session),
        Arc::clone(&location) as _,
    );

    let mut batch = client.batch();
    batch
        .simulate_session_start()?
        .download_remote_config_version(None)?;
    for response in client.execute(batch).await? {
        tracing::info!(kind = %response.kind(), "session start response");
    }

    // The real server answers the first batch with a per-session URL.
    client.set_endpoint(Endpoint::new("https://pgorelease.nianticlabs.com/plfe/1/rpc"));

    location.set(40.7589, -73.9851)?;
    let mut batch = client.batch();
    batch.update_player()?.get_map_objects(None, None)?;
    let responses = client.execute(batch).await?;
    tracing::info!(
        count = responses.len(),
        endpoint = %client.endpoint(),
        "map refresh complete"
    );

    session.logout()?;
    let mut batch = client.batch();
    batch.get_player()?;
    if let Err(e) = client.execute(batch).await {
        tracing::info!(error = %e, "batch after logout rejected as expected");
    }

    Ok(())
}

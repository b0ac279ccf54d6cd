//! Integration tests for the `ApiClient` facade.

use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use pgoapi::prelude::*;
use pgoapi::protocol::{
    DownloadRemoteConfigVersionMessage, DownloadSettingsMessage, GetAssetDigestMessage,
};

// =========================================================================
// Mock transport
// =========================================================================

/// Remembers the endpoint and payloads of the last exchange and answers
/// with empty responses.
#[derive(Default)]
struct RecordingTransport {
    last_endpoint: Mutex<Option<String>>,
    last_payloads: Mutex<Vec<Vec<u8>>>,
}

impl Transport for RecordingTransport {
    async fn exchange(
        &self,
        endpoint: &Endpoint,
        requests: &[Subrequest<'_>],
    ) -> Result<Vec<Vec<u8>>, TransportError> {
        *self.last_endpoint.lock().unwrap() = Some(endpoint.to_string());
        *self.last_payloads.lock().unwrap() = requests.iter().map(|r| r.payload.to_vec()).collect();
        Ok(requests
            .iter()
            .map(|r| {
                let kind = RequestKind::from_id(r.request_type).unwrap();
                DecodedResponse::empty(kind).encode(&JsonCodec).unwrap()
            })
            .collect())
    }
}

fn logged_in() -> Arc<AuthSession> {
    Arc::new(AuthSession::with_ticket(AuthTicket::new(
        AuthProvider::Google,
        "token",
        SystemTime::now() + Duration::from_secs(1800),
    )))
}

fn client(config: ApiConfig) -> ApiClient<RecordingTransport, Arc<AuthSession>> {
    let location = Arc::new(SharedLocation::new(Coordinates::new(35.6762, 139.6503).unwrap()));
    ApiClient::new(config, RecordingTransport::default(), logged_in(), location)
}

fn last_endpoint(client: &ApiClient<RecordingTransport, Arc<AuthSession>>) -> Option<String> {
    client.dispatcher().transport().last_endpoint.lock().unwrap().clone()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_execute_sends_to_configured_endpoint() {
    let client = client(ApiConfig::default());
    let mut batch = client.batch();
    batch.simulate_session_start().unwrap();

    let responses = client.execute(batch).await.unwrap();

    assert_eq!(responses.len(), 5);
    assert_eq!(last_endpoint(&client).as_deref(), Some(client.endpoint().as_str()));
}

#[tokio::test]
async fn test_set_endpoint_redirects_later_batches() {
    let mut client = client(ApiConfig::default());
    client.set_endpoint(Endpoint::new("https://pgorelease.nianticlabs.com/plfe/117/rpc"));

    let mut batch = client.batch();
    batch.get_player().unwrap();
    client.execute(batch).await.unwrap();

    assert_eq!(
        last_endpoint(&client).as_deref(),
        Some("https://pgorelease.nianticlabs.com/plfe/117/rpc")
    );
}

#[tokio::test]
async fn test_send_to_leaves_configured_endpoint_alone() {
    let client = client(ApiConfig::default());
    let mut batch = client.batch();
    batch.echo().unwrap();

    client
        .send_to(batch, &Endpoint::new("https://other.test/rpc"))
        .await
        .unwrap();

    assert_eq!(last_endpoint(&client).as_deref(), Some("https://other.test/rpc"));
    assert_eq!(client.endpoint(), &ApiConfig::default().endpoint);
}

#[tokio::test]
async fn test_batch_uses_configured_settings_hash() {
    let client = client(ApiConfig {
        settings_hash: "deadbeef".into(),
        ..ApiConfig::default()
    });
    let mut batch = client.batch();
    batch.download_settings().unwrap();

    client.execute(batch).await.unwrap();

    let payloads = client.dispatcher().transport().last_payloads.lock().unwrap().clone();
    let message: DownloadSettingsMessage = JsonCodec.decode(&payloads[0]).unwrap();
    assert_eq!(message.hash, "deadbeef");
}

#[tokio::test]
async fn test_batch_uses_configured_device() {
    let client = client(ApiConfig {
        device: DeviceInfo {
            locale: "ja_JP".into(),
            ..DeviceInfo::default()
        },
        ..ApiConfig::default()
    });
    let mut batch = client.batch();
    batch
        .download_remote_config_version(None)
        .unwrap()
        .get_asset_digest(None)
        .unwrap();

    client.execute(batch).await.unwrap();

    let payloads = client.dispatcher().transport().last_payloads.lock().unwrap().clone();
    let config: DownloadRemoteConfigVersionMessage = JsonCodec.decode(&payloads[0]).unwrap();
    let digest: GetAssetDigestMessage = JsonCodec.decode(&payloads[1]).unwrap();
    assert_eq!(config.locale, "ja_JP");
    assert_eq!(digest.locale, "ja_JP");
}

#[tokio::test]
async fn test_logout_blocks_further_batches() {
    let client = client(ApiConfig::default());
    client.dispatcher().auth().logout().unwrap();

    let mut batch = client.batch();
    batch.get_player().unwrap();
    let err = client.execute(batch).await.unwrap_err();

    assert!(matches!(err, ApiError::NotAuthenticated));
    assert_eq!(last_endpoint(&client), None);
}

#[tokio::test]
async fn test_empty_client_batch_is_rejected() {
    let client = client(ApiConfig::default());
    let err = client.execute(client.batch()).await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyBatch));
}

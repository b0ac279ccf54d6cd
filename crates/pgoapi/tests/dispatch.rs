//! Integration tests for batch dispatch: ordering, preconditions and
//! failure propagation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use pgoapi::prelude::*;
use pgoapi::protocol::{
    FortSearchResponse, FortSearchResult, GetInventoryResponse, GetPlayerResponse, PlayerData,
};

// =========================================================================
// Mock transport and auth
// =========================================================================

/// What the mock transport answers with.
enum Reply {
    /// The empty response of each requested kind.
    Loopback,
    /// Fixed segments, regardless of the request.
    Segments(Vec<Vec<u8>>),
    /// A transport failure.
    Fail(fn() -> TransportError),
}

/// Records every exchange and answers according to `reply`.
struct MockTransport {
    reply: Reply,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, Vec<u32>)>>,
}

impl MockTransport {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for MockTransport {
    async fn exchange(
        &self,
        endpoint: &Endpoint,
        requests: &[Subrequest<'_>],
    ) -> Result<Vec<Vec<u8>>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((
            endpoint.to_string(),
            requests.iter().map(|r| r.request_type).collect(),
        ));

        match &self.reply {
            Reply::Loopback => Ok(requests
                .iter()
                .map(|r| {
                    let kind = RequestKind::from_id(r.request_type).unwrap();
                    DecodedResponse::empty(kind).encode(&JsonCodec).unwrap()
                })
                .collect()),
            Reply::Segments(segments) => Ok(segments.clone()),
            Reply::Fail(make) => Err(make()),
        }
    }
}

/// Fixed auth answer.
struct FixedAuth(bool);

impl AuthState for FixedAuth {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}

fn dispatcher(reply: Reply) -> BatchDispatcher<MockTransport, FixedAuth> {
    BatchDispatcher::new(MockTransport::new(reply), FixedAuth(true))
}

fn batch() -> RequestBatch {
    let location = SharedLocation::new(Coordinates::new(37.7749, -122.4194).unwrap());
    RequestBatch::new(JsonCodec, Arc::new(location))
}

fn encode<T: serde::Serialize>(message: &T) -> Vec<u8> {
    JsonCodec.encode(message).unwrap()
}

// =========================================================================
// Success path
// =========================================================================

#[tokio::test]
async fn test_send_decodes_each_segment_with_its_entry_type() {
    let player = GetPlayerResponse {
        success: true,
        player_data: PlayerData {
            username: "ash".into(),
            ..PlayerData::default()
        },
    };
    let fort = FortSearchResponse {
        result: FortSearchResult::Success,
        experience_awarded: 50,
        ..FortSearchResponse::default()
    };
    let inventory = GetInventoryResponse {
        success: true,
        ..GetInventoryResponse::default()
    };
    let dispatcher = dispatcher(Reply::Segments(vec![
        encode(&player),
        encode(&fort),
        encode(&inventory),
    ]));

    let mut batch = batch();
    batch
        .get_player()
        .unwrap()
        .fort_search("fort", Coordinates::new(37.775, -122.419).unwrap())
        .unwrap()
        .get_inventory(None)
        .unwrap();

    let mut responses = dispatcher
        .send(batch, &Endpoint::default())
        .await
        .unwrap()
        .into_iter();

    let decoded_player = GetPlayerResponse::try_from(responses.next().unwrap()).unwrap();
    assert_eq!(decoded_player, player);
    let decoded_fort = FortSearchResponse::try_from(responses.next().unwrap()).unwrap();
    assert_eq!(decoded_fort.experience_awarded, 50);
    let decoded_inventory = GetInventoryResponse::try_from(responses.next().unwrap()).unwrap();
    assert!(decoded_inventory.success);
    assert!(responses.next().is_none());
}

#[tokio::test]
async fn test_send_preserves_batch_order_for_every_kind() {
    let dispatcher = dispatcher(Reply::Loopback);
    let mut batch = batch();
    batch
        .echo()
        .unwrap()
        .get_hatched_eggs()
        .unwrap()
        .get_map_objects(None, None)
        .unwrap()
        .collect_daily_bonus()
        .unwrap()
        .echo()
        .unwrap();
    let expected = batch.kinds();

    let responses = dispatcher.send(batch, &Endpoint::default()).await.unwrap();

    assert_eq!(responses.len(), expected.len());
    let kinds: Vec<RequestKind> = responses.iter().map(DecodedResponse::kind).collect();
    assert_eq!(kinds, expected);
}

#[tokio::test]
async fn test_send_passes_wire_ids_in_order_to_transport() {
    let dispatcher = dispatcher(Reply::Loopback);
    let mut batch = batch();
    batch.simulate_session_start().unwrap();

    dispatcher
        .send(batch, &Endpoint::new("https://example.test/rpc"))
        .await
        .unwrap();

    let seen = dispatcher.transport().seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "https://example.test/rpc");
    assert_eq!(seen[0].1, vec![2, 126, 4, 129, 5]);
}

#[tokio::test]
async fn test_single_entry_batch_makes_one_call() {
    let dispatcher = dispatcher(Reply::Loopback);
    let mut batch = batch();
    batch.get_player().unwrap();

    let responses = dispatcher.send(batch, &Endpoint::default()).await.unwrap();

    assert_eq!(responses.len(), 1);
    assert_eq!(dispatcher.transport().calls(), 1);
}

#[tokio::test]
async fn test_send_future_can_be_spawned() {
    let dispatcher = Arc::new(dispatcher(Reply::Loopback));
    let mut batch = batch();
    batch.get_player().unwrap();

    let handle = {
        let dispatcher = Arc::clone(&dispatcher);
        tokio::spawn(async move { dispatcher.send(batch, &Endpoint::default()).await })
    };

    assert_eq!(handle.await.unwrap().unwrap().len(), 1);
}

// =========================================================================
// Preconditions
// =========================================================================

#[tokio::test]
async fn test_empty_batch_is_rejected_before_transport() {
    let dispatcher = dispatcher(Reply::Loopback);

    let err = dispatcher.send(batch(), &Endpoint::default()).await.unwrap_err();

    assert!(matches!(err, ApiError::EmptyBatch));
    assert_eq!(dispatcher.transport().calls(), 0);
}

#[tokio::test]
async fn test_unauthenticated_is_rejected_before_transport() {
    let dispatcher = BatchDispatcher::new(MockTransport::new(Reply::Loopback), FixedAuth(false));
    let mut batch = batch();
    batch.get_player().unwrap();

    let err = dispatcher.send(batch, &Endpoint::default()).await.unwrap_err();

    assert!(matches!(err, ApiError::NotAuthenticated));
    assert_eq!(dispatcher.transport().calls(), 0);
}

#[tokio::test]
async fn test_expired_session_is_rejected_before_transport() {
    let session = Arc::new(AuthSession::with_ticket(AuthTicket::new(
        AuthProvider::Ptc,
        "token",
        SystemTime::now() - Duration::from_secs(5),
    )));
    let dispatcher = BatchDispatcher::new(MockTransport::new(Reply::Loopback), session);
    let mut batch = batch();
    batch.get_player().unwrap();

    let err = dispatcher.send(batch, &Endpoint::default()).await.unwrap_err();

    assert!(matches!(err, ApiError::NotAuthenticated));
    assert_eq!(dispatcher.transport().calls(), 0);
}

// =========================================================================
// Failures
// =========================================================================

#[tokio::test]
async fn test_transport_error_is_propagated() {
    let dispatcher = dispatcher(Reply::Fail(|| TransportError::Status { code: 102 }));
    let mut batch = batch();
    batch.get_player().unwrap();

    let err = dispatcher.send(batch, &Endpoint::default()).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Transport(TransportError::Status { code: 102 })
    ));
    assert_eq!(dispatcher.transport().calls(), 1);
}

#[tokio::test]
async fn test_too_few_segments_is_malformed_response() {
    let dispatcher = dispatcher(Reply::Segments(vec![b"{}".to_vec()]));
    let mut batch = batch();
    batch.get_player().unwrap().get_inventory(None).unwrap();

    let err = dispatcher.send(batch, &Endpoint::default()).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Transport(TransportError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_too_many_segments_is_malformed_response() {
    let dispatcher = dispatcher(Reply::Segments(vec![b"{}".to_vec(), b"{}".to_vec()]));
    let mut batch = batch();
    batch.get_player().unwrap();

    let err = dispatcher.send(batch, &Endpoint::default()).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Transport(TransportError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_undecodable_segment_fails_whole_batch_with_index_and_kind() {
    let dispatcher = dispatcher(Reply::Segments(vec![
        b"{}".to_vec(),
        b"{}".to_vec(),
        b"not json".to_vec(),
    ]));
    let mut batch = batch();
    batch
        .get_player()
        .unwrap()
        .get_hatched_eggs()
        .unwrap()
        .get_inventory(None)
        .unwrap();

    let err = dispatcher.send(batch, &Endpoint::default()).await.unwrap_err();

    match err {
        ApiError::Decode { index, kind, .. } => {
            assert_eq!(index, 2);
            assert_eq!(kind, RequestKind::GetInventory);
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

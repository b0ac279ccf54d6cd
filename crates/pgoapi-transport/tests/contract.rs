//! Contract tests for the `Transport` trait.
//!
//! These use a tiny in-memory transport to check that the trait can be
//! implemented with a plain `async fn` and driven from a spawned task.

use std::sync::Mutex;

use pgoapi_transport::{Endpoint, Subrequest, Transport, TransportError};

/// Echoes every payload back with its request type prepended.
#[derive(Default)]
struct EchoTransport {
    endpoints: Mutex<Vec<String>>,
}

impl Transport for EchoTransport {
    async fn exchange(
        &self,
        endpoint: &Endpoint,
        requests: &[Subrequest<'_>],
    ) -> Result<Vec<Vec<u8>>, TransportError> {
        self.endpoints
            .lock()
            .expect("lock")
            .push(endpoint.to_string());

        Ok(requests
            .iter()
            .map(|req| {
                let mut segment = vec![req.request_type as u8];
                segment.extend_from_slice(req.payload);
                segment
            })
            .collect())
    }
}

/// Always fails, like a dropped connection.
struct DeadTransport;

impl Transport for DeadTransport {
    async fn exchange(
        &self,
        _endpoint: &Endpoint,
        _requests: &[Subrequest<'_>],
    ) -> Result<Vec<Vec<u8>>, TransportError> {
        Err(TransportError::ConnectionClosed("reset by peer".into()))
    }
}

#[tokio::test]
async fn test_exchange_preserves_order() {
    let transport = EchoTransport::default();
    let endpoint = Endpoint::new("https://rpc.test/plfe/rpc");

    let requests = [
        Subrequest { request_type: 2, payload: b"a" },
        Subrequest { request_type: 126, payload: b"b" },
        Subrequest { request_type: 4, payload: b"c" },
    ];

    let segments = transport
        .exchange(&endpoint, &requests)
        .await
        .expect("echo never fails");

    assert_eq!(segments, vec![vec![2, b'a'], vec![126, b'b'], vec![4, b'c']]);
    assert_eq!(
        *transport.endpoints.lock().expect("lock"),
        vec!["https://rpc.test/plfe/rpc".to_string()]
    );
}

#[tokio::test]
async fn test_exchange_future_can_be_spawned() {
    // The trait promises a `Send` future, so the exchange can run on
    // any worker thread.
    let handle = tokio::spawn(async {
        let transport = EchoTransport::default();
        let payload = vec![9u8, 9, 9];
        let requests = [Subrequest { request_type: 666, payload: &payload }];
        transport
            .exchange(&Endpoint::default(), &requests)
            .await
            .map(|segments| segments.len())
    });

    let count = handle.await.expect("task should complete").expect("ok");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_exchange_failure_is_reported() {
    let result = DeadTransport
        .exchange(&Endpoint::default(), &[])
        .await;

    match result {
        Err(TransportError::ConnectionClosed(reason)) => {
            assert_eq!(reason, "reset by peer");
        }
        other => panic!("expected ConnectionClosed, got {other:?}"),
    }
}

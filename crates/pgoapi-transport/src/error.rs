/// Errors that can occur in the transport layer.
///
/// The batch client never retries on any of these; whatever retry or
/// backoff policy exists belongs to the [`Transport`](crate::Transport)
/// implementation.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection was closed before a response arrived.
    #[error("connection closed: {0}")]
    ConnectionClosed(String),

    /// Sending the request envelope failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving the response envelope failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// The server answered with a non-success status code.
    #[error("server returned status {code}")]
    Status { code: u32 },

    /// The response envelope could not be split into one segment per
    /// subrequest.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The transport was shut down.
    #[error("transport shut down")]
    Shutdown,
}

//! Error types for the protocol layer.
//!
//! A `ProtocolError` always means a message could not be turned into
//! bytes, could not be read back from bytes, or was built from values the
//! protocol does not allow. Network problems live in `TransportError`.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization of a request message failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// A response segment could not be parsed as the expected message.
    ///
    /// Common causes: truncated segments, wrong message shape, or a
    /// segment that belongs to a different request kind.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// Binary serialization of a request message failed.
    #[cfg(feature = "bincode")]
    #[error("binary encode failed: {0}")]
    BinaryEncode(bincode::Error),

    /// A binary response segment could not be parsed.
    #[cfg(feature = "bincode")]
    #[error("binary decode failed: {0}")]
    BinaryDecode(bincode::Error),

    /// The message is well-formed but violates a protocol rule, e.g. a
    /// map query whose timestamp list does not line up with its cells.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// A latitude/longitude pair outside the valid range.
    #[error("invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

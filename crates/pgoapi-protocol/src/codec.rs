//! Codec trait and implementations for request and response messages.
//!
//! A codec turns message structs into the opaque payload bytes carried by
//! a batch entry, and turns raw response segments back into typed
//! responses. The batch layer is generic over [`Codec`], so the wire
//! format can be swapped without touching the builders or the dispatcher.
//!
//! [`JsonCodec`] is the default. [`BincodeCodec`] (feature `bincode`)
//! produces compact binary payloads.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes messages to bytes and decodes bytes back to messages.
///
/// Both methods are pure: the same input always gives the same output,
/// and neither touches the network.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a message into payload bytes.
    ///
    /// # Errors
    /// Returns an encode variant of [`ProtocolError`] if the value cannot
    /// be represented in this format.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Parses a response segment into a message.
    ///
    /// # Errors
    /// Returns a decode variant of [`ProtocolError`] if the bytes are
    /// malformed or do not match the expected message.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// ## Example
///
/// ```rust
/// use pgoapi_protocol::{Codec, JsonCodec, GetInventoryMessage};
///
/// let codec = JsonCodec;
/// let message = GetInventoryMessage { last_timestamp_ms: 1_469_000_000_000 };
///
/// let bytes = codec.encode(&message).unwrap();
/// let decoded: GetInventoryMessage = codec.decode(&bytes).unwrap();
/// assert_eq!(message, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

// ---------------------------------------------------------------------------
// BincodeCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `bincode`.
///
/// Payloads are positional, so both sides must agree on the exact
/// message layout. Missing fields are not tolerated the way they are
/// with [`JsonCodec`].
#[cfg(feature = "bincode")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

#[cfg(feature = "bincode")]
impl Codec for BincodeCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        bincode::serialize(value).map_err(ProtocolError::BinaryEncode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        bincode::deserialize(data).map_err(ProtocolError::BinaryDecode)
    }
}

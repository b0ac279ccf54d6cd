//! Message catalog and codecs for the pgoapi batch client.
//!
//! This crate defines what travels inside a batch:
//!
//! - **Catalog** ([`RequestKind`], [`ApiRequest`], [`DecodedResponse`]) —
//!   the fixed pairing of every request message with its response message.
//! - **Messages** — one request and one response struct per operation,
//!   plus the value types they share ([`ItemId`], [`Coordinates`], ...).
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how messages become
//!   payload bytes and how response segments become messages again.
//! - **Errors** ([`ProtocolError`]).
//!
//! It knows nothing about batches, sessions or the network.

mod catalog;
mod codec;
mod error;
mod requests;
mod responses;
mod types;

pub use catalog::{ApiRequest, DecodedResponse, Decoder, RequestKind, decode_response, decoder_for};
#[cfg(feature = "bincode")]
pub use codec::BincodeCodec;
pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use requests::*;
pub use responses::*;
pub use types::{
    BadgeType, BattleAction, BattleActionType, CatchAttempt, ContactSettings, Coordinates,
    DeviceInfo, FortType, Gender, ItemId, Platform, PlayerAvatar, PokemonSpecies, TeamColor,
    TutorialState,
};

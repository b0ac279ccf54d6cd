//! The request catalog: which request message answers with which response.
//!
//! Every supported operation is listed exactly once in the
//! `request_catalog!` invocation below, as
//! `Kind = wire_id => RequestMessage, ResponseMessage`. From that single
//! table the macro generates:
//!
//! - [`RequestKind`] with its wire ids,
//! - [`DecodedResponse`] with one variant per kind,
//! - the [`ApiRequest`] impl tying each request message to its kind and
//!   response type,
//! - `From`/`TryFrom` conversions between each response message and
//!   [`DecodedResponse`].
//!
//! Because a decoder is always derived from the request *type*
//! ([`decoder_for`]), a batch entry cannot end up with a decoder that
//! belongs to a different kind.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::requests::*;
use crate::responses::*;
use crate::{Codec, ProtocolError};

/// A request message that can be placed in a batch.
///
/// Implemented by the catalog for every request message; there is no
/// reason to implement it by hand.
pub trait ApiRequest: Serialize {
    /// The operation this message performs.
    const KIND: RequestKind;

    /// The message the server answers with.
    type Response: DeserializeOwned + Into<DecodedResponse>;
}

/// Parses one raw response segment with a specific codec.
///
/// Stored alongside each batch entry; a plain `fn` pointer, so entries
/// stay `Clone`, `Send` and comparable.
pub type Decoder<C> = fn(&C, &[u8]) -> Result<DecodedResponse, ProtocolError>;

/// Decodes `data` as `R` and wraps it in the matching [`DecodedResponse`]
/// variant.
pub fn decode_response<C, R>(codec: &C, data: &[u8]) -> Result<DecodedResponse, ProtocolError>
where
    C: Codec,
    R: DeserializeOwned + Into<DecodedResponse>,
{
    codec.decode::<R>(data).map(Into::into)
}

/// Returns the decoder registered for request message `M`.
pub fn decoder_for<C: Codec, M: ApiRequest>() -> Decoder<C> {
    decode_response::<C, M::Response>
}

macro_rules! request_catalog {
    ($( $kind:ident = $id:literal => $request:ident, $response:ident; )+) => {
        /// One tag per supported operation.
        ///
        /// Serialized with the protocol's `SCREAMING_SNAKE_CASE` names
        /// (`"GET_MAP_OBJECTS"`); [`id`](Self::id) gives the numeric
        /// request type carried in the RPC envelope.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum RequestKind {
            $( $kind, )+
        }

        impl RequestKind {
            /// Every kind, in catalog order.
            pub const ALL: &'static [RequestKind] = &[ $( RequestKind::$kind, )+ ];

            /// The numeric wire id of this operation.
            pub fn id(self) -> u32 {
                match self {
                    $( Self::$kind => $id, )+
                }
            }

            /// Looks up a kind by wire id.
            pub fn from_id(id: u32) -> Option<Self> {
                match id {
                    $( $id => Some(Self::$kind), )+
                    _ => None,
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$kind => stringify!($kind), )+
                }
            }
        }

        /// A typed response, one variant per [`RequestKind`].
        #[derive(Debug, Clone, PartialEq)]
        pub enum DecodedResponse {
            $( $kind($response), )+
        }

        impl DecodedResponse {
            /// The kind of request this response answers.
            pub fn kind(&self) -> RequestKind {
                match self {
                    $( Self::$kind(_) => RequestKind::$kind, )+
                }
            }

            /// The all-default response for `kind`, i.e. what an empty
            /// segment decodes to.
            pub fn empty(kind: RequestKind) -> Self {
                match kind {
                    $( RequestKind::$kind => Self::$kind($response::default()), )+
                }
            }

            /// Encodes the inner response message with `codec`.
            ///
            /// This is the server side of the exchange; loopback
            /// transports and test fixtures use it to produce segments.
            pub fn encode<C: Codec>(&self, codec: &C) -> Result<Vec<u8>, ProtocolError> {
                match self {
                    $( Self::$kind(message) => codec.encode(message), )+
                }
            }
        }

        $(
            impl ApiRequest for $request {
                const KIND: RequestKind = RequestKind::$kind;
                type Response = $response;
            }

            impl From<$response> for DecodedResponse {
                fn from(message: $response) -> Self {
                    Self::$kind(message)
                }
            }

            impl TryFrom<DecodedResponse> for $response {
                type Error = DecodedResponse;

                fn try_from(response: DecodedResponse) -> Result<Self, Self::Error> {
                    match response {
                        DecodedResponse::$kind(message) => Ok(message),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

request_catalog! {
    PlayerUpdate = 1 => PlayerUpdateMessage, PlayerUpdateResponse;
    GetPlayer = 2 => GetPlayerMessage, GetPlayerResponse;
    GetInventory = 4 => GetInventoryMessage, GetInventoryResponse;
    DownloadSettings = 5 => DownloadSettingsMessage, DownloadSettingsResponse;
    DownloadItemTemplates = 6 => DownloadItemTemplatesMessage, DownloadItemTemplatesResponse;
    DownloadRemoteConfigVersion = 7 => DownloadRemoteConfigVersionMessage, DownloadRemoteConfigVersionResponse;
    FortSearch = 101 => FortSearchMessage, FortSearchResponse;
    Encounter = 102 => EncounterMessage, EncounterResponse;
    CatchPokemon = 103 => CatchPokemonMessage, CatchPokemonResponse;
    FortDetails = 104 => FortDetailsMessage, FortDetailsResponse;
    GetMapObjects = 106 => GetMapObjectsMessage, GetMapObjectsResponse;
    FortDeployPokemon = 110 => FortDeployPokemonMessage, FortDeployPokemonResponse;
    FortRecallPokemon = 111 => FortRecallPokemonMessage, FortRecallPokemonResponse;
    ReleasePokemon = 112 => ReleasePokemonMessage, ReleasePokemonResponse;
    UseItemPotion = 113 => UseItemPotionMessage, UseItemPotionResponse;
    UseItemCapture = 114 => UseItemCaptureMessage, UseItemCaptureResponse;
    UseItemRevive = 116 => UseItemReviveMessage, UseItemReviveResponse;
    GetPlayerProfile = 121 => GetPlayerProfileMessage, GetPlayerProfileResponse;
    EvolvePokemon = 125 => EvolvePokemonMessage, EvolvePokemonResponse;
    GetHatchedEggs = 126 => GetHatchedEggsMessage, GetHatchedEggsResponse;
    EncounterTutorialComplete = 127 => EncounterTutorialCompleteMessage, EncounterTutorialCompleteResponse;
    LevelUpRewards = 128 => LevelUpRewardsMessage, LevelUpRewardsResponse;
    CheckAwardedBadges = 129 => CheckAwardedBadgesMessage, CheckAwardedBadgesResponse;
    UseItemGym = 133 => UseItemGymMessage, UseItemGymResponse;
    GetGymDetails = 134 => GetGymDetailsMessage, GetGymDetailsResponse;
    StartGymBattle = 135 => StartGymBattleMessage, StartGymBattleResponse;
    AttackGym = 136 => AttackGymMessage, AttackGymResponse;
    RecycleInventoryItem = 137 => RecycleInventoryItemMessage, RecycleInventoryItemResponse;
    CollectDailyBonus = 138 => CollectDailyBonusMessage, CollectDailyBonusResponse;
    UseItemXpBoost = 139 => UseItemXpBoostMessage, UseItemXpBoostResponse;
    UseItemEggIncubator = 140 => UseItemEggIncubatorMessage, UseItemEggIncubatorResponse;
    UseIncense = 141 => UseIncenseMessage, UseIncenseResponse;
    GetIncensePokemon = 142 => GetIncensePokemonMessage, GetIncensePokemonResponse;
    IncenseEncounter = 143 => IncenseEncounterMessage, IncenseEncounterResponse;
    AddFortModifier = 144 => AddFortModifierMessage, AddFortModifierResponse;
    DiskEncounter = 145 => DiskEncounterMessage, DiskEncounterResponse;
    CollectDailyDefenderBonus = 146 => CollectDailyDefenderBonusMessage, CollectDailyDefenderBonusResponse;
    UpgradePokemon = 147 => UpgradePokemonMessage, UpgradePokemonResponse;
    SetFavoritePokemon = 148 => SetFavoritePokemonMessage, SetFavoritePokemonResponse;
    NicknamePokemon = 149 => NicknamePokemonMessage, NicknamePokemonResponse;
    EquipBadge = 150 => EquipBadgeMessage, EquipBadgeResponse;
    SetContactSettings = 151 => SetContactSettingsMessage, SetContactSettingsResponse;
    GetAssetDigest = 300 => GetAssetDigestMessage, GetAssetDigestResponse;
    GetDownloadUrls = 301 => GetDownloadUrlsMessage, GetDownloadUrlsResponse;
    GetSuggestedCodenames = 401 => GetSuggestedCodenamesMessage, GetSuggestedCodenamesResponse;
    CheckCodenameAvailable = 402 => CheckCodenameAvailableMessage, CheckCodenameAvailableResponse;
    ClaimCodename = 403 => ClaimCodenameMessage, ClaimCodenameResponse;
    SetAvatar = 404 => SetAvatarMessage, SetAvatarResponse;
    SetPlayerTeam = 405 => SetPlayerTeamMessage, SetPlayerTeamResponse;
    MarkTutorialComplete = 406 => MarkTutorialCompleteMessage, MarkTutorialCompleteResponse;
    Echo = 666 => EchoMessage, EchoResponse;
    SfidaActionLog = 801 => SfidaActionLogMessage, SfidaActionLogResponse;
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Request messages, one per [`RequestKind`](crate::RequestKind).
//!
//! These are plain data. Fields that describe where the player stands
//! (`player_latitude`, `latitude`, ...) are filled in by the batch
//! builders from the current location; everything else comes from the
//! caller. Request messages without parameters are empty braced structs
//! so they encode as `{}`.

use serde::{Deserialize, Serialize};

use crate::types::{
    BadgeType, BattleAction, ContactSettings, ItemId, Platform, PlayerAvatar,
    PokemonSpecies, TeamColor, TutorialState,
};

// ---------------------------------------------------------------------------
// Player and settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerUpdateMessage {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetPlayerMessage {}

/// Inventory query. A zero timestamp asks for the full inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetInventoryMessage {
    pub last_timestamp_ms: i64,
}

/// Settings download. `hash` is the hash of the settings the client
/// already holds; the server only sends settings when it differs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DownloadSettingsMessage {
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DownloadItemTemplatesMessage {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DownloadRemoteConfigVersionMessage {
    pub platform: Platform,
    pub device_manufacturer: String,
    pub device_model: String,
    pub locale: String,
    pub app_version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetPlayerProfileMessage {
    pub player_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetHatchedEggsMessage {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelUpRewardsMessage {
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckAwardedBadgesMessage {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectDailyBonusMessage {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectDailyDefenderBonusMessage {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquipBadgeMessage {
    pub badge_type: BadgeType,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetContactSettingsMessage {
    pub contact_settings: ContactSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetAssetDigestMessage {
    pub platform: Platform,
    pub device_manufacturer: String,
    pub device_model: String,
    pub locale: String,
    pub app_version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetDownloadUrlsMessage {
    pub asset_id: Vec<String>,
}

// ---------------------------------------------------------------------------
// Account creation and tutorial
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncounterTutorialCompleteMessage {
    pub pokemon_id: PokemonSpecies,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetSuggestedCodenamesMessage {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckCodenameAvailableMessage {
    pub codename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClaimCodenameMessage {
    pub codename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetAvatarMessage {
    pub player_avatar: PlayerAvatar,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetPlayerTeamMessage {
    pub team: TeamColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkTutorialCompleteMessage {
    pub tutorials_completed: Vec<TutorialState>,
    pub send_marketing_emails: bool,
    pub send_push_notifications: bool,
}

// ---------------------------------------------------------------------------
// Map and forts
// ---------------------------------------------------------------------------

/// Map query.
///
/// `cell_id` and `since_timestamp_ms` are parallel arrays: entry `i` of
/// the timestamps asks for changes in cell `i` since that instant, and
/// zero asks for everything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetMapObjectsMessage {
    pub cell_id: Vec<u64>,
    pub since_timestamp_ms: Vec<i64>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FortSearchMessage {
    pub fort_id: String,
    pub player_latitude: f64,
    pub player_longitude: f64,
    pub fort_latitude: f64,
    pub fort_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FortDetailsMessage {
    pub fort_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FortDeployPokemonMessage {
    pub fort_id: String,
    pub pokemon_id: u64,
    pub player_latitude: f64,
    pub player_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FortRecallPokemonMessage {
    pub fort_id: String,
    pub pokemon_id: u64,
    pub player_latitude: f64,
    pub player_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddFortModifierMessage {
    pub modifier_type: ItemId,
    pub fort_id: String,
    pub player_latitude: f64,
    pub player_longitude: f64,
}

// ---------------------------------------------------------------------------
// Encounters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EncounterMessage {
    pub encounter_id: u64,
    pub spawn_point_id: String,
    pub player_latitude: f64,
    pub player_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatchPokemonMessage {
    pub encounter_id: u64,
    pub pokeball: ItemId,
    pub normalized_reticle_size: f64,
    pub spawn_point_id: String,
    pub hit_pokemon: bool,
    pub spin_modifier: f64,
    pub normalized_hit_position: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetIncensePokemonMessage {
    pub player_latitude: f64,
    pub player_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncenseEncounterMessage {
    pub encounter_id: i64,
    pub encounter_location: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiskEncounterMessage {
    pub encounter_id: u64,
    pub fort_id: String,
    pub player_latitude: f64,
    pub player_longitude: f64,
}

// ---------------------------------------------------------------------------
// Pokemon management
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReleasePokemonMessage {
    pub pokemon_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvolvePokemonMessage {
    pub pokemon_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpgradePokemonMessage {
    pub pokemon_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetFavoritePokemonMessage {
    pub pokemon_id: u64,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NicknamePokemonMessage {
    pub pokemon_id: u64,
    pub nickname: String,
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UseItemPotionMessage {
    pub item_id: ItemId,
    pub pokemon_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UseItemCaptureMessage {
    pub item_id: ItemId,
    pub encounter_id: u64,
    pub spawn_point_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UseItemReviveMessage {
    pub item_id: ItemId,
    pub pokemon_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecycleInventoryItemMessage {
    pub item_id: ItemId,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UseItemXpBoostMessage {
    pub item_id: ItemId,
}

/// Puts an egg into an incubator. `item_id` is the incubator's inventory
/// id (a string, unlike the catalog [`ItemId`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UseItemEggIncubatorMessage {
    pub item_id: String,
    pub pokemon_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UseIncenseMessage {
    pub incense_type: ItemId,
}

// ---------------------------------------------------------------------------
// Gyms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UseItemGymMessage {
    pub item_id: ItemId,
    pub gym_id: String,
    pub player_latitude: f64,
    pub player_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetGymDetailsMessage {
    pub gym_id: String,
    pub player_latitude: f64,
    pub player_longitude: f64,
    pub gym_latitude: f64,
    pub gym_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartGymBattleMessage {
    pub gym_id: String,
    pub attacking_pokemon_ids: Vec<u64>,
    pub defending_pokemon_id: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttackGymMessage {
    pub gym_id: String,
    pub battle_id: String,
    pub attack_actions: Vec<BattleAction>,
    pub last_retrieved_action: BattleAction,
    pub player_latitude: f64,
    pub player_longitude: f64,
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EchoMessage {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SfidaActionLogMessage {}

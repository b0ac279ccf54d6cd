//! Response messages, one per [`RequestKind`](crate::RequestKind).
//!
//! The server leaves out fields that hold their default value, so every
//! response struct is `#[serde(default)]`: a segment only has to contain
//! the fields that are actually set.

use serde::{Deserialize, Serialize};

use crate::types::{
    BadgeType, BattleAction, ContactSettings, FortType, ItemId, PlayerAvatar,
    PokemonSpecies, TeamColor, TutorialState,
};

// ---------------------------------------------------------------------------
// Result codes
// ---------------------------------------------------------------------------

/// Generic outcome used by most write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultStatus {
    #[default]
    Unset,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FortSearchResult {
    #[default]
    NoResultSet,
    Success,
    OutOfRange,
    InCooldownPeriod,
    InventoryFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncounterStatus {
    #[default]
    EncounterError,
    EncounterSuccess,
    EncounterNotFound,
    EncounterClosed,
    EncounterPokemonFled,
    EncounterNotInRange,
    EncounterAlreadyHappened,
    PokemonInventoryFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatchStatus {
    #[default]
    CatchError,
    CatchSuccess,
    CatchEscape,
    CatchFlee,
    CatchMissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapObjectsStatus {
    #[default]
    UnsetStatus,
    Success,
    LocationUnset,
}

// ---------------------------------------------------------------------------
// Shared payload types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: String,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerData {
    pub creation_timestamp_ms: i64,
    pub username: String,
    pub team: TeamColor,
    pub tutorial_state: Vec<TutorialState>,
    pub avatar: PlayerAvatar,
    pub max_pokemon_storage: i32,
    pub max_item_storage: i32,
    pub contact_settings: ContactSettings,
    pub currencies: Vec<Currency>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonData {
    pub id: u64,
    pub pokemon_id: PokemonSpecies,
    pub cp: i32,
    pub stamina: i32,
    pub stamina_max: i32,
    pub height_m: f32,
    pub weight_kg: f32,
    pub individual_attack: i32,
    pub individual_defense: i32,
    pub individual_stamina: i32,
    pub nickname: String,
    pub favorite: bool,
    pub is_egg: bool,
    pub egg_km_walked_target: f64,
    pub captured_cell_id: u64,
    pub creation_time_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemAward {
    pub item_id: ItemId,
    pub item_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemData {
    pub item_id: ItemId,
    pub count: i32,
    pub unseen: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    pub modified_timestamp_ms: i64,
    pub deleted_item_key: Option<u64>,
    pub pokemon_data: Option<PokemonData>,
    pub item: Option<ItemData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryDelta {
    pub original_timestamp_ms: i64,
    pub new_timestamp_ms: i64,
    pub inventory_items: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureProbability {
    pub pokeball_type: Vec<ItemId>,
    pub capture_probability: Vec<f32>,
    pub reticle_difficulty_scale: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureAward {
    pub xp: Vec<i32>,
    pub candy: Vec<i32>,
    pub stardust: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppliedItem {
    pub item_id: ItemId,
    pub expire_ms: i64,
    pub applied_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EggIncubator {
    pub id: String,
    pub item_id: ItemId,
    pub uses_remaining: i32,
    pub pokemon_id: u64,
    pub start_km_walked: f64,
    pub target_km_walked: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerPublicProfile {
    pub name: String,
    pub level: i32,
    pub avatar: PlayerAvatar,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerBadge {
    pub badge_type: BadgeType,
    pub rank: i32,
    pub start_value: i32,
    pub end_value: i32,
    pub current_value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquippedBadge {
    pub badge_type: BadgeType,
    pub level: i32,
    pub next_equip_change_allowed_timestamp_ms: i64,
}

// ---------------------------------------------------------------------------
// Map payload types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortModifier {
    pub item_id: ItemId,
    pub expiration_timestamp_ms: i64,
    pub deployer_player_codename: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortData {
    pub id: String,
    pub last_modified_timestamp_ms: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub enabled: bool,
    pub fort_type: FortType,
    pub owned_by_team: TeamColor,
    pub guard_pokemon_id: PokemonSpecies,
    pub gym_points: i64,
    pub is_in_battle: bool,
    pub cooldown_complete_timestamp_ms: i64,
    pub active_fort_modifier: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WildPokemon {
    pub encounter_id: u64,
    pub last_modified_timestamp_ms: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub spawn_point_id: String,
    pub pokemon_data: PokemonData,
    pub time_till_hidden_ms: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapPokemon {
    pub spawn_point_id: String,
    pub encounter_id: u64,
    pub pokemon_id: PokemonSpecies,
    pub expiration_timestamp_ms: i64,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NearbyPokemon {
    pub pokemon_id: PokemonSpecies,
    pub distance_in_meters: f32,
    pub encounter_id: u64,
}

/// Everything the server knows about one S2 cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapCell {
    pub s2_cell_id: u64,
    pub current_timestamp_ms: i64,
    pub forts: Vec<FortData>,
    pub spawn_points: Vec<SpawnPoint>,
    pub deleted_objects: Vec<String>,
    pub is_truncated_list: bool,
    pub wild_pokemons: Vec<WildPokemon>,
    pub catchable_pokemons: Vec<MapPokemon>,
    pub nearby_pokemons: Vec<NearbyPokemon>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GymMembership {
    pub pokemon_data: PokemonData,
    pub trainer_public_profile: PlayerPublicProfile,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GymState {
    pub fort_data: FortData,
    pub memberships: Vec<GymMembership>,
    pub deploy_lockout: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleParticipant {
    pub active_pokemon: Option<PokemonData>,
    pub trainer_public_profile: PlayerPublicProfile,
    pub reserve_pokemon: Vec<PokemonData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleLog {
    pub server_ms: i64,
    pub battle_start_timestamp_ms: i64,
    pub battle_end_timestamp_ms: i64,
    pub battle_actions: Vec<BattleAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalMapSettings {
    pub pokemon_visible_range: u32,
    pub poke_nav_range_meters: u32,
    pub encounter_range_meters: u32,
    pub get_map_objects_min_refresh_seconds: u32,
    pub get_map_objects_max_refresh_seconds: u32,
    pub get_map_objects_min_distance_meters: u32,
    pub google_maps_api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    pub map_settings: GlobalMapSettings,
    pub minimum_client_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemTemplate {
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDigestEntry {
    pub asset_id: String,
    pub bundle_name: String,
    pub version: i64,
    pub checksum: u32,
    pub size: i32,
    pub key: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadUrlEntry {
    pub asset_id: String,
    pub url: String,
    pub size: i32,
    pub checksum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionLogEntry {
    pub timestamp_ms: i64,
    pub sfida: bool,
}

// ---------------------------------------------------------------------------
// Responses: player and settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerUpdateResponse {
    pub wild_pokemons: Vec<WildPokemon>,
    pub forts: Vec<FortData>,
    pub forts_nearby: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPlayerResponse {
    pub success: bool,
    pub player_data: PlayerData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetInventoryResponse {
    pub success: bool,
    pub inventory_delta: InventoryDelta,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadSettingsResponse {
    pub error: String,
    pub hash: String,
    pub settings: Option<GlobalSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadItemTemplatesResponse {
    pub success: bool,
    pub item_templates: Vec<ItemTemplate>,
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadRemoteConfigVersionResponse {
    pub result: ResultStatus,
    pub item_templates_timestamp_ms: u64,
    pub asset_digest_timestamp_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPlayerProfileResponse {
    pub result: ResultStatus,
    pub start_time: i64,
    pub badges: Vec<PlayerBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetHatchedEggsResponse {
    pub success: bool,
    pub pokemon_id: Vec<u64>,
    pub experience_awarded: Vec<i32>,
    pub candy_awarded: Vec<i32>,
    pub stardust_awarded: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelUpRewardsResponse {
    pub result: ResultStatus,
    pub items_awarded: Vec<ItemAward>,
    pub items_unlocked: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckAwardedBadgesResponse {
    pub success: bool,
    pub awarded_badges: Vec<BadgeType>,
    pub awarded_badge_levels: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectDailyBonusResponse {
    pub result: ResultStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectDailyDefenderBonusResponse {
    pub result: ResultStatus,
    pub currency_type: Vec<String>,
    pub currency_awarded: Vec<i32>,
    pub defenders_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipBadgeResponse {
    pub result: ResultStatus,
    pub equipped: Option<EquippedBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetContactSettingsResponse {
    pub status: ResultStatus,
    pub player_data: Option<PlayerData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAssetDigestResponse {
    pub digest: Vec<AssetDigestEntry>,
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetDownloadUrlsResponse {
    pub download_urls: Vec<DownloadUrlEntry>,
}

// ---------------------------------------------------------------------------
// Responses: account creation and tutorial
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterTutorialCompleteResponse {
    pub result: ResultStatus,
    pub pokemon_data: Option<PokemonData>,
    pub capture_award: Option<CaptureAward>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetSuggestedCodenamesResponse {
    pub codenames: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckCodenameAvailableResponse {
    pub codename: String,
    pub user_message: String,
    pub is_assignable: bool,
    pub status: ResultStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimCodenameResponse {
    pub codename: String,
    pub user_message: String,
    pub is_assignable: bool,
    pub status: ResultStatus,
    pub updated_player: Option<PlayerData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetAvatarResponse {
    pub status: ResultStatus,
    pub player_data: Option<PlayerData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetPlayerTeamResponse {
    pub status: ResultStatus,
    pub player_data: Option<PlayerData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkTutorialCompleteResponse {
    pub success: bool,
    pub player_data: Option<PlayerData>,
}

// ---------------------------------------------------------------------------
// Responses: map and forts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMapObjectsResponse {
    pub map_cells: Vec<MapCell>,
    pub status: MapObjectsStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortSearchResponse {
    pub result: FortSearchResult,
    pub items_awarded: Vec<ItemAward>,
    pub gems_awarded: i32,
    pub pokemon_data_egg: Option<PokemonData>,
    pub experience_awarded: i32,
    pub cooldown_complete_timestamp_ms: i64,
    pub chain_hack_sequence_number: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortDetailsResponse {
    pub fort_id: String,
    pub team_color: TeamColor,
    pub pokemon_data: Option<PokemonData>,
    pub name: String,
    pub image_urls: Vec<String>,
    pub fp: i32,
    pub stamina: i32,
    pub max_stamina: i32,
    pub fort_type: FortType,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub modifiers: Vec<FortModifier>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortDeployPokemonResponse {
    pub result: ResultStatus,
    pub fort_details: Option<FortDetailsResponse>,
    pub pokemon_data: Option<PokemonData>,
    pub gym_state: Option<GymState>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortRecallPokemonResponse {
    pub result: ResultStatus,
    pub fort_details: Option<FortDetailsResponse>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddFortModifierResponse {
    pub result: ResultStatus,
    pub fort_details: Option<FortDetailsResponse>,
}

// ---------------------------------------------------------------------------
// Responses: encounters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterResponse {
    pub wild_pokemon: Option<WildPokemon>,
    pub status: EncounterStatus,
    pub capture_probability: Option<CaptureProbability>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchPokemonResponse {
    pub status: CatchStatus,
    pub miss_percent: f64,
    pub captured_pokemon_id: u64,
    pub capture_award: Option<CaptureAward>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetIncensePokemonResponse {
    pub result: ResultStatus,
    pub pokemon_id: PokemonSpecies,
    pub latitude: f64,
    pub longitude: f64,
    pub encounter_location: String,
    pub encounter_id: u64,
    pub disappear_timestamp_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncenseEncounterResponse {
    pub result: ResultStatus,
    pub pokemon_data: Option<PokemonData>,
    pub capture_probability: Option<CaptureProbability>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskEncounterResponse {
    pub result: ResultStatus,
    pub pokemon_data: Option<PokemonData>,
    pub capture_probability: Option<CaptureProbability>,
}

// ---------------------------------------------------------------------------
// Responses: pokemon management
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleasePokemonResponse {
    pub result: ResultStatus,
    pub candy_awarded: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolvePokemonResponse {
    pub result: ResultStatus,
    pub evolved_pokemon_data: Option<PokemonData>,
    pub experience_awarded: i32,
    pub candy_awarded: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradePokemonResponse {
    pub result: ResultStatus,
    pub upgraded_pokemon: Option<PokemonData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetFavoritePokemonResponse {
    pub result: ResultStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NicknamePokemonResponse {
    pub result: ResultStatus,
}

// ---------------------------------------------------------------------------
// Responses: items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseItemPotionResponse {
    pub result: ResultStatus,
    pub stamina: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseItemCaptureResponse {
    pub success: bool,
    pub item_capture_mult: f64,
    pub item_flee_mult: f64,
    pub stop_movement: bool,
    pub stop_attack: bool,
    pub target_max: bool,
    pub target_slow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseItemReviveResponse {
    pub result: ResultStatus,
    pub stamina: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecycleInventoryItemResponse {
    pub result: ResultStatus,
    pub new_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseItemXpBoostResponse {
    pub result: ResultStatus,
    pub applied_items: Vec<AppliedItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseItemEggIncubatorResponse {
    pub result: ResultStatus,
    pub egg_incubator: Option<EggIncubator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseIncenseResponse {
    pub result: ResultStatus,
    pub applied_incense: Option<AppliedItem>,
}

// ---------------------------------------------------------------------------
// Responses: gyms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseItemGymResponse {
    pub result: ResultStatus,
    pub updated_gp: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetGymDetailsResponse {
    pub gym_state: Option<GymState>,
    pub name: String,
    pub urls: Vec<String>,
    pub result: ResultStatus,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartGymBattleResponse {
    pub result: ResultStatus,
    pub battle_start_timestamp_ms: i64,
    pub battle_end_timestamp_ms: i64,
    pub battle_id: String,
    pub defender: Option<BattleParticipant>,
    pub battle_log: Option<BattleLog>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackGymResponse {
    pub result: ResultStatus,
    pub battle_log: Option<BattleLog>,
    pub battle_id: String,
    pub active_defender: Option<PokemonData>,
    pub active_attacker: Option<PokemonData>,
}

// ---------------------------------------------------------------------------
// Responses: diagnostics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoResponse {
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SfidaActionLogResponse {
    pub result: ResultStatus,
    pub log_entries: Vec<ActionLogEntry>,
}

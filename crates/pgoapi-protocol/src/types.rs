//! Value types shared by request and response messages.
//!
//! Enumerations serialize with their protocol names in
//! `SCREAMING_SNAKE_CASE` (`"POKE_BALL"`, `"BLUE"` style), and numeric
//! protocol codes are available through `code()` where callers need them
//! for logging or lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A latitude/longitude pair in degrees, range-checked at construction.
///
/// Builders that place the player or a map object take `Coordinates`
/// instead of bare floats, so every outgoing position is known to be
/// finite and in range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    ///
    /// # Errors
    /// Returns [`ProtocolError::InvalidCoordinates`] when either value is
    /// not finite, latitude is outside `[-90, 90]`, or longitude is
    /// outside `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ProtocolError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(ProtocolError::InvalidCoordinates { latitude, longitude });
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Pokédex number of a species (1 = Bulbasaur, 25 = Pikachu, ...).
///
/// Distinct from the `u64` instance ids the server assigns to individual
/// caught pokemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonSpecies(pub u32);

impl fmt::Display for PokemonSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Inventory item identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemId {
    #[default]
    Unknown = 0,
    PokeBall = 1,
    GreatBall = 2,
    UltraBall = 3,
    MasterBall = 4,
    Potion = 101,
    SuperPotion = 102,
    HyperPotion = 103,
    MaxPotion = 104,
    Revive = 201,
    MaxRevive = 202,
    LuckyEgg = 301,
    IncenseOrdinary = 401,
    IncenseSpicy = 402,
    IncenseCool = 403,
    IncenseFloral = 404,
    TroyDisk = 501,
    XAttack = 602,
    XDefense = 603,
    XMiracle = 604,
    RazzBerry = 701,
    BlukBerry = 702,
    NanabBerry = 703,
    WeparBerry = 704,
    PinapBerry = 705,
    SpecialCamera = 801,
    IncubatorBasicUnlimited = 901,
    IncubatorBasic = 902,
    PokemonStorageUpgrade = 1001,
    ItemStorageUpgrade = 1002,
}

impl ItemId {
    /// The numeric protocol code of this item.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Returns `true` for the items that can be thrown at a pokemon.
    pub fn is_ball(self) -> bool {
        matches!(
            self,
            Self::PokeBall | Self::GreatBall | Self::UltraBall | Self::MasterBall
        )
    }
}

// ---------------------------------------------------------------------------
// Player-facing enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamColor {
    #[default]
    Neutral = 0,
    Blue = 1,
    Red = 2,
    Yellow = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[default]
    Male = 0,
    Female = 1,
}

/// Onboarding steps a new account walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TutorialState {
    #[default]
    LegalScreen = 0,
    AvatarSelection = 1,
    AccountCreation = 2,
    PokemonCapture = 3,
    NameSelection = 4,
    PokemonBerry = 5,
    UseItem = 6,
    FirstTimeExperienceComplete = 7,
    PokestopTutorial = 8,
    GymTutorial = 9,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeType {
    #[default]
    TravelKm = 0,
    PokedexEntries = 1,
    CaptureTotal = 2,
    DefeatedFort = 3,
    EvolvedTotal = 4,
    HatchedTotal = 5,
    EncounteredTotal = 6,
    PokestopsVisited = 7,
    UniquePokestops = 8,
    PokeballThrown = 9,
    BigMagikarp = 10,
    DeployedTotal = 11,
    BattleAttackWon = 12,
    BattleTrainingWon = 13,
    BattleDefendWon = 14,
    PrestigeRaised = 15,
    PrestigeDropped = 16,
    SmallRattata = 35,
    Pikachu = 36,
}

/// Client platform reported in config and asset requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Unset = 0,
    #[default]
    Ios = 1,
    Android = 2,
    Osx = 3,
    Windows = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FortType {
    #[default]
    Gym = 0,
    Checkpoint = 1,
}

// ---------------------------------------------------------------------------
// Composite request values
// ---------------------------------------------------------------------------

/// Device description sent with remote-config and asset-digest requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    pub platform: Platform,
    pub device_model: String,
    pub device_manufacturer: String,
    pub locale: String,
    pub app_version: u32,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            platform: Platform::Ios,
            device_model: "iPhone8,1".to_string(),
            device_manufacturer: "Apple".to_string(),
            locale: "en_US".to_string(),
            app_version: 3300,
        }
    }
}

/// Avatar appearance. Every slot is an index into the server's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerAvatar {
    pub skin: i32,
    pub hair: i32,
    pub shirt: i32,
    pub pants: i32,
    pub hat: i32,
    pub shoes: i32,
    pub gender: Gender,
    pub eyes: i32,
    pub backpack: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub send_marketing_emails: bool,
    pub send_push_notifications: bool,
}

/// Parameters of one ball throw.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchAttempt {
    pub encounter_id: u64,
    pub spawn_point_id: String,
    pub pokeball: ItemId,
    pub hit_pokemon: bool,
    pub normalized_reticle_size: f64,
    pub normalized_hit_position: f64,
    pub spin_modifier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleActionType {
    #[default]
    Unset = 0,
    Attack = 1,
    Dodge = 2,
    SpecialAttack = 3,
    SwapPokemon = 4,
    Faint = 5,
    PlayerJoin = 6,
    PlayerQuit = 7,
    Victory = 8,
    Defeat = 9,
    TimedOut = 10,
}

/// One step of a gym battle, sent by the client and echoed in battle logs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleAction {
    pub action_type: BattleActionType,
    pub action_start_ms: i64,
    pub duration_ms: i32,
    pub energy_delta: i32,
    pub attacker_index: i32,
    pub target_index: i32,
    pub active_pokemon_id: u64,
    pub damage_windows_start_timestamp_ms: i64,
    pub damage_windows_end_timestamp_ms: i64,
}

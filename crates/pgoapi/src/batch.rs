//! Building a batch of typed requests.
//!
//! A [`RequestBatch`] is filled by builder calls, one per operation, and
//! then handed to a [`BatchDispatcher`](crate::BatchDispatcher) which
//! sends it in a single exchange. Each builder:
//!
//! 1. builds the request message from its arguments, reading the player's
//!    position from the batch's [`LocationState`] when the operation needs
//!    it,
//! 2. encodes the message with the batch codec,
//! 3. appends a [`RequestEntry`] whose decoder is the one registered for
//!    that message's response type.
//!
//! Builders never touch the network and return `&mut Self`, so calls chain:
//!
//! ```rust
//! # use std::sync::Arc;
//! # use pgoapi::prelude::*;
//! # fn main() -> Result<(), ProtocolError> {
//! let location: Arc<dyn LocationState> = Arc::new(SharedLocation::default());
//! let mut batch = RequestBatch::new(JsonCodec, location);
//! batch
//!     .get_player()?
//!     .get_inventory(None)?
//!     .get_map_objects(None, None)?;
//! assert_eq!(batch.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use pgoapi_geo::compute_window;
use pgoapi_protocol::*;
use pgoapi_session::LocationState;

use crate::config::DEFAULT_SETTINGS_HASH;

// ---------------------------------------------------------------------------
// RequestEntry
// ---------------------------------------------------------------------------

/// One encoded request plus the decoder for its response.
///
/// The kind, payload and decoder are fixed together at construction from
/// the same [`ApiRequest`] type and cannot be changed afterwards.
pub struct RequestEntry<C> {
    kind: RequestKind,
    payload: Vec<u8>,
    decoder: Decoder<C>,
}

impl<C: Codec> RequestEntry<C> {
    /// Encodes `message` and binds the decoder for `M::Response`.
    pub fn new<M: ApiRequest>(codec: &C, message: &M) -> Result<Self, ProtocolError> {
        Ok(Self {
            kind: M::KIND,
            payload: codec.encode(message)?,
            decoder: decoder_for::<C, M>(),
        })
    }

    /// Parses the response segment answering this entry.
    pub fn decode(&self, codec: &C, segment: &[u8]) -> Result<DecodedResponse, ProtocolError> {
        (self.decoder)(codec, segment)
    }
}

impl<C> RequestEntry<C> {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// The encoded request message.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl<C> Clone for RequestEntry<C> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            payload: self.payload.clone(),
            decoder: self.decoder,
        }
    }
}

// The decoder is a function of the kind, so kind and payload decide
// equality.
impl<C> PartialEq for RequestEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.payload == other.payload
    }
}

impl<C> Eq for RequestEntry<C> {}

impl<C> fmt::Debug for RequestEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestEntry")
            .field("kind", &self.kind)
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RequestBatch
// ---------------------------------------------------------------------------

/// An ordered, append-only list of requests sent in one exchange.
///
/// Response `i` of the exchange is decoded with entry `i`'s decoder, so
/// the order of builder calls is the order of the results.
pub struct RequestBatch<C: Codec = JsonCodec> {
    entries: Vec<RequestEntry<C>>,
    codec: C,
    location: Arc<dyn LocationState>,
    settings_hash: String,
    device: DeviceInfo,
}

impl<C: Codec> RequestBatch<C> {
    /// Creates an empty batch that encodes with `codec` and reads the
    /// player's position from `location`.
    pub fn new(codec: C, location: Arc<dyn LocationState>) -> Self {
        Self {
            entries: Vec::new(),
            codec,
            location,
            settings_hash: DEFAULT_SETTINGS_HASH.to_string(),
            device: DeviceInfo::default(),
        }
    }

    /// Replaces the hash sent by [`download_settings`](Self::download_settings).
    pub fn with_settings_hash(mut self, hash: impl Into<String>) -> Self {
        self.settings_hash = hash.into();
        self
    }

    pub fn settings_hash(&self) -> &str {
        &self.settings_hash
    }

    /// Replaces the device described by the remote-config and
    /// asset-digest builders when they are not given one.
    pub fn with_device(mut self, device: DeviceInfo) -> Self {
        self.device = device;
        self
    }

    pub fn device(&self) -> &DeviceInfo {
        &self.device
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RequestEntry<C>] {
        &self.entries
    }

    /// Kinds of all entries, in batch order.
    pub fn kinds(&self) -> Vec<RequestKind> {
        self.entries.iter().map(RequestEntry::kind).collect()
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Appends any catalog message.
    ///
    /// The typed builders below all go through here.
    pub fn push<M: ApiRequest>(&mut self, message: &M) -> Result<&mut Self, ProtocolError> {
        let entry = RequestEntry::new(&self.codec, message)?;
        tracing::debug!(
            kind = %entry.kind(),
            bytes = entry.payload().len(),
            position = self.entries.len(),
            "request enqueued"
        );
        self.entries.push(entry);
        Ok(self)
    }

    pub(crate) fn into_parts(self) -> (Vec<RequestEntry<C>>, C) {
        (self.entries, self.codec)
    }

    /// Current player position, read once per builder call.
    fn player_position(&self) -> (f64, f64) {
        self.location.current_coordinates()
    }

    // -----------------------------------------------------------------------
    // Composite
    // -----------------------------------------------------------------------

    /// Appends the requests the official client sends right after login:
    /// `GetPlayer`, `GetHatchedEggs`, `GetInventory`, `CheckAwardedBadges`
    /// and `DownloadSettings`, in that order.
    pub fn simulate_session_start(&mut self) -> Result<&mut Self, ProtocolError> {
        self.get_player()?
            .get_hatched_eggs()?
            .get_inventory(None)?
            .check_awarded_badges()?
            .download_settings()
    }

    // -----------------------------------------------------------------------
    // Player and settings
    // -----------------------------------------------------------------------

    /// Reports the player's current position.
    pub fn update_player(&mut self) -> Result<&mut Self, ProtocolError> {
        let (latitude, longitude) = self.player_position();
        self.push(&PlayerUpdateMessage {
            latitude,
            longitude,
        })
    }

    pub fn get_player(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&GetPlayerMessage {})
    }

    /// Requests inventory changes since `last_timestamp_ms` (everything
    /// when `None`).
    pub fn get_inventory(
        &mut self,
        last_timestamp_ms: Option<i64>,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&GetInventoryMessage {
            last_timestamp_ms: last_timestamp_ms.unwrap_or(0),
        })
    }

    /// Downloads game settings, sending the batch's settings hash.
    pub fn download_settings(&mut self) -> Result<&mut Self, ProtocolError> {
        let hash = self.settings_hash.clone();
        self.push(&DownloadSettingsMessage { hash })
    }

    pub fn download_item_templates(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&DownloadItemTemplatesMessage {})
    }

    /// Asks for the remote config version for `device`, or for the
    /// batch's own device when `None`.
    pub fn download_remote_config_version(
        &mut self,
        device: Option<&DeviceInfo>,
    ) -> Result<&mut Self, ProtocolError> {
        let device = device.unwrap_or(&self.device).clone();
        self.push(&DownloadRemoteConfigVersionMessage {
            platform: device.platform,
            device_manufacturer: device.device_manufacturer,
            device_model: device.device_model,
            locale: device.locale,
            app_version: device.app_version,
        })
    }

    pub fn get_player_profile(
        &mut self,
        player_name: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&GetPlayerProfileMessage {
            player_name: player_name.into(),
        })
    }

    pub fn get_hatched_eggs(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&GetHatchedEggsMessage {})
    }

    pub fn level_up_rewards(&mut self, level: i32) -> Result<&mut Self, ProtocolError> {
        self.push(&LevelUpRewardsMessage { level })
    }

    pub fn check_awarded_badges(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&CheckAwardedBadgesMessage {})
    }

    pub fn collect_daily_bonus(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&CollectDailyBonusMessage {})
    }

    pub fn collect_daily_defender_bonus(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&CollectDailyDefenderBonusMessage {})
    }

    pub fn equip_badge(&mut self, badge_type: BadgeType) -> Result<&mut Self, ProtocolError> {
        self.push(&EquipBadgeMessage { badge_type })
    }

    pub fn set_contact_settings(
        &mut self,
        contact_settings: ContactSettings,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&SetContactSettingsMessage { contact_settings })
    }

    /// Asks for the asset digest for `device`, or for the batch's own
    /// device when `None`.
    pub fn get_asset_digest(
        &mut self,
        device: Option<&DeviceInfo>,
    ) -> Result<&mut Self, ProtocolError> {
        let device = device.unwrap_or(&self.device).clone();
        self.push(&GetAssetDigestMessage {
            platform: device.platform,
            device_manufacturer: device.device_manufacturer,
            device_model: device.device_model,
            locale: device.locale,
            app_version: device.app_version,
        })
    }

    pub fn get_download_urls(&mut self, asset_id: Vec<String>) -> Result<&mut Self, ProtocolError> {
        self.push(&GetDownloadUrlsMessage { asset_id })
    }

    // -----------------------------------------------------------------------
    // Account creation and tutorial
    // -----------------------------------------------------------------------

    pub fn encounter_tutorial_complete(
        &mut self,
        pokemon_id: PokemonSpecies,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&EncounterTutorialCompleteMessage { pokemon_id })
    }

    pub fn get_suggested_codenames(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&GetSuggestedCodenamesMessage {})
    }

    pub fn check_codename_available(
        &mut self,
        codename: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&CheckCodenameAvailableMessage {
            codename: codename.into(),
        })
    }

    pub fn claim_codename(&mut self, codename: impl Into<String>) -> Result<&mut Self, ProtocolError> {
        self.push(&ClaimCodenameMessage {
            codename: codename.into(),
        })
    }

    pub fn set_avatar(&mut self, player_avatar: PlayerAvatar) -> Result<&mut Self, ProtocolError> {
        self.push(&SetAvatarMessage { player_avatar })
    }

    pub fn set_player_team(&mut self, team: TeamColor) -> Result<&mut Self, ProtocolError> {
        self.push(&SetPlayerTeamMessage { team })
    }

    pub fn mark_tutorial_complete(
        &mut self,
        tutorials_completed: Vec<TutorialState>,
        send_marketing_emails: bool,
        send_push_notifications: bool,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&MarkTutorialCompleteMessage {
            tutorials_completed,
            send_marketing_emails,
            send_push_notifications,
        })
    }

    // -----------------------------------------------------------------------
    // Map and forts
    // -----------------------------------------------------------------------

    /// Requests map objects for a set of cells.
    ///
    /// - `cell_ids`: used as given, or the 21-cell window around the
    ///   player when `None`.
    /// - `since_timestamp_ms`: used as given, or one `0` per cell when
    ///   `None`.
    ///
    /// # Errors
    /// [`ProtocolError::InvalidMessage`] when explicit timestamps do not
    /// line up one-to-one with the cells.
    pub fn get_map_objects(
        &mut self,
        cell_ids: Option<Vec<u64>>,
        since_timestamp_ms: Option<Vec<i64>>,
    ) -> Result<&mut Self, ProtocolError> {
        let (latitude, longitude) = self.player_position();
        let cell_id = match cell_ids {
            Some(ids) => ids,
            None => compute_window(latitude, longitude).into_vec(),
        };
        let since_timestamp_ms = match since_timestamp_ms {
            Some(stamps) if stamps.len() != cell_id.len() => {
                return Err(ProtocolError::InvalidMessage(format!(
                    "{} timestamps for {} map cells",
                    stamps.len(),
                    cell_id.len()
                )));
            }
            Some(stamps) => stamps,
            None => vec![0; cell_id.len()],
        };

        self.push(&GetMapObjectsMessage {
            cell_id,
            since_timestamp_ms,
            latitude,
            longitude,
        })
    }

    /// Spins the fort at `fort` from the player's current position.
    pub fn fort_search(
        &mut self,
        fort_id: impl Into<String>,
        fort: Coordinates,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&FortSearchMessage {
            fort_id: fort_id.into(),
            player_latitude,
            player_longitude,
            fort_latitude: fort.latitude(),
            fort_longitude: fort.longitude(),
        })
    }

    pub fn fort_details(
        &mut self,
        fort_id: impl Into<String>,
        fort: Coordinates,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&FortDetailsMessage {
            fort_id: fort_id.into(),
            latitude: fort.latitude(),
            longitude: fort.longitude(),
        })
    }

    pub fn fort_deploy_pokemon(
        &mut self,
        fort_id: impl Into<String>,
        pokemon_id: u64,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&FortDeployPokemonMessage {
            fort_id: fort_id.into(),
            pokemon_id,
            player_latitude,
            player_longitude,
        })
    }

    pub fn fort_recall_pokemon(
        &mut self,
        fort_id: impl Into<String>,
        pokemon_id: u64,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&FortRecallPokemonMessage {
            fort_id: fort_id.into(),
            pokemon_id,
            player_latitude,
            player_longitude,
        })
    }

    /// Places a modifier (a lure) on a fort.
    pub fn add_fort_modifier(
        &mut self,
        modifier_type: ItemId,
        fort_id: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&AddFortModifierMessage {
            modifier_type,
            fort_id: fort_id.into(),
            player_latitude,
            player_longitude,
        })
    }

    // -----------------------------------------------------------------------
    // Encounters
    // -----------------------------------------------------------------------

    pub fn encounter_pokemon(
        &mut self,
        encounter_id: u64,
        spawn_point_id: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&EncounterMessage {
            encounter_id,
            spawn_point_id: spawn_point_id.into(),
            player_latitude,
            player_longitude,
        })
    }

    pub fn catch_pokemon(&mut self, attempt: CatchAttempt) -> Result<&mut Self, ProtocolError> {
        self.push(&CatchPokemonMessage {
            encounter_id: attempt.encounter_id,
            pokeball: attempt.pokeball,
            normalized_reticle_size: attempt.normalized_reticle_size,
            spawn_point_id: attempt.spawn_point_id,
            hit_pokemon: attempt.hit_pokemon,
            spin_modifier: attempt.spin_modifier,
            normalized_hit_position: attempt.normalized_hit_position,
        })
    }

    pub fn get_incense_pokemon(&mut self) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&GetIncensePokemonMessage {
            player_latitude,
            player_longitude,
        })
    }

    pub fn incense_encounter(
        &mut self,
        encounter_id: i64,
        encounter_location: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&IncenseEncounterMessage {
            encounter_id,
            encounter_location: encounter_location.into(),
        })
    }

    /// Encounters the Pokémon attracted by a lure on `fort_id`.
    pub fn disk_encounter(
        &mut self,
        encounter_id: u64,
        fort_id: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&DiskEncounterMessage {
            encounter_id,
            fort_id: fort_id.into(),
            player_latitude,
            player_longitude,
        })
    }

    // -----------------------------------------------------------------------
    // Pokemon management
    // -----------------------------------------------------------------------

    pub fn release_pokemon(&mut self, pokemon_id: u64) -> Result<&mut Self, ProtocolError> {
        self.push(&ReleasePokemonMessage { pokemon_id })
    }

    pub fn evolve_pokemon(&mut self, pokemon_id: u64) -> Result<&mut Self, ProtocolError> {
        self.push(&EvolvePokemonMessage { pokemon_id })
    }

    pub fn upgrade_pokemon(&mut self, pokemon_id: u64) -> Result<&mut Self, ProtocolError> {
        self.push(&UpgradePokemonMessage { pokemon_id })
    }

    pub fn set_favorite_pokemon(
        &mut self,
        pokemon_id: u64,
        is_favorite: bool,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&SetFavoritePokemonMessage {
            pokemon_id,
            is_favorite,
        })
    }

    pub fn nickname_pokemon(
        &mut self,
        pokemon_id: u64,
        nickname: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&NicknamePokemonMessage {
            pokemon_id,
            nickname: nickname.into(),
        })
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    pub fn use_item_potion(
        &mut self,
        item_id: ItemId,
        pokemon_id: u64,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&UseItemPotionMessage {
            item_id,
            pokemon_id,
        })
    }

    /// Uses a berry on the Pokémon in an active encounter.
    pub fn use_item_capture(
        &mut self,
        item_id: ItemId,
        encounter_id: u64,
        spawn_point_id: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&UseItemCaptureMessage {
            item_id,
            encounter_id,
            spawn_point_id: spawn_point_id.into(),
        })
    }

    pub fn use_item_revive(
        &mut self,
        item_id: ItemId,
        pokemon_id: u64,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&UseItemReviveMessage {
            item_id,
            pokemon_id,
        })
    }

    pub fn recycle_inventory_item(
        &mut self,
        item_id: ItemId,
        count: i32,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&RecycleInventoryItemMessage { item_id, count })
    }

    pub fn use_item_xp_boost(&mut self, item_id: ItemId) -> Result<&mut Self, ProtocolError> {
        self.push(&UseItemXpBoostMessage { item_id })
    }

    /// Puts the egg `pokemon_id` into incubator `item_id`.
    pub fn use_item_egg_incubator(
        &mut self,
        item_id: impl Into<String>,
        pokemon_id: u64,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&UseItemEggIncubatorMessage {
            item_id: item_id.into(),
            pokemon_id,
        })
    }

    pub fn use_incense(&mut self, incense_type: ItemId) -> Result<&mut Self, ProtocolError> {
        self.push(&UseIncenseMessage { incense_type })
    }

    // -----------------------------------------------------------------------
    // Gyms
    // -----------------------------------------------------------------------

    pub fn use_item_gym(
        &mut self,
        item_id: ItemId,
        gym_id: impl Into<String>,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&UseItemGymMessage {
            item_id,
            gym_id: gym_id.into(),
            player_latitude,
            player_longitude,
        })
    }

    pub fn get_gym_details(
        &mut self,
        gym_id: impl Into<String>,
        gym: Coordinates,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&GetGymDetailsMessage {
            gym_id: gym_id.into(),
            player_latitude,
            player_longitude,
            gym_latitude: gym.latitude(),
            gym_longitude: gym.longitude(),
        })
    }

    pub fn start_gym_battle(
        &mut self,
        gym_id: impl Into<String>,
        attacking_pokemon_ids: Vec<u64>,
        defending_pokemon_id: u64,
    ) -> Result<&mut Self, ProtocolError> {
        self.push(&StartGymBattleMessage {
            gym_id: gym_id.into(),
            attacking_pokemon_ids,
            defending_pokemon_id,
        })
    }

    /// Reports the attacker's actions since `last_retrieved_action`.
    pub fn attack_gym(
        &mut self,
        gym_id: impl Into<String>,
        battle_id: impl Into<String>,
        attack_actions: Vec<BattleAction>,
        last_retrieved_action: BattleAction,
    ) -> Result<&mut Self, ProtocolError> {
        let (player_latitude, player_longitude) = self.player_position();
        self.push(&AttackGymMessage {
            gym_id: gym_id.into(),
            battle_id: battle_id.into(),
            attack_actions,
            last_retrieved_action,
            player_latitude,
            player_longitude,
        })
    }

    // -----------------------------------------------------------------------
    // Diagnostics
    // -----------------------------------------------------------------------

    pub fn echo(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&EchoMessage {})
    }

    pub fn sfida_action_log(&mut self) -> Result<&mut Self, ProtocolError> {
        self.push(&SfidaActionLogMessage {})
    }
}

impl<C: Codec> fmt::Debug for RequestBatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBatch")
            .field("kinds", &self.kinds())
            .field("settings_hash", &self.settings_hash)
            .field("device", &self.device.device_model)
            .finish_non_exhaustive()
    }
}

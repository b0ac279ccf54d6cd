//! Integration tests for batch builders: payload construction, map-query
//! rules and coverage of the catalog.

use std::collections::HashSet;
use std::sync::Arc;

use pgoapi::geo::WINDOW_LEN;
use pgoapi::prelude::*;
use pgoapi::protocol::{
    BadgeType, BattleAction, CatchAttempt, ContactSettings, FortDeployPokemonMessage,
    GetGymDetailsMessage, GetMapObjectsMessage, ItemId, PlayerAvatar, PokemonSpecies, TeamColor,
    TutorialState,
};

// =========================================================================
// Helpers
// =========================================================================

fn location_at(latitude: f64, longitude: f64) -> Arc<SharedLocation> {
    Arc::new(SharedLocation::new(Coordinates::new(latitude, longitude).unwrap()))
}

fn batch_with(location: &Arc<SharedLocation>) -> RequestBatch {
    RequestBatch::new(JsonCodec, location.clone())
}

fn map_query(entry: &RequestEntry<JsonCodec>) -> GetMapObjectsMessage {
    assert_eq!(entry.kind(), RequestKind::GetMapObjects);
    JsonCodec.decode(entry.payload()).unwrap()
}

// =========================================================================
// Map query
// =========================================================================

#[test]
fn test_map_query_without_cells_uses_window_at_current_location() {
    let location = location_at(51.5074, -0.1278);
    let mut batch = batch_with(&location);

    batch.get_map_objects(None, None).unwrap();

    let message = map_query(&batch.entries()[0]);
    assert_eq!(message.cell_id, compute_window(51.5074, -0.1278).into_vec());
    assert_eq!(message.cell_id.len(), WINDOW_LEN);
    assert_eq!(message.since_timestamp_ms, vec![0; WINDOW_LEN]);
}

#[test]
fn test_map_query_with_cells_gets_one_zero_timestamp_per_cell() {
    let mut batch = batch_with(&location_at(0.0, 0.0));

    batch.get_map_objects(Some(vec![11, 22, 33]), None).unwrap();

    let message = map_query(&batch.entries()[0]);
    assert_eq!(message.cell_id, vec![11, 22, 33]);
    assert_eq!(message.since_timestamp_ms, vec![0, 0, 0]);
}

#[test]
fn test_map_query_with_cells_and_timestamps_uses_both_verbatim() {
    let mut batch = batch_with(&location_at(0.0, 0.0));

    batch
        .get_map_objects(Some(vec![11, 22]), Some(vec![1_000, 2_000]))
        .unwrap();

    let message = map_query(&batch.entries()[0]);
    assert_eq!(message.cell_id, vec![11, 22]);
    assert_eq!(message.since_timestamp_ms, vec![1_000, 2_000]);
}

#[test]
fn test_map_query_with_mismatched_timestamps_is_rejected() {
    let mut batch = batch_with(&location_at(0.0, 0.0));

    let err = batch
        .get_map_objects(Some(vec![11, 22]), Some(vec![1_000]))
        .unwrap_err();

    assert!(matches!(err, ProtocolError::InvalidMessage(_)));
    assert!(batch.is_empty());
}

#[test]
fn test_map_query_follows_player_between_calls() {
    let location = location_at(10.0, 10.0);
    let mut batch = batch_with(&location);

    batch.get_map_objects(None, None).unwrap();
    location.set(-10.0, -10.0).unwrap();
    batch.get_map_objects(None, None).unwrap();

    let first = map_query(&batch.entries()[0]);
    let second = map_query(&batch.entries()[1]);
    assert_eq!(first.cell_id, compute_window(10.0, 10.0).into_vec());
    assert_eq!(second.cell_id, compute_window(-10.0, -10.0).into_vec());
    assert_eq!((second.latitude, second.longitude), (-10.0, -10.0));
}

// =========================================================================
// Location-aware builders
// =========================================================================

#[test]
fn test_gym_details_carries_player_and_gym_positions() {
    let mut batch = batch_with(&location_at(48.8566, 2.3522));

    batch
        .get_gym_details("gym-7", Coordinates::new(48.857, 2.353).unwrap())
        .unwrap();

    let message: GetGymDetailsMessage = JsonCodec.decode(batch.entries()[0].payload()).unwrap();
    assert_eq!((message.player_latitude, message.player_longitude), (48.8566, 2.3522));
    assert_eq!((message.gym_latitude, message.gym_longitude), (48.857, 2.353));
}

#[test]
fn test_fort_deploy_reads_location_at_call_time() {
    let location = location_at(1.0, 1.0);
    let mut batch = batch_with(&location);

    location.set(2.0, 3.0).unwrap();
    batch.fort_deploy_pokemon("fort", 42).unwrap();

    let message: FortDeployPokemonMessage =
        JsonCodec.decode(batch.entries()[0].payload()).unwrap();
    assert_eq!((message.player_latitude, message.player_longitude), (2.0, 3.0));
    assert_eq!(message.pokemon_id, 42);
}

// =========================================================================
// Composite and repetition
// =========================================================================

#[test]
fn test_simulate_session_start_appends_five_in_order() {
    let mut batch = batch_with(&location_at(0.0, 0.0));

    batch.simulate_session_start().unwrap();

    assert_eq!(
        batch.kinds(),
        vec![
            RequestKind::GetPlayer,
            RequestKind::GetHatchedEggs,
            RequestKind::GetInventory,
            RequestKind::CheckAwardedBadges,
            RequestKind::DownloadSettings,
        ]
    );
}

#[test]
fn test_simulate_session_start_appends_after_existing_entries() {
    let mut batch = batch_with(&location_at(0.0, 0.0));

    batch.echo().unwrap().simulate_session_start().unwrap();

    assert_eq!(batch.len(), 6);
    assert_eq!(batch.kinds()[0], RequestKind::Echo);
    assert_eq!(batch.kinds()[5], RequestKind::DownloadSettings);
}

#[test]
fn test_builder_twice_yields_equal_independent_entries() {
    let mut batch = batch_with(&location_at(0.0, 0.0));

    batch.release_pokemon(9).unwrap().release_pokemon(9).unwrap();

    let entries = batch.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], entries[1]);
    assert_ne!(entries[0].payload().as_ptr(), entries[1].payload().as_ptr());
}

// =========================================================================
// Catalog coverage
// =========================================================================

#[test]
fn test_builders_cover_every_kind_exactly_once() {
    let device = DeviceInfo::default();
    let here = Coordinates::new(37.7749, -122.4194).unwrap();
    let mut batch = batch_with(&location_at(37.7749, -122.4194));

    batch
        .update_player().unwrap()
        .get_player().unwrap()
        .get_inventory(Some(1)).unwrap()
        .download_settings().unwrap()
        .download_item_templates().unwrap()
        .download_remote_config_version(Some(&device)).unwrap()
        .fort_search("f", here).unwrap()
        .encounter_pokemon(1, "sp").unwrap()
        .catch_pokemon(CatchAttempt {
            encounter_id: 1,
            spawn_point_id: "sp".into(),
            pokeball: ItemId::PokeBall,
            hit_pokemon: true,
            normalized_reticle_size: 1.9,
            normalized_hit_position: 1.0,
            spin_modifier: 1.0,
        }).unwrap()
        .fort_details("f", here).unwrap()
        .get_map_objects(None, None).unwrap()
        .fort_deploy_pokemon("f", 1).unwrap()
        .fort_recall_pokemon("f", 1).unwrap()
        .release_pokemon(1).unwrap()
        .use_item_potion(ItemId::Potion, 1).unwrap()
        .use_item_capture(ItemId::RazzBerry, 1, "sp").unwrap()
        .use_item_revive(ItemId::Revive, 1).unwrap()
        .get_player_profile("ash").unwrap()
        .evolve_pokemon(1).unwrap()
        .get_hatched_eggs().unwrap()
        .encounter_tutorial_complete(PokemonSpecies(1)).unwrap()
        .level_up_rewards(5).unwrap()
        .check_awarded_badges().unwrap()
        .use_item_gym(ItemId::XAttack, "g").unwrap()
        .get_gym_details("g", here).unwrap()
        .start_gym_battle("g", vec![1, 2], 3).unwrap()
        .attack_gym("g", "b", vec![BattleAction::default()], BattleAction::default()).unwrap()
        .recycle_inventory_item(ItemId::Potion, 3).unwrap()
        .collect_daily_bonus().unwrap()
        .use_item_xp_boost(ItemId::LuckyEgg).unwrap()
        .use_item_egg_incubator("inc", 1).unwrap()
        .use_incense(ItemId::IncenseOrdinary).unwrap()
        .get_incense_pokemon().unwrap()
        .incense_encounter(1, "loc").unwrap()
        .add_fort_modifier(ItemId::TroyDisk, "f").unwrap()
        .disk_encounter(1, "f").unwrap()
        .collect_daily_defender_bonus().unwrap()
        .upgrade_pokemon(1).unwrap()
        .set_favorite_pokemon(1, true).unwrap()
        .nickname_pokemon(1, "sparky").unwrap()
        .equip_badge(BadgeType::TravelKm).unwrap()
        .set_contact_settings(ContactSettings::default()).unwrap()
        .get_asset_digest(None).unwrap()
        .get_download_urls(vec!["asset".into()]).unwrap()
        .get_suggested_codenames().unwrap()
        .check_codename_available("ash").unwrap()
        .claim_codename("ash").unwrap()
        .set_avatar(PlayerAvatar::default()).unwrap()
        .set_player_team(TeamColor::Blue).unwrap()
        .mark_tutorial_complete(vec![TutorialState::LegalScreen], false, false).unwrap()
        .echo().unwrap()
        .sfida_action_log().unwrap();

    let kinds: HashSet<RequestKind> = batch.kinds().into_iter().collect();
    let all: HashSet<RequestKind> = RequestKind::ALL.iter().copied().collect();
    assert_eq!(batch.len(), RequestKind::ALL.len());
    assert_eq!(kinds, all);

    // Every entry's decoder accepts the empty response of its own kind.
    for entry in batch.entries() {
        let segment = DecodedResponse::empty(entry.kind()).encode(&JsonCodec).unwrap();
        let decoded = entry.decode(batch.codec(), &segment).unwrap();
        assert_eq!(decoded.kind(), entry.kind());
    }
}

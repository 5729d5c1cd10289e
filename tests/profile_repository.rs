use std::collections::HashSet;

use netprofile::registry::{MemoryRegistry, MemoryValue};
use netprofile::{NetworkProfile, ProfileRepository};
use uuid::Uuid;

const BASE: &str = "SOFTWARE\\Microsoft\\Windows NT\\CurrentVersion\\NetworkList\\Profiles";
const HOME: Uuid = Uuid::from_u128(0x11111111_1111_1111_1111_111111111111);
const OFFICE: Uuid = Uuid::from_u128(0x22222222_2222_2222_2222_222222222222);
const CAFE: Uuid = Uuid::from_u128(0x33333333_3333_3333_3333_333333333333);

fn key(id: Uuid) -> String {
    format!("{BASE}\\{}", id.braced())
}

fn seeded() -> MemoryRegistry {
    let mut registry = MemoryRegistry::new();
    registry
        .set_string(&key(OFFICE), "ProfileName", "Office")
        .set_value(&key(OFFICE), "Category", MemoryValue::Dword(1))
        .set_string(&key(HOME), "ProfileName", "Home Wi-Fi")
        .set_string(&key(CAFE), "ProfileName", "Cafe Guest");
    registry
}

#[test]
fn looks_up_stored_profile() {
    let repository = ProfileRepository::new(seeded());

    let profile = repository.lookup(HOME);
    assert_eq!(profile.id(), HOME);
    assert_eq!(profile.name(), Some("Home Wi-Fi"));
    assert_eq!(profile.to_string(), "Home Wi-Fi");
}

#[test]
fn missing_profile_is_empty() {
    let repository = ProfileRepository::new(seeded());

    let profile = repository.lookup(Uuid::from_u128(0xdead_beef));
    assert!(profile.is_empty());
    assert!(profile.id().is_nil());
    assert_eq!(profile.name(), None);
}

#[test]
fn missing_name_value_is_empty() {
    let mut registry = seeded();
    let bare = Uuid::from_u128(0x44444444_4444_4444_4444_444444444444);
    registry.create_key(&key(bare));

    assert!(ProfileRepository::new(registry).lookup(bare).is_empty());
}

#[test]
fn non_string_name_is_empty() {
    let mut registry = seeded();
    registry.set_value(&key(HOME), "ProfileName", MemoryValue::Dword(7));

    assert!(ProfileRepository::new(registry).lookup(HOME).is_empty());
}

#[test]
fn denied_profile_is_empty() {
    let mut registry = seeded();
    registry.deny(&key(HOME));

    assert!(ProfileRepository::new(registry).lookup(HOME).is_empty());
}

#[test]
fn repeated_lookups_agree() {
    let repository = ProfileRepository::new(seeded());

    let first = repository.lookup(OFFICE);
    let second = repository.lookup(OFFICE);
    assert_eq!(first, second);
    assert_eq!(first.name(), second.name());
}

#[test]
fn lists_one_profile_per_key_in_store_order() {
    let profiles = ProfileRepository::new(seeded()).list_all();

    let ids: Vec<Uuid> = profiles.iter().map(NetworkProfile::id).collect();
    assert_eq!(ids, [OFFICE, HOME, CAFE]);
    assert_eq!(profiles[1].name(), Some("Home Wi-Fi"));
}

#[test]
fn unreadable_child_keeps_its_slot() {
    let mut registry = seeded();
    registry.create_key(&format!("{BASE}\\not-a-guid"));
    registry.deny(&key(HOME));

    let profiles = ProfileRepository::new(registry).list_all();
    assert_eq!(profiles.len(), 4);
    assert!(profiles[1].is_empty());
    assert!(profiles[3].is_empty());
    assert_eq!(profiles[0], OFFICE);
    assert_eq!(profiles[2], CAFE);
}

#[test]
fn empty_base_path_lists_nothing() {
    let mut registry = MemoryRegistry::new();
    registry.create_key(BASE);

    assert!(ProfileRepository::new(registry).list_all().is_empty());
}

#[test]
fn absent_base_path_lists_nothing() {
    let repository = ProfileRepository::new(seeded()).with_base_path("SOFTWARE\\Missing");
    assert!(repository.list_all().is_empty());
}

#[test]
fn denied_base_path_lists_nothing() {
    let mut registry = seeded();
    registry.deny(BASE);

    assert!(ProfileRepository::new(registry).list_all().is_empty());
}

#[test]
fn custom_base_path_is_honoured() {
    let mut registry = MemoryRegistry::new();
    registry.set_string(
        &format!("Fake\\Profiles\\{}", HOME.braced()),
        "ProfileName",
        "Test",
    );

    let repository = ProfileRepository::new(&registry).with_base_path("Fake\\Profiles");
    assert_eq!(repository.lookup(HOME).name(), Some("Test"));
    assert_eq!(repository.list_all(), [NetworkProfile::new(HOME, "Test")]);
}

#[test]
fn finds_by_name_ignoring_case() {
    let repository = ProfileRepository::new(seeded());

    let found = repository.find_by_name("  home wi-fi ").expect("profile should match");
    assert_eq!(found, HOME);
    assert!(repository.find_by_name("Library").is_none());
}

#[test]
fn listed_profiles_collect_into_sets_by_id() {
    let mut profiles = ProfileRepository::new(seeded()).list_all();
    profiles.push(NetworkProfile::new(HOME, "Renamed"));

    let unique: HashSet<_> = profiles.into_iter().collect();
    assert_eq!(unique.len(), 3);
}

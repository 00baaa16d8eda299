//! Integration tests for catalog loading and queries.
//!
//! These run against the catalog document shipped with the crate, so they
//! also pin down the contract the external rule engine relies on.

use smellcatalog::{CatalogStore, Category, Platform, EMBEDDED_DOCUMENT};
use std::collections::HashSet;
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn embedded() -> CatalogStore {
    CatalogStore::embedded().expect("embedded catalog must load")
}

// ============================================================================
// Embedded catalog invariants
// ============================================================================

#[test]
fn test_embedded_catalog_is_nonempty() {
    let store = embedded();
    assert!(store.len() >= 20, "catalog unexpectedly small: {}", store.len());
}

#[test]
fn test_names_unique_within_platform_and_category() {
    let store = embedded();
    let mut seen = HashSet::new();
    for entry in store.all() {
        assert!(
            seen.insert((entry.platform, entry.category, entry.name.clone())),
            "duplicate entry: {}/{}/{}",
            entry.platform,
            entry.category,
            entry.name
        );
    }
}

#[test]
fn test_platform_listings_partition_all() {
    let store = embedded();
    let android = store.list_by_platform(Platform::Android);
    let ios = store.list_by_platform(Platform::Ios);

    assert_eq!(android.len() + ios.len(), store.all().len());
    assert!(android.iter().all(|e| e.platform == Platform::Android));
    assert!(ios.iter().all(|e| e.platform == Platform::Ios));
}

#[test]
fn test_ios_is_still_under_construction() {
    let store = embedded();
    assert!(store.list_by_platform(Platform::Ios).is_empty());
    assert!(store.categories(Platform::Ios).is_empty());
}

#[test]
fn test_fused_location_entry() {
    let store = embedded();
    let entry = store
        .find_by_name(Platform::Android, "Fused Location")
        .expect("Fused Location must be cataloged");

    assert_eq!(entry.category, Category::OptimizedApi);
    assert!(entry.description.contains("GPS"));
    assert!(entry.description.contains("Wi-Fi"));
}

#[test]
fn test_media_leak_entry() {
    let store = embedded();
    let entry = store
        .find_by_name(Platform::Android, "Media Leak")
        .expect("Media Leak must be cataloged");

    assert_eq!(entry.category, Category::Leakage);
    assert!(entry.description.contains("release()"));
}

#[test]
fn test_unknown_name_is_not_found_not_a_fault() {
    let store = embedded();
    assert!(store
        .find_by_name(Platform::Android, "Nonexistent Smell Name")
        .is_none());
}

#[test]
fn test_every_android_category_is_populated() {
    let store = embedded();
    for category in store.categories(Platform::Android) {
        assert!(
            !store.list_by_category(Platform::Android, category).is_empty(),
            "category {} listed but empty",
            category
        );
    }
}

#[test]
fn test_list_by_category_preserves_document_order() {
    let store = embedded();
    let leaks = store.list_by_category(Platform::Android, Category::Leakage);
    let names: Vec<_> = leaks.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Media Leak", "Sensor Leak", "Location Leak", "Camera Leak"]
    );
}

#[test]
fn test_double_load_is_deterministic() {
    let first = CatalogStore::from_document(EMBEDDED_DOCUMENT).expect("first load");
    let second = CatalogStore::from_document(EMBEDDED_DOCUMENT).expect("second load");
    assert_eq!(first.all(), second.all());
}

// ============================================================================
// Loading from files
// ============================================================================

#[test]
fn test_load_fixture_file() {
    let store =
        CatalogStore::from_file(&fixtures_path().join("mini_catalog.md")).expect("fixture loads");
    assert_eq!(store.len(), 3);
    assert!(store
        .find_by_name(Platform::Android, "Durable Wake Lock")
        .is_some());
}

#[test]
fn test_load_missing_file_fails() {
    let result = CatalogStore::from_file(&fixtures_path().join("does_not_exist.md"));
    assert!(result.is_err());
}

#[test]
fn test_load_malformed_fixture_fails() {
    let result = CatalogStore::from_file(&fixtures_path().join("broken_catalog.md"));
    assert!(result.is_err(), "malformed document must not load");
}

//! Integration tests for activity catalogs feeding the directory

use mergington_common::testing::TempDir;
use mergington_core::ActivityDirectory;
use mergington_domain::{CapacityPolicy, DirectoryConfig, MergingtonError};
use mergington_infra::{catalog_for, BuiltinCatalog};

#[test]
fn test_builtin_catalog_builds_directory() {
    let directory = ActivityDirectory::from_catalog(&BuiltinCatalog, CapacityPolicy::Advisory)
        .expect("built-in catalog should be valid");

    assert_eq!(directory.len(), 9);
    let listing = directory.list();
    assert!(listing.contains_key("Chess Club"));
    assert!(listing.contains_key("Programming Class"));
    assert_eq!(listing["Chess Club"].max_participants, 12);
    assert_eq!(directory.participant_count(), 18);
}

#[test]
fn test_seed_file_builds_directory() {
    let dir = TempDir::new("catalog-seed").expect("Failed to create temp dir");
    let seed = dir
        .write_file(
            "activities.toml",
            r#"
[activities."Robotics Club"]
description = "Build and program robots"
schedule = "Mondays, 4:00 PM - 5:30 PM"
max_participants = 1
"#,
        )
        .expect("Failed to write seed");

    let config = DirectoryConfig { capacity: CapacityPolicy::Enforced, seed_file: Some(seed) };
    let catalog = catalog_for(&config);
    let directory = ActivityDirectory::from_catalog(catalog.as_ref(), config.capacity)
        .expect("seed file should be valid");

    assert_eq!(directory.len(), 1);
    directory.register("Robotics Club", "lucas@mergington.edu").unwrap();
    assert!(matches!(
        directory.register("Robotics Club", "mia@mergington.edu"),
        Err(MergingtonError::ActivityFull { .. })
    ));
}

#[test]
fn test_seed_file_with_duplicate_participant_rejected() {
    let dir = TempDir::new("catalog-dup").expect("Failed to create temp dir");
    let seed = dir
        .write_file(
            "activities.json",
            r#"{"activities": {"Art Club": {
                "description": "Paint",
                "schedule": "Thursdays",
                "max_participants": 5,
                "participants": ["amelia@mergington.edu", "amelia@mergington.edu"]
            }}}"#,
        )
        .expect("Failed to write seed");

    let config = DirectoryConfig { seed_file: Some(seed), ..DirectoryConfig::default() };
    let err = ActivityDirectory::from_catalog(catalog_for(&config).as_ref(), config.capacity)
        .unwrap_err();

    assert!(matches!(err, MergingtonError::Config(msg) if msg.contains("more than once")));
}

fn write_crowded_seed(dir: &TempDir, participants: &str) -> std::path::PathBuf {
    dir.write_file(
        "activities.toml",
        &format!(
            "[activities.\"Math Club\"]\n\
             description = \"Solve problems\"\n\
             schedule = \"Tuesdays\"\n\
             max_participants = 1\n\
             participants = {participants}\n"
        ),
    )
    .expect("Failed to write seed")
}

#[test]
fn test_seed_file_with_blank_participant_rejected() {
    let dir = TempDir::new("catalog-blank").expect("Failed to create temp dir");
    let seed = write_crowded_seed(&dir, r#"["a@x", "b@x", ""]"#);

    for capacity in [CapacityPolicy::Advisory, CapacityPolicy::Enforced] {
        let config = DirectoryConfig { capacity, seed_file: Some(seed.clone()) };
        let err = ActivityDirectory::from_catalog(catalog_for(&config).as_ref(), capacity)
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"), "unexpected error: {err}");
    }
}

#[test]
fn test_seed_file_over_capacity_rejected_only_when_enforced() {
    let dir = TempDir::new("catalog-crowded").expect("Failed to create temp dir");
    let seed = write_crowded_seed(&dir, r#"["a@x", "b@x"]"#);

    let advisory = DirectoryConfig { capacity: CapacityPolicy::Advisory, seed_file: Some(seed) };
    let directory =
        ActivityDirectory::from_catalog(catalog_for(&advisory).as_ref(), advisory.capacity)
            .expect("advisory capacity admits crowded seeds");
    assert_eq!(directory.participant_count(), 2);

    let enforced = DirectoryConfig { capacity: CapacityPolicy::Enforced, ..advisory };
    let err = ActivityDirectory::from_catalog(catalog_for(&enforced).as_ref(), enforced.capacity)
        .unwrap_err();
    assert!(matches!(err, MergingtonError::Config(ref msg) if msg.contains("allows 1")));
}

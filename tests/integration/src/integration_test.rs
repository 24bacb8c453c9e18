//! End-to-end tests for the catalog pipeline
//!
//! These exercise the complete flow: config loading -> catalog merge ->
//! index construction -> queries.

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use toolbox_registry::{Error as RegistryError, ToolCategory, ValidationError};
use toolbox_search::{Error, ToolboxConfig};

/// Set up a directory holding a config file and two extra catalogs
fn setup_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(
        temp.path().join("toolbox.toml"),
        r#"
[search]
threshold = 0.3

[search.weights]
description = 0.5

[catalog]
extra = ["catalogs/team.toml", "catalogs/labs.json"]
"#,
    )
    .unwrap();

    let catalogs = temp.path().join("catalogs");
    fs::create_dir(&catalogs).unwrap();
    fs::write(
        catalogs.join("team.toml"),
        r#"
[[tools]]
id = "pomodoro"
name = "Pomodoro Timer"
description = "Work in focused blocks with short breaks"
tags = ["timer", "focus"]
category = "other"

[[tools]]
id = "ascii-table"
name = "ASCII Table"
description = "Reference chart of ASCII codes"
tags = ["ascii", "chart"]
category = "developer"
"#,
    )
    .unwrap();
    fs::write(
        catalogs.join("labs.json"),
        r#"{"tools": [{"id": "morse-encoder", "name": "Morse Encoder", "description": "Translate text to Morse code", "tags": ["morse"], "category": "encoder", "path": "/tools/morse-encoder"}]}"#,
    )
    .unwrap();

    temp
}

#[test]
fn test_config_to_search() {
    let temp = setup_workspace();

    let config = ToolboxConfig::discover(temp.path()).unwrap();
    assert_eq!(config.search.weights.description, 0.5);
    assert_eq!(config.catalog.extra.len(), 2);

    let catalog = config.build_catalog().unwrap();
    let registry = catalog.registry();
    assert_eq!(registry.len(), toolbox_registry::BUILTIN_COUNT + 3);

    // Extras follow the built-ins in file order
    let ids = registry.ids();
    assert_eq!(
        &ids[ids.len() - 3..],
        &["pomodoro", "ascii-table", "morse-encoder"]
    );

    // Extras are searchable, typo-tolerant, and sorted into the blank listing
    assert_eq!(
        catalog.search_tools("pomodro").first().map(|t| t.id()),
        Some("pomodoro")
    );
    let listing: Vec<_> = catalog.search_tools("").iter().map(|t| t.id()).collect();
    assert_eq!(listing.first(), Some(&"ascii-table"));

    // Category filters include extras in registry order
    let encoders: Vec<_> = catalog
        .get_tools_by_category(ToolCategory::Encoder)
        .iter()
        .map(|t| t.id())
        .collect();
    assert_eq!(encoders.last(), Some(&"morse-encoder"));
}

#[test]
fn test_conflicting_extra_catalog_is_rejected() {
    let temp = setup_workspace();
    fs::write(
        temp.path().join("catalogs/labs.json"),
        r#"{"tools": [{"id": "json-formatter", "name": "Another JSON Formatter", "description": "Shadow", "tags": ["json"], "category": "formatter"}]}"#,
    )
    .unwrap();

    let config = ToolboxConfig::discover(temp.path()).unwrap();
    let err = config.build_catalog().unwrap_err();
    match err {
        Error::Registry(RegistryError::InvalidRegistry(errors)) => {
            assert!(errors.contains(&ValidationError::DuplicateId {
                id: "json-formatter".into()
            }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_path_in_catalog_is_rejected() {
    let temp = setup_workspace();
    fs::write(
        temp.path().join("catalogs/labs.json"),
        r#"{"tools": [{"id": "morse-encoder", "name": "Morse Encoder", "description": "d", "tags": ["morse"], "category": "encoder", "path": "/morse"}]}"#,
    )
    .unwrap();

    let config = ToolboxConfig::discover(temp.path()).unwrap();
    let err = config.build_registry().unwrap_err();
    assert!(err.to_string().contains("expected '/tools/morse-encoder'"));
}

#[test]
fn test_yaml_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("toolbox.yaml");
    fs::write(&path, "search:\n  threshold: 0.0\n").unwrap();

    let catalog = ToolboxConfig::load(&path).unwrap().build_catalog().unwrap();
    assert!(catalog.search_tools("pasword").is_empty());
    assert!(!catalog.search_tools("password").is_empty());
}

#[test]
fn test_scored_hits_serialize() {
    let catalog = ToolboxConfig::default().build_catalog().unwrap();
    let hits = catalog.search_scored("text encoder");
    let value = serde_json::to_value(&hits).unwrap();

    assert_eq!(value[0]["tool"]["id"], "text-encoder");
    assert_eq!(value[0]["tool"]["category"], "encoder");
    assert!(value[0]["matched"].as_array().unwrap().contains(&"name".into()));
}

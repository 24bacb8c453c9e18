//! Integration tests for the query interface

use rstest::rstest;
use toolbox_registry::{ToolCategory, ToolDescriptor, ToolRegistry};
use toolbox_search::{SearchOptions, ToolCatalog};

#[test]
fn test_get_tool_by_id_text_encoder() {
    let catalog = ToolCatalog::builtin();
    let tool = catalog.get_tool_by_id("text-encoder").unwrap();
    assert_eq!(tool.name(), "Text Encoder");
    assert_eq!(tool.category(), ToolCategory::Encoder);
}

#[test]
fn test_get_tool_by_id_for_every_descriptor() {
    let catalog = ToolCatalog::builtin();
    for tool in catalog.registry().iter() {
        assert_eq!(catalog.get_tool_by_id(tool.id()), Some(tool));
    }
}

#[rstest]
#[case("")]
#[case("unknown-tool")]
#[case("TEXT-ENCODER")]
#[case("/tools/text-encoder")]
fn test_get_tool_by_id_absent(#[case] id: &str) {
    let catalog = ToolCatalog::builtin();
    assert!(catalog.get_tool_by_id(id).is_none());
}

#[test]
fn test_get_tools_by_category_preserves_registry_order() {
    let catalog = ToolCatalog::builtin();
    for category in ToolCategory::ALL {
        let members = catalog.get_tools_by_category(category);
        assert!(members.iter().all(|t| t.category() == category));

        let positions: Vec<usize> = members
            .iter()
            .map(|m| {
                catalog
                    .registry()
                    .iter()
                    .position(|t| t.id() == m.id())
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[rstest]
#[case("ide")]
#[case("encoders")]
#[case("42")]
fn test_unknown_category_string_is_empty(#[case] category: &str) {
    let catalog = ToolCatalog::builtin();
    assert!(catalog.get_tools_by_category_str(category).is_empty());
}

#[test]
fn test_empty_category_in_custom_registry() {
    let registry = ToolRegistry::try_from_descriptors(vec![
        ToolDescriptor::new("notes", "Notes", "Keep notes", ToolCategory::Other).with_tags(["notes"]),
    ])
    .unwrap();
    let catalog = ToolCatalog::new(registry, SearchOptions::default()).unwrap();

    assert!(catalog.get_tools_by_category(ToolCategory::Security).is_empty());
    assert_eq!(catalog.get_tools_by_category(ToolCategory::Other).len(), 1);
    assert_eq!(catalog.search_tools("").len(), 1);
}

#[test]
fn test_empty_registry_is_total() {
    let catalog = ToolCatalog::new(ToolRegistry::default(), SearchOptions::default()).unwrap();
    assert!(catalog.search_tools("").is_empty());
    assert!(catalog.search_tools("json").is_empty());
    assert!(catalog.get_tool_by_id("json-formatter").is_none());
    assert!(catalog.suggest_ids("json", 3).is_empty());
}

#[test]
fn test_custom_options_flow_into_index() {
    let options = SearchOptions {
        threshold: 0.0,
        ..Default::default()
    };
    let catalog = ToolCatalog::new(ToolRegistry::with_builtins(), options).unwrap();

    // no typo tolerance
    assert!(catalog.search_tools("pasword").is_empty());
    assert!(!catalog.search_tools("password").is_empty());
}

#[test]
fn test_all_zero_weights_are_rejected() {
    let mut options = SearchOptions::default();
    options.weights.name = 0.0;
    options.weights.id = 0.0;
    options.weights.tags = 0.0;
    options.weights.description = 0.0;
    options.weights.category = 0.0;

    let err = ToolCatalog::new(ToolRegistry::with_builtins(), options).unwrap_err();
    assert!(matches!(err, toolbox_search::Error::InvalidOptions { .. }));
}

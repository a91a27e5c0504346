//! JSON definition documents and registry configuration.

use pretty_assertions::assert_eq;
use swan_tests::prelude::*;

#[test]
fn test_shapes_document_defines_every_entry() {
    let mut registry = Registry::new();
    let count = registry.load_document(&fixture("shapes.json")).unwrap();

    assert_eq!(count, 5);
    for name in ["Named", "Positioned", "Movable", "Shape", "Labelled"] {
        assert!(registry.contains(name), "missing {}", name);
    }
    assert_eq!(registry.get("Movable").unwrap().mixins, vec!["Positioned"]);
    assert_eq!(registry.get("Labelled").unwrap().mixins, vec!["Named"]);
}

#[test]
fn test_shapes_document_membership() {
    let registry = shapes_registry();
    let square = Value::from(square());

    assert!(registry.is(&square, ["Shape", "Labelled"]).unwrap());

    let unnamed = object! { "x" => 1, "y" => 2, "move" => move_by(), "sides" => 3 };
    assert!(!registry.is(&Value::from(unnamed), ["Shape"]).unwrap());
}

#[test]
fn test_document_into_default_registry() {
    swan::reset();
    let count = swan::load_document(&fixture("shapes.json")).unwrap();

    assert_eq!(count, 5);
    assert!(square().is_a(["Shape"]).unwrap());
}

#[test]
fn test_malformed_json_is_invalid_document() {
    let mut registry = Registry::new();
    let err = registry.load_document("{ not json").unwrap_err();
    assert!(matches!(err, ArchetypeError::InvalidDocument(_)));
}

#[test]
fn test_document_stops_at_first_bad_entry() {
    // GIVEN a document whose second entry is malformed
    let mut registry = Registry::new();
    let json = r#"{ "First": { "a": "string" }, "Second": 12, "Third": ["First"] }"#;

    // WHEN loading it
    let err = registry.load_document(json).unwrap_err();

    // THEN earlier entries stay defined and later ones are skipped
    assert!(matches!(err, ArchetypeError::InvalidDefinition { ref archetype } if archetype == "Second"));
    assert!(registry.contains("First"));
    assert!(!registry.contains("Third"));
}

#[test]
fn test_config_sets_mode_and_archetypes() {
    let config = RegistryConfig::from_json(
        r#"{
            "projection": "accessor",
            "archetypes": { "Flag": { "modified": "boolean" } }
        }"#,
    )
    .unwrap();
    let registry = Registry::with_config(config).unwrap();

    assert_eq!(registry.projection_mode(), ProjectionMode::Accessor);
    let obj = object! { "modified" => false };
    let proxy = registry
        .project(&Value::from(obj.clone()), ["Flag"])
        .unwrap()
        .unwrap();
    proxy.set("modified", true);
    assert_eq!(obj.get("modified"), Value::from(true));
}

#[test]
fn test_config_fields_default() {
    let config = RegistryConfig::from_json("{}").unwrap();

    assert_eq!(config.projection, ProjectionMode::Copy);
    assert!(config.archetypes.is_empty());
}

#[test]
fn test_config_rejects_unknown_mode() {
    let err = RegistryConfig::from_json(r#"{ "projection": "ecma5" }"#).unwrap_err();
    assert!(matches!(err, ArchetypeError::InvalidDocument(_)));
}

#[test]
fn test_configure_default_registry() {
    swan::reset();
    let config = RegistryConfig::from_json(
        r#"{ "projection": "accessor_function", "archetypes": { "Flag": { "on": "boolean" } } }"#,
    )
    .unwrap();
    swan::configure(config).unwrap();

    assert_eq!(swan::projection_mode(), ProjectionMode::AccessorFunction);
    let proxy = object! { "on" => true }.project_as(["Flag"]).unwrap().unwrap();
    assert_eq!(proxy.call("on", &[]), Some(Value::from(true)));
}

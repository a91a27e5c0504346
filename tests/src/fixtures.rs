//! Sample values and definition documents.

use std::path::PathBuf;
use swan::{object, Function, Object, Registry, Value};

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Read a fixture file.
pub fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A registry with `shapes.json` loaded.
pub fn shapes_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .load_document(&fixture("shapes.json"))
        .expect("shapes.json defines valid archetypes");
    registry
}

/// Method setting `modified = true` on its receiver.
pub fn flag_modified() -> Function {
    Function::named("func", |this, _| {
        if let Some(obj) = this.as_object() {
            obj.set("modified", true);
        }
        Value::Undefined
    })
}

/// Method moving its receiver by `(dx, dy)`.
pub fn move_by() -> Function {
    Function::named("move", |this, args| {
        if let Some(obj) = this.as_object() {
            let dx = args.first().and_then(Value::as_number).unwrap_or(0.0);
            let dy = args.get(1).and_then(Value::as_number).unwrap_or(0.0);
            let x = obj.get("x").as_number().unwrap_or(0.0);
            let y = obj.get("y").as_number().unwrap_or(0.0);
            obj.set("x", x + dx);
            obj.set("y", y + dy);
        }
        Value::Undefined
    })
}

/// A square satisfying every archetype in `shapes.json`.
pub fn square() -> Object {
    object! {
        "name" => "square",
        "x" => 0,
        "y" => 0,
        "sides" => 4,
        "move" => move_by(),
        "area" => 16,
    }
}

/// One sample of each primitive kind, with the primitive name it matches.
pub fn primitive_samples() -> Vec<(&'static str, Value)> {
    vec![
        ("string", Value::from("my string")),
        ("number", Value::from(10.0)),
        ("object", Value::from(object!())),
        ("boolean", Value::from(true)),
        ("array", Value::from(vec![Value::from("string"), Value::from(10)])),
        ("function", Value::from(Function::new(|_, _| Value::Undefined))),
        ("undefined", Value::from(object!()).get("undefinedProperty")),
    ]
}

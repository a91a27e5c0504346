//! Property tests for classification and reset.

use proptest::prelude::*;
use swan_tests::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        ".*".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(|entries| {
                let obj = Object::new();
                for (key, value) in entries {
                    obj.set(key, value);
                }
                Value::from(obj)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_any_matches_everything(value in value()) {
        let registry = Registry::new();
        prop_assert!(registry.is(&value, ["any"]).unwrap());
    }

    #[test]
    fn prop_primitive_follows_type_of(value in value()) {
        let registry = Registry::new();
        for primitive in Primitive::ALL {
            let expected = match primitive {
                Primitive::Any => true,
                Primitive::Array => value.is_array(),
                other => value.type_of() == other.name(),
            };
            prop_assert_eq!(registry.is(&value, [primitive.name()]).unwrap(), expected);
        }
    }

    #[test]
    fn prop_empty_name_list_matches(value in value()) {
        let registry = Registry::new();
        let names: [&str; 0] = [];
        prop_assert!(registry.is(&value, names).unwrap());
    }

    #[test]
    fn prop_projection_keys_are_signature_keys(keys in prop::collection::btree_set("[a-z]{1,6}", 1..6)) {
        // Every key holds a string, so the value matches and projects all of them.
        let mut registry = Registry::new();
        let signature: Signature = keys.iter().map(|key| (key.clone(), "string")).collect();
        registry.define("Strings", signature).unwrap();

        let obj = Object::new();
        for key in &keys {
            obj.set(key.clone(), key.clone());
        }
        obj.set("EXTRA", 1);

        let proxy = registry.project(&Value::from(obj), ["Strings"]).unwrap().unwrap();
        prop_assert_eq!(proxy.keys(), keys.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_reset_is_idempotent(names in prop::collection::hash_set("[A-Z][a-z]{0,8}", 0..8), times in 1usize..4) {
        let mut registry = Registry::new();
        let seeded = registry.len();
        for name in &names {
            registry.define(name, Signature::new()).unwrap();
        }
        prop_assert_eq!(registry.len(), seeded + names.len());

        for _ in 0..times {
            registry.reset();
            prop_assert_eq!(registry.len(), seeded);
        }
        for name in &names {
            prop_assert!(!registry.contains(name));
        }
    }
}

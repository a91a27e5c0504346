//! Method syntax through `ArchetypeExt`.

use swan_tests::prelude::*;

#[test]
fn test_is_a_on_values_and_objects() {
    swan::reset();
    swan::define("Named", Signature::new().with("name", "string")).unwrap();
    let obj = object! { "name" => "swan" };

    assert!(obj.is_a(["Named"]).unwrap());
    assert!(Value::from(obj).is_a(["Named", "object"]).unwrap());
    assert!(Value::from("text").is_a(["string"]).unwrap());
    assert!(!Value::from(1).is_a(["string"]).unwrap());
}

#[test]
fn test_project_as_then_check_proxy() {
    swan::reset();
    swan::define("Named", Signature::new().with("name", "string")).unwrap();
    swan::define("Aged", Signature::new().with("age", "number")).unwrap();
    let obj = object! { "name" => "swan", "age" => 3 };

    let proxy = obj.project_as(["Named"]).unwrap().unwrap();

    assert!(proxy.is_a(["Named"]).unwrap());
    assert!(!proxy.is_a(["Aged"]).unwrap());
}

#[test]
fn test_expect_archetype() {
    swan::reset();
    swan::define("Named", Signature::new().with("name", "string")).unwrap();

    assert!(object! { "name" => "swan" }.expect_archetype("Named", None).is_ok());
    let err = Value::from(object!())
        .expect_archetype("Named", Some("needs a name"))
        .unwrap_err();
    assert_eq!(err.to_string(), "needs a name");
}

#[test]
fn test_methods_follow_default_registry_reset() {
    swan::reset();
    swan::define("Named", Signature::new().with("name", "string")).unwrap();
    let obj = object! { "name" => "swan" };
    assert!(obj.is_a(["Named"]).unwrap());

    swan::reset();
    assert!(matches!(
        obj.is_a(["Named"]),
        Err(ArchetypeError::UnknownArchetype(_))
    ));
}

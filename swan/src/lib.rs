//! Swan
//!
//! Runtime structural typing. Register named archetypes, test values against
//! them and derive proxies that expose only the members an archetype
//! declares.
//!
//! Most programs create a [`Registry`] and pass it around. For quick use
//! there is a default registry per thread behind the free functions in this
//! crate, and [`ArchetypeExt`] adds method syntax on top of it.
//!
//! ```
//! use swan::{object, ArchetypeExt, Signature, Value};
//!
//! swan::define("Named", Signature::new().with("name", "string"))?;
//!
//! let value = Value::from(object! { "name" => "swan", "secret" => 42 });
//! assert!(swan::is(&value, ["Named"])?);
//!
//! let proxy = value.project_as(["Named"])?.expect("value is Named");
//! assert!(proxy.contains_key("name"));
//! assert!(!proxy.contains_key("secret"));
//! # Ok::<(), swan::ArchetypeError>(())
//! ```

mod ext;
mod global;

pub use ext::ArchetypeExt;
pub use global::{
    configure, define, define_value, expect, is, load_document, project, projection_mode, reset,
    set_projection_mode, with_registry,
};

pub use swan_core::{object, Array, Function, Object, Property, Value};
pub use swan_registry::*;

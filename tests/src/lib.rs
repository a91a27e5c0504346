//! Shared fixtures for Swan integration tests.

pub mod fixtures;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use swan::{
        object, ArchetypeError, ArchetypeExt, Definition, DefinitionObject, Evaluator, Function,
        Object, Primitive, ProjectionMode, Property, Registry, RegistryConfig, Signature,
        SignatureEntry, Value,
    };
}

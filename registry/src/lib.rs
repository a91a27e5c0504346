//! Swan Registry
//!
//! Named archetypes: structural contracts made of property signatures and
//! composable mixins. The registry tests values against archetypes and builds
//! proxies exposing only the members an archetype declares.

mod builder;
mod definition;
mod document;
mod error;
mod evaluator;
mod proxy;
mod registry;
mod subject;
mod types;

pub use builder::ArchetypeBuilder;
pub use definition::{Definition, DefinitionObject, RESERVED_KEYS};
pub use document::RegistryConfig;
pub use error::{ArchetypeError, ArchetypeResult};
pub use evaluator::Evaluator;
pub use proxy::{ProjectionMode, Proxy};
pub use registry::Registry;
pub use subject::Subject;
pub use types::*;

//! Definition documents and registry configuration.
//!
//! A definition document is a JSON object mapping archetype names to
//! definitions, in the same shapes `Registry::define_value` accepts:
//!
//! ```json
//! {
//!   "Named":  { "name": "string" },
//!   "Tagged": { "mixins": ["Named"], "signature": { "tags": ["object", "array"] } },
//!   "Entity": ["Named", "Tagged"]
//! }
//! ```
//!
//! Entries are defined in document order.

use crate::{ArchetypeResult, ProjectionMode, Registry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swan_core::Value;
use tracing::debug;

/// Registry configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// How proxies expose non-function members.
    pub projection: ProjectionMode,
    /// Archetypes to define, in order.
    pub archetypes: IndexMap<String, serde_json::Value>,
}

impl RegistryConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> ArchetypeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Registry {
    /// Create a seeded registry and apply a configuration to it.
    pub fn with_config(config: RegistryConfig) -> ArchetypeResult<Self> {
        let mut registry = Registry::new();
        registry.configure(config)?;
        Ok(registry)
    }

    /// Apply a configuration: set the projection mode and define its archetypes.
    pub fn configure(&mut self, config: RegistryConfig) -> ArchetypeResult<()> {
        self.set_projection_mode(config.projection);
        self.define_all(config.archetypes)?;
        Ok(())
    }

    /// Define every archetype in a JSON definition document. Returns how many
    /// archetypes were defined.
    ///
    /// Stops at the first failing entry; entries before it stay defined.
    pub fn load_document(&mut self, json: &str) -> ArchetypeResult<usize> {
        let document: IndexMap<String, serde_json::Value> = serde_json::from_str(json)?;
        self.define_all(document)
    }

    fn define_all(&mut self, archetypes: IndexMap<String, serde_json::Value>) -> ArchetypeResult<usize> {
        let count = archetypes.len();
        for (name, definition) in archetypes {
            self.define_value(&name, &Value::from(definition))?;
        }
        debug!(count, "loaded archetype definitions");
        Ok(count)
    }
}

//! Archetype registration.

use crate::{
    ArchetypeError, ArchetypeResult, Archetype, Definition, DefinitionObject, Evaluator, Registry,
    Signature, SignatureEntry,
};
use swan_core::Value;
use tracing::debug;

impl Registry {
    /// Register an archetype.
    ///
    /// Fails with `DuplicateArchetype` if the name is taken and with
    /// `InvalidArgument` if it is empty. Mixin and signature names are not
    /// resolved here; they must exist by the time the archetype is used.
    pub fn define(&mut self, name: &str, definition: impl Into<Definition>) -> ArchetypeResult<()> {
        self.check_name(name)?;
        self.register(name, definition.into())
    }

    /// Register an archetype described by a host value (a list of mixin
    /// names, an evaluator function, a shorthand signature map or a
    /// definition object).
    pub fn define_value(&mut self, name: &str, definition: &Value) -> ArchetypeResult<()> {
        self.check_name(name)?;
        let definition = Definition::from_value(name, definition)?;
        self.register(name, definition)
    }

    /// Start building an archetype fluently.
    pub fn archetype(&mut self, name: impl Into<String>) -> ArchetypeBuilder<'_> {
        ArchetypeBuilder {
            registry: self,
            name: name.into(),
            mixins: Vec::new(),
            signature: Signature::new(),
            evaluator: None,
        }
    }

    fn check_name(&self, name: &str) -> ArchetypeResult<()> {
        if self.contains(name) {
            return Err(ArchetypeError::DuplicateArchetype(name.to_string()));
        }
        if name.trim().is_empty() {
            return Err(ArchetypeError::InvalidArgument(
                "archetype name must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }

    fn register(&mut self, name: &str, definition: Definition) -> ArchetypeResult<()> {
        let normalized = definition.normalize(name)?;
        debug!(
            archetype = name,
            mixins = normalized.mixins.len(),
            properties = normalized.signature.len(),
            compiled = normalized.evaluator.is_compiled(),
            "defined archetype"
        );
        self.insert(Archetype {
            name: name.to_string(),
            mixins: normalized.mixins,
            signature: normalized.signature,
            evaluator: normalized.evaluator,
        });
        Ok(())
    }
}

/// Builder for an archetype definition.
pub struct ArchetypeBuilder<'a> {
    registry: &'a mut Registry,
    name: String,
    mixins: Vec<String>,
    signature: Signature,
    evaluator: Option<Evaluator>,
}

impl<'a> ArchetypeBuilder<'a> {
    /// Compose another archetype into this one.
    pub fn mixin(mut self, name: impl Into<String>) -> Self {
        self.mixins.push(name.into());
        self
    }

    /// Require a property to satisfy one archetype.
    pub fn prop(mut self, property: impl Into<String>, archetype: impl Into<String>) -> Self {
        self.signature
            .insert(property, SignatureEntry::One(archetype.into()));
        self
    }

    /// Require a property to satisfy every listed archetype.
    pub fn prop_all<I, S>(mut self, property: impl Into<String>, archetypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = archetypes.into_iter().map(Into::into).collect();
        self.signature.insert(property, SignatureEntry::All(names));
        self
    }

    /// Use custom logic instead of a compiled evaluator.
    pub fn evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Finish building this archetype.
    pub fn done(self) -> ArchetypeResult<()> {
        let definition = DefinitionObject {
            mixins: Some(self.mixins),
            signature: Some(self.signature),
            evaluator: self.evaluator,
        };
        self.registry.define(&self.name, definition)
    }
}

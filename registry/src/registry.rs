//! The Registry - archetype lookup and membership tests.

use crate::{
    ArchetypeError, ArchetypeResult, Archetype, Evaluator, Primitive, ProjectionMode, Signature,
    Subject,
};
use std::cell::RefCell;
use std::collections::HashMap;
use swan_core::Value;
use tracing::{debug, trace};

/// A store of named archetypes.
///
/// Archetypes are added with [`Registry::define`] and are immutable until
/// [`Registry::reset`]. Every registry starts seeded with the primitive
/// archetypes.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Archetype definitions by name.
    archetypes: HashMap<String, Archetype>,
    /// How the proxy builder exposes non-function members.
    projection: ProjectionMode,
    /// Evaluations in progress, outermost first.
    active: RefCell<Vec<(String, Value)>>,
}

impl Registry {
    /// Create a registry holding only the primitive archetypes.
    pub fn new() -> Self {
        let mut registry = Self {
            archetypes: HashMap::new(),
            projection: ProjectionMode::default(),
            active: RefCell::new(Vec::new()),
        };
        registry.seed();
        registry
    }

    /// Discard every registration and re-seed the primitives.
    ///
    /// The projection mode is kept.
    pub fn reset(&mut self) {
        self.archetypes.clear();
        self.seed();
        debug!(primitives = Primitive::ALL.len(), "registry reset");
    }

    fn seed(&mut self) {
        for primitive in Primitive::ALL {
            self.insert(Archetype {
                name: primitive.name().to_string(),
                mixins: Vec::new(),
                signature: Signature::new(),
                evaluator: Evaluator::primitive(primitive),
            });
        }
    }

    pub(crate) fn insert(&mut self, archetype: Archetype) {
        self.archetypes.insert(archetype.name.clone(), archetype);
    }

    // ==================== Lookups ====================

    /// Get an archetype by name.
    pub fn get(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.get(name)
    }

    /// Get an archetype by name, failing if it is not registered.
    pub fn resolve(&self, name: &str) -> ArchetypeResult<&Archetype> {
        self.archetypes
            .get(name)
            .ok_or_else(|| ArchetypeError::UnknownArchetype(name.to_string()))
    }

    /// Check if an archetype is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.archetypes.contains_key(name)
    }

    /// Names of all registered archetypes, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.archetypes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of archetypes, primitives included.
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    // ==================== Projection Mode ====================

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection
    }

    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        self.projection = mode;
    }

    // ==================== Membership ====================

    /// Test a value against every named archetype.
    ///
    /// Names are checked in order and the test stops at the first archetype
    /// the value does not satisfy. An unregistered name fails with
    /// `UnknownArchetype`.
    pub fn is<I>(&self, value: &Value, names: I) -> ArchetypeResult<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            let archetype = self.resolve(name.as_ref())?;
            if !self.evaluate(archetype, value)? {
                trace!(archetype = %archetype.name, value = %value.type_of(), "no match");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Run an archetype's evaluator. Re-entering an archetype on the same
    /// value before it finished can never terminate, so it fails with
    /// `CyclicArchetype`; nested data of any depth is evaluated normally.
    fn evaluate(&self, archetype: &Archetype, value: &Value) -> ArchetypeResult<bool> {
        let _active = ActiveEvaluation::enter(self, archetype, value)?;
        archetype.evaluator.evaluate(value, self)
    }

    /// Fail with `ContractViolation` unless the value satisfies `archetype`.
    pub fn expect(&self, value: &Value, archetype: &str, message: Option<&str>) -> ArchetypeResult<()> {
        if self.is(value, [archetype])? {
            Ok(())
        } else {
            Err(ArchetypeError::contract_violation(archetype, message))
        }
    }

    /// Bind a value for repeated checks against this registry.
    pub fn subject<'r, 'v>(&'r self, value: &'v Value) -> Subject<'r, 'v> {
        Subject::new(self, value)
    }
}

/// Marks an evaluation as in progress until dropped.
struct ActiveEvaluation<'r> {
    registry: &'r Registry,
}

impl<'r> ActiveEvaluation<'r> {
    fn enter(registry: &'r Registry, archetype: &Archetype, value: &Value) -> ArchetypeResult<Self> {
        let mut active = registry.active.borrow_mut();
        let reentered = active
            .iter()
            .any(|(name, seen)| *name == archetype.name && seen.same_value(value));
        if reentered {
            trace!(archetype = %archetype.name, depth = active.len(), "cyclic evaluation");
            return Err(ArchetypeError::CyclicArchetype(archetype.name.clone()));
        }
        active.push((archetype.name.clone(), value.clone()));
        Ok(Self { registry })
    }
}

impl Drop for ActiveEvaluation<'_> {
    fn drop(&mut self) {
        self.registry.active.borrow_mut().pop();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

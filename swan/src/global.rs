//! The default registry.
//!
//! Each thread owns one default [`Registry`], seeded on first use. The free
//! functions here operate on it. Evaluators may call the read-only functions
//! (`is`, `project`, `expect`) while an evaluation is running; calling
//! `define`, `reset` or any other mutating function from inside an
//! evaluation panics.

use std::cell::RefCell;
use swan_core::Value;
use swan_registry::{
    ArchetypeResult, Definition, ProjectionMode, Proxy, Registry, RegistryConfig,
};
use tracing::debug;

thread_local! {
    static DEFAULT: RefCell<Registry> = RefCell::new(Registry::new());
}

/// Run `f` against the default registry.
pub fn with_registry<R>(f: impl FnOnce(&Registry) -> R) -> R {
    DEFAULT.with(|registry| f(&*registry.borrow()))
}

fn with_registry_mut<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    DEFAULT.with(|registry| f(&mut *registry.borrow_mut()))
}

/// Register an archetype in the default registry.
pub fn define(name: &str, definition: impl Into<Definition>) -> ArchetypeResult<()> {
    let definition = definition.into();
    with_registry_mut(|registry| registry.define(name, definition))
}

/// Register an archetype described by a host value.
pub fn define_value(name: &str, definition: &Value) -> ArchetypeResult<()> {
    with_registry_mut(|registry| registry.define_value(name, definition))
}

/// Define every archetype in a JSON definition document.
pub fn load_document(json: &str) -> ArchetypeResult<usize> {
    with_registry_mut(|registry| registry.load_document(json))
}

/// Test a value against every named archetype.
pub fn is<I>(value: &Value, names: I) -> ArchetypeResult<bool>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    with_registry(|registry| registry.is(value, names))
}

/// Build a proxy of `value` exposing the members of every named archetype.
#[doc(alias = "as")]
pub fn project<I>(value: &Value, names: I) -> ArchetypeResult<Option<Proxy>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    with_registry(|registry| registry.project(value, names))
}

/// Fail with `ContractViolation` unless `value` satisfies `archetype`.
pub fn expect(value: &Value, archetype: &str, message: Option<&str>) -> ArchetypeResult<()> {
    with_registry(|registry| registry.expect(value, archetype, message))
}

/// Discard every registration and re-seed the primitives.
pub fn reset() {
    with_registry_mut(Registry::reset);
}

pub fn projection_mode() -> ProjectionMode {
    with_registry(Registry::projection_mode)
}

pub fn set_projection_mode(mode: ProjectionMode) {
    with_registry_mut(|registry| registry.set_projection_mode(mode));
}

/// Apply a configuration to the default registry.
pub fn configure(config: RegistryConfig) -> ArchetypeResult<()> {
    debug!(
        projection = ?config.projection,
        archetypes = config.archetypes.len(),
        "configuring default registry"
    );
    with_registry_mut(|registry| registry.configure(config))
}

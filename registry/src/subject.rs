//! A value bound to a registry.

use crate::{ArchetypeResult, Proxy, Registry};
use swan_core::Value;

/// A value paired with the registry it is checked against.
///
/// Created with [`Registry::subject`].
#[derive(Debug, Clone, Copy)]
pub struct Subject<'r, 'v> {
    registry: &'r Registry,
    value: &'v Value,
}

impl<'r, 'v> Subject<'r, 'v> {
    pub(crate) fn new(registry: &'r Registry, value: &'v Value) -> Self {
        Self { registry, value }
    }

    pub fn value(&self) -> &'v Value {
        self.value
    }

    pub fn is<I>(&self, names: I) -> ArchetypeResult<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.registry.is(self.value, names)
    }

    pub fn project<I>(&self, names: I) -> ArchetypeResult<Option<Proxy>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.registry.project(self.value, names)
    }

    pub fn expect(&self, archetype: &str, message: Option<&str>) -> ArchetypeResult<()> {
        self.registry.expect(self.value, archetype, message)
    }
}

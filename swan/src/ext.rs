//! Method-call syntax for archetype checks.
//!
//! Bring [`ArchetypeExt`] into scope to call `is_a`, `project_as` and
//! `expect_archetype` directly on values, objects and proxies. The methods
//! use the thread's default registry.

use crate::global;
use std::borrow::Cow;
use swan_core::{Object, Value};
use swan_registry::{ArchetypeResult, Proxy};

pub trait ArchetypeExt {
    /// The value archetype checks run against.
    fn archetype_subject(&self) -> Cow<'_, Value>;

    fn is_a<I>(&self, names: I) -> ArchetypeResult<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        global::is(&self.archetype_subject(), names)
    }

    fn project_as<I>(&self, names: I) -> ArchetypeResult<Option<Proxy>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        global::project(&self.archetype_subject(), names)
    }

    fn expect_archetype(&self, archetype: &str, message: Option<&str>) -> ArchetypeResult<()> {
        global::expect(&self.archetype_subject(), archetype, message)
    }
}

impl ArchetypeExt for Value {
    fn archetype_subject(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl ArchetypeExt for Object {
    fn archetype_subject(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Object(self.clone()))
    }
}

impl ArchetypeExt for Proxy {
    fn archetype_subject(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Object(self.as_object().clone()))
    }
}

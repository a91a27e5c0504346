//! Proxy builder: restricted views of a value.
//!
//! A proxy exposes exactly the members declared by the requested archetypes
//! (their signatures and, transitively, those of their mixins). Values are
//! shared with the source; function members are rebound so calling them
//! through the proxy acts on the source.

use crate::{ArchetypeError, ArchetypeResult, Primitive, Registry, Signature, SignatureEntry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use swan_core::{Function, Object, Property, Value};
use tracing::trace;

/// How non-function members are exposed on a proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Copy the member's current value. Compound values stay shared.
    #[default]
    Copy,
    /// Live accessor reading and writing the source property.
    Accessor,
    /// A function member: called without arguments it returns the source
    /// property, called with one argument it assigns it.
    AccessorFunction,
}

/// A restricted view of a value.
#[derive(Debug, Clone)]
pub struct Proxy {
    target: Object,
}

impl Proxy {
    /// Read an exposed member.
    pub fn get(&self, key: &str) -> Value {
        self.target.get(key)
    }

    /// Write a member. Accessor members write through to the source; any
    /// other write stays on the proxy.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.target.set(key, value);
    }

    /// Call a function member with the given arguments. Returns `None` if the
    /// member is not a function.
    pub fn call(&self, key: &str, args: &[Value]) -> Option<Value> {
        match self.target.get(key) {
            Value::Function(func) => Some(func.call(&Value::Object(self.target.clone()), args)),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.target.contains_key(key)
    }

    /// Exposed member names in the order they were claimed.
    pub fn keys(&self) -> Vec<String> {
        self.target.keys()
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    pub fn as_object(&self) -> &Object {
        &self.target
    }

    pub fn into_object(self) -> Object {
        self.target
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.target)
    }
}

impl From<Proxy> for Value {
    fn from(proxy: Proxy) -> Self {
        proxy.into_value()
    }
}

impl Registry {
    /// Build a proxy exposing the union of the members declared by `names`.
    ///
    /// Returns `Ok(None)` if the value fails any visited signature. Unknown
    /// archetypes fail with `UnknownArchetype`; failures inside a mixin are
    /// wrapped in `MixinFailed`.
    #[doc(alias = "as")]
    pub fn project<I>(&self, value: &Value, names: I) -> ArchetypeResult<Option<Proxy>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut walk = ProxyWalk::new(self, value);
        for name in names {
            let name = name.as_ref();
            if !walk.visit(name)? {
                trace!(archetype = name, "projection found no match");
                return Ok(None);
            }
        }
        Ok(Some(walk.finish()))
    }
}

/// Depth-first walk over the mixin graph, accumulating exposed members.
struct ProxyWalk<'r, 'v> {
    registry: &'r Registry,
    source: &'v Value,
    mode: ProjectionMode,
    members: IndexMap<String, Property>,
    visited: HashSet<String>,
}

impl<'r, 'v> ProxyWalk<'r, 'v> {
    fn new(registry: &'r Registry, source: &'v Value) -> Self {
        Self {
            registry,
            source,
            mode: registry.projection_mode(),
            members: IndexMap::new(),
            visited: HashSet::new(),
        }
    }

    fn visit(&mut self, name: &str) -> ArchetypeResult<bool> {
        let registry = self.registry;
        let archetype = registry.resolve(name)?;
        // A revisit can add nothing: every member it declares is already claimed.
        if !self.visited.insert(archetype.name.clone()) {
            return Ok(true);
        }

        if !self.claim(&archetype.signature)? {
            return Ok(false);
        }

        for mixin in &archetype.mixins {
            match self.visit(mixin) {
                Ok(true) => {}
                Ok(false) => return Ok(false),
                Err(err) => return Err(ArchetypeError::mixin_failed(mixin, err)),
            }
        }
        Ok(true)
    }

    /// Copy every unclaimed signature member; first writer wins.
    fn claim(&mut self, signature: &Signature) -> ArchetypeResult<bool> {
        for (property, entry) in signature.iter() {
            if self.members.contains_key(property) {
                continue;
            }
            let member = self.source.get(property);
            if !self.registry.is(&member, entry.names())? {
                trace!(%property, "member did not match its signature");
                return Ok(false);
            }
            let slot = self.expose(property, entry, member);
            self.members.insert(property.clone(), slot);
        }
        Ok(true)
    }

    fn expose(&self, property: &str, entry: &SignatureEntry, member: Value) -> Property {
        if entry.is_exactly(Primitive::Function.name()) {
            if let Value::Function(func) = &member {
                return Property::Data(Value::Function(func.bind(self.source.clone())));
            }
        }
        match (self.mode, self.source) {
            (ProjectionMode::Accessor, Value::Object(source)) => Property::Accessor {
                source: source.clone(),
                key: property.to_string(),
            },
            (ProjectionMode::AccessorFunction, Value::Object(source)) => {
                Property::Data(Value::Function(accessor_function(source, property)))
            }
            _ => Property::Data(member),
        }
    }

    fn finish(self) -> Proxy {
        Proxy {
            target: Object::from(self.members),
        }
    }
}

fn accessor_function(source: &Object, property: &str) -> Function {
    let source = source.clone();
    let key = property.to_string();
    Function::named(property, move |_, args| match args.first() {
        Some(value) => {
            source.set(key.clone(), value.clone());
            Value::Undefined
        }
        None => source.get(&key),
    })
}

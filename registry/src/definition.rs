//! Registration input shapes and their normalization.

use crate::{ArchetypeError, ArchetypeResult, Evaluator, Signature, SignatureEntry};
use swan_core::{Array, Object, Value};
use tracing::warn;

/// Keys that mark a map as a definition object rather than a shorthand signature.
pub const RESERVED_KEYS: [&str; 3] = ["mixins", "signature", "evaluator"];

/// Everything `Registry::define` accepts.
#[derive(Debug, Clone)]
pub enum Definition {
    /// Pure mixin archetype.
    Mixins(Vec<String>),
    /// Opaque custom logic.
    Evaluator(Evaluator),
    /// Shorthand signature.
    Signature(Signature),
    /// Explicit definition object.
    Object(DefinitionObject),
}

/// Explicit definition with optional parts.
///
/// A supplied evaluator replaces the compiled one; mixins and signature are
/// still stored alongside it.
#[derive(Debug, Clone, Default)]
pub struct DefinitionObject {
    pub mixins: Option<Vec<String>>,
    pub signature: Option<Signature>,
    pub evaluator: Option<Evaluator>,
}

impl DefinitionObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mixins<I, S>(mut self, mixins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mixins = Some(mixins.into_iter().map(Into::into).collect());
        self
    }

    pub fn signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    pub fn evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = Some(evaluator);
        self
    }
}

impl From<DefinitionObject> for Definition {
    fn from(definition: DefinitionObject) -> Self {
        Definition::Object(definition)
    }
}

impl From<Signature> for Definition {
    fn from(signature: Signature) -> Self {
        Definition::Signature(signature)
    }
}

impl From<Evaluator> for Definition {
    fn from(evaluator: Evaluator) -> Self {
        Definition::Evaluator(evaluator)
    }
}

impl From<Vec<String>> for Definition {
    fn from(mixins: Vec<String>) -> Self {
        Definition::Mixins(mixins)
    }
}

impl From<Vec<&str>> for Definition {
    fn from(mixins: Vec<&str>) -> Self {
        Definition::Mixins(mixins.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Definition {
    fn from(mixins: [&str; N]) -> Self {
        Definition::Mixins(mixins.into_iter().map(String::from).collect())
    }
}

/// A definition after normalization and validation.
pub(crate) struct Normalized {
    pub mixins: Vec<String>,
    pub signature: Signature,
    pub evaluator: Evaluator,
}

impl Definition {
    /// Interpret a host value as a definition.
    ///
    /// Arrays become mixin lists, functions become evaluators, objects without
    /// any reserved key become signatures and objects with a reserved key are
    /// read as definition objects. Members holding `undefined` count as absent.
    pub fn from_value(archetype: &str, value: &Value) -> ArchetypeResult<Definition> {
        match value {
            Value::Array(items) => Ok(Definition::Mixins(mixin_list(archetype, items)?)),
            Value::Function(func) => Ok(Definition::Evaluator(Evaluator::from_function(
                func.clone(),
            ))),
            Value::Object(obj) => {
                let has_reserved = RESERVED_KEYS.iter().any(|key| !obj.get(key).is_undefined());
                if has_reserved {
                    definition_object(archetype, obj).map(Definition::Object)
                } else {
                    signature_map(archetype, obj, true).map(Definition::Signature)
                }
            }
            _ => Err(ArchetypeError::invalid_definition(archetype)),
        }
    }

    /// Resolve into stored parts, compiling an evaluator when none was given.
    pub(crate) fn normalize(self, archetype: &str) -> ArchetypeResult<Normalized> {
        let definition = match self {
            Definition::Mixins(mixins) => DefinitionObject::new().mixins(mixins),
            Definition::Evaluator(evaluator) => DefinitionObject::new().evaluator(evaluator),
            Definition::Signature(signature) => DefinitionObject::new().signature(signature),
            Definition::Object(definition) => definition,
        };

        let mixins = definition.mixins.unwrap_or_default();
        if mixins.iter().any(|name| name.is_empty()) {
            return Err(ArchetypeError::invalid_mixins(archetype));
        }

        let signature = definition.signature.unwrap_or_default();
        let evaluator = match definition.evaluator {
            Some(evaluator) => evaluator,
            None => {
                for (property, entry) in signature.iter() {
                    if entry.names().iter().any(|name| name.is_empty()) {
                        return Err(ArchetypeError::invalid_signature_entry(archetype, property));
                    }
                }
                Evaluator::compile(mixins.clone(), signature.clone())
            }
        };

        Ok(Normalized {
            mixins,
            signature,
            evaluator,
        })
    }
}

fn mixin_list(archetype: &str, items: &Array) -> ArchetypeResult<Vec<String>> {
    items
        .to_vec()
        .into_iter()
        .map(|item| match item {
            Value::String(name) => Ok(name),
            _ => Err(ArchetypeError::invalid_mixins(archetype)),
        })
        .collect()
}

fn signature_entry(value: &Value) -> Option<SignatureEntry> {
    match value {
        Value::String(name) => Some(SignatureEntry::One(name.clone())),
        Value::Array(items) => items
            .to_vec()
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(SignatureEntry::All),
        _ => None,
    }
}

/// Read a signature map. Malformed entries fail when `strict`, otherwise they
/// are dropped (the archetype has its own evaluator and never consults them).
fn signature_map(archetype: &str, obj: &Object, strict: bool) -> ArchetypeResult<Signature> {
    let mut signature = Signature::new();
    for property in obj.keys() {
        match signature_entry(&obj.get(&property)) {
            Some(entry) => signature.insert(property, entry),
            None if strict => {
                return Err(ArchetypeError::invalid_signature_entry(archetype, property));
            }
            None => warn!(%archetype, %property, "ignoring malformed signature entry"),
        }
    }
    Ok(signature)
}

fn definition_object(archetype: &str, obj: &Object) -> ArchetypeResult<DefinitionObject> {
    let mixins = match obj.get("mixins") {
        falsy if !falsy.is_truthy() => None,
        Value::String(name) => Some(vec![name]),
        Value::Array(items) => Some(mixin_list(archetype, &items)?),
        _ => return Err(ArchetypeError::invalid_mixins(archetype)),
    };

    let raw_signature = match obj.get("signature") {
        falsy if !falsy.is_truthy() => None,
        Value::Object(map) => Some(map),
        _ => return Err(ArchetypeError::invalid_signature(archetype)),
    };

    let evaluator = match obj.get("evaluator") {
        falsy if !falsy.is_truthy() => None,
        Value::Function(func) => Some(Evaluator::from_function(func)),
        _ => return Err(ArchetypeError::invalid_evaluator(archetype)),
    };

    let signature = match raw_signature {
        Some(map) => Some(signature_map(archetype, &map, evaluator.is_none())?),
        None => None,
    };

    Ok(DefinitionObject {
        mixins,
        signature,
        evaluator,
    })
}

//! Archetype definition types.

use crate::Evaluator;
use indexmap::IndexMap;
use swan_core::Value;

/// Archetype requirement for a single signature property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureEntry {
    /// The property must satisfy one archetype.
    One(String),
    /// The property must satisfy every listed archetype.
    All(Vec<String>),
}

impl SignatureEntry {
    /// The archetype names this entry requires, in declaration order.
    pub fn names(&self) -> &[String] {
        match self {
            SignatureEntry::One(name) => std::slice::from_ref(name),
            SignatureEntry::All(names) => names,
        }
    }

    /// Returns true if this entry is exactly the single archetype `name`.
    pub fn is_exactly(&self, name: &str) -> bool {
        matches!(self, SignatureEntry::One(n) if n == name)
    }
}

impl From<&str> for SignatureEntry {
    fn from(name: &str) -> Self {
        SignatureEntry::One(name.to_string())
    }
}

impl From<String> for SignatureEntry {
    fn from(name: String) -> Self {
        SignatureEntry::One(name)
    }
}

impl From<Vec<String>> for SignatureEntry {
    fn from(names: Vec<String>) -> Self {
        SignatureEntry::All(names)
    }
}

impl From<Vec<&str>> for SignatureEntry {
    fn from(names: Vec<&str>) -> Self {
        SignatureEntry::All(names.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SignatureEntry {
    fn from(names: [&str; N]) -> Self {
        SignatureEntry::All(names.into_iter().map(String::from).collect())
    }
}

/// Ordered map from property name to the archetype(s) its value must satisfy.
///
/// Declaration order matters for projection: earlier properties are claimed
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    entries: IndexMap<String, SignatureEntry>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property requirement, builder style.
    pub fn with(mut self, property: impl Into<String>, entry: impl Into<SignatureEntry>) -> Self {
        self.insert(property, entry);
        self
    }

    /// Add or replace a property requirement.
    pub fn insert(&mut self, property: impl Into<String>, entry: impl Into<SignatureEntry>) {
        self.entries.insert(property.into(), entry.into());
    }

    /// Get the requirement for a property.
    pub fn get(&self, property: &str) -> Option<&SignatureEntry> {
        self.entries.get(property)
    }

    pub fn contains_key(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    /// Iterate requirements in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SignatureEntry)> {
        self.entries.iter()
    }

    /// Property names in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, E> FromIterator<(K, E)> for Signature
where
    K: Into<String>,
    E: Into<SignatureEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut signature = Signature::new();
        for (property, entry) in iter {
            signature.insert(property, entry);
        }
        signature
    }
}

/// A registered archetype.
#[derive(Debug, Clone)]
pub struct Archetype {
    /// Unique name.
    pub name: String,
    /// Archetypes composed into this one, in declaration order.
    pub mixins: Vec<String>,
    /// Property requirements.
    pub signature: Signature,
    /// Membership predicate (custom or compiled from mixins and signature).
    pub evaluator: Evaluator,
}

impl Archetype {
    /// Returns true if this archetype is one of the seeded primitives.
    pub fn is_primitive(&self) -> bool {
        Primitive::from_name(&self.name).is_some()
    }
}

/// The built-in archetypes seeded into every registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Any,
    Object,
    String,
    Number,
    Boolean,
    Undefined,
    Array,
    Function,
}

impl Primitive {
    /// All primitives, in seeding order.
    pub const ALL: [Primitive; 8] = [
        Primitive::Any,
        Primitive::Object,
        Primitive::String,
        Primitive::Number,
        Primitive::Boolean,
        Primitive::Undefined,
        Primitive::Array,
        Primitive::Function,
    ];

    /// Registry name of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Any => "any",
            Primitive::Object => "object",
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Undefined => "undefined",
            Primitive::Array => "array",
            Primitive::Function => "function",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Runtime classification check for this primitive.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Primitive::Any => true,
            Primitive::Array => value.class_tag() == "Array",
            other => value.type_of() == other.name(),
        }
    }
}

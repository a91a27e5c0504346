//! Shared compound values: objects and arrays.

use crate::Value;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A property slot on an object.
#[derive(Debug, Clone)]
pub enum Property {
    /// Plain stored value.
    Data(Value),
    /// Live link to a property of another object.
    Accessor {
        /// Object that owns the linked property.
        source: Object,
        /// Property name on the source.
        key: String,
    },
}

impl Property {
    /// Returns true if this slot is a live accessor.
    pub fn is_accessor(&self) -> bool {
        matches!(self, Property::Accessor { .. })
    }
}

/// A shared, mutable, insertion-ordered property map.
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct Object {
    props: Rc<RefCell<IndexMap<String, Property>>>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a property, following accessors. Missing properties read as
    /// `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        let slot = self.props.borrow().get(key).cloned();
        match slot {
            Some(Property::Data(value)) => value,
            Some(Property::Accessor { source, key }) => source.get(&key),
            None => Value::Undefined,
        }
    }

    /// Write a property. Accessor slots write through to their source.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let link = match self.props.borrow().get(&key) {
            Some(Property::Accessor { source, key }) => Some((source.clone(), key.clone())),
            _ => None,
        };
        match link {
            Some((source, source_key)) => source.set(source_key, value),
            None => {
                self.props.borrow_mut().insert(key, Property::Data(value));
            }
        }
    }

    /// Install a live accessor for `key` reading and writing `source[source_key]`.
    pub fn define_accessor(
        &self,
        key: impl Into<String>,
        source: &Object,
        source_key: impl Into<String>,
    ) {
        self.props.borrow_mut().insert(
            key.into(),
            Property::Accessor {
                source: source.clone(),
                key: source_key.into(),
            },
        );
    }

    /// Get the raw slot for a property without resolving accessors.
    pub fn property(&self, key: &str) -> Option<Property> {
        self.props.borrow().get(key).cloned()
    }

    /// Check if the object has an own property.
    pub fn contains_key(&self, key: &str) -> bool {
        self.props.borrow().contains_key(key)
    }

    /// Own property names in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.props.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.props.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.borrow().is_empty()
    }

    /// Returns true if both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.props, &other.props)
    }
}

impl From<IndexMap<String, Property>> for Object {
    fn from(props: IndexMap<String, Property>) -> Self {
        Self {
            props: Rc::new(RefCell::new(props)),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keys only; values may point back at this object.
        f.debug_struct("Object").field("keys", &self.keys()).finish()
    }
}

/// A shared, mutable list of values.
#[derive(Clone, Default)]
pub struct Array {
    items: Rc<RefCell<Vec<Value>>>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.borrow().get(index).cloned()
    }

    /// Append an element.
    pub fn push(&self, value: impl Into<Value>) {
        self.items.borrow_mut().push(value.into());
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Snapshot of the current elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.borrow().clone()
    }

    /// Returns true if both handles refer to the same array.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array").field("len", &self.len()).finish()
    }
}

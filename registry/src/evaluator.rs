//! Membership predicates and the signature evaluator compiler.

use crate::{ArchetypeResult, Primitive, Registry, Signature};
use std::fmt;
use std::rc::Rc;
use swan_core::{Function, Value};
use tracing::trace;

type EvalFn = dyn Fn(&Value, &Registry) -> ArchetypeResult<bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Custom,
    Compiled,
    Primitive(Primitive),
}

/// Decides whether a value belongs to an archetype.
///
/// Evaluators receive the registry they are evaluated against, so custom
/// logic can test nested values against other archetypes.
#[derive(Clone)]
pub struct Evaluator {
    eval: Rc<EvalFn>,
    origin: Origin,
}

impl Evaluator {
    /// Custom evaluator with access to the registry.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &Registry) -> ArchetypeResult<bool> + 'static,
    {
        Self {
            eval: Rc::new(f),
            origin: Origin::Custom,
        }
    }

    /// Custom evaluator from a plain predicate.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        Self::new(move |value, _| Ok(f(value)))
    }

    /// Custom evaluator from a host function. The function is called with an
    /// undefined receiver and the value as its only argument; a truthy result
    /// means the value matches.
    pub fn from_function(func: Function) -> Self {
        Self::new(move |value, _| {
            Ok(func
                .call(&Value::Undefined, std::slice::from_ref(value))
                .is_truthy())
        })
    }

    /// Built-in runtime classification for a primitive archetype.
    pub fn primitive(primitive: Primitive) -> Self {
        Self {
            eval: Rc::new(move |value, _| Ok(primitive.matches(value))),
            origin: Origin::Primitive(primitive),
        }
    }

    /// Compile an evaluator from mixins and a signature.
    ///
    /// A value matches when every signature property satisfies all of its
    /// listed archetypes, and then the value itself satisfies every mixin in
    /// declaration order. Both checks stop at the first failure. Names are
    /// resolved at evaluation time.
    pub fn compile(mixins: Vec<String>, signature: Signature) -> Self {
        let eval = move |value: &Value, registry: &Registry| -> ArchetypeResult<bool> {
            for (property, entry) in signature.iter() {
                if !registry.is(&value.get(property), entry.names())? {
                    trace!(%property, "signature property did not match");
                    return Ok(false);
                }
            }
            for mixin in &mixins {
                if !registry.is(value, [mixin])? {
                    trace!(%mixin, "mixin did not match");
                    return Ok(false);
                }
            }
            Ok(true)
        };
        Self {
            eval: Rc::new(eval),
            origin: Origin::Compiled,
        }
    }

    /// Run the predicate.
    pub fn evaluate(&self, value: &Value, registry: &Registry) -> ArchetypeResult<bool> {
        (self.eval)(value, registry)
    }

    /// Returns true if this evaluator was compiled from mixins and a signature.
    pub fn is_compiled(&self) -> bool {
        self.origin == Origin::Compiled
    }

    /// Returns true if this evaluator was supplied by the caller.
    pub fn is_custom(&self) -> bool {
        self.origin == Origin::Custom
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            Origin::Custom => write!(f, "Evaluator::Custom"),
            Origin::Compiled => write!(f, "Evaluator::Compiled"),
            Origin::Primitive(p) => write!(f, "Evaluator::Primitive({})", p.name()),
        }
    }
}

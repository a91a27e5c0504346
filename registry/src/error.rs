//! Archetype error types.

use thiserror::Error;

/// Errors raised by registration, membership tests and projection.
#[derive(Debug, Error)]
pub enum ArchetypeError {
    #[error("An archetype with name '{0}' already exists")]
    DuplicateArchetype(String),

    #[error("Invalid archetype name: {0}")]
    InvalidArgument(String),

    #[error(
        "Definition of '{archetype}' must be a definition object, a plain object, \
         a list of mixins or an evaluator function"
    )]
    InvalidDefinition { archetype: String },

    #[error("Property 'mixins' of '{archetype}' must be a list of archetype names or a single name")]
    InvalidMixins { archetype: String },

    #[error("Property 'signature' of '{archetype}' must be a map")]
    InvalidSignature { archetype: String },

    #[error(
        "Property '{property}' in the signature of '{archetype}' must be an archetype name \
         or a list of archetype names"
    )]
    InvalidSignatureEntry { archetype: String, property: String },

    #[error("Property 'evaluator' of '{archetype}' must be a function")]
    InvalidEvaluator { archetype: String },

    #[error("Archetype '{0}' does not exist. An archetype has to be defined before it can be used")]
    UnknownArchetype(String),

    #[error("{message}")]
    ContractViolation { archetype: String, message: String },

    /// A mixin raised while building a proxy.
    #[error("Failed to infer extending archetype '{mixin}'. Reason was: {source}")]
    MixinFailed {
        mixin: String,
        #[source]
        source: Box<ArchetypeError>,
    },

    /// An archetype was re-entered on the same value while still being
    /// evaluated (cyclic mixins, signatures or data).
    #[error("Archetype '{0}' re-entered itself on the same value")]
    CyclicArchetype(String),

    #[error("Invalid definition document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

impl ArchetypeError {
    pub fn invalid_definition(archetype: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            archetype: archetype.into(),
        }
    }

    pub fn invalid_mixins(archetype: impl Into<String>) -> Self {
        Self::InvalidMixins {
            archetype: archetype.into(),
        }
    }

    pub fn invalid_signature(archetype: impl Into<String>) -> Self {
        Self::InvalidSignature {
            archetype: archetype.into(),
        }
    }

    pub fn invalid_signature_entry(
        archetype: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self::InvalidSignatureEntry {
            archetype: archetype.into(),
            property: property.into(),
        }
    }

    pub fn invalid_evaluator(archetype: impl Into<String>) -> Self {
        Self::InvalidEvaluator {
            archetype: archetype.into(),
        }
    }

    /// Contract violation with the caller's message, or a default naming the archetype.
    pub fn contract_violation(archetype: impl Into<String>, message: Option<&str>) -> Self {
        let archetype = archetype.into();
        let message = match message {
            Some(message) => message.to_string(),
            None => format!("Expected value to be of archetype '{}'", archetype),
        };
        Self::ContractViolation { archetype, message }
    }

    pub fn mixin_failed(mixin: impl Into<String>, source: ArchetypeError) -> Self {
        Self::MixinFailed {
            mixin: mixin.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error beneath any mixin wrappers.
    pub fn root_cause(&self) -> &ArchetypeError {
        let mut err = self;
        while let ArchetypeError::MixinFailed { source, .. } = err {
            err = &**source;
        }
        err
    }
}

/// Result type for archetype operations.
pub type ArchetypeResult<T> = Result<T, ArchetypeError>;

//! Error types for subject building, parsing and registry validation.

use thiserror::Error;

/// Errors from a single field codec (see [`crate::types::FieldType`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("expected {expected} bytes, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("missing '0x' prefix")]
    MissingPrefix,

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("empty integer segment")]
    EmptyInteger,

    #[error("invalid integer '{0}'")]
    InvalidInteger(String),

    #[error("leading zero in '{0}'")]
    LeadingZero(String),

    #[error("{value} does not fit in {bits} bits")]
    Overflow { value: String, bits: u32 },

    #[error("negative value {0} for unsigned field")]
    Negative(i64),

    #[error("unknown {ty} literal '{value}'")]
    UnknownLiteral { ty: &'static str, value: String },

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },
}

/// Errors surfaced to callers of the builder, parser and registry lookups.
#[derive(Debug, Error)]
pub enum SubjectError {
    #[error("Unknown entity '{entity}'")]
    UnknownEntity { entity: String },

    #[error("Unknown variant '{variant}' for entity '{entity}'")]
    UnknownVariant { entity: String, variant: String },

    #[error("Unknown subject '{id}'")]
    UnknownSubject { id: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Subject '{id}' has no field '{field}'")]
    UnknownField { id: String, field: String },

    #[error("Invalid field '{field}': {source}")]
    InvalidField {
        field: String,
        #[source]
        source: FieldError,
    },

    #[error("Segment count mismatch: expected {expected}, got {got}")]
    SegmentCountMismatch { expected: usize, got: usize },

    #[error("Literal mismatch at segment {position}: expected '{expected}', got '{got}'")]
    LiteralMismatch {
        position: usize,
        expected: String,
        got: String,
    },

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SubjectError {
    pub fn invalid_field(field: impl Into<String>, source: FieldError) -> Self {
        SubjectError::InvalidField {
            field: field.into(),
            source,
        }
    }

    /// `true` when the topic simply does not belong to the definition it was
    /// checked against (wrong shape or wrong literal). Callers resolving an
    /// unknown topic should move on to the next definition.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            SubjectError::SegmentCountMismatch { .. } | SubjectError::LiteralMismatch { .. }
        )
    }
}

/// Catalog invariant violations found while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate subject id '{id}'")]
    DuplicateId { id: String },

    #[error("Duplicate entity key '{key}'")]
    DuplicateEntity { key: String },

    #[error("Subject '{id}' has an empty format")]
    EmptyFormat { id: String },

    #[error("Subject '{id}': placeholder '{name}' has no declared field")]
    UndeclaredPlaceholder { id: String, name: String },

    #[error("Subject '{id}': field '{name}' appears {count} times in the format")]
    FieldNotPlacedOnce { id: String, name: String, count: usize },

    #[error("Subject '{id}': field order does not follow the format")]
    FieldOrder { id: String },

    #[error("Subject '{id}': wildcard '{got}' should be '{expected}'")]
    WildcardMismatch {
        id: String,
        expected: String,
        got: String,
    },

    #[error("Variant '{id}' is not a refinement of '{parent}': {reason}")]
    VariantPrefix {
        id: String,
        parent: String,
        reason: String,
    },

    #[error("Variant '{id}' has entity '{got}', parent has '{expected}'")]
    EntityMismatch {
        id: String,
        expected: String,
        got: String,
    },

    #[error("Validation failed for '{id}': {reason}")]
    ValidationFailed { id: String, reason: String },
}

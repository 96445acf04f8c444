//! Validation failures surfaced by the input readers

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Accepted spellings for boolean inputs, as shown to users.
pub const BOOLEAN_TOKENS_HINT: &str = "true | True | TRUE | false | False | FALSE";

/// Discriminant of [`ValidationError`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    RequiredInputMissing,
    InvalidBoolean,
}

/// Errors returned when an input value fails its declared coercion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input required and not supplied: {name}")]
    RequiredInputMissing { name: String },

    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {name} (got {value:?})\n\
         Support boolean input list: `{hint}`",
        hint = BOOLEAN_TOKENS_HINT
    )]
    InvalidBoolean { name: String, value: String },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::RequiredInputMissing { .. } => ValidationErrorKind::RequiredInputMissing,
            Self::InvalidBoolean { .. } => ValidationErrorKind::InvalidBoolean,
        }
    }

    /// Display name of the input that failed, as the caller spelled it.
    pub fn name(&self) -> &str {
        match self {
            Self::RequiredInputMissing { name } | Self::InvalidBoolean { name, .. } => name,
        }
    }

    /// The rejected raw value, when the failure was about content rather than presence.
    pub fn raw_value(&self) -> Option<&str> {
        match self {
            Self::RequiredInputMissing { .. } => None,
            Self::InvalidBoolean { value, .. } => Some(value),
        }
    }
}

//! Style validation errors.

use thiserror::Error;

/// Error returned by the opt-in validation pass.
///
/// Building, merging and materializing never produce this error. Bad input is
/// passed through as-is unless a caller asks for validation explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    /// A style property name is empty or contains characters that cannot
    /// appear in a property name.
    #[error("invalid style property name '{name}'")]
    InvalidPropertyName { name: String },

    /// A style value would break out of its declaration when serialized.
    #[error("invalid value '{value}' for style property '{property}': {reason}")]
    InvalidStyleValue {
        property: String,
        value: String,
        reason: String,
    },

    /// Custom stylesheet text is not well-formed.
    #[error("malformed custom css: {reason}")]
    MalformedCustomCss { reason: String },
}

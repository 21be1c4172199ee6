//! Formatting errors.

use rstgen_table::MalformedGridError;

/// Error from [`format`](crate::format).
///
/// Unknown directive kinds are not an error: they are formatted with the
/// generic directive rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A required field is absent or blank.
    #[error("{kind}: missing required field `{field}`")]
    MissingField {
        /// Directive kind as submitted.
        kind: String,
        /// Field name.
        field: &'static str,
    },
    /// A field holds a value of the wrong shape.
    #[error("{kind}: field `{field}` is invalid: {reason}")]
    InvalidField {
        /// Directive kind as submitted.
        kind: String,
        /// Field name.
        field: &'static str,
        /// What was wrong with the value.
        reason: String,
    },
    /// Table cells do not form a rectangle.
    #[error("{kind}: {source}")]
    MalformedGrid {
        /// Directive kind as submitted.
        kind: String,
        /// Layout error.
        #[source]
        source: MalformedGridError,
    },
}

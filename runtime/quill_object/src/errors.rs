//! Error types for record operations.
//!
//! Reads never fail: absent keys resolve to `Undefined` at the lookup
//! seam. Errors arise only from writes against protected slots and from
//! the serialization projection.

use std::fmt;

/// Result of a record operation.
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Error from a record operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// Write against a non-writable slot.
    NotWritable { key: String },
    /// Redefinition or removal of a non-configurable slot.
    NotConfigurable { key: String },
    /// Serialization failure.
    Json(String),
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectError::NotWritable { key } => {
                write!(f, "cannot write to non-writable property `{key}`")
            }
            ObjectError::NotConfigurable { key } => {
                write!(f, "cannot redefine non-configurable property `{key}`")
            }
            ObjectError::Json(message) => write!(f, "serialization failed: {message}"),
        }
    }
}

impl std::error::Error for ObjectError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ObjectError::NotWritable { key: "foo".into() };
        assert_eq!(
            err.to_string(),
            "cannot write to non-writable property `foo`"
        );
        let err = ObjectError::NotConfigurable { key: "bar".into() };
        assert_eq!(
            err.to_string(),
            "cannot redefine non-configurable property `bar`"
        );
    }
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (casting,
/// range checks, validation). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The cast engine was asked for a target outside the source's
    /// enumerated set. Terminal and user-facing; callers must not retry.
    #[error("Cannot cast {from_type} to type {target}.")]
    UnsupportedCast {
        from_type: &'static str,
        target: &'static str,
    },

    /// A numeric field was set outside its documented range. Raised before
    /// any state (including the modification stamp) changes.
    #[error("{field} must not be negative (got {value})")]
    OutOfRange { field: &'static str, value: i64 },

    /// A composed value was read while a required constituent was absent.
    #[error("missing required part: {0}")]
    MissingPart(&'static str),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn unsupported_cast(source: &'static str, target: &'static str) -> Self {
        Self::UnsupportedCast { from_type: source, target }
    }

    pub fn out_of_range(field: &'static str, value: i64) -> Self {
        Self::OutOfRange { field, value }
    }

    pub fn missing_part(part: &'static str) -> Self {
        Self::MissingPart(part)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_cast_names_both_types() {
        let err = DomainError::unsupported_cast("Account", "Organization");
        assert_eq!(err.to_string(), "Cannot cast Account to type Organization.");
    }

    #[test]
    fn out_of_range_names_field_and_value() {
        let err = DomainError::out_of_range("id", -1);
        assert_eq!(err.to_string(), "id must not be negative (got -1)");
    }

    #[test]
    fn missing_part_names_the_part() {
        let err = DomainError::missing_part("first_name");
        assert_eq!(err.to_string(), "missing required part: first_name");
    }
}

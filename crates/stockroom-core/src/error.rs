//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  stockroom-core (this file)                                        │
//! │  └── ValidationError  - Locally-detectable misuse, caught BEFORE   │
//! │                         anything reaches the store                 │
//! │                                                                     │
//! │  stockroom-db (separate crate)                                     │
//! │  └── DbError          - Database operation failures; wraps         │
//! │                         ValidationError for repository misuse      │
//! │                                                                     │
//! │  Flow: ValidationError → DbError → caller                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The single error kind this crate raises: locally-detectable misuse that
/// must be caught before a write is attempted.
///
/// ## When This Occurs
/// - `update()` called on a product that was never persisted (no id)
/// - A price that cannot be coerced to cents ("abc", "12.505")
/// - A category name outside the closed set
/// - Field limits violated (empty name, oversized description)
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a price string that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set (e.g., an unknown category name).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error for the given field.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::required("id");
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "name must be at most 100 characters");

        let err = ValidationError::invalid_format("price", "not a decimal number");
        assert_eq!(
            err.to_string(),
            "price has invalid format: not a decimal number"
        );
    }

    #[test]
    fn test_not_allowed_lists_choices() {
        let err = ValidationError::NotAllowed {
            field: "category".to_string(),
            allowed: vec!["FOOD".to_string(), "TOOLS".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("category"));
        assert!(msg.contains("FOOD"));
        assert!(msg.contains("TOOLS"));
    }
}

//! # Validation Module
//!
//! Field validation for catalog products.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Type boundary (this crate)                               │
//! │  ├── Price / Category parsing reject non-coercible input           │
//! │  └── serde surfaces malformed payloads                             │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - field rules, run before any write          │
//! │  ├── name / description presence and length                        │
//! │  └── price sign                                                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                        │
//! │  ├── NOT NULL constraints                                          │
//! │  └── CHECK constraints (price >= 0, category in set)               │
//! │                                                                     │
//! │  Each layer catches what the one above cannot.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::validate_name;
//!
//! assert!(validate_name("Fedora").is_ok());
//! assert!(validate_name("").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Product;
use crate::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (whitespace-only counts as empty)
/// - At most 100 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty (whitespace-only counts as empty)
/// - At most 250 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationError::required("description"));
    }

    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LENGTH,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
pub fn validate_price(price: crate::price::Price) -> ValidationResult<()> {
    if price.cents() < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates every field of a product before a write.
///
/// This is the gate `create()` and `update()` run behind: nothing reaches
/// the store unless the whole entity passes.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_name(&product.name)?;
    validate_description(&product.description)?;
    validate_price(product.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

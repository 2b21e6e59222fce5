//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the **heart** of the catalog: the Product entity and every
//! rule about it, as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Stockroom Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │          Request handlers (HTTP routes, out of scope)       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐  │   │
//! │  │   │  types   │  │  price   │  │  error   │  │ validation│  │   │
//! │  │   │ Product  │  │  Price   │  │Validation│  │   rules   │  │   │
//! │  │   │ Category │  │  cents   │  │  Error   │  │  checks   │  │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └───────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                │   │
//! │  │           SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`price`] - Price type with integer-cents arithmetic (no floating point!)
//! - [`error`] - Validation error type
//! - [`validation`] - Field rules run before any write
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic, no side effects
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Prices**: all currency values are cents (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Category, Price, Product};
//!
//! // Prices normalize from any supplied form to cents
//! let listed: Price = " 12.50 ".parse().unwrap();
//! assert_eq!(listed, Price::from_cents(1250));
//!
//! // Entities start unpersisted; the store assigns ids
//! let fedora = Product::new("Fedora", "A red hat", listed, true, Category::Clothes);
//! assert!(fedora.id.is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Product` instead of
// `use stockroom_core::types::Product`

pub use error::{ValidationError, ValidationResult};
pub use price::Price;
pub use types::{Category, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in bytes.
///
/// ## Why 100?
/// Matches the catalog's column width; anything longer is a data-entry
/// mistake, not a real product name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a product description, in bytes.
pub const MAX_DESCRIPTION_LENGTH: usize = 250;

//! # Domain Types
//!
//! Core domain types for the product catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────────┐          ┌───────────────────┐              │
//! │  │      Product      │          │     Category      │              │
//! │  │  ───────────────  │          │  ───────────────  │              │
//! │  │  id (Option<i64>) │          │  Unknown          │              │
//! │  │  name             │          │  Clothes          │              │
//! │  │  description      │   uses   │  Food             │              │
//! │  │  price (Price)    │ ───────► │  Housewares       │              │
//! │  │  available        │          │  Automotive       │              │
//! │  │  category         │          │  Tools            │              │
//! │  └───────────────────┘          └───────────────────┘              │
//! │                                                                     │
//! │  id stays None until the store assigns a key on create.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::price::Price;

// =============================================================================
// Category
// =============================================================================

/// The closed set of product categories.
///
/// Persisted as the uppercase name ("CLOTHES", "FOOD", ...); anything outside
/// the set is a validation error at the parse boundary and a CHECK violation
/// at the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Unknown,
    Clothes,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Every category, in declaration order. Used by factories and for the
    /// allowed-values list in validation errors.
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Clothes,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// Returns the persisted (uppercase) name of this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Clothes => "CLOTHES",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Unknown
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the persisted name. Names are matched exactly (uppercase), with
/// surrounding whitespace tolerated.
impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "UNKNOWN" => Ok(Category::Unknown),
            "CLOTHES" => Ok(Category::Clothes),
            "FOOD" => Ok(Category::Food),
            "HOUSEWARES" => Ok(Category::Housewares),
            "AUTOMOTIVE" => Ok(Category::Automotive),
            "TOOLS" => Ok(Category::Tools),
            _ => Err(ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// `id` is the database-assigned surrogate key: `None` means the entity has
/// never been persisted. Every other field is owned by the caller and written
/// verbatim (after validation) on create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Surrogate key, assigned by the store on create.
    #[serde(default)]
    pub id: Option<i64>,

    /// Display name. Required, at most 100 characters.
    pub name: String,

    /// Longer description. Required, at most 250 characters.
    pub description: String,

    /// Price, normalized to cents.
    pub price: Price,

    /// Whether the product is currently available.
    pub available: bool,

    /// Category, stored as its uppercase name.
    pub category: Category,
}

impl Product {
    /// Creates an unpersisted product (no id yet).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Category, Price, Product};
    ///
    /// let fedora = Product::new(
    ///     "Fedora",
    ///     "A red hat",
    ///     Price::from_cents(1250),
    ///     true,
    ///     Category::Clothes,
    /// );
    /// assert!(fedora.id.is_none());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        available: bool,
        category: Category,
    ) -> Self {
        Product {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// Whether this entity corresponds to a stored row.
    #[inline]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Deserializes a product from a JSON payload.
    ///
    /// Malformed payloads (missing fields, a non-coercible price, an unknown
    /// category) surface as the validation error rather than a raw serde
    /// error, so callers at the request boundary get one error kind.
    pub fn from_json(data: &str) -> ValidationResult<Product> {
        serde_json::from_str(data)
            .map_err(|e| ValidationError::invalid_format("product", e.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # stockroom-db: Database Layer for the Stockroom Catalog
//!
//! This crate provides database access for the Stockroom product catalog.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Data Flow                                │
//! │                                                                         │
//! │  Caller (service handler, seed tool, tests)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ ProductRepo   │    │ 001_create_  │  │   │
//! │  │   │ Connection    │◄───│               │    │ products.sql │  │   │
//! │  │   │ Management    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   DATABASE_URL, or ./stockroom.db                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_core::{Category, Price, Product};
//! use stockroom_db::{Database, DbConfig};
//!
//! // Connect (runs migrations by default)
//! let db = Database::new(DbConfig::from_env()).await?;
//!
//! // Create a product; the store assigns the id
//! let mut fedora = Product::new(
//!     "Fedora", "A red hat", Price::from_cents(1250), true, Category::Clothes,
//! );
//! let id = db.products().create(&mut fedora).await?;
//!
//! // Query it back by field
//! let clothes = db.products().find_by_category(Category::Clothes).await?;
//! let at_price = db.products().find_by_price("12.50".parse()?).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DEFAULT_DATABASE_PATH};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;

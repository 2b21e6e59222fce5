//! # Product Repository
//!
//! Database operations for catalog products.
//!
//! ## Key Operations
//! - CRUD with store-assigned integer keys
//! - Lookups by name, availability, category, and price
//!
//! ## Id Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Surrogate Keys Flow                              │
//! │                                                                         │
//! │  Product::new("Fedora", ...)          id = None                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.create(&mut product)            INSERT ... ; last_insert_rowid() │
//! │       │                               id = Some(7)                     │
//! │       ▼                                                                 │
//! │  repo.update(&product)                UPDATE ... WHERE id = 7          │
//! │  repo.delete(&product)                DELETE ... WHERE id = 7          │
//! │                                                                         │
//! │  update() on id = None is a validation error (nothing to address);     │
//! │  delete() on id = None is a no-op (nothing was ever stored).           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Lookups
//! Prices are stored normalized (integer cents), so a lookup built from any
//! accepted input form finds the same rows: `"30 ".parse::<Price>()` and
//! `Price::from_units(30)` compare equal in `find_by_price`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::validation::validate_product;
use stockroom_core::{Category, Price, Product, ValidationError};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // Create a product (assigns the id)
/// let id = repo.create(&mut fedora).await?;
///
/// // Look it up again
/// let product = repo.find(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and assigns its id.
    ///
    /// ## What This Does
    /// 1. Validates the fields (name, description, price)
    /// 2. Inserts a fresh row; any id already on the value is ignored,
    ///    the store always assigns the key
    /// 3. Writes the generated id back onto `product`
    ///
    /// ## Returns
    /// * `Ok(id)` - The store-assigned key (also set on `product.id`)
    /// * `Err(DbError::Validation)` - Malformed fields, nothing written
    pub async fn create(&self, product: &mut Product) -> DbResult<i64> {
        validate_product(product)?;

        debug!(name = %product.name, "Creating product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price_cents, available, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        product.id = Some(id);

        debug!(id, "Product created");
        Ok(id)
    }

    /// Updates an existing product.
    ///
    /// ## Arguments
    /// * `product` - Product with updated fields; `id` selects the row
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::Validation)` - `id` is empty or fields are malformed;
    ///   nothing is written
    /// * `Err(DbError::NotFound)` - No row with this id
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        // An empty id means there is no row to address; reject before
        // touching the database.
        let id = product.id.ok_or_else(|| ValidationError::required("id"))?;

        validate_product(product)?;

        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price_cents = ?4,
                available = ?5,
                category = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// Idempotent: deleting a product that was never persisted, or whose row
    /// is already gone, succeeds without touching anything.
    pub async fn delete(&self, product: &Product) -> DbResult<()> {
        let id = match product.id {
            Some(id) => id,
            // Never persisted, nothing to remove.
            None => return Ok(()),
        };

        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, removed = result.rows_affected() > 0, "Delete finished");
        Ok(())
    }

    /// Lists every product, oldest first (id order).
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents AS price, available, category
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Finds a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No row with this id
    pub async fn find(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents AS price, available, category
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Finds all products with exactly this name.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Vec<Product>> {
        debug!(name = %name, "Finding products by name");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents AS price, available, category
            FROM products
            WHERE name = ?1
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Finds all products with the given availability.
    pub async fn find_by_availability(&self, available: bool) -> DbResult<Vec<Product>> {
        debug!(available, "Finding products by availability");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents AS price, available, category
            FROM products
            WHERE available = ?1
            ORDER BY id
            "#,
        )
        .bind(available)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Finds all products in the given category.
    pub async fn find_by_category(&self, category: Category) -> DbResult<Vec<Product>> {
        debug!(category = %category, "Finding products by category");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents AS price, available, category
            FROM products
            WHERE category = ?1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Finds all products at exactly this price.
    ///
    /// ## Normalization
    /// Comparison happens on stored cents, so a price parsed from `"30 "`,
    /// deserialized from the integer `30`, or built with
    /// `Price::from_units(30)` all match the same rows.
    pub async fn find_by_price(&self, price: Price) -> DbResult<Vec<Product>> {
        debug!(price = %price, "Finding products by price");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents AS price, available, category
            FROM products
            WHERE price_cents = ?1
            ORDER BY id
            "#,
        )
        .bind(price)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts stored products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use rand::Rng;

    /// Name pool mirrors the kind of catalog this store serves.
    const NAMES: [&str; 11] = [
        "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
        "Wrench",
    ];

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_product(rng: &mut impl Rng) -> Product {
        let name = NAMES[rng.gen_range(0..NAMES.len())];
        Product::new(
            name,
            format!("A very fine {}", name.to_lowercase()),
            Price::from_cents(rng.gen_range(50..=99_999)),
            rng.gen_bool(0.5),
            Category::ALL[rng.gen_range(0..Category::ALL.len())],
        )
    }

    /// Creates `count` random products and returns them with ids assigned.
    async fn seed_products(repo: &ProductRepository, count: usize) -> Vec<Product> {
        let mut rng = rand::thread_rng();
        let mut products = Vec::with_capacity(count);
        for _ in 0..count {
            let mut product = sample_product(&mut rng);
            repo.create(&mut product).await.unwrap();
            products.push(product);
        }
        products
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_round_trips() {
        let db = test_db().await;
        let repo = db.products();

        let mut fedora = Product::new(
            "Fedora",
            "A red hat",
            Price::from_cents(1250),
            true,
            Category::Clothes,
        );
        let id = repo.create(&mut fedora).await.unwrap();

        assert_eq!(fedora.id, Some(id));
        assert_eq!(repo.count().await.unwrap(), 1);

        let found = repo.find(id).await.unwrap().unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.name, "Fedora");
        assert_eq!(found.description, "A red hat");
        assert_eq!(found.price, Price::from_cents(1250));
        assert!(found.available);
        assert_eq!(found.category, Category::Clothes);
    }

    #[tokio::test]
    async fn test_create_ignores_preset_id() {
        let db = test_db().await;
        let repo = db.products();

        let mut product = Product::new(
            "Hammer",
            "Claw hammer",
            Price::from_units(15),
            true,
            Category::Tools,
        );
        product.id = Some(999);

        let id = repo.create(&mut product).await.unwrap();

        // The store assigned its own key and wrote it back
        assert_eq!(product.id, Some(id));
        assert_ne!(id, 999);
        assert!(repo.find(999).await.unwrap().is_none());
        assert!(repo.find(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_product() {
        let db = test_db().await;
        let repo = db.products();

        let mut nameless = Product::new(
            "   ",
            "No name at all",
            Price::from_units(1),
            true,
            Category::Unknown,
        );
        let err = repo.create(&mut nameless).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(nameless.id, None);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_changes_row_without_adding_one() {
        let db = test_db().await;
        let repo = db.products();

        let mut product = Product::new(
            "Towels",
            "Bath towels, white",
            Price::from_cents(1999),
            true,
            Category::Housewares,
        );
        let id = repo.create(&mut product).await.unwrap();

        product.description = "Bath towels, navy".to_string();
        product.price = Price::from_cents(2499);
        product.available = false;
        repo.update(&product).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);

        let found = repo.find(id).await.unwrap().unwrap();
        assert_eq!(found.description, "Bath towels, navy");
        assert_eq!(found.price, Price::from_cents(2499));
        assert!(!found.available);
    }

    #[tokio::test]
    async fn test_update_without_id_is_validation_error() {
        let db = test_db().await;
        let repo = db.products();

        let unpersisted = Product::new(
            "Chevy",
            "Sedan, lightly used",
            Price::from_units(9_000),
            true,
            Category::Automotive,
        );
        let err = repo.update(&unpersisted).await.unwrap_err();

        assert!(err.is_validation());
        // Nothing was written
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = test_db().await;
        let repo = db.products();

        let mut ghost = Product::new(
            "Ghost",
            "Never stored",
            Price::from_units(5),
            true,
            Category::Unknown,
        );
        ghost.id = Some(4096);

        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = test_db().await;
        let repo = db.products();

        let mut product = Product::new(
            "Banana",
            "Bunch of five",
            Price::from_cents(129),
            true,
            Category::Food,
        );
        let id = repo.create(&mut product).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.delete(&product).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.find(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = test_db().await;
        let repo = db.products();

        let mut product = Product::new(
            "Apple",
            "Crisp and red",
            Price::from_cents(50),
            true,
            Category::Food,
        );
        repo.create(&mut product).await.unwrap();

        // Twice in a row: second delete finds nothing and still succeeds
        repo.delete(&product).await.unwrap();
        repo.delete(&product).await.unwrap();

        // Never-persisted products are a no-op too
        let unpersisted = Product::new(
            "Pots",
            "Set of three",
            Price::from_cents(3500),
            false,
            Category::Housewares,
        );
        repo.delete(&unpersisted).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_all_returns_every_product_in_id_order() {
        let db = test_db().await;
        let repo = db.products();

        assert!(repo.all().await.unwrap().is_empty());

        let created = seed_products(&repo, 5).await;
        let listed = repo.all().await.unwrap();

        assert_eq!(listed.len(), 5);
        for (stored, ours) in listed.iter().zip(created.iter()) {
            assert_eq!(stored, ours);
        }
        // Ids strictly ascend
        for pair in listed.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[tokio::test]
    async fn test_find_by_name_counts_match() {
        let db = test_db().await;
        let repo = db.products();

        let created = seed_products(&repo, 5).await;
        let name = created[0].name.clone();
        let expected = created.iter().filter(|p| p.name == name).count();

        let found = repo.find_by_name(&name).await.unwrap();

        assert_eq!(found.len(), expected);
        for product in found {
            assert_eq!(product.name, name);
        }
    }

    #[tokio::test]
    async fn test_find_by_availability_counts_match() {
        let db = test_db().await;
        let repo = db.products();

        let created = seed_products(&repo, 10).await;
        let expected_up = created.iter().filter(|p| p.available).count();

        let up = repo.find_by_availability(true).await.unwrap();
        let down = repo.find_by_availability(false).await.unwrap();

        assert_eq!(up.len(), expected_up);
        assert_eq!(down.len(), 10 - expected_up);
        assert!(up.iter().all(|p| p.available));
        assert!(down.iter().all(|p| !p.available));
    }

    #[tokio::test]
    async fn test_find_by_category_counts_match() {
        let db = test_db().await;
        let repo = db.products();

        let created = seed_products(&repo, 10).await;
        let category = created[0].category;
        let expected = created.iter().filter(|p| p.category == category).count();

        let found = repo.find_by_category(category).await.unwrap();

        assert_eq!(found.len(), expected);
        for product in found {
            assert_eq!(product.category, category);
        }
    }

    #[tokio::test]
    async fn test_find_by_price_matches_padded_string_query() {
        let db = test_db().await;
        let repo = db.products();

        let mut cheap = Product::new(
            "Shirt",
            "Plain white tee",
            Price::from_cents(1250),
            true,
            Category::Clothes,
        );
        let mut thirty = Product::new(
            "Pants",
            "Denim, relaxed fit",
            Price::from_units(30),
            true,
            Category::Clothes,
        );
        repo.create(&mut cheap).await.unwrap();
        repo.create(&mut thirty).await.unwrap();

        // Whitespace-padded numeric string normalizes to the stored price
        let query: Price = "30 ".parse().unwrap();
        let found = repo.find_by_price(query).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Pants");
        assert_eq!(found[0].price, Price::from_units(30));

        // And the other price is reachable the same way
        let found = repo.find_by_price("12.50".parse().unwrap()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Shirt");
    }

    #[tokio::test]
    async fn test_find_by_price_counts_match() {
        let db = test_db().await;
        let repo = db.products();

        let created = seed_products(&repo, 10).await;
        let price = created[0].price;
        let expected = created.iter().filter(|p| p.price == price).count();

        let found = repo.find_by_price(price).await.unwrap();

        assert_eq!(found.len(), expected);
        for product in found {
            assert_eq!(product.price, price);
        }
    }

    #[tokio::test]
    async fn test_round_trip_every_category() {
        let db = test_db().await;
        let repo = db.products();

        for category in Category::ALL {
            let mut product = Product::new(
                format!("{} item", category.as_str()),
                "Category probe",
                Price::from_cents(100),
                true,
                category,
            );
            let id = repo.create(&mut product).await.unwrap();
            let found = repo.find(id).await.unwrap().unwrap();
            assert_eq!(found.category, category);
        }

        assert_eq!(repo.count().await.unwrap(), Category::ALL.len() as i64);
    }
}

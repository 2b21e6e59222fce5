//! File-backed persistence tests.
//!
//! The repository unit tests run against in-memory databases; these cover
//! what only shows up with a real file: rows surviving a close/reopen
//! cycle, migration bookkeeping, and keys never being reused.

use std::path::Path;

use stockroom_core::{Category, Price, Product};
use stockroom_db::{migrations, Database, DbConfig};
use tempfile::TempDir;

async fn open(path: &Path) -> Database {
    Database::new(DbConfig::new(path)).await.unwrap()
}

fn fedora() -> Product {
    Product::new(
        "Fedora",
        "A red hat",
        Price::from_cents(1250),
        true,
        Category::Clothes,
    )
}

#[tokio::test]
async fn test_products_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.db");

    let mut product = fedora();
    let id = {
        let db = open(&path).await;
        let id = db.products().create(&mut product).await.unwrap();
        db.close().await;
        id
    };

    let db = open(&path).await;
    assert!(db.health_check().await);

    let found = db.products().find(id).await.unwrap().unwrap();
    assert_eq!(found, product);
    assert_eq!(db.products().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_migration_status_reports_applied() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.db");

    let db = open(&path).await;
    let (total, applied) = migrations::migration_status(db.pool()).await.unwrap();

    assert!(total >= 1);
    assert_eq!(total, applied);

    // Reopening applies nothing new
    db.close().await;
    let db = open(&path).await;
    let (total_again, applied_again) = migrations::migration_status(db.pool()).await.unwrap();
    assert_eq!((total_again, applied_again), (total, applied));
}

#[tokio::test]
async fn test_keys_are_never_reused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.db");

    let db = open(&path).await;

    let mut first = fedora();
    let first_id = db.products().create(&mut first).await.unwrap();
    db.products().delete(&first).await.unwrap();
    db.close().await;

    // Even after deleting the newest row and restarting, the next key
    // moves forward
    let db = open(&path).await;
    let mut second = fedora();
    let second_id = db.products().create(&mut second).await.unwrap();

    assert!(second_id > first_id);
    assert!(db.products().find(first_id).await.unwrap().is_none());
}

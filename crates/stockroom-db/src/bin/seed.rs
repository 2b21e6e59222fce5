//! # Seed Data Generator
//!
//! Populates the database with catalog products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 240 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 100
//!
//! # Specify database path (otherwise DATABASE_URL, then ./stockroom.db)
//! cargo run -p stockroom-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! ## Generated Products
//! Creates catalog data across every category:
//! - Clothes (hats, pants, shirts)
//! - Food (produce, pantry staples)
//! - Housewares (pots, towels, lamps)
//! - Automotive (wipers, oil, filters)
//! - Tools (hammers, wrenches, saws)
//! - Unknown (uncategorized odd lots)
//!
//! Each product has:
//! - Name with a variant suffix ("Wrench, Deluxe")
//! - Deterministic price: $0.99 - $89.99
//! - Availability: roughly three in four available

use std::env;

use stockroom_core::{Category, Price, Product};
use stockroom_db::{Database, DbConfig};

/// Name pools per category.
const CATALOG: &[(Category, &[&str])] = &[
    (
        Category::Clothes,
        &[
            "Hat", "Pants", "Shirt", "Sweater", "Socks", "Scarf", "Jacket", "Belt",
        ],
    ),
    (
        Category::Food,
        &[
            "Apple", "Banana", "Bread", "Cheese", "Coffee", "Honey", "Pasta", "Rice",
        ],
    ),
    (
        Category::Housewares,
        &[
            "Pots", "Towels", "Blender", "Kettle", "Lamp", "Mirror", "Pillow", "Broom",
        ],
    ),
    (
        Category::Automotive,
        &[
            "Wiper Blades",
            "Motor Oil",
            "Car Jack",
            "Floor Mats",
            "Air Filter",
            "Spark Plugs",
            "Jumper Cables",
            "Tire Gauge",
        ],
    ),
    (
        Category::Tools,
        &[
            "Hammer",
            "Wrench",
            "Screwdriver",
            "Pliers",
            "Hand Saw",
            "Tape Measure",
            "Drill",
            "Level",
        ],
    ),
    (
        Category::Unknown,
        &["Mystery Box", "Surplus Crate", "Odd Lot", "Clearance Item"],
    ),
];

/// Variant suffixes with price addons (cents).
const VARIANTS: &[(&str, i64)] = &[
    ("Classic", 0),
    ("Budget", -50),
    ("Compact", 100),
    ("Large", 250),
    ("Deluxe", 500),
    ("Premium", 1000),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet by default; RUST_LOG=debug surfaces the repository logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 240;
    let mut db_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(240);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 240)");
                println!("  -d, --db <PATH>    Database file path (default: DATABASE_URL,");
                println!("                     then ./stockroom.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = match &db_path {
        Some(path) => DbConfig::new(path),
        None => DbConfig::from_env(),
    };

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Database: {}", config.database_path.display());
    println!("Products: {}", count);
    println!();

    // Connect to database
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Generate products
    println!();
    println!("Generating products...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'categories: for (category_idx, (category, names)) in CATALOG.iter().enumerate() {
        for (name_idx, name) in names.iter().enumerate() {
            for (variant_idx, (variant, price_addon)) in VARIANTS.iter().enumerate() {
                if generated >= count {
                    break 'categories;
                }

                let mut product = generate_product(
                    *category,
                    name,
                    variant,
                    *price_addon,
                    category_idx * 1000 + name_idx * 20 + variant_idx,
                );

                if let Err(e) = db.products().create(&mut product).await {
                    eprintln!("Failed to insert {}: {}", product.name, e);
                    continue;
                }

                generated += 1;

                if generated % 50 == 0 {
                    println!("  Generated {} products...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);
    if generated < count {
        println!("⚠ Name pool exhausted at {} products", generated);
    }
    println!(
        "  Rate: {:.0} products/second",
        generated as f64 / elapsed.as_secs_f64()
    );

    // Verify the lookups the catalog serves
    println!();
    println!("Verifying lookups...");
    for category in Category::ALL {
        let found = db.products().find_by_category(category).await?;
        println!("  Category {}: {} products", category, found.len());
    }

    let available = db.products().find_by_availability(true).await?;
    println!("  Available: {} products", available.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic pseudo-random fields.
fn generate_product(
    category: Category,
    name: &str,
    variant: &str,
    price_addon: i64,
    seed: usize,
) -> Product {
    // Base price $0.99 - $80.99, shifted by the variant addon
    let base_cents = 99 + ((seed * 17) % 8000) as i64;
    let price = Price::from_cents((base_cents + price_addon).max(49));

    // Roughly three in four products are available
    let available = seed % 4 != 0;

    let full_name = format!("{}, {}", name, variant);
    let description = format!("{} edition of {}", variant, name.to_lowercase());

    Product::new(full_name, description, price, available, category)
}

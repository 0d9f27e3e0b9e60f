//! # Seed Data Generator
//!
//! Fills an inventory database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! Output is deterministic: the same `--count` always yields the same rows.
//! Seeded products have no picture.

use std::env;
use stockroom_core::NewProduct;
use stockroom_db::{Database, DbConfig};

const DEFAULT_COUNT: usize = 200;
const DEFAULT_DB_PATH: &str = "./stockroom_dev.db";

/// Base names for generated products.
const NAMES: &[&str] = &[
    "Widget",
    "Gadget",
    "Sprocket",
    "Gear",
    "Bolt",
    "Nut",
    "Washer",
    "Bearing",
    "Spring",
    "Hinge",
    "Bracket",
    "Pulley",
    "Valve",
    "Gasket",
    "Clamp",
    "Rivet",
];

/// Variants appended to each base name.
const VARIANTS: &[&str] = &[
    "Mini", "Standard", "Large", "Steel", "Brass", "Nylon", "Blue", "Red",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from(DEFAULT_DB_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  -c, --count <N>    Number of products to generate (default: {})",
                    DEFAULT_COUNT
                );
                println!(
                    "  -d, --db <PATH>    Database file path (default: {})",
                    DEFAULT_DB_PATH
                );
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    // Inserts run one after another; a single connection is enough
    let config = DbConfig::new(&db_path)
        .max_connections(1)
        .min_connections(1);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let products = db.products();

    let existing = products.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    for seed in 0..count {
        let product = generate_product(seed);

        if let Err(e) = products.create(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }

        generated += 1;

        if generated % 50 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    let out_of_stock = products
        .list()
        .await?
        .iter()
        .filter(|p| p.is_out_of_stock())
        .count();
    println!("  Out of stock: {}", out_of_stock);

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Generates a single product from its index.
fn generate_product(seed: usize) -> NewProduct {
    let base = NAMES[seed % NAMES.len()];
    let variant = VARIANTS[(seed / NAMES.len()) % VARIANTS.len()];
    let batch = seed / (NAMES.len() * VARIANTS.len());

    let name = if batch == 0 {
        format!("{} {}", variant, base)
    } else {
        format!("{} {} #{}", variant, base, batch + 1)
    };

    // 0.99 - 49.98 in minor units
    let price = 99 + ((seed * 37) % 4900) as i64;

    // Every 9th product starts out of stock
    let quantity = if seed % 9 == 0 {
        0
    } else {
        ((seed * 13) % 60) as i64 + 1
    };

    NewProduct::new(name, quantity, price)
}

//! # Seed Data Generator
//!
//! Populates the inventory collection with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default) against $MONGODB_URI
//! cargo run -p stock-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stock-db --bin seed -- --count 200
//!
//! # Explicit server and database
//! cargo run -p stock-db --bin seed -- --uri mongodb://localhost:27017 --db stock_dev
//! ```
//!
//! Each product has:
//! - Slug: `{item}-{color}` in lowercase, e.g. `widget-blue`
//! - Quantity: 0 - 40
//! - Price: 5.00 - 204.99

use std::env;
use std::time::Instant;

use serde_json::json;
use stock_core::{SlugQuery, DEFAULT_DATABASE};
use stock_db::{Database, DbConfig, InventoryStore, ProductDocument};

const ITEMS: &[&str] = &[
    "widget", "gadget", "sprocket", "gizmo", "bracket", "hinge", "bolt", "washer", "spring",
    "valve",
];

const COLORS: &[&str] = &["red", "blue", "green", "black", "white"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut uri = env::var("MONGODB_URI").ok();
    let mut db_name = String::from(DEFAULT_DATABASE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--uri" | "-u" => {
                if i + 1 < args.len() {
                    uri = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_name = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stock Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -u, --uri <URI>    MongoDB connection string (default: $MONGODB_URI)");
                println!("  -d, --db <NAME>    Database name (default: {})", DEFAULT_DATABASE);
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let Some(uri) = uri else {
        eprintln!("No connection string: pass --uri or set MONGODB_URI");
        std::process::exit(1);
    };

    println!("🌱 Stock Inventory Seed Data Generator");
    println!("======================================");
    println!("Database: {}", db_name);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(uri).database(db_name).app_name("stock-seed"));
    if !db.health_check().await {
        eprintln!("✗ Database did not answer a ping");
        std::process::exit(1);
    }
    println!("✓ Connected to database");

    let repo = db.products();
    let existing = repo.count().await?;
    if existing > 0 {
        println!("⚠ Collection already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Drop the collection to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let mut generated = 0;
    let start = Instant::now();

    for seed in 0..count {
        let product = generate_product(seed);
        if let Err(e) = repo.insert(product).await {
            eprintln!("Failed to insert product {}: {}", seed, e);
            continue;
        }

        generated += 1;
        if generated % 100 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    println!();
    println!("Verifying search...");
    let results = repo.search(&SlugQuery::new("wid")).await?;
    println!("  Search 'wid': {} results", results.len());

    let results = repo.search(&SlugQuery::new("BLUE")).await?;
    println!("  Search 'BLUE': {} results", results.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates one product document. Slugs repeat once `seed` exceeds the
/// item/color combinations, with a numeric suffix to keep them distinct.
fn generate_product(seed: usize) -> ProductDocument {
    let item = ITEMS[seed % ITEMS.len()];
    let color = COLORS[(seed / ITEMS.len()) % COLORS.len()];
    let round = seed / (ITEMS.len() * COLORS.len());

    let slug = if round == 0 {
        format!("{}-{}", item, color)
    } else {
        format!("{}-{}-{}", item, color, round + 1)
    };

    let quantity = (seed * 7 % 41) as i64;
    let price = 5.0 + ((seed * 1997) % 20000) as f64 / 100.0;

    let mut doc = ProductDocument::new();
    doc.insert("slug".into(), json!(slug));
    doc.insert("quantity".into(), json!(quantity));
    doc.insert("price".into(), json!(price));
    doc
}

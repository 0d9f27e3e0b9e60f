//! # Stockroom Entry Point
//!
//! Headless runner: opens the inventory and prints the list screen.
//!
//! ## Usage
//! ```bash
//! # Table output
//! cargo run -p stockroom-app
//!
//! # Same rows as JSON (what a UI would receive)
//! cargo run -p stockroom-app -- --json
//!
//! # Use another database file
//! STOCKROOM_DB_PATH=./stockroom_dev.db cargo run -p stockroom-app
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Determine database path (app data directory)
//! 3. Connect to database & run migrations
//! 4. Load configuration
//! 5. Run `list_products` and print the rows

use std::env;

use stockroom_app::commands::product::list_products;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    stockroom_app::init_tracing();

    let json = env::args().skip(1).any(|arg| arg == "--json");

    let db_path = stockroom_app::database_path()?;
    let (db, config) = stockroom_app::bootstrap(db_path).await?;

    let rows = list_products(&db, &config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No products yet.");
    } else {
        println!("{:>6}  {:<32} {:>8} {:>12}", "ID", "NAME", "QTY", "PRICE");
        for row in &rows {
            println!(
                "{:>6}  {:<32} {:>8} {:>12}",
                row.id, row.name, row.quantity, row.price
            );
        }
    }

    db.inner().close().await;
    Ok(())
}

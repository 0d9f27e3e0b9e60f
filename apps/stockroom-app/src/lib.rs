//! # Stockroom App Library
//!
//! Command layer for the Stockroom inventory. A UI (or the headless
//! runner in `main.rs`) calls these commands; they validate screen input,
//! talk to the store and return serializable DTOs.
//!
//! ## Module Organization
//! ```text
//! stockroom_app/
//! ├── lib.rs          ◄─── You are here (logging, db path, bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── List/detail/editor commands
//! │   ├── stock.rs    ◄─── Sale and +/- commands
//! │   └── supplier.rs ◄─── "Order more" command
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Screen Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  List screen                                                           │
//! │    rows ─────────────► list_products                                   │
//! │    "sale" button ────► sell_one                                        │
//! │    "delete all" ─────► delete_all_products                             │
//! │                                                                         │
//! │  Detail screen                                                         │
//! │    load ─────────────► get_product                                     │
//! │    + / - ────────────► adjust_stock                                    │
//! │    save ─────────────► save_product_detail                             │
//! │    delete ───────────► delete_product                                  │
//! │    order ────────────► order_from_supplier                             │
//! │                                                                         │
//! │  Editor screen                                                         │
//! │    save ─────────────► create_product / update_product                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, DbState};
use stockroom_db::{Database, DbConfig, DbResult};

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "inventory.db";

/// Opens the inventory and loads configuration.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DbState: Wraps Database connection                                │
/// │     • ConfigState: Defaults overlaid with STOCKROOM_* variables         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn bootstrap(db_path: PathBuf) -> DbResult<(DbState, ConfigState)> {
    info!(?db_path, "Starting Stockroom");

    let db = Database::new(DbConfig::new(db_path)).await?;
    info!("Database connected and migrations applied");

    let config = ConfigState::from_env();
    info!(
        supplier = %config.supplier_email,
        currency = %config.price_format.symbol,
        "Configuration loaded"
    );

    Ok((DbState::new(db), config))
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for command output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: `info,stockroom=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.stockroom.inventory/inventory.db`
/// - **Windows**: `%APPDATA%\stockroom\inventory\data\inventory.db`
/// - **Linux**: `~/.local/share/inventory/inventory.db`
///
/// ## Development Override
/// Set `STOCKROOM_DB_PATH` environment variable to use a custom path.
pub fn database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("STOCKROOM_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "stockroom", "inventory")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join(DB_FILE_NAME))
}

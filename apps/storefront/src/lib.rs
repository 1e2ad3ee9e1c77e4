//! # Grocer Storefront Library
//!
//! The application layer of the Grocer storefront: the store container,
//! checkout orchestration, configuration, view commands and a terminal shell.
//!
//! ## Module Organization
//! ```text
//! grocer_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Store: RootState in a watch channel + selectors
//! │   ├── checkout.rs ◄─── checkout_cart orchestration and events
//! │   └── config.rs   ◄─── AppConfig (TOML + environment)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog load, product listing
//! │   └── cart.rs     ◄─── Cart page, cart link, checkout
//! ├── shell.rs        ◄─── Line-oriented view over stdin/stdout
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## One Store Per Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Ownership                                      │
//! │                                                                         │
//! │   run() ──► Store::new() ──┬──► commands (borrow &Store)               │
//! │                            ├──► checkout_cart (borrow &Store)          │
//! │                            └──► shell (borrow &Store)                  │
//! │                                                                         │
//! │   Tests build their own Store with Store::from_state(...).             │
//! │   Nothing is global.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::path::PathBuf;

use grocer_api::MockBackend;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppResult;
use state::{AppConfig, Store};

/// Runs the storefront shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr            │
/// │     • Default: info,grocer=debug, can be overridden with RUST_LOG      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • First argument as config path, else the platform config dir      │
/// │     • GROCER_* environment overrides                                   │
/// │                                                                         │
/// │  3. Build Backend & Store ────────────────────────────────────────────► │
/// │     • MockBackend from AppConfig::mock_config()                        │
/// │     • Store::new(): empty cart, READY, empty catalog                   │
/// │                                                                         │
/// │  4. Load Products ────────────────────────────────────────────────────► │
/// │                                                                         │
/// │  5. Run Shell ────────────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> AppResult<()> {
    init_tracing();

    info!("Starting Grocer storefront");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path)?;
    info!(
        checkout_delay_ms = config.backend.checkout_delay_ms,
        "Configuration loaded"
    );

    let backend = MockBackend::new(config.mock_config());
    let store = Store::new();

    commands::product::load_products(&store, &backend).await?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell::run_shell(&store, &backend, stdin, &mut stdout).await?;

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grocer=trace` - Show trace for grocer crates only
/// - Default: INFO, DEBUG for grocer crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,grocer=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

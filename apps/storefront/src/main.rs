//! # Grocer Storefront Entry Point
//!
//! ```text
//! storefront [CONFIG_PATH]
//!
//!   stdin  ──► shell commands (products, add, qty, rm, cart, checkout, quit)
//!   stdout ──► rendered views
//!   stderr ──► tracing output (RUST_LOG)
//! ```

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for testability
    if let Err(err) = grocer_storefront::run().await {
        eprintln!("storefront: {err}");
        std::process::exit(1);
    }
}

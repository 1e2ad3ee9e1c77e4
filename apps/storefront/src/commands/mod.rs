//! # View Commands
//!
//! Everything a view calls. Each command takes the [`Store`] it acts on
//! explicitly, plus the backend when it talks to one.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog load, product listing
//! └── cart.rs     ◄─── Cart page, cart link, checkout
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  View event                                                             │
//! │  ──────────                                                             │
//! │  "qty 207 4" typed in the shell                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  update_quantity_from_input(&store, "207", "4")                         │
//! │         │                                                               │
//! │         │ (dispatch)                                                    │
//! │         ▼                                                               │
//! │  Store ──► grocer_core::root::reduce ──► new RootState                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart_view(&store) ──► CartView (serializable for any renderer)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Store`]: crate::state::Store

pub mod cart;
pub mod product;

//! # Storefront Shell
//!
//! A line-oriented view over the store, reading commands from any async
//! reader and rendering to any writer.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products            list the catalog                                   │
//! │  add <id>            add one unit                                       │
//! │  qty <id> <text>     set a quantity from free text (bad text → 0)       │
//! │  rm <id>             remove a line                                      │
//! │  cart                show the cart page                                 │
//! │  json                cart page as JSON                                  │
//! │  checkout            submit the cart and wait for the answer            │
//! │  help                this list                                          │
//! │  quit                leave                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use grocer_api::ShopBackend;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::commands::cart::{self as cart_cmd, CartView};
use crate::commands::product::{self as product_cmd, ProductCard};
use crate::error::AppResult;
use crate::state::{CheckoutPhase, Store};

const HELP: &str = "\
commands:
  products            list the catalog
  add <id>            add one unit
  qty <id> <text>     set a quantity
  rm <id>             remove a line
  cart                show the cart
  json                show the cart as JSON
  checkout            submit the cart
  quit                leave";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Products,
    Add(String),
    Quantity { id: String, input: String },
    Remove(String),
    Cart,
    Json,
    Checkout,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses a non-blank line. The error is the message shown to the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let id = |usage: &str| -> Result<String, String> {
            match rest.split_whitespace().next() {
                Some(id) => Ok(id.to_string()),
                None => Err(format!("usage: {usage}")),
            }
        };

        match verb {
            "products" | "ls" => Ok(ShellCommand::Products),
            "add" => Ok(ShellCommand::Add(id("add <id>")?)),
            "rm" | "remove" => Ok(ShellCommand::Remove(id("rm <id>")?)),
            "qty" => {
                let id = id("qty <id> <quantity>")?;
                let input = rest[id.len()..].trim().to_string();
                Ok(ShellCommand::Quantity { id, input })
            }
            "cart" => Ok(ShellCommand::Cart),
            "json" => Ok(ShellCommand::Json),
            "checkout" => Ok(ShellCommand::Checkout),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command '{other}', try 'help'")),
        }
    }
}

/// Runs the command loop until `quit` or end of input.
pub async fn run_shell<B, R, W>(store: &Store, backend: &B, input: R, out: &mut W) -> AppResult<()>
where
    B: ShopBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        debug!(?command, "shell command");

        match command {
            ShellCommand::Products => render_products(out, &product_cmd::list_products(store))?,
            ShellCommand::Add(id) => {
                cart_cmd::add_to_cart(store, &id);
                render_link(out, store)?;
            }
            ShellCommand::Quantity { id, input } => {
                let quantity = cart_cmd::update_quantity_from_input(store, &id, &input);
                writeln!(out, "{id} x{quantity}")?;
                render_link(out, store)?;
            }
            ShellCommand::Remove(id) => {
                cart_cmd::remove_from_cart(store, &id);
                render_link(out, store)?;
            }
            ShellCommand::Cart => render_cart(out, &cart_cmd::cart_view(store))?,
            ShellCommand::Json => {
                serde_json::to_writer_pretty(&mut *out, &cart_cmd::cart_view(store))?;
                writeln!(out)?;
            }
            ShellCommand::Checkout => {
                let mut events = store.checkout_events();
                cart_cmd::checkout(store, backend).await;
                while let Ok(event) = events.try_recv() {
                    writeln!(out, "checkout: {}", describe_phase(&event.phase))?;
                }
                render_cart(out, &cart_cmd::cart_view(store))?;
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => break,
        }
    }

    out.flush()?;
    Ok(())
}

fn describe_phase(phase: &CheckoutPhase) -> String {
    match phase {
        CheckoutPhase::Pending => "pending".to_string(),
        CheckoutPhase::Fulfilled(response) if response.success => "succeeded".to_string(),
        CheckoutPhase::Fulfilled(_) => "declined".to_string(),
        CheckoutPhase::Rejected(message) if message.is_empty() => "failed".to_string(),
        CheckoutPhase::Rejected(message) => format!("failed ({message})"),
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn render_products<W: Write>(out: &mut W, cards: &[ProductCard]) -> std::io::Result<()> {
    if cards.is_empty() {
        return writeln!(out, "No products loaded");
    }

    for card in cards {
        writeln!(out, "{:<6} {:<14} {:>8}  {}", card.id, card.name, card.price, card.description)?;
    }
    Ok(())
}

fn render_cart<W: Write>(out: &mut W, view: &CartView) -> std::io::Result<()> {
    writeln!(out, "Shopping Cart [{}]", view.checkout_state)?;
    for row in &view.rows {
        writeln!(
            out,
            "  {:<14} x{:<4} {:>8} {:>9}",
            row.name, row.quantity, row.unit_price, row.line_total
        )?;
    }
    writeln!(out, "  Total {:>32}", view.total)?;

    if let Some(message) = &view.error_msg {
        writeln!(out, "  ! {message}")?;
    }
    Ok(())
}

fn render_link<W: Write>(out: &mut W, store: &Store) -> std::io::Result<()> {
    writeln!(out, "cart: {}", cart_cmd::cart_link_label(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::load_products;
    use grocer_api::MockBackend;

    async fn run(script: &str) -> (Store, String) {
        let store = Store::new();
        let backend = MockBackend::instant();
        load_products(&store, &backend).await.unwrap();

        let mut out = Vec::new();
        run_shell(&store, &backend, script.as_bytes(), &mut out)
            .await
            .unwrap();
        (store, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("products"), Ok(ShellCommand::Products));
        assert_eq!(
            ShellCommand::parse("  add 207 "),
            Ok(ShellCommand::Add("207".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("qty 207 3 boxes"),
            Ok(ShellCommand::Quantity {
                id: "207".to_string(),
                input: "3 boxes".to_string()
            })
        );
        assert_eq!(
            ShellCommand::parse("qty 207"),
            Ok(ShellCommand::Quantity {
                id: "207".to_string(),
                input: String::new()
            })
        );
        assert_eq!(ShellCommand::parse("quit"), Ok(ShellCommand::Quit));
        assert!(ShellCommand::parse("add").is_err());
        assert!(ShellCommand::parse("dance").is_err());
    }

    #[tokio::test]
    async fn test_add_and_show_cart() {
        let (store, out) = run("add 207\nadd 207\ncart\nquit\n").await;

        assert!(out.contains("cart: 1"));
        assert!(out.contains("cart: 2"));
        assert!(out.contains("Bananas"));
        assert!(out.contains("$4.98"));
        assert_eq!(store.num_items(), 2);
    }

    #[tokio::test]
    async fn test_quantity_text() {
        let (store, out) = run("add 112\nqty 112 nope\n").await;

        assert!(out.contains("112 x0"));
        assert!(out.contains("cart: Cart"));
        assert_eq!(store.with_state(|s| s.cart.quantity("112")), Some(0));
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let (store, out) = run("add 112\nadd 158\ncheckout\n").await;

        assert!(out.contains("checkout: pending"));
        assert!(out.contains("checkout: succeeded"));
        assert!(out.contains("Shopping Cart [READY]"));
        assert!(store.state().cart.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_empty_shows_message() {
        let (_, out) = run("checkout\n").await;

        assert!(out.contains("checkout: failed (Must include cart items)"));
        assert!(out.contains("Shopping Cart [ERROR]"));
        assert!(out.contains("! Must include cart items"));
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (store, _) = run("quit\nadd 207\n").await;
        assert_eq!(store.num_items(), 0);
    }

    #[tokio::test]
    async fn test_unknown_command_reported() {
        let (_, out) = run("dance\n\nhelp\n").await;
        assert!(out.contains("unknown command 'dance'"));
        assert!(out.contains("commands:"));
    }

    #[tokio::test]
    async fn test_json_view() {
        let (_, out) = run("add 502\njson\n").await;
        assert!(out.contains("\"checkoutState\": \"READY\""));
        assert!(out.contains("\"total\": \"$0.89\""));
    }
}

//! # Checkout Orchestration
//!
//! Drives one checkout attempt from the current cart to a terminal state.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    checkout_cart(store, backend)                        │
//! │                                                                         │
//! │  1. Snapshot cart items                                                 │
//! │  2. dispatch(CheckoutPending)        ──► LOADING   (before any await)  │
//! │  3. backend.checkout(snapshot).await   (single suspension point)       │
//! │       │                                                                 │
//! │       ├── Ok({success: true})        ──► READY, items cleared          │
//! │       ├── Ok({success: false})       ──► ERROR, items kept             │
//! │       └── Err(e)                     ──► ERROR, error_msg = message    │
//! │                                                                         │
//! │  Every attempt publishes exactly two CheckoutEvents on the store's      │
//! │  broadcast channel: Pending, then Fulfilled or Rejected.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing stops a second attempt while one is in flight. Both run to
//! completion and the last one to settle decides the final state.

use grocer_api::ShopBackend;
use grocer_core::{CartAction, CheckoutResponse, CheckoutState};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::store::Store;

/// Where a checkout attempt stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "payload", rename_all = "camelCase")]
pub enum CheckoutPhase {
    Pending,
    Fulfilled(CheckoutResponse),
    Rejected(String),
}

impl CheckoutPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CheckoutPhase::Pending)
    }
}

impl From<CheckoutPhase> for CartAction {
    fn from(phase: CheckoutPhase) -> Self {
        match phase {
            CheckoutPhase::Pending => CartAction::CheckoutPending,
            CheckoutPhase::Fulfilled(response) => CartAction::CheckoutFulfilled(response),
            CheckoutPhase::Rejected(message) => CartAction::CheckoutRejected(message),
        }
    }
}

/// One lifecycle transition of one checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutEvent {
    pub attempt: Uuid,
    #[serde(flatten)]
    pub phase: CheckoutPhase,
}

/// Submits the current cart and folds the outcome into `store`.
///
/// Never fails: backend errors become a `Rejected` phase. Returns the
/// terminal phase that was dispatched.
pub async fn checkout_cart<B: ShopBackend>(store: &Store, backend: &B) -> CheckoutPhase {
    let attempt = Uuid::new_v4();
    let (items, in_flight) = store.with_state(|state| {
        (
            state.cart.items.as_ref().clone(),
            state.cart.checkout_state == CheckoutState::Loading,
        )
    });

    if in_flight {
        warn!(%attempt, "Checkout started while another is in flight");
    }

    transition(store, attempt, CheckoutPhase::Pending);
    info!(%attempt, lines = items.len(), "Checkout submitted");

    let outcome = match backend.checkout(items).await {
        Ok(response) => {
            if response.success {
                info!(%attempt, "Checkout succeeded");
            } else {
                warn!(%attempt, "Checkout declined");
            }
            CheckoutPhase::Fulfilled(response)
        }
        Err(err) => {
            warn!(%attempt, error = %err, "Checkout failed");
            CheckoutPhase::Rejected(err.failure_message())
        }
    };

    transition(store, attempt, outcome.clone());
    outcome
}

fn transition(store: &Store, attempt: Uuid, phase: CheckoutPhase) {
    store.dispatch(CartAction::from(phase.clone()));
    store.publish(CheckoutEvent { attempt, phase });
}

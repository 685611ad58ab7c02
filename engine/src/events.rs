//! Event channel for ledger notifications
//!
//! The ledger owns an explicit emitter rather than publishing through a
//! process-wide bus. UI layers subscribe with a callback and drop the
//! returned handle to stop receiving events, mirroring mounting and
//! unmounting a view. Events carry structured data only; presentation
//! text belongs to the subscriber.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use serde::Serialize;

use shared::models::{StockStatus, TransactionType};
use shared::types::StockItemId;

/// Notification raised by a ledger mutation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    ProductAdded {
        item_id: StockItemId,
        part_number: String,
        name: String,
    },
    StockUpdated {
        item_id: StockItemId,
        part_number: String,
        transaction_type: TransactionType,
        quantity: u32,
        new_stock: u32,
        status: StockStatus,
    },
    BatchProcessed {
        reference: String,
        transaction_type: TransactionType,
        lines: usize,
    },
    ImportApplied {
        added: usize,
        updated: usize,
    },
}

type Callback = Box<dyn Fn(&LedgerEvent) + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
}

/// Callback-based event emitter passed by reference to whoever raises events
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every subsequent event
    ///
    /// Callbacks run on the emitting thread while the registry is borrowed;
    /// a callback must not subscribe or unsubscribe from inside itself.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&LedgerEvent) + Send + 'static,
    {
        let mut registry = self.lock_registry();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, Box::new(callback)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.lock_registry().subscribers.len()
    }

    pub(crate) fn emit(&self, event: LedgerEvent) {
        tracing::debug!("Ledger event: {:?}", event);
        let registry = self.lock_registry();
        for (_, callback) in &registry.subscribers {
            callback(&event);
        }
    }

    fn lock_registry(&self) -> MutexGuard<'_, Registry> {
        // A subscriber panic must not wedge the channel for the rest of
        // the process
        self.registry.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Handle for an active subscription; dropping it tears the callback down
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(|e| e.into_inner());
            registry.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

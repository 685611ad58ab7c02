//! Core engine for the AutoParts Manager dashboard
//!
//! Owns the in-memory inventory ledger (stock items, transaction log,
//! derived alerts) and the spreadsheet import pipeline consumed by the
//! UI layers.

pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod import;
pub mod ledger;
pub mod sample;

pub use config::Config;
pub use error::{LedgerError, LedgerResult};
pub use events::{EventBus, LedgerEvent, Subscription};
pub use import::{validate_inventory_file, validate_inventory_file_capped, ImportReport};
pub use ledger::{
    BatchKind, BatchLine, ImportSummary, InventoryLedger, NewProductInput, StockUpdateInput,
};

//! Error handling for the inventory engine
//!
//! Ledger operations report expected business-rule rejections and malformed
//! input as typed values; nothing here should reach the UI as a panic.

use thiserror::Error;

use shared::types::StockItemId;

/// Errors returned by ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // Business-rule rejections
    #[error("A product with part number {0} already exists")]
    DuplicatePartNumber(String),

    #[error("Stock item {0} not found")]
    ItemNotFound(StockItemId),

    #[error(
        "Insufficient stock for {part_number}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        part_number: String,
        requested: u32,
        available: u32,
    },

    // Malformed input
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },
}

impl LedgerError {
    /// Stable code for the UI layer to key toasts and translations on
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::DuplicatePartNumber(_) => "DUPLICATE_PART_NUMBER",
            LedgerError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            LedgerError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            LedgerError::Validation { .. } => "VALIDATION_ERROR",
        }
    }

    /// Whether this is an expected business-rule rejection rather than
    /// malformed input
    pub fn is_business_rule(&self) -> bool {
        !matches!(self, LedgerError::Validation { .. })
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

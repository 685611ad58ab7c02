//! Inventory transaction models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{StockItemId, TransactionId};

/// An immutable ledger entry recording one stock movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub transaction_type: TransactionType,
    /// Weak reference to the stock item; resolved by lookup, never owned
    pub item_id: StockItemId,
    /// Part number snapshot taken when the movement was recorded
    pub part_number: String,
    /// Absolute magnitude of the movement; for adjustments, the new level
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_value: Decimal,
    /// Originating document: invoice id, purchase order id, "Initial Stock"
    pub reference: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub customer_id: Option<String>,
    pub supplier_id: Option<String>,
}

/// Types of stock movements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Purchase,
    /// Sets stock to an absolute level rather than applying a delta
    Adjustment,
    Return,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Sale => write!(f, "sale"),
            TransactionType::Purchase => write!(f, "purchase"),
            TransactionType::Adjustment => write!(f, "adjustment"),
            TransactionType::Return => write!(f, "return"),
        }
    }
}

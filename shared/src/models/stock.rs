//! Stock item models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::StockItemId;

/// A sellable part tracked by the inventory ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    /// Unique business key
    pub part_number: String,
    pub oem_part_number: Option<String>,
    pub name: String,
    pub brand: String,
    /// Free-text vehicle compatibility
    pub vehicle: String,
    pub category: String,
    pub cost_price: Decimal,
    pub selling_price: Decimal,
    pub stock: u32,
    pub min_stock_level: u32,
    pub status: StockStatus,
    pub location: Option<String>,
    pub supplier: Option<String>,
}

impl StockItem {
    /// Recompute `status` from the current stock level and threshold
    pub fn refresh_status(&mut self) {
        self.status = derive_stock_status(self.stock, self.min_stock_level);
    }
}

/// Stock level classification shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "In Stock"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

/// Derive the status label for a stock level against its threshold
pub fn derive_stock_status(stock: u32, min_stock_level: u32) -> StockStatus {
    if stock == 0 {
        StockStatus::OutOfStock
    } else if stock <= min_stock_level {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

//! Low stock alert models

use serde::{Deserialize, Serialize};

use crate::types::StockItemId;

/// Derived warning that an item sits at or below its stock threshold
///
/// Alerts are regenerated wholesale from the item list after every
/// mutation; they are never persisted on their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockAlert {
    pub item_id: StockItemId,
    pub part_number: String,
    pub item_name: String,
    pub current_stock: u32,
    pub min_stock_level: u32,
    pub severity: AlertSeverity,
}

/// Alert severity buckets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    /// Above half the threshold but at or below the threshold
    Low,
    /// At or below half the threshold, with stock remaining
    Critical,
    /// Nothing left on the shelf
    OutOfStock,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Low => write!(f, "low"),
            AlertSeverity::Critical => write!(f, "critical"),
            AlertSeverity::OutOfStock => write!(f, "out-of-stock"),
        }
    }
}

/// Classify the alert severity for a stock level against its threshold
///
/// Returns `None` when the level is above the threshold and no alert is
/// warranted. The half-threshold boundary uses integer division, which
/// agrees with the fractional comparison for whole-number stock counts.
pub fn classify_alert_severity(stock: u32, min_stock_level: u32) -> Option<AlertSeverity> {
    if stock == 0 {
        Some(AlertSeverity::OutOfStock)
    } else if stock <= min_stock_level / 2 {
        Some(AlertSeverity::Critical)
    } else if stock <= min_stock_level {
        Some(AlertSeverity::Low)
    } else {
        None
    }
}

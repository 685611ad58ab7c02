//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// Identifier of a stock item, assigned at creation as `max existing id + 1`
pub type StockItemId = u32;

/// Identifier of a ledger transaction, strictly increasing within a process
pub type TransactionId = u64;

/// Inclusive date range for movement queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

impl DateRange {
    pub fn new(start: chrono::NaiveDate, end: chrono::NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether a calendar day falls inside the range (both ends inclusive)
    pub fn contains(&self, date: chrono::NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

//! Spreadsheet import DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated, normalized spreadsheet row
///
/// Produced by the import validator and consumed by the ledger's apply
/// step; transient, never stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryRecord {
    pub part_number: String,
    /// Empty string when the column or cell is absent
    pub oem_part_number: String,
    pub part_name: String,
    pub brand: String,
    /// Empty string when the column or cell is absent
    pub vehicle_compatibility: String,
    pub cost_price: Decimal,
    pub selling_price: Decimal,
    pub quantity: u32,
    pub category: String,
    /// Empty string when the column or cell is absent
    pub sub_category: String,
}

//! WebAssembly module for the AutoParts Manager dashboard
//!
//! Provides client-side computation for:
//! - Spreadsheet import validation before anything touches the ledger
//! - Stock status and alert severity classification
//! - Import template generation for download

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

use auto_parts_engine::export;
use auto_parts_engine::import::validate_inventory_file;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate a CSV inventory file and return the report as a JSON string
#[wasm_bindgen]
pub fn validate_inventory_csv(data: &[u8]) -> Result<String, JsValue> {
    let report = validate_inventory_file(data);
    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Could not serialize report: {}", e)))
}

/// Classify a stock level against its minimum threshold
#[wasm_bindgen]
pub fn stock_status(stock: u32, min_stock_level: u32) -> String {
    format!("{}", derive_stock_status(stock, min_stock_level))
}

/// Classify alert severity for a stock level, or undefined when no alert applies
#[wasm_bindgen]
pub fn alert_severity(stock: u32, min_stock_level: u32) -> Option<String> {
    classify_alert_severity(stock, min_stock_level).map(|severity| format!("{}", severity))
}

/// Build the downloadable import template as CSV bytes
#[wasm_bindgen]
pub fn build_import_template() -> Result<Vec<u8>, JsValue> {
    export::write_import_template()
        .map_err(|e| JsValue::from_str(&format!("Could not build template: {}", e)))
}

/// Suggested filename for an import template downloaded today
#[wasm_bindgen]
pub fn template_filename() -> String {
    export::template_filename(today())
}

/// Suggested filename for an inventory export downloaded today
#[wasm_bindgen]
pub fn export_filename() -> String {
    export::export_filename(today())
}

fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

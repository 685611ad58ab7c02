//! Spreadsheet import validator
//!
//! Converts an uploaded CSV file into validated inventory records plus a
//! list of human-readable error strings, without touching the ledger.
//! Rows are judged independently; one bad row never stops the rest, and
//! parser failures come back as a single report-level error instead of
//! escaping to the caller.

use std::io::Read;

use serde::Serialize;

use shared::models::InventoryRecord;
use shared::validation;

/// Columns that must all be present in the header row
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Part Number",
    "Part Name",
    "Brand",
    "Cost Price",
    "Selling Price",
    "Quantity",
    "Category",
];

/// Columns that may be present; absent columns or cells default to ""
pub const OPTIONAL_COLUMNS: [&str; 3] =
    ["OEM Part Number", "Vehicle Compatibility", "Sub Category"];

/// Result of validating one uploaded file
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImportReport {
    /// True only when every processed row passed
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub records: Vec<InventoryRecord>,
    /// Non-blank data rows examined
    pub total_rows: usize,
    pub valid_rows: usize,
}

impl ImportReport {
    fn failure(message: String) -> Self {
        Self {
            is_valid: false,
            errors: vec![message],
            records: Vec::new(),
            total_rows: 0,
            valid_rows: 0,
        }
    }
}

/// Validate an uploaded inventory file
pub fn validate_inventory_file<R: Read>(reader: R) -> ImportReport {
    validate_inventory_file_capped(reader, usize::MAX)
}

/// Validate an uploaded inventory file, rejecting files with more than
/// `max_rows` data rows
pub fn validate_inventory_file_capped<R: Read>(reader: R, max_rows: usize) -> ImportReport {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = match csv_reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => return ImportReport::failure(format!("Could not read the file: {}", e)),
    };

    let columns = match resolve_columns(&headers) {
        Ok(columns) => columns,
        Err(message) => return ImportReport::failure(message),
    };

    let mut errors = Vec::new();
    let mut records = Vec::new();
    let mut total_rows = 0usize;

    for (index, result) in csv_reader.records().enumerate() {
        // Row numbers count the header, so the first data row is row 2
        let row = index + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                total_rows += 1;
                errors.push(format!("Row {}: could not be read ({})", row, e));
                continue;
            }
        };
        if is_blank(&record) {
            continue;
        }
        total_rows += 1;
        if total_rows > max_rows {
            return ImportReport::failure(format!(
                "File exceeds the limit of {} data rows",
                max_rows
            ));
        }
        if let Some(valid) = validate_row(&columns, &record, row, &mut errors) {
            records.push(valid);
        }
    }

    let valid_rows = records.len();
    let is_valid = errors.is_empty();
    tracing::info!(
        "Validated import file: {} rows, {} valid, {} errors",
        total_rows,
        valid_rows,
        errors.len()
    );
    ImportReport {
        is_valid,
        errors,
        records,
        total_rows,
        valid_rows,
    }
}

/// Positions of the known columns within the header row
struct ColumnMap {
    part_number: usize,
    part_name: usize,
    brand: usize,
    cost_price: usize,
    selling_price: usize,
    quantity: usize,
    category: usize,
    oem_part_number: Option<usize>,
    vehicle_compatibility: Option<usize>,
    sub_category: Option<usize>,
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnMap, String> {
    let find = |name: &str| headers.iter().position(|header| header == name);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| find(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(format!("Missing required columns: {}", missing.join(", ")));
    }

    let require =
        |name: &str| find(name).ok_or_else(|| format!("Missing required columns: {}", name));

    Ok(ColumnMap {
        part_number: require("Part Number")?,
        part_name: require("Part Name")?,
        brand: require("Brand")?,
        cost_price: require("Cost Price")?,
        selling_price: require("Selling Price")?,
        quantity: require("Quantity")?,
        category: require("Category")?,
        oem_part_number: find("OEM Part Number"),
        vehicle_compatibility: find("Vehicle Compatibility"),
        sub_category: find("Sub Category"),
    })
}

fn validate_row(
    columns: &ColumnMap,
    record: &csv::StringRecord,
    row: usize,
    errors: &mut Vec<String>,
) -> Option<InventoryRecord> {
    let cell = |index: usize| record.get(index).unwrap_or("");

    let mut row_errors = Vec::new();

    let part_number = cell(columns.part_number);
    if let Err(message) = validation::validate_part_number(part_number) {
        row_errors.push(format!("Row {}: Part Number {}", row, message));
    }
    let part_name = cell(columns.part_name);
    if let Err(message) = validation::validate_required_text(part_name) {
        row_errors.push(format!("Row {}: Part Name {}", row, message));
    }
    let brand = cell(columns.brand);
    if let Err(message) = validation::validate_required_text(brand) {
        row_errors.push(format!("Row {}: Brand {}", row, message));
    }
    let category = cell(columns.category);
    if let Err(message) = validation::validate_required_text(category) {
        row_errors.push(format!("Row {}: Category {}", row, message));
    }

    let cost_price = match validation::parse_price(cell(columns.cost_price)) {
        Ok(amount) => Some(amount),
        Err(message) => {
            row_errors.push(format!("Row {}: Cost Price {}", row, message));
            None
        }
    };
    let selling_price = match validation::parse_price(cell(columns.selling_price)) {
        Ok(amount) => Some(amount),
        Err(message) => {
            row_errors.push(format!("Row {}: Selling Price {}", row, message));
            None
        }
    };
    let quantity = match validation::parse_quantity(cell(columns.quantity)) {
        Ok(quantity) => Some(quantity),
        Err(message) => {
            row_errors.push(format!("Row {}: Quantity {}", row, message));
            None
        }
    };

    if let (Some(cost), Some(sell)) = (cost_price, selling_price) {
        if validation::validate_price_pair(cost, sell).is_err() {
            row_errors.push(format!(
                "Row {}: Cost Price ({}) cannot be greater than Selling Price ({})",
                row, cost, sell
            ));
        }
    }

    if !row_errors.is_empty() {
        errors.extend(row_errors);
        return None;
    }

    Some(InventoryRecord {
        part_number: part_number.to_string(),
        oem_part_number: optional_cell(record, columns.oem_part_number),
        part_name: part_name.to_string(),
        brand: brand.to_string(),
        vehicle_compatibility: optional_cell(record, columns.vehicle_compatibility),
        cost_price: cost_price?,
        selling_price: selling_price?,
        quantity: quantity?,
        category: category.to_string(),
        sub_category: optional_cell(record, columns.sub_category),
    })
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|cell| cell.is_empty())
}

fn optional_cell(record: &csv::StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| record.get(i))
        .unwrap_or("")
        .to_string()
}

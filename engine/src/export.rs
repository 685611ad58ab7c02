//! Inventory export and import template generation
//!
//! Both files use the import column layout, so anything exported here can
//! be fed straight back through the validator.

use chrono::NaiveDate;
use thiserror::Error;

use shared::models::StockItem;

/// Column layout shared by the template and inventory exports
pub const EXPORT_COLUMNS: [&str; 10] = [
    "Part Number",
    "OEM Part Number",
    "Part Name",
    "Brand",
    "Vehicle Compatibility",
    "Cost Price",
    "Selling Price",
    "Quantity",
    "Category",
    "Sub Category",
];

/// Failures while building a CSV file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    Buffer(String),
}

/// Build the import template: headers plus a few example rows for guidance
pub fn write_import_template() -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(EXPORT_COLUMNS)?;
    for example in TEMPLATE_EXAMPLES {
        writer.write_record(example)?;
    }
    finish(writer)
}

const TEMPLATE_EXAMPLES: [[&str; 10]; 3] = [
    [
        "BP-2047",
        "04465-42160",
        "Front Brake Pad Set",
        "Bosch",
        "Toyota RAV4 2013-2018",
        "3500",
        "4800",
        "12",
        "Brakes",
        "Brake Pads",
    ],
    [
        "OF-1123",
        "90915-YZZE1",
        "Oil Filter",
        "Toyota",
        "Toyota Corolla 2008-2019",
        "450",
        "750",
        "40",
        "Filters",
        "Oil Filters",
    ],
    [
        "SP-0883",
        "",
        "Iridium Spark Plug",
        "NGK",
        "Honda Civic 2016-2021",
        "950",
        "1400",
        "24",
        "Ignition",
        "",
    ],
];

/// Export the current inventory in the import column layout
pub fn export_inventory(items: &[StockItem]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(EXPORT_COLUMNS)?;
    for item in items {
        writer.write_record(&[
            item.part_number.clone(),
            item.oem_part_number.clone().unwrap_or_default(),
            item.name.clone(),
            item.brand.clone(),
            item.vehicle.clone(),
            item.cost_price.to_string(),
            item.selling_price.to_string(),
            item.stock.to_string(),
            item.category.clone(),
            String::new(),
        ])?;
    }
    finish(writer)
}

/// Template filename for a given day, e.g. `Inventory_Template_2024-03-18.csv`
pub fn template_filename(date: NaiveDate) -> String {
    format!("Inventory_Template_{}.csv", date)
}

/// Export filename for a given day, e.g. `Inventory_Export_2024-03-18.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("Inventory_Export_{}.csv", date)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}

//! Built-in sample catalog for demonstrations and local development
//!
//! Seeded through the regular add-product path, so items arriving with
//! stock get their "Initial Stock" transactions like any other product.

use rust_decimal::Decimal;

use crate::error::LedgerResult;
use crate::ledger::{InventoryLedger, NewProductInput};

/// Seed the ledger with the demonstration catalog
pub fn seed(ledger: &mut InventoryLedger) -> LedgerResult<()> {
    for product in catalog() {
        ledger.add_product(product)?;
    }
    Ok(())
}

fn catalog() -> Vec<NewProductInput> {
    vec![
        NewProductInput {
            part_number: "BP-2047".into(),
            oem_part_number: Some("04465-42160".into()),
            name: "Front Brake Pad Set".into(),
            brand: "Bosch".into(),
            vehicle: "Toyota RAV4 2013-2018".into(),
            category: "Brakes".into(),
            cost_price: Decimal::from(3500u32),
            selling_price: Decimal::from(4800u32),
            stock: 12,
            min_stock_level: Some(8),
            location: Some("A1".into()),
            supplier: Some("AutoParts Direct".into()),
        },
        NewProductInput {
            part_number: "OF-1123".into(),
            oem_part_number: Some("90915-YZZE1".into()),
            name: "Oil Filter".into(),
            brand: "Toyota".into(),
            vehicle: "Toyota Corolla 2008-2019".into(),
            category: "Filters".into(),
            cost_price: Decimal::from(450u32),
            selling_price: Decimal::from(750u32),
            stock: 40,
            min_stock_level: Some(15),
            location: Some("A2".into()),
            supplier: Some("Toyota Kenya".into()),
        },
        NewProductInput {
            part_number: "SP-0883".into(),
            oem_part_number: None,
            name: "Iridium Spark Plug".into(),
            brand: "NGK".into(),
            vehicle: "Honda Civic 2016-2021".into(),
            category: "Ignition".into(),
            cost_price: Decimal::from(950u32),
            selling_price: Decimal::from(1400u32),
            stock: 24,
            min_stock_level: Some(12),
            location: Some("B1".into()),
            supplier: Some("Midland Auto".into()),
        },
        NewProductInput {
            part_number: "AF-3310".into(),
            oem_part_number: Some("1K0129620D".into()),
            name: "Engine Air Filter".into(),
            brand: "Mann-Filter".into(),
            vehicle: "VW Golf 2009-2013".into(),
            category: "Filters".into(),
            cost_price: Decimal::from(800u32),
            selling_price: Decimal::from(1250u32),
            stock: 4,
            min_stock_level: Some(10),
            location: Some("A3".into()),
            supplier: Some("AutoParts Direct".into()),
        },
        NewProductInput {
            part_number: "FB-7721".into(),
            oem_part_number: None,
            name: "Fan Belt".into(),
            brand: "Gates".into(),
            vehicle: "Nissan X-Trail 2014-2020".into(),
            category: "Engine".into(),
            cost_price: Decimal::from(1100u32),
            selling_price: Decimal::from(1650u32),
            stock: 8,
            min_stock_level: Some(10),
            location: Some("C2".into()),
            supplier: Some("Midland Auto".into()),
        },
        NewProductInput {
            part_number: "WB-5508".into(),
            oem_part_number: None,
            name: "Wiper Blade Set".into(),
            brand: "Valeo".into(),
            vehicle: "Universal fit".into(),
            category: "Accessories".into(),
            cost_price: Decimal::from(600u32),
            selling_price: Decimal::from(950u32),
            stock: 0,
            min_stock_level: Some(6),
            location: Some("D1".into()),
            supplier: None,
        },
        NewProductInput {
            part_number: "BT-1275".into(),
            oem_part_number: None,
            name: "Car Battery N70".into(),
            brand: "Chloride Exide".into(),
            vehicle: "Trucks & SUVs".into(),
            category: "Electrical".into(),
            cost_price: Decimal::from(9500u32),
            selling_price: Decimal::from(12500u32),
            stock: 6,
            min_stock_level: Some(4),
            location: Some("E1".into()),
            supplier: Some("Chloride Exide Ltd".into()),
        },
        NewProductInput {
            part_number: "CL-4409".into(),
            oem_part_number: Some("MD802600".into()),
            name: "Clutch Kit".into(),
            brand: "Luk".into(),
            vehicle: "Mitsubishi Lancer 2010-2016".into(),
            category: "Transmission".into(),
            cost_price: Decimal::from(14500u32),
            selling_price: Decimal::from(18900u32),
            stock: 3,
            min_stock_level: Some(5),
            location: Some("E4".into()),
            supplier: Some("AutoParts Direct".into()),
        },
    ]
}

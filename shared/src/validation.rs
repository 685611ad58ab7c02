//! Validation utilities for inventory data
//!
//! Pure field rules shared by the spreadsheet import validator and the
//! ledger's input checks. Error messages are phrased to read after a field
//! name, e.g. `"Cost Price" + "must be a non-negative number"`.

use std::str::FromStr;

use rust_decimal::Decimal;

// ============================================================================
// Text Fields
// ============================================================================

/// Validate a required free-text field (name, brand, category)
pub fn validate_required_text(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("is required");
    }
    Ok(())
}

/// Validate a part number (required, bounded length)
pub fn validate_part_number(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("is required");
    }
    if trimmed.len() > 64 {
        return Err("must be at most 64 characters");
    }
    Ok(())
}

// ============================================================================
// Numeric Fields
// ============================================================================

/// Parse a price cell into a non-negative decimal
pub fn parse_price(value: &str) -> Result<Decimal, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("is required");
    }
    let amount = Decimal::from_str(trimmed).map_err(|_| "must be a non-negative number")?;
    validate_price(amount)?;
    Ok(amount)
}

/// Validate an already-parsed price amount
pub fn validate_price(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("must be a non-negative number");
    }
    Ok(())
}

/// Parse a quantity cell into a non-negative whole number
pub fn parse_quantity(value: &str) -> Result<u32, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("is required");
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| "must be a non-negative whole number")
}

// ============================================================================
// Cross-Field Rules
// ============================================================================

/// Cost must not exceed the selling price
pub fn validate_price_pair(
    cost_price: Decimal,
    selling_price: Decimal,
) -> Result<(), &'static str> {
    if cost_price > selling_price {
        return Err("cannot be greater than the selling price");
    }
    Ok(())
}

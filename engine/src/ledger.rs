//! Inventory ledger: stock items, the transaction log, and derived alerts
//!
//! The ledger is the single place where stock quantities change. Every
//! mutation appends exactly one transaction, recomputes the item's status,
//! and regenerates the alert set from scratch, so the three views can
//! never drift apart.

use std::collections::{HashMap, VecDeque};

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::{
    classify_alert_severity, derive_stock_status, InventoryRecord, StockAlert, StockItem,
    Transaction, TransactionType,
};
use shared::types::{DateRange, StockItemId, TransactionId};
use shared::validation;

use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventBus, LedgerEvent};

/// Threshold applied when a new product does not specify one
pub const DEFAULT_MIN_STOCK_LEVEL: u32 = 10;

/// Input for adding a product
#[derive(Debug, Clone, Deserialize)]
pub struct NewProductInput {
    pub part_number: String,
    pub oem_part_number: Option<String>,
    pub name: String,
    pub brand: String,
    pub vehicle: String,
    pub category: String,
    pub cost_price: Decimal,
    pub selling_price: Decimal,
    pub stock: u32,
    pub min_stock_level: Option<u32>,
    pub location: Option<String>,
    pub supplier: Option<String>,
}

/// Input for recording a stock movement
#[derive(Debug, Clone, Deserialize)]
pub struct StockUpdateInput {
    pub item_id: StockItemId,
    pub transaction_type: TransactionType,
    /// Movement size; for adjustments, the new absolute level
    pub quantity: u32,
    pub reference: String,
    /// Defaults to the item's selling price for sales, cost price otherwise
    pub unit_price: Option<Decimal>,
    pub notes: Option<String>,
    pub customer_id: Option<String>,
    pub supplier_id: Option<String>,
}

/// One line of a multi-line sale or purchase
#[derive(Debug, Clone, Deserialize)]
pub struct BatchLine {
    pub item_id: StockItemId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Kinds of batch operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchKind {
    Sale,
    Purchase,
}

impl BatchKind {
    fn transaction_type(&self) -> TransactionType {
        match self {
            BatchKind::Sale => TransactionType::Sale,
            BatchKind::Purchase => TransactionType::Purchase,
        }
    }
}

/// Outcome of applying validated import records
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
}

/// In-memory inventory ledger
///
/// Transactions are kept newest first; alerts are the current regenerated
/// set minus any the user dismissed since the last mutation.
pub struct InventoryLedger {
    items: Vec<StockItem>,
    transactions: VecDeque<Transaction>,
    alerts: Vec<StockAlert>,
    next_transaction_id: TransactionId,
    default_min_stock_level: u32,
    events: EventBus,
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryLedger {
    /// Create an empty ledger with its own event channel
    pub fn new() -> Self {
        Self::with_events(EventBus::new())
    }

    /// Create an empty ledger emitting on an existing channel
    pub fn with_events(events: EventBus) -> Self {
        Self {
            items: Vec::new(),
            transactions: VecDeque::new(),
            alerts: Vec::new(),
            next_transaction_id: 1,
            default_min_stock_level: DEFAULT_MIN_STOCK_LEVEL,
            events,
        }
    }

    /// Override the threshold used when a new product does not specify one
    pub fn set_default_min_stock_level(&mut self, level: u32) {
        self.default_min_stock_level = level;
    }

    /// Event channel for subscribing to mutations
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    pub fn item(&self, id: StockItemId) -> Option<&StockItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_by_part_number(&self, part_number: &str) -> Option<&StockItem> {
        let part_number = part_number.trim();
        self.items.iter().find(|item| item.part_number == part_number)
    }

    /// Transaction log, newest first
    pub fn transactions(&self) -> &VecDeque<Transaction> {
        &self.transactions
    }

    /// Current alert set (regenerated on every mutation)
    pub fn alerts(&self) -> &[StockAlert] {
        &self.alerts
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a new product to the inventory
    ///
    /// Initial stock greater than zero is recorded as an adjustment
    /// transaction with reference "Initial Stock"; a product created empty
    /// produces no transaction.
    pub fn add_product(&mut self, input: NewProductInput) -> LedgerResult<StockItem> {
        let part_number = input.part_number.trim().to_string();
        validation::validate_part_number(&part_number)
            .map_err(|message| validation_error("part_number", message))?;
        validation::validate_required_text(&input.name)
            .map_err(|message| validation_error("name", message))?;
        validation::validate_price(input.cost_price)
            .map_err(|message| validation_error("cost_price", message))?;
        validation::validate_price(input.selling_price)
            .map_err(|message| validation_error("selling_price", message))?;

        if self.find_by_part_number(&part_number).is_some() {
            return Err(LedgerError::DuplicatePartNumber(part_number));
        }

        let id = self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let min_stock_level = input
            .min_stock_level
            .unwrap_or(self.default_min_stock_level);
        let item = StockItem {
            id,
            part_number,
            oem_part_number: input.oem_part_number,
            name: input.name,
            brand: input.brand,
            vehicle: input.vehicle,
            category: input.category,
            cost_price: input.cost_price,
            selling_price: input.selling_price,
            stock: input.stock,
            min_stock_level,
            status: derive_stock_status(input.stock, min_stock_level),
            location: input.location,
            supplier: input.supplier,
        };
        self.items.push(item.clone());

        if item.stock > 0 {
            self.record_transaction(
                &item,
                TransactionType::Adjustment,
                item.stock,
                item.cost_price,
                "Initial Stock".to_string(),
                None,
                None,
                None,
            );
        }

        self.events.emit(LedgerEvent::ProductAdded {
            item_id: item.id,
            part_number: item.part_number.clone(),
            name: item.name.clone(),
        });
        self.refresh_alerts();
        Ok(item)
    }

    /// Record a stock movement and keep status and alerts consistent
    ///
    /// `sale` subtracts, `purchase` and `return` add, and `adjustment` sets
    /// stock to the given absolute level. A sale that would drive stock
    /// negative is rejected before anything changes.
    pub fn update_stock(&mut self, input: StockUpdateInput) -> LedgerResult<StockItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == input.item_id)
            .ok_or(LedgerError::ItemNotFound(input.item_id))?;

        let available = self.items[index].stock;
        let new_stock = match input.transaction_type {
            TransactionType::Sale => {
                available
                    .checked_sub(input.quantity)
                    .ok_or_else(|| LedgerError::InsufficientStock {
                        part_number: self.items[index].part_number.clone(),
                        requested: input.quantity,
                        available,
                    })?
            }
            TransactionType::Purchase | TransactionType::Return => {
                available.saturating_add(input.quantity)
            }
            TransactionType::Adjustment => input.quantity,
        };

        let unit_price = input
            .unit_price
            .unwrap_or_else(|| match input.transaction_type {
                TransactionType::Sale => self.items[index].selling_price,
                _ => self.items[index].cost_price,
            });

        self.items[index].stock = new_stock;
        self.items[index].refresh_status();
        let item = self.items[index].clone();

        self.record_transaction(
            &item,
            input.transaction_type,
            input.quantity,
            unit_price,
            input.reference,
            input.notes,
            input.customer_id,
            input.supplier_id,
        );

        self.events.emit(LedgerEvent::StockUpdated {
            item_id: item.id,
            part_number: item.part_number.clone(),
            transaction_type: input.transaction_type,
            quantity: input.quantity,
            new_stock,
            status: item.status,
        });
        self.refresh_alerts();
        Ok(item)
    }

    /// Apply a multi-line sale or purchase as one unit
    ///
    /// Phase one validates every line without mutating: all items must
    /// exist, and a sale batch must not request more than is available
    /// counting all lines for the same item together. Phase two commits.
    /// A failing batch therefore leaves the ledger untouched.
    pub fn process_batch(
        &mut self,
        operation_id: &str,
        kind: BatchKind,
        lines: &[BatchLine],
        party_id: Option<&str>,
    ) -> LedgerResult<()> {
        let mut requested: HashMap<StockItemId, u32> = HashMap::new();
        for line in lines {
            let item = self
                .item(line.item_id)
                .ok_or(LedgerError::ItemNotFound(line.item_id))?;
            if kind == BatchKind::Sale {
                let total = requested.entry(line.item_id).or_insert(0);
                *total = total.saturating_add(line.quantity);
                if *total > item.stock {
                    return Err(LedgerError::InsufficientStock {
                        part_number: item.part_number.clone(),
                        requested: *total,
                        available: item.stock,
                    });
                }
            }
        }

        let reference = match kind {
            BatchKind::Sale => format!("Invoice {}", operation_id),
            BatchKind::Purchase => format!("PO {}", operation_id),
        };

        for line in lines {
            self.update_stock(StockUpdateInput {
                item_id: line.item_id,
                transaction_type: kind.transaction_type(),
                quantity: line.quantity,
                reference: reference.clone(),
                unit_price: Some(line.unit_price),
                notes: None,
                customer_id: match kind {
                    BatchKind::Sale => party_id.map(str::to_string),
                    BatchKind::Purchase => None,
                },
                supplier_id: match kind {
                    BatchKind::Sale => None,
                    BatchKind::Purchase => party_id.map(str::to_string),
                },
            })?;
        }

        tracing::info!(
            "Processed {} batch {}: {} lines",
            kind.transaction_type(),
            reference,
            lines.len()
        );
        self.events.emit(LedgerEvent::BatchProcessed {
            reference,
            transaction_type: kind.transaction_type(),
            lines: lines.len(),
        });
        Ok(())
    }

    /// Feed validated import records into the ledger
    ///
    /// Unknown part numbers become new products. Known part numbers get
    /// their descriptive and pricing fields refreshed and their stock set
    /// to the imported quantity through an adjustment referenced
    /// "Stock Import".
    pub fn apply_import(&mut self, records: &[InventoryRecord]) -> LedgerResult<ImportSummary> {
        let mut summary = ImportSummary::default();
        for record in records {
            let part_number = record.part_number.trim();
            let position = self
                .items
                .iter()
                .position(|item| item.part_number == part_number);
            match position {
                Some(index) => {
                    let item = &mut self.items[index];
                    item.oem_part_number = none_if_empty(&record.oem_part_number);
                    item.name = record.part_name.clone();
                    item.brand = record.brand.clone();
                    item.vehicle = record.vehicle_compatibility.clone();
                    item.category = record.category.clone();
                    item.cost_price = record.cost_price;
                    item.selling_price = record.selling_price;
                    let item_id = item.id;

                    self.update_stock(StockUpdateInput {
                        item_id,
                        transaction_type: TransactionType::Adjustment,
                        quantity: record.quantity,
                        reference: "Stock Import".to_string(),
                        unit_price: Some(record.cost_price),
                        notes: None,
                        customer_id: None,
                        supplier_id: None,
                    })?;
                    summary.updated += 1;
                }
                None => {
                    self.add_product(NewProductInput {
                        part_number: record.part_number.clone(),
                        oem_part_number: none_if_empty(&record.oem_part_number),
                        name: record.part_name.clone(),
                        brand: record.brand.clone(),
                        vehicle: record.vehicle_compatibility.clone(),
                        category: record.category.clone(),
                        cost_price: record.cost_price,
                        selling_price: record.selling_price,
                        stock: record.quantity,
                        min_stock_level: None,
                        location: None,
                        supplier: None,
                    })?;
                    summary.added += 1;
                }
            }
        }

        tracing::info!(
            "Applied import: {} added, {} updated",
            summary.added,
            summary.updated
        );
        self.events.emit(LedgerEvent::ImportApplied {
            added: summary.added,
            updated: summary.updated,
        });
        Ok(summary)
    }

    // ========================================================================
    // Alerts
    // ========================================================================

    /// Build the alert set for the current items
    ///
    /// Pure over the item list; calling it twice with no intervening
    /// mutation yields the same set.
    pub fn generate_stock_alerts(&self) -> Vec<StockAlert> {
        self.items
            .iter()
            .filter_map(|item| {
                classify_alert_severity(item.stock, item.min_stock_level).map(|severity| {
                    StockAlert {
                        item_id: item.id,
                        part_number: item.part_number.clone(),
                        item_name: item.name.clone(),
                        current_stock: item.stock,
                        min_stock_level: item.min_stock_level,
                        severity,
                    }
                })
            })
            .collect()
    }

    /// Remove one alert from the current set
    ///
    /// The alert reappears at the next regeneration if the item still
    /// qualifies. Returns whether anything was removed.
    pub fn dismiss_alert(&mut self, item_id: StockItemId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.item_id != item_id);
        self.alerts.len() != before
    }

    fn refresh_alerts(&mut self) {
        self.alerts = self.generate_stock_alerts();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Total inventory value at cost
    pub fn stock_value(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| Decimal::from(item.stock) * item.cost_price)
            .sum()
    }

    /// Items at or below their threshold
    pub fn low_stock_items(&self) -> Vec<&StockItem> {
        self.items
            .iter()
            .filter(|item| item.stock <= item.min_stock_level)
            .collect()
    }

    /// Transactions whose date falls inside the range, newest first
    pub fn inventory_movement(&self, range: &DateRange) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| range.contains(transaction.date.date_naive()))
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn record_transaction(
        &mut self,
        item: &StockItem,
        transaction_type: TransactionType,
        quantity: u32,
        unit_price: Decimal,
        reference: String,
        notes: Option<String>,
        customer_id: Option<String>,
        supplier_id: Option<String>,
    ) {
        let id = self.next_transaction_id;
        self.next_transaction_id += 1;
        self.transactions.push_front(Transaction {
            id,
            transaction_type,
            item_id: item.id,
            part_number: item.part_number.clone(),
            quantity,
            unit_price,
            total_value: unit_price * Decimal::from(quantity),
            reference,
            date: Utc::now(),
            notes,
            customer_id,
            supplier_id,
        });
    }
}

fn validation_error(field: &str, message: &str) -> LedgerError {
    LedgerError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

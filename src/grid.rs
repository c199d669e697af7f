//! Display rows and totals for the inventory grid.

use crate::models::Item;

/// Header labels, in column order.
pub const GRID_HEADERS: [&str; 7] = [
    "#",
    "Item",
    "Size",
    "Quantity",
    "Price (€)",
    "Notes",
    "Updated",
];

/// Formats a unit price as euros with two decimals.
///
/// Missing or non-finite prices render as `€0.00`. Rounding is that of
/// `{:.2}` on the exact binary value, so `2.005` (stored just below 2.005)
/// renders as `€2.00`.
pub fn format_price(price: Option<f64>) -> String {
    let value = price.filter(|p| p.is_finite()).unwrap_or(0.0);
    // avoid "€-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("€{value:.2}")
}

/// One rendered grid row.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub row_id: u64,
    pub item: String,
    pub size: String,
    pub quantity: i64,
    pub price: String,
    pub notes: String,
    pub updated: String,
}

impl GridRow {
    pub fn from_item(item: &Item) -> Self {
        Self {
            row_id: item.id,
            item: item.item.clone(),
            size: item.size.clone(),
            quantity: item.quantity,
            price: format_price(item.price),
            notes: item.notes.clone(),
            updated: item
                .last_updated_at()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

pub fn build_rows(items: &[&Item]) -> Vec<GridRow> {
    items.iter().map(|item| GridRow::from_item(item)).collect()
}

/// Row-level and toolbar actions raised by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Open the edit dialog for the item with this id.
    Edit(u64),
    /// Delete by name, no confirmation.
    Delete(String),
    /// Open the quantity-only dialog.
    SetQuantity { name: String, current: i64 },
    /// Relative quantity change by name.
    Adjust { name: String, change: i64 },
}

/// Footer figures for the visible rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InventoryTotals {
    pub rows: usize,
    pub quantity: i64,
    pub value: f64,
}

impl InventoryTotals {
    pub fn value_display(&self) -> String {
        format_price(Some(self.value))
    }
}

/// Footer sums over the visible rows. The unit count saturates rather than
/// wrapping when quantities set through the legacy path are huge.
pub fn totals(items: &[&Item]) -> InventoryTotals {
    items.iter().fold(InventoryTotals::default(), |acc, item| InventoryTotals {
        rows: acc.rows + 1,
        quantity: acc.quantity.saturating_add(item.quantity),
        value: acc.value + item.stock_value(),
    })
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;

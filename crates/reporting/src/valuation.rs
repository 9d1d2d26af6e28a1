//! Inventory valuation summary.
//!
//! Value of a row is `price × quantity_in_stock`; the summary adds rows up.

use serde::Serialize;

use gallery_inventory::Inventory;

/// Totals across the whole inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryValuation {
    pub total_items: usize,
    pub available_items: usize,
    pub total_quantity: u64,
    pub total_value: f64,
}

pub fn generate_valuation(inventory: &Inventory) -> InventoryValuation {
    let mut summary = InventoryValuation {
        total_items: 0,
        available_items: 0,
        total_quantity: 0,
        total_value: 0.0,
    };

    for item in inventory.view_items() {
        let quantity = item.quantity_in_stock();
        summary.total_items += 1;
        if item.is_available() {
            summary.available_items += 1;
        }
        summary.total_quantity += u64::from(quantity);
        summary.total_value += item.price() * f64::from(quantity);
    }

    summary
}

impl core::fmt::Display for InventoryValuation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Inventory Valuation:")?;
        writeln!(
            f,
            "Items: {} ({} available) | Units: {} | Value: ${:.2}",
            self.total_items, self.available_items, self.total_quantity, self.total_value
        )
    }
}

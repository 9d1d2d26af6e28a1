//! Catalogue, sales, availability and price-band reports.

use serde::Serialize;

use gallery_core::ItemId;
use gallery_inventory::{ArtItem, Inventory};

/// One row of the inventory report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryLine {
    pub item_id: ItemId,
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub quantity: u32,
    pub price: f64,
}

/// Stock listing of every item, in store order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryReport {
    pub lines: Vec<InventoryLine>,
}

/// One sold item and what it went for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesLine {
    pub item_id: ItemId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Sold items plus the revenue they add up to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub sold: Vec<SalesLine>,
    pub total_revenue: f64,
}

/// Items that still have stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityReport<'a> {
    pub items: Vec<&'a ArtItem>,
}

/// Items whose price falls inside `[min_price, max_price]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport<'a> {
    pub min_price: f64,
    pub max_price: f64,
    pub items: Vec<&'a ArtItem>,
}

pub fn generate_inventory_report(inventory: &Inventory) -> InventoryReport {
    let lines = inventory
        .view_items()
        .map(|item| InventoryLine {
            item_id: item.item_id(),
            title: item.title().to_string(),
            artist: item.artist().to_string(),
            year: item.year(),
            quantity: item.quantity_in_stock(),
            price: item.price(),
        })
        .collect();
    InventoryReport { lines }
}

/// Sales are items in the sold state; status text is matched case-insensitively
/// when it is parsed, so `"sold"` and `"SOLD"` both count.
pub fn generate_sales_report(inventory: &Inventory) -> SalesReport {
    let sold: Vec<SalesLine> = inventory
        .view_items()
        .filter(|item| item.status().is_sold())
        .map(|item| SalesLine {
            item_id: item.item_id(),
            title: item.title().to_string(),
            artist: item.artist().to_string(),
            price: item.price(),
        })
        .collect();
    // Folded from +0.0 so an empty sale list renders "$0.00", not "$-0.00".
    let total_revenue = sold.iter().fold(0.0, |total, line| total + line.price);
    SalesReport { sold, total_revenue }
}

pub fn filter_by_availability(inventory: &Inventory) -> AvailabilityReport<'_> {
    AvailabilityReport {
        items: inventory.view_items().filter(|item| item.is_available()).collect(),
    }
}

/// Bounds are inclusive and not checked against each other: `min > max`
/// simply matches nothing.
pub fn generate_price_report(
    inventory: &Inventory,
    min_price: f64,
    max_price: f64,
) -> PriceReport<'_> {
    let items = inventory
        .view_items()
        .filter(|item| min_price <= item.price() && item.price() <= max_price)
        .collect();
    PriceReport {
        min_price,
        max_price,
        items,
    }
}

impl core::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Inventory Report:")?;
        for line in &self.lines {
            writeln!(
                f,
                "{} by {}, {} | Quantity: {} | Price: ${:.2}",
                line.title, line.artist, line.year, line.quantity, line.price
            )?;
        }
        Ok(())
    }
}

impl core::fmt::Display for SalesReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Sales Report (Sold Items):")?;
        for line in &self.sold {
            writeln!(f, "{} by {}, sold for ${:.2}", line.title, line.artist, line.price)?;
        }
        writeln!(f, "Total Revenue: ${:.2}", self.total_revenue)
    }
}

impl core::fmt::Display for AvailabilityReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Available Items:")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

impl core::fmt::Display for PriceReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Items priced between ${:.2} and ${:.2}:",
            self.min_price, self.max_price
        )?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

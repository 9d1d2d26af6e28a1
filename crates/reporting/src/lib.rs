//! Read-only reports over a gallery inventory.
//!
//! Reports borrow an [`Inventory`](gallery_inventory::Inventory), compute a
//! disposable view and never mutate. Each view renders its text form through
//! `Display`; callers decide where that text goes.

pub mod report;
pub mod valuation;

pub use report::{
    AvailabilityReport, InventoryLine, InventoryReport, PriceReport, SalesLine, SalesReport,
    filter_by_availability, generate_inventory_report, generate_price_report,
    generate_sales_report,
};
pub use valuation::{InventoryValuation, generate_valuation};

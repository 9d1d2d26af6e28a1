//! The fixed demo run: stock the gallery, report, sell, persist, reload.

use std::io::Write;

use anyhow::Context;

use gallery_core::ItemId;
use gallery_infra::{InventoryRepository, JsonFileRepository};
use gallery_inventory::{ArtItem, Inventory, ItemStatus};
use gallery_reporting::{filter_by_availability, generate_inventory_report, generate_sales_report};

use crate::config::AppConfig;
use crate::feedback;

/// The three pieces the demo gallery opens with.
pub fn demo_items() -> Vec<ArtItem> {
    vec![
        ArtItem::new(ItemId::new(1), "Starry Night", "Vincent Van Gogh", 1889, 1_000_000.0, 1),
        ArtItem::new(ItemId::new(2), "The Kiss", "Gustav Klimt", 1908, 2_000_000.0, 1),
        ArtItem::new(ItemId::new(3), "Mona Lisa", "Leonardo da Vinci", 1503, 850_000_000.0, 1),
    ]
}

/// Run the demo against `out` and return the reloaded inventory.
pub fn run(config: &AppConfig, out: &mut impl Write) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::new();
    for item in demo_items() {
        let title = item.title().to_string();
        let result = inventory.add_item(item);
        writeln!(out, "{}", feedback::added(&title, &result))?;
    }

    write!(out, "{}", generate_inventory_report(&inventory))?;
    write!(out, "{}", filter_by_availability(&inventory))?;

    let featured = ItemId::new(1);
    inventory
        .apply_discount(featured, config.discount_percent)
        .context("discounting the featured piece")?;
    inventory
        .update_status(featured, ItemStatus::Sold)
        .context("marking the featured piece sold")?;

    write!(out, "{}", generate_sales_report(&inventory))?;

    let repository = JsonFileRepository::new(&config.inventory_file);
    repository
        .save(&inventory)
        .with_context(|| format!("saving inventory to {}", config.inventory_file.display()))?;
    writeln!(out, "{}", feedback::saved(repository.path()))?;

    let mut reloaded = Inventory::new();
    let outcome = repository
        .load_into(&mut reloaded)
        .with_context(|| format!("loading inventory from {}", config.inventory_file.display()))?;
    writeln!(out, "{}", feedback::loaded(repository.path(), &outcome))?;

    write!(out, "{reloaded}")?;
    out.flush()?;

    Ok(reloaded)
}

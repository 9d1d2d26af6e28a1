//! JSON document layout shared by every repository.
//!
//! ```json
//! { "1": { "item_id": 1, "title": "...", "artist": "...", "year": 1889,
//!          "price": 1000000.0, "quantity_in_stock": 1, "status": "For Sale" } }
//! ```
//!
//! Keys are the stringified `item_id`. No envelope, version or checksum.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use gallery_core::ItemId;
use gallery_inventory::{ArtItem, Inventory};

use super::r#trait::{LoadOutcome, PersistenceError};

/// Render the inventory as a JSON object in store order.
///
/// Fails before rendering anything if a price is NaN or infinite.
pub fn encode(inventory: &Inventory) -> Result<String, PersistenceError> {
    if let Some(item) = inventory.view_items().find(|item| !item.price().is_finite()) {
        return Err(PersistenceError::NonFinitePrice {
            item_id: item.item_id(),
            price: item.price(),
        });
    }
    let document: IndexMap<String, &ArtItem> = inventory
        .view_items()
        .map(|item| (item.item_id().to_string(), item))
        .collect();
    serde_json::to_string_pretty(&document).map_err(PersistenceError::Serialize)
}

/// Parse a document into items, in document order.
///
/// Every key must parse as an [`ItemId`] equal to the record's own `item_id`.
pub fn decode(text: &str) -> Result<Vec<ArtItem>, PersistenceError> {
    let document: IndexMap<String, JsonValue> =
        serde_json::from_str(text).map_err(PersistenceError::Parse)?;

    let mut items = Vec::with_capacity(document.len());
    for (key, record) in document {
        let key_id = key.parse::<ItemId>().map_err(|e| {
            PersistenceError::InvalidRecord {
                key: key.clone(),
                reason: e.to_string(),
            }
        })?;
        let item: ArtItem =
            serde_json::from_value(record).map_err(|e| PersistenceError::InvalidRecord {
                key: key.clone(),
                reason: e.to_string(),
            })?;
        if item.item_id() != key_id {
            return Err(PersistenceError::KeyMismatch {
                key: key_id,
                item_id: item.item_id(),
            });
        }
        items.push(item);
    }
    Ok(items)
}

/// Add decoded items through the inventory's duplicate check.
pub fn merge_into(
    items: Vec<ArtItem>,
    inventory: &mut Inventory,
) -> Result<LoadOutcome, PersistenceError> {
    let mut added = 0;
    let mut duplicates = Vec::new();
    for item in items {
        let id = item.item_id();
        // add_item only fails on an id the target already holds
        match inventory.add_item(item) {
            Ok(()) => added += 1,
            Err(_) => duplicates.push(id),
        }
    }
    Ok(LoadOutcome::Loaded { added, duplicates })
}

//! In-memory inventory: the authoritative collection of art items.

use indexmap::IndexMap;

use gallery_core::{DomainError, DomainResult, ItemId};

use crate::item::{ArtItem, ItemStatus};

/// Partial update for an item.
///
/// A `Some` field is written as given, including `0` and empty strings;
/// `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub status: Option<ItemStatus>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn validate(&self) -> DomainResult<()> {
        if let Some(price) = self.price {
            if !price.is_finite() {
                return Err(DomainError::validation("price must be a finite number"));
            }
            if price < 0.0 {
                return Err(DomainError::validation("price cannot be negative"));
            }
        }
        Ok(())
    }

    fn apply_to(self, item: &mut ArtItem) {
        if let Some(title) = self.title {
            item.set_title(title);
        }
        if let Some(artist) = self.artist {
            item.set_artist(artist);
        }
        if let Some(year) = self.year {
            item.set_year(year);
        }
        if let Some(price) = self.price {
            item.set_price(price);
        }
        if let Some(quantity) = self.quantity {
            item.set_quantity_in_stock(quantity);
        }
        if let Some(status) = self.status {
            item.update_status(status);
        }
    }
}

/// Items keyed by identifier, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: IndexMap<ItemId, ArtItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new item.
    ///
    /// An identifier that is already present is rejected and the stored item
    /// keeps its fields.
    pub fn add_item(&mut self, item: ArtItem) -> DomainResult<()> {
        let id = item.item_id();
        if self.items.contains_key(&id) {
            tracing::warn!(item_id = %id, "rejected duplicate item");
            return Err(DomainError::DuplicateItem(id));
        }
        tracing::debug!(item_id = %id, title = item.title(), "item added");
        self.items.insert(id, item);
        Ok(())
    }

    /// Remove and return the item stored under `id`.
    pub fn remove_item(&mut self, id: ItemId) -> DomainResult<ArtItem> {
        match self.items.shift_remove(&id) {
            Some(item) => {
                tracing::debug!(item_id = %id, title = item.title(), "item removed");
                Ok(item)
            }
            None => {
                tracing::warn!(item_id = %id, "remove of unknown item");
                Err(DomainError::ItemNotFound(id))
            }
        }
    }

    /// Overwrite every field the patch provides.
    ///
    /// The patch is validated first; on error nothing is written.
    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> DomainResult<&ArtItem> {
        patch.validate()?;
        let Some(item) = self.items.get_mut(&id) else {
            tracing::warn!(item_id = %id, "update of unknown item");
            return Err(DomainError::ItemNotFound(id));
        };
        patch.apply_to(item);
        tracing::debug!(item_id = %id, title = item.title(), "item updated");
        Ok(item)
    }

    /// Discount a stored item in place.
    pub fn apply_discount(&mut self, id: ItemId, percentage: f64) -> DomainResult<&ArtItem> {
        let item = self.items.get_mut(&id).ok_or(DomainError::ItemNotFound(id))?;
        item.apply_discount(percentage);
        tracing::debug!(item_id = %id, percentage, price = item.price(), "discount applied");
        Ok(item)
    }

    /// Change the status of a stored item.
    pub fn update_status(&mut self, id: ItemId, status: ItemStatus) -> DomainResult<&ArtItem> {
        let item = self.items.get_mut(&id).ok_or(DomainError::ItemNotFound(id))?;
        item.update_status(status);
        tracing::debug!(item_id = %id, status = %item.status(), "status updated");
        Ok(item)
    }

    /// Items in store order.
    pub fn view_items(&self) -> impl Iterator<Item = &ArtItem> {
        self.items.values()
    }

    /// Items whose artist matches `name`, ignoring case.
    pub fn search_by_artist(&self, name: &str) -> Vec<&ArtItem> {
        let wanted = name.to_lowercase();
        self.items
            .values()
            .filter(|item| item.artist().to_lowercase() == wanted)
            .collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&ArtItem> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl core::fmt::Display for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for item in self.view_items() {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

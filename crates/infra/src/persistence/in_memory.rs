use std::sync::RwLock;

use gallery_inventory::Inventory;

use super::codec;
use super::r#trait::{InventoryRepository, LoadOutcome, PersistenceError};

/// In-memory repository for tests/dev.
///
/// Holds the encoded document, so it exercises the same JSON layout as the
/// file repository.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    document: RwLock<Option<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved document, if any.
    pub fn document(&self) -> Result<Option<String>, PersistenceError> {
        let slot = self.document.read().map_err(|_| PersistenceError::LockPoisoned)?;
        Ok(slot.clone())
    }
}

impl InventoryRepository for InMemoryRepository {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let text = codec::encode(inventory)?;
        let mut slot = self.document.write().map_err(|_| PersistenceError::LockPoisoned)?;
        *slot = Some(text);
        Ok(())
    }

    fn load_into(&self, inventory: &mut Inventory) -> Result<LoadOutcome, PersistenceError> {
        let Some(text) = self.document()? else {
            return Ok(LoadOutcome::FileNotFound);
        };
        let items = codec::decode(&text)?;
        codec::merge_into(items, inventory)
    }
}

use std::path::PathBuf;

use thiserror::Error;

use gallery_core::ItemId;
use gallery_inventory::Inventory;

/// Failures at the persistence boundary.
///
/// A missing file is not among them: it is reported as
/// [`LoadOutcome::FileNotFound`].
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid record under key {key:?}: {reason}")]
    InvalidRecord { key: String, reason: String },

    #[error("record key {key} does not match its item_id {item_id}")]
    KeyMismatch { key: ItemId, item_id: ItemId },

    /// JSON has no encoding for NaN or infinity, so such a price cannot be stored.
    #[error("item {item_id} has a non-finite price ({price})")]
    NonFinitePrice { item_id: ItemId, price: f64 },

    #[error("in-memory repository lock poisoned")]
    LockPoisoned,
}

/// What a load did to the target inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet; the target was left untouched.
    FileNotFound,
    /// Records were read. `duplicates` lists ids the target already held.
    Loaded { added: usize, duplicates: Vec<ItemId> },
}

impl LoadOutcome {
    pub fn added(&self) -> usize {
        match self {
            LoadOutcome::FileNotFound => 0,
            LoadOutcome::Loaded { added, .. } => *added,
        }
    }
}

/// Storage for a whole inventory snapshot.
///
/// `save` replaces whatever was stored before. `load_into` adds the stored
/// items to `inventory` with duplicate checking; on any error the target is
/// left unchanged.
pub trait InventoryRepository {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError>;

    fn load_into(&self, inventory: &mut Inventory) -> Result<LoadOutcome, PersistenceError>;
}

impl<R> InventoryRepository for &R
where
    R: InventoryRepository + ?Sized,
{
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        (**self).save(inventory)
    }

    fn load_into(&self, inventory: &mut Inventory) -> Result<LoadOutcome, PersistenceError> {
        (**self).load_into(inventory)
    }
}

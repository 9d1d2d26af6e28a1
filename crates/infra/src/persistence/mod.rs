//! Inventory persistence boundary.
//!
//! Saves an [`Inventory`](gallery_inventory::Inventory) as a single JSON object
//! keyed by item identifier and loads it back through the inventory's normal
//! add path.

pub mod codec;
pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use json_file::JsonFileRepository;
pub use r#trait::{InventoryRepository, LoadOutcome, PersistenceError};

//! Infrastructure layer: storage adapters for the gallery inventory.

pub mod persistence;

pub use persistence::{
    InMemoryRepository, InventoryRepository, JsonFileRepository, LoadOutcome, PersistenceError,
};

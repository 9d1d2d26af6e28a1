//! Gallery inventory domain module.
//!
//! This crate contains the art item entity and the in-memory inventory that
//! owns items, implemented as deterministic domain logic (no IO).

pub mod inventory;
pub mod item;

pub use inventory::{Inventory, ItemPatch};
pub use item::{ArtItem, ItemStatus};

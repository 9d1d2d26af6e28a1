//! `gallery-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the gallery crates
//! (identifiers and the domain error model). No IO.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;

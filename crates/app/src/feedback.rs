//! Human-readable status lines for inventory and persistence results.

use std::path::Path;

use gallery_core::{DomainError, DomainResult};
use gallery_infra::LoadOutcome;

fn rejection(err: &DomainError) -> String {
    match err {
        DomainError::DuplicateItem(_) => "Item ID already exists.".to_string(),
        DomainError::ItemNotFound(_) => "Item ID not found.".to_string(),
        other => format!("Rejected: {other}."),
    }
}

pub fn added(title: &str, result: &DomainResult<()>) -> String {
    match result {
        Ok(()) => format!("Added {title} to the inventory."),
        Err(err) => rejection(err),
    }
}

pub fn saved(path: &Path) -> String {
    format!("Inventory saved to {}.", path.display())
}

pub fn loaded(path: &Path, outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::FileNotFound => "File not found.".to_string(),
        LoadOutcome::Loaded { .. } => format!("Inventory loaded from {}.", path.display()),
    }
}

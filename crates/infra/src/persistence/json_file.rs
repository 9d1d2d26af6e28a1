use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gallery_inventory::Inventory;

use super::codec;
use super::r#trait::{InventoryRepository, LoadOutcome, PersistenceError};

/// Inventory snapshot stored as one JSON file.
///
/// Each save rewrites the file in place. There is no temp-file swap, so a
/// crash mid-write can leave it truncated.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl InventoryRepository for JsonFileRepository {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let text = codec::encode(inventory)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, text).map_err(|e| self.io_error(e))?;

        tracing::info!(path = %self.path.display(), items = inventory.len(), "inventory saved");
        Ok(())
    }

    fn load_into(&self, inventory: &mut Inventory) -> Result<LoadOutcome, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "inventory file not found");
                return Ok(LoadOutcome::FileNotFound);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let items = codec::decode(&text)?;
        let outcome = codec::merge_into(items, inventory)?;

        tracing::info!(
            path = %self.path.display(),
            added = outcome.added(),
            "inventory loaded"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::ItemId;
    use gallery_inventory::{ArtItem, ItemStatus};

    fn sample() -> Inventory {
        let mut inv = Inventory::new();
        inv.add_item(
            ArtItem::new(ItemId::new(1), "Starry Night", "Vincent Van Gogh", 1889, 900_000.0, 1)
                .with_status(ItemStatus::Sold),
        )
        .unwrap();
        inv.add_item(ArtItem::new(ItemId::new(2), "The Kiss", "Gustav Klimt", 1908, 2_000_000.0, 1))
            .unwrap();
        inv.add_item(ArtItem::new(
            ItemId::new(3),
            "Mona Lisa",
            "Leonardo da Vinci",
            1503,
            850_000_000.0,
            0,
        ))
        .unwrap();
        inv
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("art_inventory.json"));
        let original = sample();

        repo.save(&original).unwrap();

        let mut reloaded = Inventory::new();
        let outcome = repo.load_into(&mut reloaded).unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded { added: 3, duplicates: vec![] });

        let before: Vec<&ArtItem> = original.view_items().collect();
        let after: Vec<&ArtItem> = reloaded.view_items().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn overflowing_discount_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art_inventory.json");
        let repo = JsonFileRepository::new(&path);
        repo.save(&sample()).unwrap();
        let previous = fs::read_to_string(&path).unwrap();

        let mut inv = sample();
        inv.add_item(ArtItem::new(ItemId::new(4), "Huge", "Anon", 2000, 1e307, 1)).unwrap();
        inv.apply_discount(ItemId::new(4), 1e5).unwrap();
        assert!(inv.get(ItemId::new(4)).unwrap().price().is_infinite());

        let err = repo.save(&inv).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::NonFinitePrice { item_id, .. } if item_id == ItemId::new(4)
        ));

        // the earlier snapshot is still on disk and still loads
        assert_eq!(fs::read_to_string(&path).unwrap(), previous);
        let mut reloaded = Inventory::new();
        assert_eq!(repo.load_into(&mut reloaded).unwrap().added(), 3);
    }

    #[test]
    fn empty_inventory_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("empty.json"));
        repo.save(&Inventory::new()).unwrap();

        let mut reloaded = Inventory::new();
        let outcome = repo.load_into(&mut reloaded).unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded { added: 0, duplicates: vec![] });
        assert!(reloaded.is_empty());
    }

    #[test]
    fn missing_file_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nope.json"));

        let mut inv = sample();
        let before = inv.clone();
        assert_eq!(repo.load_into(&mut inv).unwrap(), LoadOutcome::FileNotFound);
        assert_eq!(inv, before);
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("inv.json"));
        repo.save(&sample()).unwrap();

        let mut smaller = Inventory::new();
        smaller
            .add_item(ArtItem::new(ItemId::new(9), "Only", "One", 2020, 1.0, 1))
            .unwrap();
        repo.save(&smaller).unwrap();

        let mut reloaded = Inventory::new();
        repo.load_into(&mut reloaded).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.contains(ItemId::new(9)));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("inv.json");
        JsonFileRepository::new(&path).save(&sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn malformed_file_is_a_parse_error_and_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"1\": ").unwrap();

        let mut inv = Inventory::new();
        let err = JsonFileRepository::new(&path).load_into(&mut inv).unwrap_err();
        assert!(matches!(err, PersistenceError::Parse(_)));
        assert!(inv.is_empty());
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be
        let repo = JsonFileRepository::new(dir.path());
        let err = repo.save(&sample()).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }

    #[test]
    fn loading_twice_reports_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("inv.json"));
        repo.save(&sample()).unwrap();

        let mut inv = Inventory::new();
        repo.load_into(&mut inv).unwrap();
        let outcome = repo.load_into(&mut inv).unwrap();
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                added: 0,
                duplicates: vec![ItemId::new(1), ItemId::new(2), ItemId::new(3)]
            }
        );
        assert_eq!(inv.len(), 3);
    }
}

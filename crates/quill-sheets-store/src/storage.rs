//! The storage contract and reference in-memory stores
//!
//! Every backing store - cell, label, metadata, catch-all - implements
//! [`Storage`]. The reference implementations here back tests and
//! single-process sessions; production deployments substitute their own.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use quill_sheets_core::error::{Error, Result};
use quill_sheets_core::SpreadsheetId;

use crate::context::StoreContext;
use crate::path::StoragePath;
use crate::value::{StorageInfo, StorageValue};

/// Uniform load/save/delete/list contract over paths
///
/// All operations take the (possibly rebound) context. `save` may return a
/// value whose path differs from the input. Reads are lenient; `save` and
/// `delete` may reject paths missing required trailing segments.
pub trait Storage {
    /// Load the value at a path, if present
    fn load(&self, path: &StoragePath, context: &StoreContext) -> Result<Option<StorageValue>>;

    /// Save a value at its path, returning the value as stored
    fn save(&self, value: StorageValue, context: &StoreContext) -> Result<StorageValue>;

    /// Delete the value at a path
    fn delete(&self, path: &StoragePath, context: &StoreContext) -> Result<()>;

    /// List values under a path, in path order, skipping `offset` and
    /// returning at most `count`
    fn list(
        &self,
        path: &StoragePath,
        offset: usize,
        count: usize,
        context: &StoreContext,
    ) -> Result<Vec<StorageInfo>>;
}

/// Sparse in-memory store over a path-ordered map
///
/// When constructed [`MemoryStorage::for_bucket`], save and delete require
/// at least one segment after the bucket keyword (a `/cell` path with no
/// cell reference is incomplete); reads stay lenient.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<StoragePath, StorageValue>>,
    keyword: Option<&'static str>,
}

impl MemoryStorage {
    /// A store accepting any path
    pub fn new() -> Self {
        Self::default()
    }

    /// A store for one keyword bucket, e.g. `cell` or `label`
    pub fn for_bucket(keyword: &'static str) -> Self {
        MemoryStorage {
            entries: RefCell::new(BTreeMap::new()),
            keyword: Some(keyword),
        }
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds nothing
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_complete(&self, path: &StoragePath) -> Result<()> {
        let Some(keyword) = self.keyword else {
            return Ok(());
        };
        let segments = path.segments();
        match segments.iter().position(|s| s == keyword) {
            Some(index) if index + 1 < segments.len() => Ok(()),
            _ => Err(Error::IncompletePath(path.to_string())),
        }
    }
}

impl Storage for MemoryStorage {
    fn load(&self, path: &StoragePath, _context: &StoreContext) -> Result<Option<StorageValue>> {
        Ok(self.entries.borrow().get(path).cloned())
    }

    fn save(&self, value: StorageValue, _context: &StoreContext) -> Result<StorageValue> {
        self.check_complete(value.path())?;
        self.entries
            .borrow_mut()
            .insert(value.path().clone(), value.clone());
        Ok(value)
    }

    fn delete(&self, path: &StoragePath, _context: &StoreContext) -> Result<()> {
        self.check_complete(path)?;
        self.entries.borrow_mut().remove(path);
        Ok(())
    }

    fn list(
        &self,
        path: &StoragePath,
        offset: usize,
        count: usize,
        _context: &StoreContext,
    ) -> Result<Vec<StorageInfo>> {
        Ok(self
            .entries
            .borrow()
            .values()
            .filter(|value| value.path().starts_with(path))
            .skip(offset)
            .take(count)
            .map(StorageValue::info)
            .collect())
    }
}

/// In-memory metadata store with identity assignment
///
/// Saving a value pathed `/spreadsheet` (no identity) assigns the next
/// generated [`SpreadsheetId`] and returns the value re-pathed under
/// `/spreadsheet/{id}`.
#[derive(Debug)]
pub struct MetadataStorage {
    entries: RefCell<BTreeMap<SpreadsheetId, StorageValue>>,
    next_id: Cell<u64>,
}

impl MetadataStorage {
    /// An empty store; generated identities start at 1
    pub fn new() -> Self {
        MetadataStorage {
            entries: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
        }
    }

    fn id_of(path: &StoragePath) -> Result<Option<SpreadsheetId>> {
        match path.segments() {
            [first] if first == "spreadsheet" => Ok(None),
            [first, id] if first == "spreadsheet" => match id.parse::<SpreadsheetId>() {
                Ok(id) => Ok(Some(id)),
                Err(_) => Err(Error::storage(format!("invalid spreadsheet id: {id}"))),
            },
            _ => Err(Error::IncompletePath(path.to_string())),
        }
    }
}

impl Default for MetadataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MetadataStorage {
    fn load(&self, path: &StoragePath, _context: &StoreContext) -> Result<Option<StorageValue>> {
        match Self::id_of(path)? {
            Some(id) => Ok(self.entries.borrow().get(&id).cloned()),
            None => Ok(None),
        }
    }

    fn save(&self, value: StorageValue, _context: &StoreContext) -> Result<StorageValue> {
        let id = match Self::id_of(value.path())? {
            Some(id) => id,
            None => {
                // Creation: assign the next identity and re-path.
                let id = SpreadsheetId::new(self.next_id.get());
                self.next_id.set(id.value() + 1);
                id
            }
        };
        let stored = value.at_path(StoragePath::from_segments(["spreadsheet".to_string(), id.to_string()]));
        self.entries.borrow_mut().insert(id, stored.clone());
        Ok(stored)
    }

    fn delete(&self, path: &StoragePath, _context: &StoreContext) -> Result<()> {
        match Self::id_of(path)? {
            Some(id) => {
                self.entries.borrow_mut().remove(&id);
                Ok(())
            }
            None => Err(Error::IncompletePath(path.to_string())),
        }
    }

    fn list(
        &self,
        _path: &StoragePath,
        offset: usize,
        count: usize,
        _context: &StoreContext,
    ) -> Result<Vec<StorageInfo>> {
        Ok(self
            .entries
            .borrow()
            .values()
            .skip(offset)
            .take(count)
            .map(StorageValue::info)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use quill_sheets_core::EnvironmentStore;
    use pretty_assertions::assert_eq;

    fn context() -> StoreContext {
        StoreContext::new(Rc::new(EnvironmentStore::new()))
    }

    #[test]
    fn test_memory_roundtrip() {
        let store = MemoryStorage::new();
        let ctx = context();
        let value = StorageValue::new(StoragePath::parse("/cell/A1")).with_payload(b"1".to_vec());

        store.save(value.clone(), &ctx).unwrap();
        assert_eq!(store.load(value.path(), &ctx).unwrap(), Some(value.clone()));

        store.delete(value.path(), &ctx).unwrap();
        assert_eq!(store.load(value.path(), &ctx).unwrap(), None);
    }

    #[test]
    fn test_bucket_store_rejects_incomplete_path_on_write() {
        let store = MemoryStorage::for_bucket("cell");
        let ctx = context();

        let err = store
            .save(StorageValue::new(StoragePath::parse("/cell")), &ctx)
            .unwrap_err();
        assert!(matches!(err, Error::IncompletePath(_)));
        assert!(store
            .delete(&StoragePath::parse("/spreadsheet/7/cell"), &ctx)
            .is_err());

        // Reads stay lenient.
        assert_eq!(store.load(&StoragePath::parse("/cell"), &ctx).unwrap(), None);
        assert!(store
            .list(&StoragePath::parse("/cell"), 0, 10, &ctx)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_bucket_store_accepts_prefixed_paths() {
        let store = MemoryStorage::for_bucket("cell");
        let ctx = context();
        store
            .save(
                StorageValue::new(StoragePath::parse("/spreadsheet/7/cell/A1")),
                &ctx,
            )
            .unwrap();
        store
            .save(StorageValue::new(StoragePath::parse("/cell/B2")), &ctx)
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_offset_and_count() {
        let store = MemoryStorage::new();
        let ctx = context();
        for name in ["A1", "A2", "B1", "B2"] {
            store
                .save(
                    StorageValue::new(StoragePath::parse("/cell").join(name)),
                    &ctx,
                )
                .unwrap();
        }

        let infos = store.list(&StoragePath::parse("/cell"), 1, 2, &ctx).unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].path, StoragePath::parse("/cell/A2"));
        assert_eq!(infos[1].path, StoragePath::parse("/cell/B1"));

        let none = store.list(&StoragePath::parse("/cell"), 9, 5, &ctx).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_metadata_save_assigns_identity() {
        let store = MetadataStorage::new();
        let ctx = context();

        let created = store
            .save(
                StorageValue::new(StoragePath::parse("/spreadsheet")).with_payload(b"{}".to_vec()),
                &ctx,
            )
            .unwrap();
        assert_eq!(created.path().to_string(), "/spreadsheet/1");

        let second = store
            .save(StorageValue::new(StoragePath::parse("/spreadsheet")), &ctx)
            .unwrap();
        assert_eq!(second.path().to_string(), "/spreadsheet/2");

        // Saving under an explicit identity updates in place.
        let updated = store
            .save(
                StorageValue::new(StoragePath::parse("/spreadsheet/1")).with_payload(b"x".to_vec()),
                &ctx,
            )
            .unwrap();
        assert_eq!(updated.path().to_string(), "/spreadsheet/1");
        assert_eq!(
            store
                .load(&StoragePath::parse("/spreadsheet/1"), &ctx)
                .unwrap()
                .unwrap()
                .payload(),
            Some(&b"x"[..])
        );
    }

    #[test]
    fn test_metadata_rejects_malformed_paths() {
        let store = MetadataStorage::new();
        let ctx = context();
        assert!(store
            .load(&StoragePath::parse("/spreadsheet/abc"), &ctx)
            .is_err());
        assert!(store
            .delete(&StoragePath::parse("/spreadsheet"), &ctx)
            .is_err());
    }

    #[test]
    fn test_metadata_list() {
        let store = MetadataStorage::new();
        let ctx = context();
        for _ in 0..3 {
            store
                .save(StorageValue::new(StoragePath::parse("/spreadsheet")), &ctx)
                .unwrap();
        }
        let infos = store
            .list(&StoragePath::parse("/spreadsheet"), 1, 5, &ctx)
            .unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].path, StoragePath::parse("/spreadsheet/2"));
    }
}

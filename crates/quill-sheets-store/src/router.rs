//! The storage router
//!
//! Maps a path to the backing store that should handle it, rebinding the
//! context with an extracted spreadsheet identity where the path is
//! spreadsheet-scoped. Classification is total: every path lands in
//! exactly one bucket and routing itself never fails.

use std::borrow::Cow;
use std::rc::Rc;

use log::debug;

use quill_sheets_core::error::Result;
use quill_sheets_core::SpreadsheetId;

use crate::context::StoreContext;
use crate::path::StoragePath;
use crate::storage::Storage;
use crate::value::{StorageInfo, StorageValue};

/// First segment of spreadsheet-scoped paths
pub const SPREADSHEET: &str = "spreadsheet";
/// Keyword segment selecting the cell bucket
pub const CELL: &str = "cell";
/// Keyword segment selecting the label bucket
pub const LABEL: &str = "label";

/// Where a path routes, and with what identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Anything unrecognized, including paths too short to classify
    CatchAll,
    /// `/spreadsheet/{id}` - the metadata record itself
    Metadata(SpreadsheetId),
    /// `/cell/...` or `/spreadsheet/{id}/cell/...`
    Cell(Option<SpreadsheetId>),
    /// `/label/...` or `/spreadsheet/{id}/label/...`
    Label(Option<SpreadsheetId>),
}

/// Classify a path
///
/// Total over all inputs: unrecognized shapes, including an unparseable
/// identity segment, fall through to [`Route::CatchAll`].
pub fn route(path: &StoragePath) -> Route {
    match path.segments() {
        [] | [_] => Route::CatchAll,
        [first, id] if first == SPREADSHEET => match id.parse() {
            Ok(id) => Route::Metadata(id),
            Err(_) => Route::CatchAll,
        },
        [first, id, kind, ..] if first == SPREADSHEET && kind == CELL => match id.parse() {
            Ok(id) => Route::Cell(Some(id)),
            Err(_) => Route::CatchAll,
        },
        [first, id, kind, ..] if first == SPREADSHEET && kind == LABEL => match id.parse() {
            Ok(id) => Route::Label(Some(id)),
            Err(_) => Route::CatchAll,
        },
        [first, ..] if first == CELL => Route::Cell(None),
        [first, ..] if first == LABEL => Route::Label(None),
        _ => Route::CatchAll,
    }
}

struct Bucket {
    prefix: &'static str,
    store: Rc<dyn Storage>,
}

/// Dispatches storage operations to the bucket a path routes to
///
/// Bucket prefixes are fixed at construction. Spreadsheet-scoped routes
/// clone the caller's context and bind the extracted identity; everything
/// else delegates with the context unchanged. Backing-store failures
/// propagate unchanged.
pub struct StorageRouter {
    cell: Bucket,
    label: Bucket,
    metadata: Bucket,
    catch_all: Bucket,
}

impl StorageRouter {
    /// Create a router over its four bucket stores
    pub fn new(
        cell: Rc<dyn Storage>,
        label: Rc<dyn Storage>,
        metadata: Rc<dyn Storage>,
        catch_all: Rc<dyn Storage>,
    ) -> Self {
        StorageRouter {
            cell: Bucket {
                prefix: CELL,
                store: cell,
            },
            label: Bucket {
                prefix: LABEL,
                store: label,
            },
            metadata: Bucket {
                prefix: SPREADSHEET,
                store: metadata,
            },
            catch_all: Bucket {
                prefix: "",
                store: catch_all,
            },
        }
    }

    /// Load the value at a path from its bucket
    pub fn load(
        &self,
        path: &StoragePath,
        context: &StoreContext,
    ) -> Result<Option<StorageValue>> {
        let (bucket, context) = self.select(path, context, "load");
        bucket.store.load(path, &context)
    }

    /// Save a value into the bucket its path routes to
    pub fn save(&self, value: StorageValue, context: &StoreContext) -> Result<StorageValue> {
        let (bucket, context) = self.select(value.path(), context, "save");
        bucket.store.save(value, &context)
    }

    /// Delete the value at a path from its bucket
    pub fn delete(&self, path: &StoragePath, context: &StoreContext) -> Result<()> {
        let (bucket, context) = self.select(path, context, "delete");
        bucket.store.delete(path, &context)
    }

    /// List values under a path from its bucket
    pub fn list(
        &self,
        path: &StoragePath,
        offset: usize,
        count: usize,
        context: &StoreContext,
    ) -> Result<Vec<StorageInfo>> {
        let (bucket, context) = self.select(path, context, "list");
        bucket.store.list(path, offset, count, &context)
    }

    fn select<'c>(
        &self,
        path: &StoragePath,
        context: &'c StoreContext,
        operation: &str,
    ) -> (&Bucket, Cow<'c, StoreContext>) {
        let (bucket, context) = match route(path) {
            Route::CatchAll => (&self.catch_all, Cow::Borrowed(context)),
            Route::Metadata(_) => (&self.metadata, Cow::Borrowed(context)),
            Route::Cell(None) => (&self.cell, Cow::Borrowed(context)),
            Route::Label(None) => (&self.label, Cow::Borrowed(context)),
            Route::Cell(Some(id)) => (
                &self.cell,
                Cow::Owned(context.with_spreadsheet_id(id)),
            ),
            Route::Label(Some(id)) => (
                &self.label,
                Cow::Owned(context.with_spreadsheet_id(id)),
            ),
        };
        debug!(
            "{operation} {path} -> {} bucket",
            if bucket.prefix.is_empty() {
                "catch-all"
            } else {
                bucket.prefix
            }
        );
        (bucket, context)
    }
}

impl std::fmt::Debug for StorageRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageRouter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, MetadataStorage};
    use quill_sheets_core::EnvironmentStore;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn router_with_cells() -> (Rc<MemoryStorage>, Rc<MemoryStorage>, StorageRouter) {
        let cell = Rc::new(MemoryStorage::for_bucket(CELL));
        let label = Rc::new(MemoryStorage::for_bucket(LABEL));
        let catch_all = Rc::new(MemoryStorage::new());
        let router = StorageRouter::new(
            Rc::clone(&cell) as Rc<dyn Storage>,
            Rc::clone(&label) as Rc<dyn Storage>,
            Rc::new(MetadataStorage::new()),
            Rc::clone(&catch_all) as Rc<dyn Storage>,
        );
        (cell, catch_all, router)
    }

    fn context() -> StoreContext {
        StoreContext::new(Rc::new(EnvironmentStore::new()))
    }

    #[test]
    fn test_route_shapes() {
        assert_eq!(route(&StoragePath::root()), Route::CatchAll);
        assert_eq!(route(&StoragePath::parse("/x")), Route::CatchAll);
        assert_eq!(
            route(&StoragePath::parse("/spreadsheet/7")),
            Route::Metadata(SpreadsheetId::new(7))
        );
        assert_eq!(
            route(&StoragePath::parse("/spreadsheet/7/cell/A1")),
            Route::Cell(Some(SpreadsheetId::new(7)))
        );
        assert_eq!(
            route(&StoragePath::parse("/spreadsheet/7/label/Total")),
            Route::Label(Some(SpreadsheetId::new(7)))
        );
        assert_eq!(route(&StoragePath::parse("/cell/A1")), Route::Cell(None));
        assert_eq!(
            route(&StoragePath::parse("/label/Total")),
            Route::Label(None)
        );
    }

    #[test]
    fn test_route_unrecognized_falls_through() {
        assert_eq!(
            route(&StoragePath::parse("/bogus/7/cell/A1")),
            Route::CatchAll
        );
        assert_eq!(
            route(&StoragePath::parse("/spreadsheet/abc")),
            Route::CatchAll
        );
        assert_eq!(
            route(&StoragePath::parse("/spreadsheet/abc/cell/A1")),
            Route::CatchAll
        );
        assert_eq!(
            route(&StoragePath::parse("/spreadsheet/7/chart/1")),
            Route::CatchAll
        );
    }

    #[test]
    fn test_cell_operations_reach_cell_bucket() {
        let (cell, _, router) = router_with_cells();
        let ctx = context();
        let value = StorageValue::new(StoragePath::parse("/cell/A1")).with_payload(b"1".to_vec());

        router.save(value.clone(), &ctx).unwrap();
        assert_eq!(cell.len(), 1);
        assert_eq!(router.load(value.path(), &ctx).unwrap(), Some(value.clone()));

        router.delete(value.path(), &ctx).unwrap();
        assert!(cell.is_empty());
    }

    #[test]
    fn test_short_and_unknown_paths_reach_catch_all() {
        let (_, catch_all, router) = router_with_cells();
        let ctx = context();

        router
            .save(StorageValue::new(StoragePath::parse("/settings")), &ctx)
            .unwrap();
        router
            .save(
                StorageValue::new(StoragePath::parse("/theme/dark/accent")),
                &ctx,
            )
            .unwrap();
        assert_eq!(catch_all.len(), 2);
    }

    #[test]
    fn test_spreadsheet_scoped_save_rebinds_context() {
        let ctx = context();

        // A capturing store that records the identity it was called with.
        #[derive(Default)]
        struct Capture {
            seen: std::cell::RefCell<Vec<Option<SpreadsheetId>>>,
        }
        impl Storage for Capture {
            fn load(
                &self,
                _path: &StoragePath,
                context: &StoreContext,
            ) -> Result<Option<StorageValue>> {
                self.seen.borrow_mut().push(context.spreadsheet_id());
                Ok(None)
            }
            fn save(&self, value: StorageValue, context: &StoreContext) -> Result<StorageValue> {
                self.seen.borrow_mut().push(context.spreadsheet_id());
                Ok(value)
            }
            fn delete(&self, _path: &StoragePath, context: &StoreContext) -> Result<()> {
                self.seen.borrow_mut().push(context.spreadsheet_id());
                Ok(())
            }
            fn list(
                &self,
                _path: &StoragePath,
                _offset: usize,
                _count: usize,
                context: &StoreContext,
            ) -> Result<Vec<StorageInfo>> {
                self.seen.borrow_mut().push(context.spreadsheet_id());
                Ok(Vec::new())
            }
        }

        let capture = Rc::new(Capture::default());
        let router = StorageRouter::new(
            Rc::clone(&capture) as Rc<dyn Storage>,
            Rc::new(MemoryStorage::for_bucket(LABEL)),
            Rc::new(MetadataStorage::new()),
            Rc::new(MemoryStorage::new()),
        );

        router
            .load(&StoragePath::parse("/spreadsheet/9/cell/A1"), &ctx)
            .unwrap();
        router
            .load(&StoragePath::parse("/cell/A1"), &ctx)
            .unwrap();

        assert_eq!(
            *capture.seen.borrow(),
            vec![Some(SpreadsheetId::new(9)), None]
        );
        // The caller's context is untouched.
        assert_eq!(ctx.spreadsheet_id(), None);
    }

    #[test]
    fn test_incomplete_cell_path_error_comes_from_store() {
        let (_, _, router) = router_with_cells();
        let ctx = context();
        // Routing itself accepts the path; the cell store rejects the
        // missing reference on delete.
        let err = router
            .delete(&StoragePath::parse("/spreadsheet/7/cell"), &ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            quill_sheets_core::Error::IncompletePath(_)
        ));
    }

    proptest! {
        // Routing is total: any segment list maps to exactly one bucket
        // without panicking.
        #[test]
        fn test_route_is_total(segments in proptest::collection::vec("[a-zA-Z0-9/]{0,12}", 0..6)) {
            let path = StoragePath::from_segments(segments);
            let _ = route(&path);
        }

        #[test]
        fn test_router_never_fails_to_dispatch_load(segments in proptest::collection::vec("[a-z0-9]{0,8}", 0..6)) {
            let (_, _, router) = router_with_cells();
            let ctx = context();
            let path = StoragePath::from_segments(segments);
            // Loads are lenient in every reference bucket.
            prop_assert!(router.load(&path, &ctx).is_ok());
        }
    }
}

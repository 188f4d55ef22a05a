//! # quill-sheets-store
//!
//! Path-routed storage dispatch for the quill-sheets backend.
//!
//! A caller addresses everything by [`StoragePath`]; the [`StorageRouter`]
//! decides which backing store handles each operation and, for
//! spreadsheet-scoped paths, rebinds the [`StoreContext`] with the
//! addressed spreadsheet's identity before delegating:
//! - [`StoragePath`], [`StorageValue`], [`StorageInfo`] - the data flowing
//!   through the contract
//! - [`Storage`] - the uniform load/save/delete/list contract
//! - [`MemoryStorage`], [`MetadataStorage`] - reference in-memory stores
//! - [`route`] / [`StorageRouter`] - total path classification and dispatch
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use quill_sheets_core::EnvironmentStore;
//! use quill_sheets_store::{
//!     MemoryStorage, MetadataStorage, StorageRouter, StoragePath, StorageValue, StoreContext,
//! };
//!
//! let router = StorageRouter::new(
//!     Rc::new(MemoryStorage::for_bucket("cell")),
//!     Rc::new(MemoryStorage::for_bucket("label")),
//!     Rc::new(MetadataStorage::new()),
//!     Rc::new(MemoryStorage::new()),
//! );
//! let ctx = StoreContext::new(Rc::new(EnvironmentStore::new()));
//!
//! let value = StorageValue::new(StoragePath::parse("/cell/A1")).with_payload(b"=1+2".to_vec());
//! router.save(value, &ctx).unwrap();
//! assert!(router.load(&StoragePath::parse("/cell/A1"), &ctx).unwrap().is_some());
//! ```

pub mod context;
pub mod path;
pub mod router;
pub mod storage;
pub mod value;

// Re-exports for convenience
pub use context::StoreContext;
pub use path::StoragePath;
pub use router::{route, Route, StorageRouter, CELL, LABEL, SPREADSHEET};
pub use storage::{MemoryStorage, MetadataStorage, Storage};
pub use value::{StorageInfo, StorageValue};

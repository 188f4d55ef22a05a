//! # quill-sheets-core
//!
//! Typed configuration plumbing for the quill-sheets backend.
//!
//! This crate provides the fundamental types the configuration-resolution
//! core is built from:
//! - [`ValueName`] / [`ValueKind`] - typed keys into the environment store
//! - [`ConfigValue`] - the closed set of configuration value shapes
//! - [`EnvironmentStore`] - mutable typed store with synchronous change
//!   notification
//! - [`SpreadsheetId`] - spreadsheet identity carried in paths and contexts
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets_core::{name, ConfigValue, EnvironmentStore, RoundingMode};
//!
//! let store = EnvironmentStore::new();
//! store.set(name::PRECISION, ConfigValue::Number(7)).unwrap();
//! store.set(name::ROUNDING_MODE, RoundingMode::HalfUp.into()).unwrap();
//!
//! assert_eq!(store.get(&name::PRECISION), Some(ConfigValue::Number(7)));
//! ```

pub mod environment;
pub mod error;
pub mod id;
pub mod name;
pub mod value;

// Re-exports for convenience
pub use environment::{EnvironmentStore, Listener, Subscription};
pub use error::{Error, Result};
pub use id::SpreadsheetId;
pub use name::{ValueKind, ValueName};
pub use value::{
    ConfigValue, DateTimeSymbols, DecimalNumberSymbols, ExpressionNumberKind, LocaleTag,
    RoundingMode,
};

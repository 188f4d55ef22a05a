//! # quill-sheets
//!
//! Configuration-resolution and request-routing core for a spreadsheet
//! backend.
//!
//! Two pieces do the heavy lifting:
//! - a **derived-context cache** ([`ContextCache`]) that lazily builds the
//!   interdependent computation contexts (math, date/time, decimal,
//!   expression-number, conversion, parsing) from a pool of named typed
//!   configuration values, and discards the whole memo set the moment a
//!   relevant value changes
//! - a **storage router** ([`StorageRouter`]) that maps hierarchical
//!   resource paths to the right backing store, rebinding the active
//!   context with the addressed spreadsheet's identity before delegating
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets::prelude::*;
//!
//! let session = Session::new();
//! let store = session.environment();
//!
//! store.set(name::PRECISION, 7u32.into()).unwrap();
//! store.set(name::ROUNDING_MODE, RoundingMode::HalfUp.into()).unwrap();
//!
//! // Lazy derivation, memoized until a well-known value changes.
//! let math = session.contexts().math_context().unwrap();
//! assert_eq!(math.precision(), 7);
//!
//! // Path-routed storage with context rebinding.
//! let ctx = session.store_context();
//! let cell = StorageValue::new(StoragePath::parse("/spreadsheet/7/cell/A1"))
//!     .with_payload(b"=1+2".to_vec());
//! session.router().save(cell, &ctx).unwrap();
//! ```

pub mod session;

pub mod prelude;

pub use session::Session;

// Re-export the component crates' surfaces
pub use quill_sheets_core::{
    name, ConfigValue, DateTimeSymbols, DecimalNumberSymbols, EnvironmentStore, Error,
    ExpressionNumberKind, Listener, LocaleTag, Result, RoundingMode, SpreadsheetId, Subscription,
    ValueKind, ValueName,
};

pub use quill_sheets_context::{
    BuiltinLocaleData, ContextCache, ConversionContext, Converter, ConverterFactory,
    ConverterProvider, ConverterRegistry, DateTimeContext, DecimalNumberContext,
    ExpressionNumberContext, JsonProcessor, LabelResolver, LocaleDataProvider, MapLabelResolver,
    MarshallContext, MathContext, MissingValueCollector, NamedConverter, NamedParser, Parser,
    ParserContext, ParserFactory, ParserProvider, ParserRegistry, ProviderContext,
    SpreadsheetParser, UnmarshallContext,
};

pub use quill_sheets_store::{
    route, MemoryStorage, MetadataStorage, Route, Storage, StorageInfo, StoragePath,
    StorageRouter, StorageValue, StoreContext, CELL, LABEL, SPREADSHEET,
};

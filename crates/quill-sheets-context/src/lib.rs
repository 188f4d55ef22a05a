//! # quill-sheets-context
//!
//! Derived computation contexts for the quill-sheets backend.
//!
//! Every piece of computation the backend performs - formatting a number,
//! parsing a date, converting a value - consumes a *context* assembled from
//! environment store values. This crate derives those contexts lazily,
//! caches them, and throws the whole cache away whenever a relevant value
//! changes:
//! - [`MissingValueCollector`] - collects every absent prerequisite so a
//!   derivation fails once, completely
//! - [`ContextCache`] - the lazy, invalidating derivation cache
//! - [`MathContext`], [`DateTimeContext`], [`DecimalNumberContext`],
//!   [`ExpressionNumberContext`], [`ConversionContext`], [`ParserContext`] -
//!   the derived context set
//! - [`ConverterRegistry`], [`ParserRegistry`], [`BuiltinLocaleData`] -
//!   reference collaborator providers
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use quill_sheets_core::{name, EnvironmentStore, RoundingMode};
//! use quill_sheets_context::{
//!     BuiltinLocaleData, ContextCache, ConverterRegistry, MapLabelResolver, ParserRegistry,
//!     ProviderContext,
//! };
//!
//! let store = Rc::new(EnvironmentStore::new());
//! store.set(name::PRECISION, 7u32.into()).unwrap();
//! store.set(name::ROUNDING_MODE, RoundingMode::HalfUp.into()).unwrap();
//!
//! let labels = Rc::new(MapLabelResolver::new());
//! let cache = ContextCache::new(
//!     Rc::clone(&store),
//!     Rc::new(BuiltinLocaleData::new()),
//!     Rc::new(ConverterRegistry::standard()),
//!     Rc::new(ParserRegistry::standard()),
//!     ProviderContext::new(Rc::clone(&store), labels),
//! );
//!
//! assert_eq!(cache.math_context().unwrap().precision(), 7);
//! ```

pub mod cache;
pub mod conversion;
pub mod datetime;
pub mod decimal;
pub mod expression;
pub mod locale;
pub mod marshall;
pub mod math;
pub mod missing;
pub mod parser;
pub mod provider;

// Re-exports for convenience
pub use cache::ContextCache;
pub use conversion::ConversionContext;
pub use datetime::DateTimeContext;
pub use decimal::DecimalNumberContext;
pub use expression::ExpressionNumberContext;
pub use locale::BuiltinLocaleData;
pub use marshall::{JsonProcessor, MarshallContext, UnmarshallContext};
pub use math::MathContext;
pub use missing::MissingValueCollector;
pub use parser::{ParserContext, SpreadsheetParser};
pub use provider::{
    Converter, ConverterFactory, ConverterProvider, ConverterRegistry, LabelResolver,
    LocaleDataProvider, MapLabelResolver, NamedConverter, NamedParser, Parser, ParserFactory,
    ParserProvider, ParserRegistry, ProviderContext,
};

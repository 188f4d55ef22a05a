//! Prelude module - common imports for quill-sheets users
//!
//! ```rust
//! use quill_sheets::prelude::*;
//! ```

pub use crate::{
    // Derived contexts
    ContextCache,
    ConversionContext,
    // Providers
    Converter,
    ConverterProvider,
    ConverterRegistry,
    DateTimeContext,
    DecimalNumberContext,
    // Core configuration types
    EnvironmentStore,
    ExpressionNumberContext,
    ExpressionNumberKind,
    LabelResolver,
    LocaleDataProvider,
    LocaleTag,
    MapLabelResolver,
    MathContext,
    // Storage
    MemoryStorage,
    MetadataStorage,
    MissingValueCollector,
    Parser,
    ParserContext,
    ParserProvider,
    ParserRegistry,
    ProviderContext,
    RoundingMode,
    Route,
    // Session wiring
    Session,
    SpreadsheetId,
    SpreadsheetParser,
    Storage,
    StorageInfo,
    StoragePath,
    StorageRouter,
    StorageValue,
    StoreContext,
    ValueKind,
    ValueName,
};

pub use crate::name;

//! Session wiring
//!
//! A [`Session`] is the single-logical-owner unit: one environment store,
//! one derivation cache subscribed to it, and one router over a set of
//! backing stores. Concurrent sessions each get their own.

use std::rc::Rc;

use quill_sheets_context::{
    BuiltinLocaleData, ContextCache, ConverterProvider, ConverterRegistry, LabelResolver,
    LocaleDataProvider, MapLabelResolver, ParserProvider, ParserRegistry, ProviderContext,
};
use quill_sheets_core::EnvironmentStore;
use quill_sheets_store::{
    MemoryStorage, MetadataStorage, Storage, StorageRouter, StoreContext, CELL, LABEL,
};

/// One spreadsheet session: environment, derived contexts and storage
/// routing bound together
pub struct Session {
    environment: Rc<EnvironmentStore>,
    contexts: ContextCache,
    router: StorageRouter,
    labels: Rc<MapLabelResolver>,
}

impl Session {
    /// A session over an empty environment, the built-in locale data, the
    /// standard provider registries and in-memory backing stores
    pub fn new() -> Self {
        Self::with_providers(
            Rc::new(BuiltinLocaleData::new()),
            Rc::new(ConverterRegistry::standard()),
            Rc::new(ParserRegistry::standard()),
        )
    }

    /// A session with custom collaborator providers
    pub fn with_providers(
        locale_data: Rc<dyn LocaleDataProvider>,
        converters: Rc<dyn ConverterProvider>,
        parsers: Rc<dyn ParserProvider>,
    ) -> Self {
        let environment = Rc::new(EnvironmentStore::new());
        let labels = Rc::new(MapLabelResolver::new());
        let provider_context = ProviderContext::new(
            Rc::clone(&environment),
            Rc::clone(&labels) as Rc<dyn LabelResolver>,
        );

        let contexts = ContextCache::new(
            Rc::clone(&environment),
            locale_data,
            converters,
            parsers,
            provider_context,
        );

        let router = StorageRouter::new(
            Rc::new(MemoryStorage::for_bucket(CELL)) as Rc<dyn Storage>,
            Rc::new(MemoryStorage::for_bucket(LABEL)),
            Rc::new(MetadataStorage::new()),
            Rc::new(MemoryStorage::new()),
        );

        Session {
            environment,
            contexts,
            router,
            labels,
        }
    }

    /// The session's environment store
    pub fn environment(&self) -> &Rc<EnvironmentStore> {
        &self.environment
    }

    /// The derived-context cache
    pub fn contexts(&self) -> &ContextCache {
        &self.contexts
    }

    /// The storage router
    pub fn router(&self) -> &StorageRouter {
        &self.router
    }

    /// The session's label resolver
    pub fn labels(&self) -> &Rc<MapLabelResolver> {
        &self.labels
    }

    /// A store context over this session's environment, bound to the
    /// spreadsheet identity currently configured, if any
    pub fn store_context(&self) -> StoreContext {
        StoreContext::from_environment(Rc::clone(&self.environment))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

//! Collaborator providers
//!
//! Converters and parsers are obtained by name from a provider; the
//! algorithms behind them live outside this crate. Providers follow the
//! registry pattern: a map from selector to factory, built once and looked
//! up by exact key.

use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;

use quill_sheets_core::error::{Error, Result};
use quill_sheets_core::value::{DateTimeSymbols, DecimalNumberSymbols, LocaleTag};
use quill_sheets_core::EnvironmentStore;

/// Locale-keyed defaults for symbols not explicitly configured
pub trait LocaleDataProvider {
    /// Default date/time symbols for a locale, if it is supported
    fn date_time_symbols(&self, locale: &LocaleTag) -> Option<DateTimeSymbols>;

    /// Default decimal-number symbols for a locale, if it is supported
    fn decimal_number_symbols(&self, locale: &LocaleTag) -> Option<DecimalNumberSymbols>;
}

/// An opaque value converter obtained by selector
pub trait Converter: fmt::Debug {
    /// The selector this converter was registered under
    fn name(&self) -> &str;
}

/// An opaque parser obtained by selector
pub trait Parser: fmt::Debug {
    /// The selector this parser was registered under
    fn name(&self) -> &str;
}

/// Ambient state handed to provider factories
#[derive(Clone)]
pub struct ProviderContext {
    environment: Rc<EnvironmentStore>,
    labels: Rc<dyn LabelResolver>,
}

impl ProviderContext {
    /// Create a provider context over an environment and label resolver
    pub fn new(environment: Rc<EnvironmentStore>, labels: Rc<dyn LabelResolver>) -> Self {
        ProviderContext {
            environment,
            labels,
        }
    }

    /// The environment store factories may consult
    pub fn environment(&self) -> &Rc<EnvironmentStore> {
        &self.environment
    }

    /// The label resolver
    pub fn labels(&self) -> &Rc<dyn LabelResolver> {
        &self.labels
    }
}

impl fmt::Debug for ProviderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderContext").finish_non_exhaustive()
    }
}

/// Resolves a label name to the cell reference text it stands for
pub trait LabelResolver {
    /// The referenced cell, or `None` when the label is unknown
    fn resolve(&self, label: &str) -> Option<String>;
}

/// Map-backed label resolver
#[derive(Debug, Default)]
pub struct MapLabelResolver {
    labels: std::cell::RefCell<AHashMap<String, String>>,
}

impl MapLabelResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or redefine a label
    pub fn define(&self, label: impl Into<String>, reference: impl Into<String>) {
        self.labels
            .borrow_mut()
            .insert(label.into(), reference.into());
    }
}

impl LabelResolver for MapLabelResolver {
    fn resolve(&self, label: &str) -> Option<String> {
        self.labels.borrow().get(label).cloned()
    }
}

/// Resolves converter selectors to converter instances
pub trait ConverterProvider {
    /// Resolve a selector, or fail with [`Error::UnknownSelector`]
    fn converter(&self, selector: &str, context: &ProviderContext) -> Result<Rc<dyn Converter>>;
}

/// Resolves parser selectors to parser instances
pub trait ParserProvider {
    /// Resolve a selector, or fail with [`Error::UnknownSelector`]
    fn parser(&self, selector: &str, context: &ProviderContext) -> Result<Rc<dyn Parser>>;
}

/// Factory producing a converter on demand
pub type ConverterFactory = Rc<dyn Fn(&ProviderContext) -> Rc<dyn Converter>>;

/// Factory producing a parser on demand
pub type ParserFactory = Rc<dyn Fn(&ProviderContext) -> Rc<dyn Parser>>;

/// Registry-backed converter provider
#[derive(Default)]
pub struct ConverterRegistry {
    factories: AHashMap<String, ConverterFactory>,
}

impl ConverterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a selector, replacing any previous entry
    pub fn register(&mut self, selector: impl Into<String>, factory: ConverterFactory) {
        self.factories.insert(selector.into(), factory);
    }

    /// A registry preloaded with the standard named converters
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for selector in ["general", "text", "number", "date-time", "boolean"] {
            registry.register(
                selector,
                Rc::new(move |_ctx: &ProviderContext| {
                    Rc::new(NamedConverter::new(selector)) as Rc<dyn Converter>
                }),
            );
        }
        registry
    }
}

impl ConverterProvider for ConverterRegistry {
    fn converter(&self, selector: &str, context: &ProviderContext) -> Result<Rc<dyn Converter>> {
        match self.factories.get(selector) {
            Some(factory) => Ok(factory(context)),
            None => Err(Error::UnknownSelector {
                kind: "converter",
                name: selector.to_string(),
            }),
        }
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("selectors", &self.factories.len())
            .finish()
    }
}

/// Registry-backed parser provider
#[derive(Default)]
pub struct ParserRegistry {
    factories: AHashMap<String, ParserFactory>,
}

impl ParserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a selector, replacing any previous entry
    pub fn register(&mut self, selector: impl Into<String>, factory: ParserFactory) {
        self.factories.insert(selector.into(), factory);
    }

    /// A registry preloaded with the standard named parsers
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for selector in ["date", "date-time", "number", "time"] {
            registry.register(
                selector,
                Rc::new(move |_ctx: &ProviderContext| {
                    Rc::new(NamedParser::new(selector)) as Rc<dyn Parser>
                }),
            );
        }
        registry
    }
}

impl ParserProvider for ParserRegistry {
    fn parser(&self, selector: &str, context: &ProviderContext) -> Result<Rc<dyn Parser>> {
        match self.factories.get(selector) {
            Some(factory) => Ok(factory(context)),
            None => Err(Error::UnknownSelector {
                kind: "parser",
                name: selector.to_string(),
            }),
        }
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("selectors", &self.factories.len())
            .finish()
    }
}

/// Converter handle carrying only its selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedConverter {
    name: String,
}

impl NamedConverter {
    /// Create a handle for a selector
    pub fn new(name: impl Into<String>) -> Self {
        NamedConverter { name: name.into() }
    }
}

impl Converter for NamedConverter {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Parser handle carrying only its selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedParser {
    name: String,
}

impl NamedParser {
    /// Create a handle for a selector
    pub fn new(name: impl Into<String>) -> Self {
        NamedParser { name: name.into() }
    }
}

impl Parser for NamedParser {
    fn name(&self) -> &str {
        &self.name
    }
}

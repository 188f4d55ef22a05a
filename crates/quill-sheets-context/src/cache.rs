//! The derived-context cache
//!
//! [`ContextCache`] lazily builds the derived context set from environment
//! store values, memoizes each object, and discards the whole memo set when
//! any well-known value changes. Derivations probe through a
//! [`MissingValueCollector`] so one failure names every absent value.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use quill_sheets_core::error::{Error, Result};
use quill_sheets_core::value::ExpressionNumberKind;
use quill_sheets_core::{name, EnvironmentStore, Subscription};

use crate::conversion::ConversionContext;
use crate::datetime::DateTimeContext;
use crate::decimal::DecimalNumberContext;
use crate::expression::ExpressionNumberContext;
use crate::marshall::{MarshallContext, UnmarshallContext};
use crate::math::MathContext;
use crate::missing::MissingValueCollector;
use crate::parser::{ParserContext, SpreadsheetParser};
use crate::provider::{
    Converter, ConverterProvider, LocaleDataProvider, ParserProvider, ProviderContext,
};

/// The memo set; reset as a unit, never per field
#[derive(Default)]
struct Slots {
    math: Option<Rc<MathContext>>,
    date_time: Option<Rc<DateTimeContext>>,
    decimal: Option<Rc<DecimalNumberContext>>,
    expression: Option<Rc<ExpressionNumberContext>>,
    converter: Option<Rc<dyn Converter>>,
    marshall: Option<Rc<MarshallContext>>,
    unmarshall: Option<Rc<UnmarshallContext>>,
    conversion: Option<Rc<ConversionContext>>,
    parser: Option<Rc<SpreadsheetParser>>,
    parser_context: Option<Rc<ParserContext>>,
}

impl Slots {
    fn clear(&mut self) {
        *self = Slots::default();
    }
}

/// Lazily derives and caches computation contexts from environment values
///
/// One cache per session. The cache subscribes once to its store; any
/// change to a well-known name clears every cached object, so no derived
/// object can observe a stale combination of values. Derived objects are
/// shared by `Rc` within one generation: the decimal context embedded in
/// the expression-number context is the same instance the decimal accessor
/// returns.
pub struct ContextCache {
    environment: Rc<EnvironmentStore>,
    locale_data: Rc<dyn LocaleDataProvider>,
    converters: Rc<dyn ConverterProvider>,
    parsers: Rc<dyn ParserProvider>,
    provider_context: ProviderContext,
    slots: Rc<RefCell<Slots>>,
    _subscription: Subscription,
}

impl ContextCache {
    /// Create a cache over a store and its collaborator providers
    ///
    /// Subscribes to the store; the subscription lives as long as the
    /// cache.
    pub fn new(
        environment: Rc<EnvironmentStore>,
        locale_data: Rc<dyn LocaleDataProvider>,
        converters: Rc<dyn ConverterProvider>,
        parsers: Rc<dyn ParserProvider>,
        provider_context: ProviderContext,
    ) -> Self {
        let slots = Rc::new(RefCell::new(Slots::default()));

        let weak = Rc::downgrade(&slots);
        let subscription = environment.subscribe(Rc::new(move |changed| {
            if changed.is_well_known() {
                if let Some(slots) = weak.upgrade() {
                    debug!("discarding derived contexts: {changed} changed");
                    slots.borrow_mut().clear();
                }
            }
        }));

        ContextCache {
            environment,
            locale_data,
            converters,
            parsers,
            provider_context,
            slots,
            _subscription: subscription,
        }
    }

    /// The store this cache derives from
    pub fn environment(&self) -> &Rc<EnvironmentStore> {
        &self.environment
    }

    /// Discard every cached derived object
    ///
    /// Coarse by design: any well-known change clears everything, so a
    /// caller never sees a stale combination of values.
    pub fn clear(&self) {
        self.slots.borrow_mut().clear();
    }

    /// Math context: precision and rounding mode
    pub fn math_context(&self) -> Result<Rc<MathContext>> {
        if let Some(ctx) = self.slots.borrow().math.clone() {
            return Ok(ctx);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let precision = missing.probe_number(&name::PRECISION);
        let rounding = missing.probe_rounding(&name::ROUNDING_MODE);

        let (Some(precision), Some(rounding)) = (precision, rounding) else {
            return Err(missing.into_error());
        };

        let ctx = Rc::new(MathContext::new(precision, rounding));
        self.slots.borrow_mut().math = Some(Rc::clone(&ctx));
        Ok(ctx)
    }

    /// Date/time context: locale, year defaults and symbols
    ///
    /// Explicit symbols win; otherwise the locale-data provider supplies
    /// defaults for the resolved locale, and an unsupported locale fails
    /// hard rather than aggregating.
    pub fn date_time_context(&self) -> Result<Rc<DateTimeContext>> {
        if let Some(ctx) = self.slots.borrow().date_time.clone() {
            return Ok(ctx);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let locale = missing.probe_locale(&name::LOCALE);
        let default_year = missing.probe_number(&name::DEFAULT_YEAR);
        let pivot = missing.probe_number(&name::TWO_DIGIT_YEAR_PIVOT);

        let symbols = match missing.peek_date_time_symbols(&name::DATE_TIME_SYMBOLS) {
            Some(symbols) => Some(symbols),
            None => match &locale {
                Some(tag) => Some(
                    self.locale_data
                        .date_time_symbols(tag)
                        .ok_or_else(|| Error::UnknownLocale(tag.to_string()))?,
                ),
                // Without a locale the fallback cannot run either; the
                // symbols join the aggregate.
                None => {
                    missing.record(name::DATE_TIME_SYMBOLS);
                    None
                }
            },
        };

        let (Some(locale), Some(default_year), Some(pivot), Some(symbols)) =
            (locale, default_year, pivot, symbols)
        else {
            return Err(missing.into_error());
        };

        let ctx = Rc::new(DateTimeContext::new(
            locale,
            default_year as i32,
            pivot,
            symbols,
        ));
        self.slots.borrow_mut().date_time = Some(Rc::clone(&ctx));
        Ok(ctx)
    }

    /// Decimal-number context: digit count, symbols and math rules
    pub fn decimal_number_context(&self) -> Result<Rc<DecimalNumberContext>> {
        if let Some(ctx) = self.slots.borrow().decimal.clone() {
            return Ok(ctx);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let digit_count = missing.probe_number(&name::DECIMAL_DIGIT_COUNT);
        let locale = missing.probe_locale(&name::LOCALE);

        let math = match self.math_context() {
            Ok(math) => Some(math),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };

        let symbols = match missing.peek_decimal_number_symbols(&name::DECIMAL_NUMBER_SYMBOLS) {
            Some(symbols) => Some(symbols),
            None => match &locale {
                Some(tag) => Some(
                    self.locale_data
                        .decimal_number_symbols(tag)
                        .ok_or_else(|| Error::UnknownLocale(tag.to_string()))?,
                ),
                None => {
                    missing.record(name::DECIMAL_NUMBER_SYMBOLS);
                    None
                }
            },
        };

        let (Some(digit_count), Some(symbols), Some(math)) = (digit_count, symbols, math) else {
            return Err(missing.into_error());
        };

        let ctx = Rc::new(DecimalNumberContext::new(digit_count, symbols, math));
        self.slots.borrow_mut().decimal = Some(Rc::clone(&ctx));
        Ok(ctx)
    }

    /// Expression-number context: representation kind plus decimal rules
    pub fn expression_number_context(&self) -> Result<Rc<ExpressionNumberContext>> {
        if let Some(ctx) = self.slots.borrow().expression.clone() {
            return Ok(ctx);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let kind = missing.probe_number_kind(&name::EXPRESSION_NUMBER_KIND);

        let decimal = match self.decimal_number_context() {
            Ok(decimal) => Some(decimal),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };

        let (Some(kind), Some(decimal)) = (kind, decimal) else {
            return Err(missing.into_error());
        };

        let ctx = Rc::new(ExpressionNumberContext::new(kind, decimal));
        self.slots.borrow_mut().expression = Some(Rc::clone(&ctx));
        Ok(ctx)
    }

    /// The configured expression-number kind
    ///
    /// A raw value rather than a derived object; probed fresh each call.
    pub fn expression_number_kind(&self) -> Result<ExpressionNumberKind> {
        let mut missing = MissingValueCollector::new(&self.environment);
        match missing.probe_number_kind(&name::EXPRESSION_NUMBER_KIND) {
            Some(kind) => Ok(kind),
            None => Err(missing.into_error()),
        }
    }

    /// The converter named by the converter selector
    ///
    /// An unknown selector fails hard; only the absent selector value
    /// aggregates.
    pub fn converter(&self) -> Result<Rc<dyn Converter>> {
        if let Some(converter) = self.slots.borrow().converter.clone() {
            return Ok(converter);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let Some(selector) = missing.probe_selector(&name::CONVERTER) else {
            return Err(missing.into_error());
        };

        let converter = self
            .converters
            .converter(&selector, &self.provider_context)?;
        self.slots.borrow_mut().converter = Some(Rc::clone(&converter));
        Ok(converter)
    }

    /// Marshall context: numeric rules for serializing values
    pub fn marshall_context(&self) -> Result<Rc<MarshallContext>> {
        if let Some(ctx) = self.slots.borrow().marshall.clone() {
            return Ok(ctx);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let kind = missing.probe_number_kind(&name::EXPRESSION_NUMBER_KIND);

        let math = match self.math_context() {
            Ok(math) => Some(math),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };

        let (Some(kind), Some(math)) = (kind, math) else {
            return Err(missing.into_error());
        };

        let ctx = Rc::new(MarshallContext::new(kind, math));
        self.slots.borrow_mut().marshall = Some(Rc::clone(&ctx));
        Ok(ctx)
    }

    /// Unmarshall context: numeric rules for deserializing values
    pub fn unmarshall_context(&self) -> Result<Rc<UnmarshallContext>> {
        if let Some(ctx) = self.slots.borrow().unmarshall.clone() {
            return Ok(ctx);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let kind = missing.probe_number_kind(&name::EXPRESSION_NUMBER_KIND);

        let math = match self.math_context() {
            Ok(math) => Some(math),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };

        let (Some(kind), Some(math)) = (kind, math) else {
            return Err(missing.into_error());
        };

        let ctx = Rc::new(UnmarshallContext::new(kind, math));
        self.slots.borrow_mut().unmarshall = Some(Rc::clone(&ctx));
        Ok(ctx)
    }

    /// Conversion context: converter plus every context conversion needs
    pub fn conversion_context(&self) -> Result<Rc<ConversionContext>> {
        if let Some(ctx) = self.slots.borrow().conversion.clone() {
            return Ok(ctx);
        }

        let mut missing = MissingValueCollector::new(&self.environment);

        let converter = match self.converter() {
            Ok(converter) => Some(converter),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };
        let date_time = match self.date_time_context() {
            Ok(ctx) => Some(ctx),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };
        let decimal = match self.decimal_number_context() {
            Ok(ctx) => Some(ctx),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };
        let marshall = match self.marshall_context() {
            Ok(ctx) => Some(ctx),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };
        let unmarshall = match self.unmarshall_context() {
            Ok(ctx) => Some(ctx),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };

        let (Some(converter), Some(date_time), Some(decimal), Some(marshall), Some(unmarshall)) =
            (converter, date_time, decimal, marshall, unmarshall)
        else {
            return Err(missing.into_error());
        };

        let ctx = Rc::new(ConversionContext::new(
            converter,
            date_time,
            decimal,
            marshall,
            unmarshall,
            Rc::clone(self.provider_context.labels()),
        ));
        self.slots.borrow_mut().conversion = Some(Rc::clone(&ctx));
        Ok(ctx)
    }

    /// The combined cell-input parser: date, date-time, number and time
    /// alternatives, in that order
    pub fn spreadsheet_parser(&self) -> Result<Rc<SpreadsheetParser>> {
        if let Some(parser) = self.slots.borrow().parser.clone() {
            return Ok(parser);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let date = missing.probe_selector(&name::DATE_PARSER);
        let date_time = missing.probe_selector(&name::DATE_TIME_PARSER);
        let number = missing.probe_selector(&name::NUMBER_PARSER);
        let time = missing.probe_selector(&name::TIME_PARSER);

        let (Some(date), Some(date_time), Some(number), Some(time)) =
            (date, date_time, number, time)
        else {
            return Err(missing.into_error());
        };

        let mut alternatives = Vec::with_capacity(4);
        for selector in [&date, &date_time, &number, &time] {
            alternatives.push(self.parsers.parser(selector, &self.provider_context)?);
        }

        let parser = Rc::new(SpreadsheetParser::any_of(alternatives));
        self.slots.borrow_mut().parser = Some(Rc::clone(&parser));
        Ok(parser)
    }

    /// Parser context: date/time and expression-number rules plus the
    /// value separator
    pub fn parser_context(&self) -> Result<Rc<ParserContext>> {
        if let Some(ctx) = self.slots.borrow().parser_context.clone() {
            return Ok(ctx);
        }

        let mut missing = MissingValueCollector::new(&self.environment);
        let separator = missing.probe_separator(&name::VALUE_SEPARATOR);

        let date_time = match self.date_time_context() {
            Ok(ctx) => Some(ctx),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };
        let expression = match self.expression_number_context() {
            Ok(ctx) => Some(ctx),
            Err(error) => {
                missing.absorb(error)?;
                None
            }
        };

        let (Some(separator), Some(date_time), Some(expression)) =
            (separator, date_time, expression)
        else {
            return Err(missing.into_error());
        };

        let ctx = Rc::new(ParserContext::new(date_time, expression, separator));
        self.slots.borrow_mut().parser_context = Some(Rc::clone(&ctx));
        Ok(ctx)
    }
}

/// Two caches are interchangeable when their stores hold equal values and
/// they share the same collaborator providers. Rebuilding a cache after
/// cloning an environment is a no-op exactly when this holds.
impl PartialEq for ContextCache {
    fn eq(&self, other: &Self) -> bool {
        *self.environment == *other.environment
            && Rc::ptr_eq(&self.locale_data, &other.locale_data)
            && Rc::ptr_eq(&self.converters, &other.converters)
            && Rc::ptr_eq(&self.parsers, &other.parsers)
    }
}

impl std::fmt::Debug for ContextCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextCache")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

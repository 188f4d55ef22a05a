//! Conversion context

use std::fmt;
use std::rc::Rc;

use crate::datetime::DateTimeContext;
use crate::decimal::DecimalNumberContext;
use crate::marshall::{MarshallContext, UnmarshallContext};
use crate::provider::{Converter, LabelResolver};

/// Everything type conversion needs in one bundle
///
/// The top of the derived-context dependency chain: a converter resolved by
/// selector plus the date/time, decimal and marshalling contexts it
/// converts with, and a resolver for labels appearing in converted values.
#[derive(Clone)]
pub struct ConversionContext {
    converter: Rc<dyn Converter>,
    date_time: Rc<DateTimeContext>,
    decimal: Rc<DecimalNumberContext>,
    marshall: Rc<MarshallContext>,
    unmarshall: Rc<UnmarshallContext>,
    labels: Rc<dyn LabelResolver>,
}

impl ConversionContext {
    /// Create a context
    pub fn new(
        converter: Rc<dyn Converter>,
        date_time: Rc<DateTimeContext>,
        decimal: Rc<DecimalNumberContext>,
        marshall: Rc<MarshallContext>,
        unmarshall: Rc<UnmarshallContext>,
        labels: Rc<dyn LabelResolver>,
    ) -> Self {
        ConversionContext {
            converter,
            date_time,
            decimal,
            marshall,
            unmarshall,
            labels,
        }
    }

    /// The resolved converter
    pub fn converter(&self) -> &Rc<dyn Converter> {
        &self.converter
    }

    /// The embedded date/time context
    pub fn date_time(&self) -> &Rc<DateTimeContext> {
        &self.date_time
    }

    /// The embedded decimal-number context
    pub fn decimal(&self) -> &Rc<DecimalNumberContext> {
        &self.decimal
    }

    /// The embedded marshall context
    pub fn marshall(&self) -> &Rc<MarshallContext> {
        &self.marshall
    }

    /// The embedded unmarshall context
    pub fn unmarshall(&self) -> &Rc<UnmarshallContext> {
        &self.unmarshall
    }

    /// Resolve a label to its cell reference text
    pub fn resolve_label(&self, label: &str) -> Option<String> {
        self.labels.resolve(label)
    }
}

impl fmt::Debug for ConversionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionContext")
            .field("converter", &self.converter.name())
            .field("date_time", &self.date_time)
            .field("decimal", &self.decimal)
            .finish_non_exhaustive()
    }
}

//! Spreadsheet parser bundle and parser context

use std::fmt;
use std::rc::Rc;

use crate::datetime::DateTimeContext;
use crate::expression::ExpressionNumberContext;
use crate::provider::Parser;

/// The per-kind parsers combined as ordered alternatives
///
/// Cell input is tried against each alternative in order: date, date-time,
/// number, time. The individual parsers are opaque handles resolved through
/// the parser provider.
#[derive(Clone)]
pub struct SpreadsheetParser {
    alternatives: Vec<Rc<dyn Parser>>,
}

impl SpreadsheetParser {
    /// Combine parsers as ordered alternatives
    pub fn any_of(alternatives: Vec<Rc<dyn Parser>>) -> Self {
        SpreadsheetParser { alternatives }
    }

    /// The alternatives, in match order
    pub fn alternatives(&self) -> &[Rc<dyn Parser>] {
        &self.alternatives
    }

    /// The selector of each alternative, in match order
    pub fn selectors(&self) -> Vec<&str> {
        self.alternatives.iter().map(|p| p.name()).collect()
    }
}

impl fmt::Debug for SpreadsheetParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpreadsheetParser")
            .field("alternatives", &self.selectors())
            .finish()
    }
}

/// Contexts and separators consulted while parsing cell input
#[derive(Debug, Clone)]
pub struct ParserContext {
    date_time: Rc<DateTimeContext>,
    expression_number: Rc<ExpressionNumberContext>,
    value_separator: char,
}

impl ParserContext {
    /// Create a context
    pub fn new(
        date_time: Rc<DateTimeContext>,
        expression_number: Rc<ExpressionNumberContext>,
        value_separator: char,
    ) -> Self {
        ParserContext {
            date_time,
            expression_number,
            value_separator,
        }
    }

    /// The embedded date/time context
    pub fn date_time(&self) -> &Rc<DateTimeContext> {
        &self.date_time
    }

    /// The embedded expression-number context
    pub fn expression_number(&self) -> &Rc<ExpressionNumberContext> {
        &self.expression_number
    }

    /// Separator between values in a list, e.g. function arguments
    pub fn value_separator(&self) -> char {
        self.value_separator
    }
}

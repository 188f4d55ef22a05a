//! Decimal-number context

use std::rc::Rc;

use quill_sheets_core::DecimalNumberSymbols;

use crate::math::MathContext;

/// Digit count, symbols and math rules for decimal formatting and parsing
///
/// Holds its [`MathContext`] by `Rc`; within one cache generation the same
/// math context instance is shared by every context that embeds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalNumberContext {
    digit_count: u32,
    symbols: DecimalNumberSymbols,
    math: Rc<MathContext>,
}

impl DecimalNumberContext {
    /// Create a context
    pub fn new(digit_count: u32, symbols: DecimalNumberSymbols, math: Rc<MathContext>) -> Self {
        DecimalNumberContext {
            digit_count,
            symbols,
            math,
        }
    }

    /// Number of decimal digits rendered by default
    pub fn digit_count(&self) -> u32 {
        self.digit_count
    }

    /// The resolved decimal symbols
    pub fn symbols(&self) -> &DecimalNumberSymbols {
        &self.symbols
    }

    /// The embedded math context
    pub fn math(&self) -> &Rc<MathContext> {
        &self.math
    }

    /// Decimal separator shorthand
    pub fn decimal_separator(&self) -> char {
        self.symbols.decimal_separator
    }

    /// Group separator shorthand
    pub fn group_separator(&self) -> char {
        self.symbols.group_separator
    }
}

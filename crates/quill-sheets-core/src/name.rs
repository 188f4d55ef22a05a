//! Typed configuration value names
//!
//! A [`ValueName`] keys the environment store. It pairs a name string with
//! the [`ValueKind`] the stored value must have; two names are equal only
//! when both parts match. A small fixed set of *well-known* names drives
//! cache invalidation; anything else is pass-through configuration.

use std::borrow::Cow;
use std::fmt;

/// The kind of value a [`ValueName`] refers to
///
/// This is a closed set mirroring the variants of
/// [`ConfigValue`](crate::value::ConfigValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Unsigned integer (precision, digit counts, years)
    Number,
    /// Free-form text
    Text,
    /// A locale tag such as `en-US`
    Locale,
    /// A rounding mode
    Rounding,
    /// Date/time formatting symbols
    DateTimeSymbols,
    /// Decimal number formatting symbols
    DecimalNumberSymbols,
    /// A single separator character
    Separator,
    /// An expression number kind
    NumberKind,
    /// A spreadsheet identity
    SpreadsheetId,
    /// A converter or parser selector
    Selector,
}

impl ValueKind {
    /// Human-readable kind label, used in error messages
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Locale => "locale",
            ValueKind::Rounding => "rounding-mode",
            ValueKind::DateTimeSymbols => "date-time-symbols",
            ValueKind::DecimalNumberSymbols => "decimal-number-symbols",
            ValueKind::Separator => "separator",
            ValueKind::NumberKind => "expression-number-kind",
            ValueKind::SpreadsheetId => "spreadsheet-id",
            ValueKind::Selector => "selector",
        }
    }
}

/// An immutable (name, kind) pair keying the environment store
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueName {
    text: Cow<'static, str>,
    kind: ValueKind,
}

impl ValueName {
    const fn well_known(text: &'static str, kind: ValueKind) -> Self {
        ValueName {
            text: Cow::Borrowed(text),
            kind,
        }
    }

    /// Mint a user-defined name of the given kind
    ///
    /// User-defined names never participate in cache invalidation.
    pub fn new(text: impl Into<String>, kind: ValueKind) -> Self {
        ValueName {
            text: Cow::Owned(text.into()),
            kind,
        }
    }

    /// Mint a user-defined text-valued name
    pub fn text_name(text: impl Into<String>) -> Self {
        Self::new(text, ValueKind::Text)
    }

    /// Mint a user-defined number-valued name
    pub fn number_name(text: impl Into<String>) -> Self {
        Self::new(text, ValueKind::Number)
    }

    /// The name string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The kind of value this name refers to
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether this name belongs to the fixed well-known set
    ///
    /// Only well-known names trigger derived-context invalidation when
    /// their value changes.
    pub fn is_well_known(&self) -> bool {
        WELL_KNOWN.contains(self)
    }
}

impl fmt::Display for ValueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Converter selector used to build the conversion context
pub const CONVERTER: ValueName = ValueName::well_known("converter", ValueKind::Selector);

/// Locale tag, e.g. `en-US`
pub const LOCALE: ValueName = ValueName::well_known("locale", ValueKind::Locale);

/// Rounding mode for the math context
pub const ROUNDING_MODE: ValueName = ValueName::well_known("rounding-mode", ValueKind::Rounding);

/// Significant digit precision for the math context
pub const PRECISION: ValueName = ValueName::well_known("precision", ValueKind::Number);

/// Number of decimal digits for the decimal-number context
pub const DECIMAL_DIGIT_COUNT: ValueName =
    ValueName::well_known("decimal-digit-count", ValueKind::Number);

/// Explicit date/time symbols; absent means locale defaults apply
pub const DATE_TIME_SYMBOLS: ValueName =
    ValueName::well_known("date-time-symbols", ValueKind::DateTimeSymbols);

/// Explicit decimal-number symbols; absent means locale defaults apply
pub const DECIMAL_NUMBER_SYMBOLS: ValueName =
    ValueName::well_known("decimal-number-symbols", ValueKind::DecimalNumberSymbols);

/// Year assumed when a parsed date carries none
pub const DEFAULT_YEAR: ValueName = ValueName::well_known("default-year", ValueKind::Number);

/// Pivot (0-99) for expanding two-digit years
pub const TWO_DIGIT_YEAR_PIVOT: ValueName =
    ValueName::well_known("two-digit-year-pivot", ValueKind::Number);

/// Separator between values in a list, e.g. function arguments
pub const VALUE_SEPARATOR: ValueName =
    ValueName::well_known("value-separator", ValueKind::Separator);

/// Which number representation expressions evaluate with
pub const EXPRESSION_NUMBER_KIND: ValueName =
    ValueName::well_known("expression-number-kind", ValueKind::NumberKind);

/// Identity of the spreadsheet the session is bound to
pub const SPREADSHEET_ID: ValueName =
    ValueName::well_known("spreadsheet-id", ValueKind::SpreadsheetId);

/// Selector for the date parser
pub const DATE_PARSER: ValueName = ValueName::well_known("date-parser", ValueKind::Selector);

/// Selector for the date-time parser
pub const DATE_TIME_PARSER: ValueName =
    ValueName::well_known("date-time-parser", ValueKind::Selector);

/// Selector for the number parser
pub const NUMBER_PARSER: ValueName = ValueName::well_known("number-parser", ValueKind::Selector);

/// Selector for the time parser
pub const TIME_PARSER: ValueName = ValueName::well_known("time-parser", ValueKind::Selector);

/// The fixed well-known name set; membership drives invalidation
pub const WELL_KNOWN: [ValueName; 16] = [
    CONVERTER,
    LOCALE,
    ROUNDING_MODE,
    PRECISION,
    DECIMAL_DIGIT_COUNT,
    DATE_TIME_SYMBOLS,
    DECIMAL_NUMBER_SYMBOLS,
    DEFAULT_YEAR,
    TWO_DIGIT_YEAR_PIVOT,
    VALUE_SEPARATOR,
    EXPRESSION_NUMBER_KIND,
    SPREADSHEET_ID,
    DATE_PARSER,
    DATE_TIME_PARSER,
    NUMBER_PARSER,
    TIME_PARSER,
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_equality_requires_both_parts() {
        let a = ValueName::new("locale", ValueKind::Locale);
        let b = ValueName::new("locale", ValueKind::Text);
        assert_eq!(a, LOCALE);
        assert_ne!(a, b);
    }

    #[test]
    fn test_well_known_membership() {
        assert!(LOCALE.is_well_known());
        assert!(PRECISION.is_well_known());
        assert!(!ValueName::text_name("corp-theme").is_well_known());
        // Same text as a well-known name but a different kind is user-defined
        assert!(!ValueName::new("locale", ValueKind::Text).is_well_known());
    }

    #[test]
    fn test_display() {
        assert_eq!(TWO_DIGIT_YEAR_PIVOT.to_string(), "two-digit-year-pivot");
    }
}

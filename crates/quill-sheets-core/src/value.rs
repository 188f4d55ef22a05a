//! Configuration value types
//!
//! [`ConfigValue`] is the closed set of value shapes the environment store
//! can hold. Each variant corresponds to exactly one
//! [`ValueKind`](crate::name::ValueKind), so a typed name either resolves to
//! a value of its own kind or not at all.

use std::fmt;

use crate::id::SpreadsheetId;
use crate::name::ValueKind;

/// A locale tag such as `en` or `en-US`
///
/// Tags are normalized to lowercase on construction so lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Create a tag, normalizing to lowercase
    pub fn new(tag: impl AsRef<str>) -> Self {
        LocaleTag(tag.as_ref().to_ascii_lowercase())
    }

    /// The full normalized tag, e.g. `en-us`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language prefix before any region, e.g. `en` for `en-US`
    ///
    /// Used as a fallback key when the full tag has no locale data.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rounding modes for the math context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round away from zero
    Up,
    /// Round towards zero
    Down,
    /// Round towards positive infinity
    Ceiling,
    /// Round towards negative infinity
    Floor,
    /// Round to nearest, ties away from zero
    HalfUp,
    /// Round to nearest, ties towards zero
    HalfDown,
    /// Round to nearest, ties to even (banker's rounding)
    HalfEven,
}

/// Which number representation expression evaluation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionNumberKind {
    /// Arbitrary-precision decimal arithmetic
    BigDecimal,
    /// IEEE-754 double arithmetic
    Double,
}

/// Names and markers used when formatting or parsing dates and times
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTimeSymbols {
    /// AM and PM markers, in that order
    pub am_pm: [String; 2],
    /// Full month names, January first
    pub month_names: Vec<String>,
    /// Abbreviated month names, January first
    pub month_names_abbrev: Vec<String>,
    /// Full weekday names, Sunday first
    pub weekday_names: Vec<String>,
    /// Abbreviated weekday names, Sunday first
    pub weekday_names_abbrev: Vec<String>,
}

/// Symbols used when formatting or parsing decimal numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalNumberSymbols {
    /// Decimal separator, e.g. `.`
    pub decimal_separator: char,
    /// Grouping separator, e.g. `,`
    pub group_separator: char,
    /// Sign prefixed to negative numbers
    pub negative_sign: char,
    /// Sign optionally prefixed to positive numbers
    pub positive_sign: char,
    /// Percent symbol
    pub percent: char,
    /// Zero digit; `0` everywhere except positional-digit locales
    pub zero_digit: char,
    /// Exponent marker, e.g. `E`
    pub exponent_symbol: String,
    /// Currency symbol
    pub currency: String,
    /// Text rendered for infinities
    pub infinity: String,
    /// Text rendered for not-a-number
    pub nan: String,
}

/// A typed configuration value
///
/// The variant set is closed and mirrors [`ValueKind`] one-to-one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigValue {
    /// Unsigned integer (precision, digit counts, years)
    Number(u32),
    /// Free-form text
    Text(String),
    /// A locale tag
    Locale(LocaleTag),
    /// A rounding mode
    Rounding(RoundingMode),
    /// Date/time symbols
    DateTimeSymbols(DateTimeSymbols),
    /// Decimal-number symbols
    DecimalNumberSymbols(DecimalNumberSymbols),
    /// A single separator character
    Separator(char),
    /// An expression number kind
    NumberKind(ExpressionNumberKind),
    /// A spreadsheet identity
    SpreadsheetId(SpreadsheetId),
    /// A converter or parser selector
    Selector(String),
}

impl ConfigValue {
    /// The [`ValueKind`] this value belongs to
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Number(_) => ValueKind::Number,
            ConfigValue::Text(_) => ValueKind::Text,
            ConfigValue::Locale(_) => ValueKind::Locale,
            ConfigValue::Rounding(_) => ValueKind::Rounding,
            ConfigValue::DateTimeSymbols(_) => ValueKind::DateTimeSymbols,
            ConfigValue::DecimalNumberSymbols(_) => ValueKind::DecimalNumberSymbols,
            ConfigValue::Separator(_) => ValueKind::Separator,
            ConfigValue::NumberKind(_) => ValueKind::NumberKind,
            ConfigValue::SpreadsheetId(_) => ValueKind::SpreadsheetId,
            ConfigValue::Selector(_) => ValueKind::Selector,
        }
    }

    /// The numeric payload, if this is a [`ConfigValue::Number`]
    pub fn as_number(&self) -> Option<u32> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The selector payload, if this is a [`ConfigValue::Selector`]
    pub fn as_selector(&self) -> Option<&str> {
        match self {
            ConfigValue::Selector(s) => Some(s),
            _ => None,
        }
    }

    /// The spreadsheet identity, if this is a [`ConfigValue::SpreadsheetId`]
    pub fn as_spreadsheet_id(&self) -> Option<SpreadsheetId> {
        match self {
            ConfigValue::SpreadsheetId(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Number(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<LocaleTag> for ConfigValue {
    fn from(value: LocaleTag) -> Self {
        ConfigValue::Locale(value)
    }
}

impl From<RoundingMode> for ConfigValue {
    fn from(value: RoundingMode) -> Self {
        ConfigValue::Rounding(value)
    }
}

impl From<ExpressionNumberKind> for ConfigValue {
    fn from(value: ExpressionNumberKind) -> Self {
        ConfigValue::NumberKind(value)
    }
}

impl From<SpreadsheetId> for ConfigValue {
    fn from(value: SpreadsheetId) -> Self {
        ConfigValue::SpreadsheetId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locale_tag_normalizes() {
        let tag = LocaleTag::new("en-US");
        assert_eq!(tag.as_str(), "en-us");
        assert_eq!(tag.language(), "en");
        assert_eq!(LocaleTag::new("fr").language(), "fr");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ConfigValue::Number(7).kind(), ValueKind::Number);
        assert_eq!(
            ConfigValue::Locale(LocaleTag::new("en")).kind(),
            ValueKind::Locale
        );
        assert_eq!(
            ConfigValue::Rounding(RoundingMode::HalfUp).kind(),
            ValueKind::Rounding
        );
        assert_eq!(
            ConfigValue::Selector("general".into()).kind(),
            ValueKind::Selector
        );
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(ConfigValue::Number(3).as_number(), Some(3));
        assert_eq!(ConfigValue::Text("x".into()).as_number(), None);
        assert_eq!(
            ConfigValue::Selector("number".into()).as_selector(),
            Some("number")
        );
    }
}

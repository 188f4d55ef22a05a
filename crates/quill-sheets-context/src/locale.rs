//! Built-in locale data
//!
//! Default symbol tables for the locales the backend ships with. Lookups
//! try the full tag first (`en-us`), then the bare language (`en`).

use once_cell::sync::Lazy;

use quill_sheets_core::value::{DateTimeSymbols, DecimalNumberSymbols, LocaleTag};

use crate::provider::LocaleDataProvider;

static EN_DATE_TIME: Lazy<DateTimeSymbols> = Lazy::new(|| DateTimeSymbols {
    am_pm: ["AM".into(), "PM".into()],
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .map(String::from)
    .to_vec(),
    month_names_abbrev: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
    .map(String::from)
    .to_vec(),
    weekday_names: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ]
    .map(String::from)
    .to_vec(),
    weekday_names_abbrev: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .map(String::from)
        .to_vec(),
});

static DE_DATE_TIME: Lazy<DateTimeSymbols> = Lazy::new(|| DateTimeSymbols {
    am_pm: ["AM".into(), "PM".into()],
    month_names: [
        "Januar",
        "Februar",
        "M\u{e4}rz",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ]
    .map(String::from)
    .to_vec(),
    month_names_abbrev: [
        "Jan", "Feb", "M\u{e4}r", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ]
    .map(String::from)
    .to_vec(),
    weekday_names: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ]
    .map(String::from)
    .to_vec(),
    weekday_names_abbrev: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]
        .map(String::from)
        .to_vec(),
});

static EN_DECIMAL: Lazy<DecimalNumberSymbols> = Lazy::new(|| DecimalNumberSymbols {
    decimal_separator: '.',
    group_separator: ',',
    negative_sign: '-',
    positive_sign: '+',
    percent: '%',
    zero_digit: '0',
    exponent_symbol: "E".into(),
    currency: "$".into(),
    infinity: "\u{221e}".into(),
    nan: "NaN".into(),
});

static DE_DECIMAL: Lazy<DecimalNumberSymbols> = Lazy::new(|| DecimalNumberSymbols {
    decimal_separator: ',',
    group_separator: '.',
    negative_sign: '-',
    positive_sign: '+',
    percent: '%',
    zero_digit: '0',
    exponent_symbol: "E".into(),
    currency: "\u{20ac}".into(),
    infinity: "\u{221e}".into(),
    nan: "NaN".into(),
});

static FR_DECIMAL: Lazy<DecimalNumberSymbols> = Lazy::new(|| DecimalNumberSymbols {
    decimal_separator: ',',
    group_separator: '\u{a0}',
    negative_sign: '-',
    positive_sign: '+',
    percent: '%',
    zero_digit: '0',
    exponent_symbol: "E".into(),
    currency: "\u{20ac}".into(),
    infinity: "\u{221e}".into(),
    nan: "NaN".into(),
});

/// The locale data the backend ships with
///
/// Covers `en`, `de` and `fr` (decimal only for `fr`); region variants fall
/// back to their language.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinLocaleData;

impl BuiltinLocaleData {
    /// Create the provider
    pub fn new() -> Self {
        BuiltinLocaleData
    }
}

impl LocaleDataProvider for BuiltinLocaleData {
    fn date_time_symbols(&self, locale: &LocaleTag) -> Option<DateTimeSymbols> {
        match locale.language() {
            "en" => Some(EN_DATE_TIME.clone()),
            "de" => Some(DE_DATE_TIME.clone()),
            _ => None,
        }
    }

    fn decimal_number_symbols(&self, locale: &LocaleTag) -> Option<DecimalNumberSymbols> {
        match locale.language() {
            "en" => Some(EN_DECIMAL.clone()),
            "de" => Some(DE_DECIMAL.clone()),
            "fr" => Some(FR_DECIMAL.clone()),
            _ => None,
        }
    }
}

//! Date/time context

use chrono::NaiveDate;

use quill_sheets_core::{DateTimeSymbols, LocaleTag};

/// Locale, year defaults and symbols used when formatting or parsing dates
/// and times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeContext {
    locale: LocaleTag,
    default_year: i32,
    two_digit_year_pivot: u32,
    symbols: DateTimeSymbols,
}

impl DateTimeContext {
    /// Create a context
    ///
    /// `two_digit_year_pivot` must be in 0..=99; two-digit years below it
    /// land in the 2000s, the rest in the 1900s.
    pub fn new(
        locale: LocaleTag,
        default_year: i32,
        two_digit_year_pivot: u32,
        symbols: DateTimeSymbols,
    ) -> Self {
        DateTimeContext {
            locale,
            default_year,
            two_digit_year_pivot: two_digit_year_pivot % 100,
            symbols,
        }
    }

    /// The locale the symbols were resolved for
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Year assumed when a parsed date carries none
    pub fn default_year(&self) -> i32 {
        self.default_year
    }

    /// Pivot for two-digit-year expansion
    pub fn two_digit_year_pivot(&self) -> u32 {
        self.two_digit_year_pivot
    }

    /// The resolved date/time symbols
    pub fn symbols(&self) -> &DateTimeSymbols {
        &self.symbols
    }

    /// Expand a two-digit year using the pivot
    ///
    /// Years below the pivot are 20xx, the rest 19xx. Values >= 100 are
    /// returned unchanged.
    pub fn expand_two_digit_year(&self, year: u32) -> i32 {
        if year >= 100 {
            year as i32
        } else if year < self.two_digit_year_pivot {
            2000 + year as i32
        } else {
            1900 + year as i32
        }
    }

    /// Build a date in the default year, if the month/day combination is
    /// valid there
    pub fn date(&self, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.default_year, month, day)
    }

    /// Full month name (1-based month), if the symbols cover it
    pub fn month_name(&self, month: u32) -> Option<&str> {
        self.symbols
            .month_names
            .get(month.checked_sub(1)? as usize)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> DateTimeSymbols {
        DateTimeSymbols {
            am_pm: ["AM".into(), "PM".into()],
            month_names: vec!["January".into(), "February".into(), "March".into()],
            month_names_abbrev: vec!["Jan".into(), "Feb".into(), "Mar".into()],
            weekday_names: vec!["Sunday".into(), "Monday".into()],
            weekday_names_abbrev: vec!["Sun".into(), "Mon".into()],
        }
    }

    #[test]
    fn test_two_digit_year_expansion() {
        let ctx = DateTimeContext::new(LocaleTag::new("en"), 1900, 50, symbols());
        assert_eq!(ctx.expand_two_digit_year(49), 2049);
        assert_eq!(ctx.expand_two_digit_year(50), 1950);
        assert_eq!(ctx.expand_two_digit_year(99), 1999);
        assert_eq!(ctx.expand_two_digit_year(0), 2000);
        assert_eq!(ctx.expand_two_digit_year(1988), 1988);
    }

    #[test]
    fn test_default_year_date() {
        let ctx = DateTimeContext::new(LocaleTag::new("en"), 2024, 50, symbols());
        assert_eq!(
            ctx.date(2, 29),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        let ctx = DateTimeContext::new(LocaleTag::new("en"), 2023, 50, symbols());
        assert_eq!(ctx.date(2, 29), None);
    }

    #[test]
    fn test_month_name() {
        let ctx = DateTimeContext::new(LocaleTag::new("en"), 2024, 50, symbols());
        assert_eq!(ctx.month_name(1), Some("January"));
        assert_eq!(ctx.month_name(0), None);
        assert_eq!(ctx.month_name(12), None);
    }
}

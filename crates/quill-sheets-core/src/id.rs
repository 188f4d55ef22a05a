//! Spreadsheet identity

use std::fmt;
use std::str::FromStr;

/// Identity of a spreadsheet, as carried in storage paths and contexts
///
/// Rendered in base 10 without padding, e.g. `/spreadsheet/7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpreadsheetId(u64);

impl SpreadsheetId {
    /// Create an identity from its numeric value
    pub fn new(value: u64) -> Self {
        SpreadsheetId(value)
    }

    /// The numeric value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpreadsheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpreadsheetId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(SpreadsheetId)
    }
}

impl From<u64> for SpreadsheetId {
    fn from(value: u64) -> Self {
        SpreadsheetId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let id: SpreadsheetId = "7".parse().unwrap();
        assert_eq!(id, SpreadsheetId::new(7));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!("abc".parse::<SpreadsheetId>().is_err());
        assert!("".parse::<SpreadsheetId>().is_err());
        assert!("-1".parse::<SpreadsheetId>().is_err());
    }
}

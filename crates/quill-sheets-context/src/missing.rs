//! Missing-value collection
//!
//! A derivation probes the environment store for every value it needs
//! through one [`MissingValueCollector`], computing provisional locals even
//! when some probes come back empty. The collector remembers every miss, so
//! the single failure raised at the end names the complete set of absent
//! configuration rather than just the first.

use quill_sheets_core::error::{Error, Result};
use quill_sheets_core::name::ValueName;
use quill_sheets_core::value::{
    ConfigValue, DateTimeSymbols, DecimalNumberSymbols, ExpressionNumberKind, LocaleTag,
    RoundingMode,
};
use quill_sheets_core::EnvironmentStore;

use log::trace;

/// Per-derivation scratch object recording every probed-but-absent name
///
/// Never mutates the store it wraps.
pub struct MissingValueCollector<'a> {
    store: &'a EnvironmentStore,
    missing: Vec<ValueName>,
}

impl<'a> MissingValueCollector<'a> {
    /// Open a collector over a store
    pub fn new(store: &'a EnvironmentStore) -> Self {
        MissingValueCollector {
            store,
            missing: Vec::new(),
        }
    }

    /// Look up a name, recording a miss when it is absent or holds a value
    /// of the wrong kind
    pub fn probe(&mut self, name: &ValueName) -> Option<ConfigValue> {
        match self.store.get(name) {
            Some(value) if value.kind() == name.kind() => Some(value),
            _ => {
                trace!("probe miss: {name}");
                self.record(name.clone());
                None
            }
        }
    }

    /// Look up a name without recording a miss
    ///
    /// Used for values with a fallback, where absence is not an error.
    pub fn peek(&self, name: &ValueName) -> Option<ConfigValue> {
        match self.store.get(name) {
            Some(value) if value.kind() == name.kind() => Some(value),
            _ => None,
        }
    }

    /// Record a name as missing without probing
    pub fn record(&mut self, name: ValueName) {
        if !self.missing.contains(&name) {
            self.missing.push(name);
        }
    }

    /// Fold a sub-derivation failure into this collector
    ///
    /// Missing-value failures are absorbed (their names recorded here);
    /// any other failure propagates immediately.
    pub fn absorb(&mut self, error: Error) -> Result<()> {
        match error {
            Error::MissingValues(names) => {
                for name in names {
                    self.record(name);
                }
                Ok(())
            }
            other => Err(other),
        }
    }

    /// Probe a [`ConfigValue::Number`]
    pub fn probe_number(&mut self, name: &ValueName) -> Option<u32> {
        match self.probe(name)? {
            ConfigValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Probe a [`ConfigValue::Locale`]
    pub fn probe_locale(&mut self, name: &ValueName) -> Option<LocaleTag> {
        match self.probe(name)? {
            ConfigValue::Locale(tag) => Some(tag),
            _ => None,
        }
    }

    /// Probe a [`ConfigValue::Rounding`]
    pub fn probe_rounding(&mut self, name: &ValueName) -> Option<RoundingMode> {
        match self.probe(name)? {
            ConfigValue::Rounding(mode) => Some(mode),
            _ => None,
        }
    }

    /// Probe a [`ConfigValue::Separator`]
    pub fn probe_separator(&mut self, name: &ValueName) -> Option<char> {
        match self.probe(name)? {
            ConfigValue::Separator(c) => Some(c),
            _ => None,
        }
    }

    /// Probe a [`ConfigValue::NumberKind`]
    pub fn probe_number_kind(&mut self, name: &ValueName) -> Option<ExpressionNumberKind> {
        match self.probe(name)? {
            ConfigValue::NumberKind(kind) => Some(kind),
            _ => None,
        }
    }

    /// Probe a [`ConfigValue::Selector`]
    pub fn probe_selector(&mut self, name: &ValueName) -> Option<String> {
        match self.probe(name)? {
            ConfigValue::Selector(s) => Some(s),
            _ => None,
        }
    }

    /// Peek a [`ConfigValue::DateTimeSymbols`] without recording a miss
    pub fn peek_date_time_symbols(&self, name: &ValueName) -> Option<DateTimeSymbols> {
        match self.peek(name)? {
            ConfigValue::DateTimeSymbols(s) => Some(s),
            _ => None,
        }
    }

    /// Peek a [`ConfigValue::DecimalNumberSymbols`] without recording a miss
    pub fn peek_decimal_number_symbols(&self, name: &ValueName) -> Option<DecimalNumberSymbols> {
        match self.peek(name)? {
            ConfigValue::DecimalNumberSymbols(s) => Some(s),
            _ => None,
        }
    }

    /// Whether any miss has been recorded
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Raise the aggregate failure if any miss was recorded
    pub fn report(&self) -> Result<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingValues(self.missing.clone()))
        }
    }

    /// Consume the collector into the aggregate failure
    ///
    /// Callers reach here only after at least one probe came back empty,
    /// so the list is never empty.
    pub fn into_error(self) -> Error {
        debug_assert!(!self.missing.is_empty());
        Error::MissingValues(self.missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_sheets_core::name;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_probe_present_records_nothing() {
        let store = EnvironmentStore::new();
        store.set(name::PRECISION, 7u32.into()).unwrap();

        let mut collector = MissingValueCollector::new(&store);
        assert_eq!(collector.probe_number(&name::PRECISION), Some(7));
        assert!(collector.is_empty());
        assert!(collector.report().is_ok());
    }

    #[test]
    fn test_probe_absent_records_all_misses() {
        let store = EnvironmentStore::new();

        let mut collector = MissingValueCollector::new(&store);
        assert_eq!(collector.probe_number(&name::PRECISION), None);
        assert_eq!(collector.probe_rounding(&name::ROUNDING_MODE), None);
        assert_eq!(collector.probe_locale(&name::LOCALE), None);

        let err = collector.report().unwrap_err();
        assert_eq!(
            err.missing_values().unwrap(),
            &[name::PRECISION, name::ROUNDING_MODE, name::LOCALE]
        );
    }

    #[test]
    fn test_probe_kind_mismatch_counts_as_miss() {
        let store = EnvironmentStore::new();
        // Store a text value under a user name shadowing nothing; then probe
        // a typed name whose kind cannot match.
        store
            .set(
                ValueName::new("precision", quill_sheets_core::ValueKind::Text),
                "seven".into(),
            )
            .unwrap();

        let mut collector = MissingValueCollector::new(&store);
        assert_eq!(collector.probe_number(&name::PRECISION), None);
        assert!(collector.report().is_err());
    }

    #[test]
    fn test_duplicate_probes_recorded_once() {
        let store = EnvironmentStore::new();
        let mut collector = MissingValueCollector::new(&store);
        collector.probe(&name::LOCALE);
        collector.probe(&name::LOCALE);
        let err = collector.report().unwrap_err();
        assert_eq!(err.missing_values().unwrap().len(), 1);
    }

    #[test]
    fn test_peek_never_records() {
        let store = EnvironmentStore::new();
        let collector = MissingValueCollector::new(&store);
        assert!(collector.peek(&name::DECIMAL_NUMBER_SYMBOLS).is_none());
        assert!(collector.is_empty());
    }

    #[test]
    fn test_absorb_merges_missing_and_rethrows_others() {
        let store = EnvironmentStore::new();
        let mut collector = MissingValueCollector::new(&store);

        collector
            .absorb(Error::MissingValues(vec![name::PRECISION, name::LOCALE]))
            .unwrap();
        let err = collector.report().unwrap_err();
        assert_eq!(err.missing_values().unwrap().len(), 2);

        let mut collector = MissingValueCollector::new(&store);
        assert!(collector.absorb(Error::other("fatal")).is_err());
    }
}

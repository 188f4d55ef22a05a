//! Error types for quill-sheets-core

use thiserror::Error;

use crate::name::ValueName;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the quill-sheets configuration core
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required configuration values were absent during a
    /// derivation. The list is complete: every value the derivation probed
    /// and failed to find is named, so a caller can fix them all at once.
    #[error("Missing configuration value(s): {}", format_names(.0))]
    MissingValues(Vec<ValueName>),

    /// A locale had no built-in default symbols. Unlike [`Error::MissingValues`]
    /// this is not recoverable by setting a value; the locale itself is
    /// unsupported.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// A converter or parser selector did not match any registered factory
    #[error("Unknown {kind} selector: {name}")]
    UnknownSelector {
        kind: &'static str,
        name: String,
    },

    /// A value of the wrong kind was stored under a typed name
    #[error("Value kind mismatch for {name}: expected {expected}, got {actual}")]
    KindMismatch {
        name: ValueName,
        expected: &'static str,
        actual: &'static str,
    },

    /// A storage path was missing required trailing segments
    #[error("Incomplete storage path: {0}")]
    IncompletePath(String),

    /// A backing store failed; propagated unchanged by the router
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Create a storage error with a message
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Error::Storage(msg.into())
    }

    /// The missing-value names carried by a [`Error::MissingValues`], if any
    pub fn missing_values(&self) -> Option<&[ValueName]> {
        match self {
            Error::MissingValues(names) => Some(names),
            _ => None,
        }
    }
}

fn format_names(names: &[ValueName]) -> String {
    names
        .iter()
        .map(|n| n.text())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name;

    #[test]
    fn test_missing_values_message_lists_all() {
        let err = Error::MissingValues(vec![name::LOCALE.clone(), name::PRECISION.clone()]);
        assert_eq!(
            err.to_string(),
            "Missing configuration value(s): locale, precision"
        );
    }

    #[test]
    fn test_missing_values_accessor() {
        let err = Error::MissingValues(vec![name::LOCALE.clone()]);
        assert_eq!(err.missing_values().unwrap().len(), 1);
        assert!(Error::other("boom").missing_values().is_none());
    }
}

//! The rebindable store context
//!
//! Every storage operation carries a [`StoreContext`]: the session's
//! environment plus the spreadsheet the operation addresses. The router
//! rebinds the identity by cloning; the caller's context is never mutated.

use std::rc::Rc;

use quill_sheets_core::{name, EnvironmentStore, SpreadsheetId};

/// The active configuration context handed to backing stores
///
/// Value-semantics clone: rebinding copies the aggregate and overrides one
/// field. The environment store itself is shared, not copied.
#[derive(Debug, Clone)]
pub struct StoreContext {
    environment: Rc<EnvironmentStore>,
    spreadsheet_id: Option<SpreadsheetId>,
}

impl StoreContext {
    /// A context with no spreadsheet identity bound
    pub fn new(environment: Rc<EnvironmentStore>) -> Self {
        StoreContext {
            environment,
            spreadsheet_id: None,
        }
    }

    /// A context bound to the identity currently stored in the
    /// environment, if any
    pub fn from_environment(environment: Rc<EnvironmentStore>) -> Self {
        let spreadsheet_id = environment
            .get(&name::SPREADSHEET_ID)
            .and_then(|v| v.as_spreadsheet_id());
        StoreContext {
            environment,
            spreadsheet_id,
        }
    }

    /// The shared environment store
    pub fn environment(&self) -> &Rc<EnvironmentStore> {
        &self.environment
    }

    /// The bound spreadsheet identity, if any
    pub fn spreadsheet_id(&self) -> Option<SpreadsheetId> {
        self.spreadsheet_id
    }

    /// A clone of this context bound to the given identity
    pub fn with_spreadsheet_id(&self, id: SpreadsheetId) -> StoreContext {
        let mut rebound = self.clone();
        rebound.spreadsheet_id = Some(id);
        rebound
    }
}

/// Two contexts are equal when they bind the same identity over stores
/// holding equal values.
impl PartialEq for StoreContext {
    fn eq(&self, other: &Self) -> bool {
        self.spreadsheet_id == other.spreadsheet_id && *self.environment == *other.environment
    }
}

impl Eq for StoreContext {}

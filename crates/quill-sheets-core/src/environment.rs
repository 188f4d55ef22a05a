//! The environment store
//!
//! A mutable mapping from [`ValueName`] to [`ConfigValue`] with synchronous
//! change notification. One store backs one session; the derived-context
//! cache subscribes to it to know when its memo set is stale.
//!
//! The store is shared via `Rc` and uses interior mutability, so a session,
//! its cache and any rebindable contexts can all hold it at once. There is
//! no locking: one logical owner per store.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::trace;

use crate::error::{Error, Result};
use crate::name::ValueName;
use crate::value::ConfigValue;

/// A change listener; receives the name whose value was set or removed
pub type Listener = Rc<dyn Fn(&ValueName)>;

struct ListenerEntry {
    id: u64,
    listener: Listener,
}

/// Mutable typed configuration store with synchronous change notification
pub struct EnvironmentStore {
    values: RefCell<BTreeMap<ValueName, ConfigValue>>,
    // Rc so a Subscription can unregister itself without holding the store
    listeners: Rc<RefCell<Vec<ListenerEntry>>>,
    next_listener_id: Cell<u64>,
}

impl EnvironmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        EnvironmentStore {
            values: RefCell::new(BTreeMap::new()),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: Cell::new(0),
        }
    }

    /// Look up the value stored under a name
    pub fn get(&self, name: &ValueName) -> Option<ConfigValue> {
        self.values.borrow().get(name).cloned()
    }

    /// Store a value under a name, notifying listeners
    ///
    /// The value's kind must match the name's kind. Listeners are notified
    /// even when the new value equals the old one; the store does not diff.
    pub fn set(&self, name: ValueName, value: ConfigValue) -> Result<()> {
        if value.kind() != name.kind() {
            return Err(Error::KindMismatch {
                expected: name.kind().label(),
                actual: value.kind().label(),
                name,
            });
        }
        trace!("environment set {name}");
        self.values.borrow_mut().insert(name.clone(), value);
        self.notify(&name);
        Ok(())
    }

    /// Remove the value stored under a name, notifying listeners if one
    /// was present
    pub fn remove(&self, name: &ValueName) {
        let removed = self.values.borrow_mut().remove(name).is_some();
        if removed {
            trace!("environment remove {name}");
            self.notify(name);
        }
    }

    /// All names currently holding a value, in sorted order
    pub fn names(&self) -> Vec<ValueName> {
        self.values.borrow().keys().cloned().collect()
    }

    /// Register a change listener, delivered synchronously with each
    /// mutation. Dropping the returned [`Subscription`] unregisters it.
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners
            .borrow_mut()
            .push(ListenerEntry { id, listener });
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    fn notify(&self, name: &ValueName) {
        // Snapshot the listener list so a callback may subscribe or
        // unsubscribe without tripping the RefCell.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|entry| Rc::clone(&entry.listener))
            .collect();
        for listener in listeners {
            listener(name);
        }
    }
}

impl Default for EnvironmentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Two stores are equal when they hold the same values; listeners do not
/// participate. This backs the cache interchangeability contract.
impl PartialEq for EnvironmentStore {
    fn eq(&self, other: &Self) -> bool {
        *self.values.borrow() == *other.values.borrow()
    }
}

impl Eq for EnvironmentStore {}

impl fmt::Debug for EnvironmentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentStore")
            .field("values", &self.values.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

/// Handle to a registered listener; unregisters on drop
#[derive(Debug)]
pub struct Subscription {
    listeners: Weak<RefCell<Vec<ListenerEntry>>>,
    id: u64,
}

impl Subscription {
    /// Explicitly unregister the listener (equivalent to dropping)
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|entry| entry.id != self.id);
        }
    }
}

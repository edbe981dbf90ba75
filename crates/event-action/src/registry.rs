//! Thread-safe id → action registry.
//!
//! This module provides the [`ActionRegistry`] used to register event actions
//! and to recover them from their numeric ids.

use crate::action::EventAction;
use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::{EventActionError, Result};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

#[derive(Debug, Default)]
struct Entries {
    by_id: HashMap<i32, Arc<EventAction>>,
    /// Reverse index for named actions. The last registration of a name wins.
    by_name: HashMap<String, i32>,
}

impl Entries {
    /// Insert or overwrite, keeping the name index in step. Returns the
    /// action previously stored under the same id.
    fn insert(&mut self, action: Arc<EventAction>) -> Option<Arc<EventAction>> {
        let previous = self.by_id.insert(action.id(), Arc::clone(&action));

        if let Some(old_name) = previous.as_ref().and_then(|prev| prev.raw_name()) {
            if self.by_name.get(old_name) == Some(&action.id()) {
                self.by_name.remove(old_name);
            }
        }
        if let Some(name) = action.raw_name() {
            self.by_name.insert(name.to_owned(), action.id());
        }

        previous
    }
}

/// Thread-safe registry of event actions keyed by id.
///
/// Writers take the lock exclusively, so a reader never observes a
/// half-applied registration. Readers share the lock with each other.
/// Handles are cheap to clone and all clones see the same entries.
///
/// # Examples
///
/// ```
/// use event_action::ActionRegistry;
///
/// let registry = ActionRegistry::new();
/// let action = registry.register(10, "update_update");
///
/// let found = registry.lookup(10).unwrap();
/// assert_eq!(found.name(), "update_update");
/// assert_eq!(*found, *action);
/// assert!(registry.lookup(11).is_none());
/// ```
///
/// Re-registering an id replaces the entry but leaves earlier handles intact:
///
/// ```
/// use event_action::ActionRegistry;
///
/// let registry = ActionRegistry::new();
/// let old = registry.register(7, "skip");
/// registry.register(7, "skip_conflicted");
///
/// assert_eq!(old.name(), "skip");
/// assert_eq!(registry.lookup(7).unwrap().name(), "skip_conflicted");
/// ```
#[derive(Clone)]
pub struct ActionRegistry {
    entries: Arc<RwLock<Entries>>,
    config: RegistryConfig,
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    /// Creates a new empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates a new empty registry.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Entries::default())),
            config,
        }
    }

    /// Builds a registry populated from a fixed table.
    ///
    /// The whole table is inserted before the registry is returned. A table
    /// that uses an id twice is a data-entry error and is rejected, whatever
    /// the configured duplicate policy.
    ///
    /// # Errors
    ///
    /// Returns `EventActionError::DuplicateId` naming the first entry that
    /// reuses an id.
    pub fn from_catalog(table: &[EventAction], config: RegistryConfig) -> Result<Self> {
        let mut entries = Entries::default();
        for action in table {
            if let Some(existing) = entries.by_id.get(&action.id()) {
                return Err(EventActionError::duplicate_id(action.id(), existing.name()));
            }
            entries.insert(Arc::new(action.clone()));
        }
        debug!(count = entries.by_id.len(), "Seeded event action registry");

        Ok(Self {
            entries: Arc::new(RwLock::new(entries)),
            config,
        })
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers an action and returns it.
    ///
    /// Never fails. An existing entry under the same id is replaced (last
    /// write wins); holders of the replaced action keep their copy. Prefer
    /// [`try_register`](Self::try_register) outside of fixed tables.
    pub fn register(&self, id: i32, name: impl Into<Cow<'static, str>>) -> Arc<EventAction> {
        let action = Arc::new(EventAction::new(id, name));
        let previous = self.entries.write().insert(Arc::clone(&action));
        self.log_registration(&action, previous.as_deref());
        action
    }

    /// Registers an action, honoring the configured [`DuplicatePolicy`].
    ///
    /// # Errors
    ///
    /// Under `DuplicatePolicy::Reject`, returns `EventActionError::DuplicateId`
    /// if the id is taken. The registry is left unchanged.
    pub fn try_register(
        &self,
        id: i32,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<Arc<EventAction>> {
        let action = Arc::new(EventAction::new(id, name));
        let previous = {
            let mut entries = self.entries.write();
            if self.config.duplicate_policy == DuplicatePolicy::Reject {
                if let Some(existing) = entries.by_id.get(&id) {
                    return Err(EventActionError::duplicate_id(id, existing.name()));
                }
            }
            entries.insert(Arc::clone(&action))
        };
        self.log_registration(&action, previous.as_deref());
        Ok(action)
    }

    /// Returns the action currently registered under `id`.
    pub fn lookup(&self, id: i32) -> Option<Arc<EventAction>> {
        self.entries.read().by_id.get(&id).cloned()
    }

    /// Like [`lookup`](Self::lookup), but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns `EventActionError::UnknownId` if nothing is registered under `id`.
    pub fn require(&self, id: i32) -> Result<Arc<EventAction>> {
        self.lookup(id).ok_or(EventActionError::UnknownId(id))
    }

    /// Finds an action by its name. Unnamed actions cannot be found this way.
    pub fn find_by_name(&self, name: &str) -> Option<Arc<EventAction>> {
        let entries = self.entries.read();
        let id = entries.by_name.get(name)?;
        entries.by_id.get(id).cloned()
    }

    /// Checks if an action is registered under `id`.
    pub fn contains(&self, id: i32) -> bool {
        self.entries.read().by_id.contains_key(&id)
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.entries.read().by_id.len()
    }

    /// Checks if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().by_id.is_empty()
    }

    /// Snapshot of every registered action, sorted by id.
    pub fn actions(&self) -> Vec<Arc<EventAction>> {
        let mut actions: Vec<_> = self.entries.read().by_id.values().cloned().collect();
        actions.sort_unstable_by_key(|action| action.id());
        actions
    }

    fn log_registration(&self, action: &EventAction, previous: Option<&EventAction>) {
        match previous {
            Some(previous) if self.config.warn_on_overwrite => {
                warn!(
                    id = action.id(),
                    old = %previous,
                    new = %action,
                    "Event action id re-registered, replacing previous entry"
                );
            }
            _ => trace!(id = action.id(), name = %action, "Registered event action"),
        }
    }
}

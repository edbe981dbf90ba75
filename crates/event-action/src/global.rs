//! Process-wide registry seeded with the built-in table.
//!
//! The registry is built on first access. Initialization runs once; threads
//! racing for first access block until the whole [`CATALOG`] is inserted, so
//! no caller can see a built-in id as missing.

use crate::action::EventAction;
use crate::catalog::CATALOG;
use crate::config::RegistryConfig;
use crate::registry::ActionRegistry;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::sync::Arc;

static ACTIONS: Lazy<ActionRegistry> = Lazy::new(|| {
    ActionRegistry::from_catalog(CATALOG, RegistryConfig::from_env())
        .expect("built-in event action table must not reuse an id")
});

/// The process-wide registry.
pub fn actions() -> &'static ActionRegistry {
    &ACTIONS
}

/// Registers an action in the process-wide registry.
///
/// Same semantics as [`ActionRegistry::register`]: last write wins.
pub fn register(id: i32, name: impl Into<Cow<'static, str>>) -> Arc<EventAction> {
    actions().register(id, name)
}

/// Recovers an action from its numeric id.
pub fn lookup_by_id(id: i32) -> Option<Arc<EventAction>> {
    actions().lookup(id)
}

/// Recovers an action from its name.
pub fn find_by_name(name: &str) -> Option<Arc<EventAction>> {
    actions().find_by_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_seeded_with_catalog() {
        for action in CATALOG {
            let found = lookup_by_id(action.id()).unwrap();
            assert_eq!(found.name(), action.name());
        }
    }

    #[test]
    fn test_constants_resolve() {
        assert_eq!(*lookup_by_id(10).unwrap(), catalog::UPDATE_UPDATE);
        assert_eq!(*find_by_name("merge_begin").unwrap(), catalog::MERGE_BEGIN);
        assert!(lookup_by_id(73).is_none());
        assert!(lookup_by_id(-4).is_none());
    }
}

//! Property-based tests for the event action registry.

use event_action::ActionRegistry;
use proptest::prelude::*;
use std::collections::HashMap;

/// Strategy for generating action names, including the empty name
fn action_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z][a-z_]{0,30}",
    ]
}

/// Strategy for generating registration sequences with colliding ids
fn registrations() -> impl Strategy<Value = Vec<(i32, String)>> {
    prop::collection::vec((-20i32..100i32, action_name()), 0..64)
}

proptest! {
    #[test]
    fn test_lookup_returns_last_registration(entries in registrations()) {
        let registry = ActionRegistry::new();
        let mut expected: HashMap<i32, String> = HashMap::new();

        for (id, name) in &entries {
            registry.register(*id, name.clone());
            expected.insert(*id, name.clone());
        }

        prop_assert_eq!(registry.len(), expected.len());
        for (id, name) in &expected {
            let action = registry.lookup(*id).unwrap();
            prop_assert_eq!(action.id(), *id);
            prop_assert_eq!(action.raw_name().unwrap_or(""), name.as_str());
        }
    }

    #[test]
    fn test_unregistered_ids_stay_absent(entries in registrations(), missing in any::<i32>()) {
        let registry = ActionRegistry::new();
        for (id, name) in entries.iter().filter(|(id, _)| *id != missing) {
            registry.register(*id, name.clone());
        }
        prop_assert!(registry.lookup(missing).is_none());
    }

    #[test]
    fn test_render_form(id in any::<i32>(), name in action_name()) {
        let registry = ActionRegistry::new();
        let action = registry.register(id, name.clone());
        let rendered = action.to_string();
        if name.is_empty() {
            prop_assert_eq!(rendered, id.to_string());
        } else {
            prop_assert_eq!(rendered, name);
        }
    }

    #[test]
    fn test_cached_instance_is_immutable(
        id in any::<i32>(),
        first in action_name(),
        second in action_name(),
    ) {
        let registry = ActionRegistry::new();
        let cached = registry.register(id, first.clone());
        registry.register(id, second.clone());

        let current = registry.lookup(id).unwrap();
        prop_assert_eq!(cached.raw_name().unwrap_or(""), first.as_str());
        prop_assert_eq!(current.raw_name().unwrap_or(""), second.as_str());
    }
}

//! The event action value type.

use crate::error::{EventActionError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Describes the step of a working copy operation that produced a
/// notification event.
///
/// An action is an immutable `(id, name)` pair. The id is the stable wire
/// value and the identity of the action: equality, hashing and ordering only
/// look at it. The name is a lower-snake-case token used for display.
///
/// Actions are only created by an [`ActionRegistry`](crate::ActionRegistry)
/// or by the built-in [`catalog`](crate::catalog), so every action a caller
/// holds can be recovered from its id. They are shared as
/// `Arc<EventAction>`; replacing a registration never touches an instance a
/// caller already holds.
#[derive(Debug, Clone)]
pub struct EventAction {
    id: i32,
    name: Cow<'static, str>,
}

impl EventAction {
    /// Create an action with a runtime name.
    pub(crate) fn new(id: i32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Create an action from a static name. Usable in `const` items.
    pub(crate) const fn from_static(id: i32, name: &'static str) -> Self {
        Self {
            id,
            name: Cow::Borrowed(name),
        }
    }

    /// The stable numeric identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The render form: the name if present, otherwise the decimal id.
    pub fn name(&self) -> Cow<'_, str> {
        match self.raw_name() {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.id.to_string()),
        }
    }

    /// The stored name, or `None` when the action was registered without one.
    pub fn raw_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

impl PartialEq for EventAction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventAction {}

impl Hash for EventAction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for EventAction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventAction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Parses a render form against the process-wide registry.
///
/// Names are tried first, then decimal ids, so `"update_update"` and `"10"`
/// both resolve to the same action.
impl std::str::FromStr for EventAction {
    type Err = EventActionError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(action) = crate::global::find_by_name(s) {
            return Ok(EventAction::clone(&action));
        }
        match s.parse::<i32>() {
            Ok(id) => crate::global::actions()
                .require(id)
                .map(|action| EventAction::clone(&action)),
            Err(_) => Err(EventActionError::unknown_name(s)),
        }
    }
}

impl Serialize for EventAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.id)
    }
}

/// Decodes the numeric wire form and resolves it against the process-wide
/// registry. Ids nobody registered are rejected.
impl<'de> Deserialize<'de> for EventAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let id = i32::deserialize(deserializer)?;
        crate::global::lookup_by_id(id)
            .map(|action| EventAction::clone(&action))
            .ok_or_else(|| serde::de::Error::custom(EventActionError::unknown_id(id)))
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::ActionRegistry;
    use std::collections::HashSet;

    #[test]
    fn test_render_uses_name() {
        let registry = ActionRegistry::new();
        let action = registry.register(10, "update_update");
        assert_eq!(action.name(), "update_update");
        assert_eq!(action.to_string(), "update_update");
        assert_eq!(action.raw_name(), Some("update_update"));
    }

    #[test]
    fn test_render_falls_back_to_id() {
        let registry = ActionRegistry::new();
        let action = registry.register(-1, "");
        assert_eq!(action.name(), "-1");
        assert_eq!(action.to_string(), "-1");
        assert_eq!(action.raw_name(), None);

        assert_eq!(registry.register(42, String::new()).to_string(), "42");
    }

    #[test]
    fn test_equality_is_by_id() {
        let registry = ActionRegistry::new();
        let a = registry.register(7, "skip");
        let b = registry.register(7, "something_else");
        let c = registry.register(8, "skip");
        assert_eq!(*a, *b);
        assert_ne!(*a, *c);

        let set: HashSet<_> = [a, b, c].iter().map(|action| (**action).clone()).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ordering_is_by_id() {
        let registry = ActionRegistry::new();
        let mut actions = vec![
            registry.register(2, "delete"),
            registry.register(-10, "update_none"),
            registry.register(0, "add"),
        ];
        actions.sort();
        let ids: Vec<i32> = actions.iter().map(|action| action.id()).collect();
        assert_eq!(ids, vec![-10, 0, 2]);
    }
}

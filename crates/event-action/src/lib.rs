//! Event actions for working copy notifications.
//!
//! Every notification event produced by a working copy operation (update,
//! commit, merge, lock, ...) is tagged with an [`EventAction`]: an immutable
//! `(id, name)` pair from a fixed table. Code that holds an action compares it
//! directly; code that only has the numeric id, for example after decoding an
//! event from the wire, recovers the action through the registry.
//!
//! ```
//! use event_action::{catalog, lookup_by_id};
//!
//! let action = lookup_by_id(10).unwrap();
//! assert_eq!(*action, catalog::UPDATE_UPDATE);
//! assert_eq!(action.to_string(), "update_update");
//! ```

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod global;
pub mod registry;

pub use action::EventAction;
pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{EventActionError, Result};
pub use global::{actions, find_by_name, lookup_by_id, register};
pub use registry::ActionRegistry;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::action::EventAction;
    pub use crate::catalog;
    pub use crate::config::{DuplicatePolicy, RegistryConfig};
    pub use crate::error::{EventActionError, Result};
    pub use crate::global::{actions, find_by_name, lookup_by_id};
    pub use crate::registry::ActionRegistry;
}

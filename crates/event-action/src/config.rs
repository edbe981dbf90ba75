//! Registry configuration.
//!
//! The defaults reproduce the historical behavior: a second registration
//! under an existing id silently replaces the first. Stricter handling can be
//! switched on per registry, from the environment or from a TOML snippet:
//!
//! ```toml
//! duplicate_policy = "reject"
//! warn_on_overwrite = true
//! ```

use crate::error::{EventActionError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

// Environment variable names
pub const ENV_DUPLICATE_POLICY: &str = "EVENT_ACTION_DUPLICATE_POLICY";
pub const ENV_WARN_ON_OVERWRITE: &str = "EVENT_ACTION_WARN_ON_OVERWRITE";

/// What `try_register` does when the id is already taken.
///
/// Deserializes through [`FromStr`](std::str::FromStr), so TOML and the
/// environment accept the same spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Last write wins
    #[default]
    Replace,
    /// Keep the existing entry and return an error
    Reject,
}

impl DuplicatePolicy {
    /// Get the policy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Reject => "reject",
        }
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = EventActionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "replace" | "overwrite" | "last-write-wins" => Ok(Self::Replace),
            "reject" | "error" | "strict" => Ok(Self::Reject),
            _ => Err(EventActionError::config(format!(
                "Invalid duplicate policy '{}'. Must be one of: replace, reject",
                s
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for DuplicatePolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings for an [`ActionRegistry`](crate::ActionRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Policy applied by `try_register`
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Log a warning whenever an id is re-registered
    #[serde(default = "default_true")]
    pub warn_on_overwrite: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            warn_on_overwrite: true,
        }
    }
}

impl RegistryConfig {
    /// Defaults overridden by `EVENT_ACTION_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.merge_env_vars();
        config
    }

    /// Apply environment variable overrides in place.
    pub fn merge_env_vars(&mut self) {
        if let Ok(policy) = std::env::var(ENV_DUPLICATE_POLICY) {
            match policy.parse() {
                Ok(policy) => {
                    debug!("Overriding duplicate policy from environment: {}", policy);
                    self.duplicate_policy = policy;
                }
                Err(e) => warn!("Ignoring {}: {}", ENV_DUPLICATE_POLICY, e),
            }
        }

        if let Ok(flag) = std::env::var(ENV_WARN_ON_OVERWRITE) {
            match parse_bool(&flag) {
                Some(flag) => {
                    debug!("Overriding warn_on_overwrite from environment: {}", flag);
                    self.warn_on_overwrite = flag;
                }
                None => warn!(
                    "Ignoring {}: expected a boolean, got '{}'",
                    ENV_WARN_ON_OVERWRITE, flag
                ),
            }
        }
    }

    /// Set the duplicate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Enable or disable overwrite warnings
    pub fn with_warn_on_overwrite(mut self, warn: bool) -> Self {
        self.warn_on_overwrite = warn;
        self
    }

    /// Parse from TOML. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| EventActionError::config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EventActionError::config(format!("Failed to serialize TOML: {}", e)))
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

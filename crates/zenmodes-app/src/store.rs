//! Policy store abstraction
//!
//! The senders controller never owns policies. It reads the current policy
//! of a mode from a [`PolicyStore`] and writes the reconciled policy back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zenmodes_core::prelude::*;
use zenmodes_core::ZenPolicy;

/// A named mode and its interruption policy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZenMode {
    /// Stable identifier used on the command line
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub policy: ZenPolicy,
}

impl ZenMode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, policy: ZenPolicy) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            policy,
        }
    }

    /// Name for display, falling back to the id
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Read/write access to per-mode policies.
///
/// Callers serialize their own read-modify-write cycles; implementations
/// only need to make a single `set_policy` durable.
#[cfg_attr(test, mockall::automock)]
pub trait PolicyStore {
    /// Ids of all known modes, in store order
    fn mode_ids(&self) -> Result<Vec<String>>;

    /// Current policy of `mode_id`
    fn policy(&self, mode_id: &str) -> Result<ZenPolicy>;

    /// Replace the policy of `mode_id`
    fn set_policy(&mut self, mode_id: &str, policy: ZenPolicy) -> Result<()>;
}

/// Store that keeps policies in memory, ordered by mode id
#[derive(Debug, Clone, Default)]
pub struct InMemoryPolicyStore {
    policies: BTreeMap<String, ZenPolicy>,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a mode
    pub fn insert(&mut self, mode_id: impl Into<String>, policy: ZenPolicy) {
        self.policies.insert(mode_id.into(), policy);
    }

    pub fn with_mode(mut self, mode_id: impl Into<String>, policy: ZenPolicy) -> Self {
        self.insert(mode_id, policy);
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl PolicyStore for InMemoryPolicyStore {
    fn mode_ids(&self) -> Result<Vec<String>> {
        Ok(self.policies.keys().cloned().collect())
    }

    fn policy(&self, mode_id: &str) -> Result<ZenPolicy> {
        self.policies
            .get(mode_id)
            .copied()
            .ok_or_else(|| Error::mode_not_found(mode_id))
    }

    fn set_policy(&mut self, mode_id: &str, policy: ZenPolicy) -> Result<()> {
        match self.policies.get_mut(mode_id) {
            Some(existing) => {
                *existing = policy;
                Ok(())
            }
            None => Err(Error::mode_not_found(mode_id)),
        }
    }
}

//! Permission set model: the resource -> actions mapping behind a role, with
//! the bulk-edit semantics the role editor grid needs. All mutators are pure
//! and return a new set; callers needing in-place edits reassign.
//!
//! Invariant: a resource with no granted actions is absent from the map, never
//! stored with an empty action set. The row/column "select all" states are
//! recomputed predicates over the current set, not stored booleans, so the
//! editor checkboxes cannot drift out of sync with the underlying grants.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{Action, Resource};

/// Granted actions per resource. Serializes as the backend role document's
/// `permissions` field: `{"widget": ["view", "edit"], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    grants: BTreeMap<Resource, BTreeSet<Action>>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from explicit (resource, actions) pairs. Pairs with no
    /// actions are skipped to preserve the no-empty-entry invariant.
    pub fn from_grants<I, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Resource, A)>,
        A: IntoIterator<Item = Action>,
    {
        let mut grants: BTreeMap<Resource, BTreeSet<Action>> = BTreeMap::new();
        for (resource, actions) in pairs {
            let set: BTreeSet<Action> = actions.into_iter().collect();
            if !set.is_empty() {
                grants.entry(resource).or_default().extend(set);
            }
        }
        Self { grants }
    }

    /// True iff `action` is granted on `resource`.
    pub fn has(&self, resource: Resource, action: Action) -> bool {
        self.grants.get(&resource).is_some_and(|s| s.contains(&action))
    }

    /// True iff the set grants nothing at all.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Resources that currently carry at least one grant.
    pub fn resources(&self) -> impl Iterator<Item = Resource> + '_ {
        self.grants.keys().copied()
    }

    /// Granted actions for a resource; empty when the resource is absent.
    pub fn actions_for(&self, resource: Resource) -> BTreeSet<Action> {
        self.grants.get(&resource).cloned().unwrap_or_default()
    }

    /// Total number of (resource, action) grants. Display only ("N permissions"),
    /// never consulted for authorization.
    pub fn grant_count(&self) -> usize {
        self.grants.values().map(|s| s.len()).sum()
    }

    /// Flip a single grant. Removing the last action on a resource removes the
    /// resource entry entirely; granting on an absent resource creates it.
    pub fn toggled(&self, resource: Resource, action: Action) -> Self {
        let mut grants = self.grants.clone();
        let actions = grants.entry(resource).or_default();
        // insert returns false when already granted: that is the revoke case
        if !actions.insert(action) {
            actions.remove(&action);
        }
        if grants.get(&resource).is_some_and(|s| s.is_empty()) {
            grants.remove(&resource);
        }
        Self { grants }
    }

    /// Checked state of a row-level "select all" checkbox: every catalog
    /// action granted on this resource.
    pub fn has_all_for_resource(&self, resource: Resource) -> bool {
        self.grants
            .get(&resource)
            .is_some_and(|s| Action::ALL.iter().all(|a| s.contains(a)))
    }

    /// Row-level "select all": grant the full action catalog on the resource
    /// (idempotent union), or clear the resource entry entirely.
    pub fn with_all_for_resource(&self, resource: Resource, grant: bool) -> Self {
        let mut grants = self.grants.clone();
        if grant {
            grants.insert(resource, Action::ALL.iter().copied().collect());
        } else {
            grants.remove(&resource);
        }
        Self { grants }
    }

    /// Checked state of a column-level "select all" checkbox: `action` granted
    /// on every resource in the catalog.
    pub fn has_action_across_resources(&self, action: Action) -> bool {
        Resource::ALL.iter().all(|r| self.has(*r, action))
    }

    /// Column-level "select all": add `action` to every resource (creating
    /// entries as needed), or remove it everywhere, dropping entries it empties.
    pub fn with_action_across_resources(&self, action: Action, grant: bool) -> Self {
        let mut grants = self.grants.clone();
        for resource in Resource::ALL {
            if grant {
                grants.entry(*resource).or_default().insert(action);
            } else if let Some(actions) = grants.get_mut(resource) {
                actions.remove(&action);
                let now_empty = actions.is_empty();
                if now_empty {
                    grants.remove(resource);
                }
            }
        }
        Self { grants }
    }
}

//! Role model: a named, described bundle of permissions, edited and persisted
//! as a whole object. Partial patches are not modeled here; the editor builds
//! the full desired permission set and submits it.

use serde::{Deserialize, Serialize};

use crate::catalog::{Action, Resource};
use crate::error::{AccessError, AccessResult};
use crate::permissions::PermissionSet;

/// Opaque role identifier. The persistence collaborator is the usual source;
/// `generate` exists for stores that mint ids locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub String);

impl RoleId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A stored role as returned by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: String,
    pub permissions: PermissionSet,
}

/// What the role editor submits: everything but the id. Edits always carry the
/// complete desired state; last write wins at the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub permissions: PermissionSet,
}

impl RoleDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, permissions: PermissionSet) -> Self {
        Self { name: name.into(), description: description.into(), permissions }
    }

    /// Local validation, run before any remote call. A role with zero grants
    /// is legal (it simply authorizes nothing); a blank name is not.
    pub fn validate(&self) -> AccessResult<()> {
        if self.name.trim().is_empty() {
            return Err(AccessError::validation("empty_name", "role name must not be empty"));
        }
        Ok(())
    }

    /// Seed template: full catalog on every resource.
    pub fn administrator() -> Self {
        let mut permissions = PermissionSet::new();
        for resource in Resource::ALL {
            permissions = permissions.with_all_for_resource(*resource, true);
        }
        Self::new("Administrator", "Full access to every console area", permissions)
    }

    /// Seed template: manage widget content without touching users or settings.
    pub fn editor() -> Self {
        let permissions = PermissionSet::from_grants([
            (Resource::Dashboard, vec![Action::View]),
            (Resource::Widget, vec![Action::View, Action::Edit, Action::Configure]),
            (Resource::Models, vec![Action::View, Action::Configure]),
            (Resource::Prompts, vec![Action::View, Action::Create, Action::Edit, Action::Delete]),
            (Resource::Analytics, vec![Action::View, Action::Export]),
        ]);
        Self::new("Editor", "Manage widget content, prompts and model settings", permissions)
    }

    /// Seed template: read-only across the reporting surfaces.
    pub fn viewer() -> Self {
        let permissions = PermissionSet::from_grants([
            (Resource::Dashboard, vec![Action::View]),
            (Resource::Widget, vec![Action::View]),
            (Resource::Analytics, vec![Action::View]),
        ]);
        Self::new("Viewer", "Read-only access to dashboards and analytics", permissions)
    }
}

impl Role {
    /// Rebuild the editable draft from a stored role.
    pub fn to_draft(&self) -> RoleDraft {
        RoleDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            permissions: self.permissions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected_locally() {
        let draft = RoleDraft::new("   ", "", PermissionSet::new());
        let err = draft.validate().unwrap_err();
        assert_eq!(err.code_str(), "empty_name");
    }

    #[test]
    fn empty_permission_set_is_a_valid_role() {
        let draft = RoleDraft::new("Probation", "no access yet", PermissionSet::new());
        assert!(draft.validate().is_ok());
        assert_eq!(draft.permissions.grant_count(), 0);
    }

    #[test]
    fn administrator_template_grants_everything() {
        let draft = RoleDraft::administrator();
        for r in Resource::ALL {
            assert!(draft.permissions.has_all_for_resource(*r));
        }
        assert_eq!(
            draft.permissions.grant_count(),
            Resource::ALL.len() * Action::ALL.len()
        );
    }

    #[test]
    fn viewer_template_is_read_only() {
        let draft = RoleDraft::viewer();
        assert!(draft.permissions.has(Resource::Dashboard, Action::View));
        assert!(!draft.permissions.has(Resource::Dashboard, Action::Edit));
        assert!(!draft.permissions.has(Resource::Users, Action::View));
    }
}

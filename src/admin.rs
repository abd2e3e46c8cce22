//! Guarded role administration flows. Persistence and the user directory are
//! boundary traits; every mutating flow re-checks the authorization gate
//! immediately before acting, regardless of what the UI showed.

use std::future::Future;

use tracing::{info, warn};

use crate::catalog::{Action, Resource};
use crate::error::{AccessError, AccessResult};
use crate::identity::{ensure_allowed, Principal};
use crate::role::{Role, RoleDraft, RoleId};
use crate::user::UserDetails;

/// CRUD against the backend role collection. Calls are opaque and may fail;
/// implementations map transport errors into `AccessError::Remote`.
pub trait RoleStore: Send + Sync {
    /// Persist a complete role document. `id` absent means create; the store
    /// returns the authoritative stored role either way (last write wins).
    fn persist_role(
        &self,
        id: Option<&RoleId>,
        draft: &RoleDraft,
    ) -> impl Future<Output = AccessResult<Role>> + Send;

    fn delete_role(&self, id: &RoleId) -> impl Future<Output = AccessResult<()>> + Send;

    fn list_roles(&self) -> impl Future<Output = AccessResult<Vec<Role>>> + Send;
}

/// Read side of the user directory, used here only for the referential guard
/// on role deletion.
pub trait UserDirectory: Send + Sync {
    fn list_users(&self) -> impl Future<Output = AccessResult<Vec<UserDetails>>> + Send;

    fn count_users_with_role(&self, id: &RoleId) -> impl Future<Output = AccessResult<usize>> + Send;
}

pub async fn list_roles<S: RoleStore>(principal: &Principal, store: &S) -> AccessResult<Vec<Role>> {
    ensure_allowed(principal, Resource::Users, Action::View)?;
    store.list_roles().await
}

pub async fn create_role<S: RoleStore>(
    principal: &Principal,
    store: &S,
    draft: &RoleDraft,
) -> AccessResult<Role> {
    ensure_allowed(principal, Resource::Users, Action::Create)?;
    draft.validate()?;
    let role = store.persist_role(None, draft).await?;
    info!(target: "parlor::access", role = %role.id, by = %principal.user_id,
          grants = role.permissions.grant_count(), "role created");
    Ok(role)
}

pub async fn update_role<S: RoleStore>(
    principal: &Principal,
    store: &S,
    id: &RoleId,
    draft: &RoleDraft,
) -> AccessResult<Role> {
    ensure_allowed(principal, Resource::Users, Action::Edit)?;
    draft.validate()?;
    let role = store.persist_role(Some(id), draft).await?;
    info!(target: "parlor::access", role = %role.id, by = %principal.user_id,
          grants = role.permissions.grant_count(), "role updated");
    Ok(role)
}

/// Delete a role, refusing while any user still references it. Never a silent
/// no-op, never a cascade onto the users.
pub async fn delete_role<S: RoleStore, D: UserDirectory>(
    principal: &Principal,
    store: &S,
    directory: &D,
    id: &RoleId,
) -> AccessResult<()> {
    ensure_allowed(principal, Resource::Users, Action::Delete)?;
    let assigned = directory.count_users_with_role(id).await?;
    if assigned > 0 {
        warn!(target: "parlor::access", role = %id, assigned, "role deletion refused: still referenced");
        return Err(AccessError::conflict(
            "role_in_use".to_string(),
            format!("cannot delete a role with {} assigned user(s)", assigned),
        ));
    }
    store.delete_role(id).await?;
    info!(target: "parlor::access", role = %id, by = %principal.user_id, "role deleted");
    Ok(())
}

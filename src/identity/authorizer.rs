//! The pure authorization decision. Re-evaluated on every check; any caching
//! is the principal context's business.

use crate::catalog::{Action, Resource};
use crate::error::{AccessError, AccessResult};

use super::principal::Principal;

/// Decide whether `principal` may perform `action` on `resource`.
///
/// Admin bypass short-circuits before any permission lookup: an admin with an
/// empty role still passes every check. A principal with no role is
/// authenticated but authorized for nothing. Grants are purely additive;
/// there is no explicit deny.
pub fn authorize(principal: &Principal, resource: Resource, action: Action) -> bool {
    if principal.is_admin {
        return true;
    }
    match &principal.role {
        Some(role) => role.permissions.has(resource, action),
        None => false,
    }
}

/// Final gate for mutating flows: UI elements may have been hidden or
/// disabled, but every mutation re-checks here immediately before acting.
pub fn ensure_allowed(principal: &Principal, resource: Resource, action: Action) -> AccessResult<()> {
    if authorize(principal, resource, action) {
        Ok(())
    } else {
        Err(AccessError::denied(
            "not_authorized".to_string(),
            format!("user {} may not {} {}", principal.user_id, action, resource),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::PermissionSet;
    use crate::role::{Role, RoleId};

    fn role_with(permissions: PermissionSet) -> Role {
        Role { id: RoleId::from("r-test"), name: "Test".into(), description: String::new(), permissions }
    }

    #[test]
    fn admin_bypass_is_unconditional() {
        // even with an all-empty role attached, the flag wins
        let mut p = Principal::admin("root");
        p.role = Some(role_with(PermissionSet::new()));
        for r in Resource::ALL {
            for a in Action::ALL {
                assert!(authorize(&p, *r, *a));
            }
        }
    }

    #[test]
    fn no_role_resolves_to_deny_all() {
        let p = Principal { user_id: "newbie".into(), role: None, is_admin: false };
        for r in Resource::ALL {
            for a in Action::ALL {
                assert!(!authorize(&p, *r, *a));
            }
        }
    }

    #[test]
    fn role_grants_decide_the_rest() {
        let set = PermissionSet::new().toggled(Resource::Users, Action::View);
        let p = Principal::with_role("alice", role_with(set));
        assert!(authorize(&p, Resource::Users, Action::View));
        assert!(!authorize(&p, Resource::Users, Action::Delete));
        assert!(!authorize(&p, Resource::Settings, Action::View));
    }

    #[test]
    fn ensure_allowed_maps_to_denied() {
        let p = Principal { user_id: "bob".into(), role: None, is_admin: false };
        let err = ensure_allowed(&p, Resource::Widget, Action::Edit).unwrap_err();
        assert_eq!(err.code_str(), "not_authorized");
        assert_eq!(err.http_status(), 403);
    }
}

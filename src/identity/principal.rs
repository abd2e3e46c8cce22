use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The resolved actor being authorized: their role (if any) plus the per-user
/// admin flag. Passed explicitly into every check; there is no ambient
/// "current principal" state in this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    /// Absent mid-onboarding; authorizes nothing on its own.
    #[serde(default)]
    pub role: Option<Role>,
    /// Unconditional bypass. Note this is distinct from being assigned a role
    /// named "admin" — only the flag bypasses permission lookup.
    #[serde(default)]
    pub is_admin: bool,
}

impl Principal {
    pub fn with_role(user_id: impl Into<String>, role: Role) -> Self {
        Self { user_id: user_id.into(), role: Some(role), is_admin: false }
    }

    pub fn admin(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), role: None, is_admin: true }
    }
}

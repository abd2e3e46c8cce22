//! Console user records as the directory backend reports them. A user holds a
//! non-owning reference to exactly one role; effective permissions come from
//! that role unless the per-user admin flag is set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::RoleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    /// Invited but not yet onboarded; may have no role assigned.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Reference by id; the role itself lives in the role store. Absent while
    /// onboarding, which authorizes nothing.
    pub role_id: Option<RoleId>,
    pub status: UserStatus,
    /// Per-user escalation flag, independent of the role system.
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_active: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_shape() {
        let user = UserDetails {
            id: "u-1".into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            role_id: Some(RoleId::from("r-1")),
            status: UserStatus::Active,
            is_admin: false,
            created_at: Utc::now(),
            last_active: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role_id"], "r-1");
        assert_eq!(json["status"], "active");
    }
}

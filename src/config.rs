//! Environment-driven configuration for the access core. The only knob today
//! is the per-user admin allowlist consulted while resolving a principal;
//! admin is deliberately a user property, never a role property.

use tracing::info;

pub const ADMIN_USERS_ENV: &str = "PARLOR_ADMIN_USERS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessConfig {
    /// User ids (or emails) granted the unconditional admin bypass.
    pub admin_users: Vec<String>,
}

impl AccessConfig {
    pub fn new(admin_users: Vec<String>) -> Self {
        Self { admin_users }
    }

    /// Read `PARLOR_ADMIN_USERS` as a comma-separated list. Missing or empty
    /// means no env-granted admins; principal sources may still mark admins
    /// from their own records.
    pub fn from_env() -> Self {
        let admin_users: Vec<String> = std::env::var(ADMIN_USERS_ENV)
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !admin_users.is_empty() {
            info!(target: "parlor::access", count = admin_users.len(), "admin allowlist loaded from env");
        }
        Self { admin_users }
    }

    /// Case-insensitive membership check, matching how the directory compares
    /// user ids and emails.
    pub fn is_admin_user(&self, id_or_email: &str) -> bool {
        self.admin_users.iter().any(|u| u.eq_ignore_ascii_case(id_or_email))
    }
}

use std::future::Future;

use crate::error::AccessResult;

use super::principal::Principal;

/// Boundary to whatever backend knows who the session belongs to. Resolved
/// once per session or role change, not per authorization check; failure
/// leaves the caller in a denied (never allowed) state.
///
/// Implementations typically combine a directory lookup with the
/// [`crate::config::AccessConfig`] admin allowlist when filling `is_admin`.
pub trait PrincipalSource: Send + Sync {
    fn fetch_principal(&self) -> impl Future<Output = AccessResult<Principal>> + Send;
}

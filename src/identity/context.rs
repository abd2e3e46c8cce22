//! Session-scoped authorization surface. Resolves the principal once, then
//! answers every route guard and button-visibility question from memory.

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::catalog::{Action, Resource};
use crate::error::AccessError;

use super::authorizer::authorize;
use super::principal::Principal;
use super::provider::PrincipalSource;

/// Resolution is a third outcome alongside allow/deny: guards must be able to
/// show "still checking" instead of flashing an access-denied state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionState {
    Pending,
    Resolved(Principal),
    Failed { code: String, message: String },
}

/// The only authorization surface the rest of the console calls; nothing else
/// reimplements the bypass-then-lookup logic. Checks are lock-read cheap and
/// safe from any number of concurrent readers.
pub struct PrincipalContext {
    state: RwLock<ResolutionState>,
}

impl Default for PrincipalContext {
    fn default() -> Self {
        Self { state: RwLock::new(ResolutionState::Pending) }
    }
}

impl PrincipalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context pre-resolved from a known principal (tests, server-side jobs).
    pub fn resolved(principal: Principal) -> Self {
        Self { state: RwLock::new(ResolutionState::Resolved(principal)) }
    }

    /// Fetch the session's principal through the boundary. Call once at
    /// session start and again after a role change; a failed fetch leaves
    /// every predicate denying.
    pub async fn resolve<S: PrincipalSource>(&self, source: &S) -> ResolutionState {
        let outcome = match source.fetch_principal().await {
            Ok(principal) => {
                debug!(target: "parlor::access", user = %principal.user_id, admin = principal.is_admin,
                       "principal resolved");
                ResolutionState::Resolved(principal)
            }
            Err(e) => {
                warn!(target: "parlor::access", code = e.code_str(), "principal resolution failed: {}", e.message());
                ResolutionState::Failed { code: e.code_str().to_string(), message: e.message().to_string() }
            }
        };
        *self.state.write() = outcome.clone();
        outcome
    }

    /// Drop back to `Pending`, e.g. when the session's role changed and a
    /// fresh `resolve` is about to run.
    pub fn invalidate(&self) {
        *self.state.write() = ResolutionState::Pending;
    }

    pub fn state(&self) -> ResolutionState {
        self.state.read().clone()
    }

    pub fn is_resolved(&self) -> bool {
        matches!(&*self.state.read(), ResolutionState::Resolved(_))
    }

    /// The resolved principal, for flows that must pass it to the final gate.
    /// Errors with `Resolution` while pending or failed.
    pub fn principal(&self) -> Result<Principal, AccessError> {
        match &*self.state.read() {
            ResolutionState::Resolved(p) => Ok(p.clone()),
            ResolutionState::Pending => Err(AccessError::resolution("unresolved", "principal not yet resolved")),
            ResolutionState::Failed { code, message } => Err(AccessError::resolution(code.clone(), message.clone())),
        }
    }

    /// Core predicate: deny unless resolved, then the pure evaluator decides.
    pub fn can(&self, resource: Resource, action: Action) -> bool {
        match &*self.state.read() {
            ResolutionState::Resolved(p) => authorize(p, resource, action),
            _ => false,
        }
    }

    pub fn can_view(&self, resource: Resource) -> bool {
        self.can(resource, Action::View)
    }

    pub fn can_create(&self, resource: Resource) -> bool {
        self.can(resource, Action::Create)
    }

    pub fn can_edit(&self, resource: Resource) -> bool {
        self.can(resource, Action::Edit)
    }

    pub fn can_delete(&self, resource: Resource) -> bool {
        self.can(resource, Action::Delete)
    }

    pub fn can_configure(&self, resource: Resource) -> bool {
        self.can(resource, Action::Configure)
    }

    pub fn can_export(&self, resource: Resource) -> bool {
        self.can(resource, Action::Export)
    }
}

//! Unified application error model for the access-control core.
//! One enum shared by the role editor, the authorization gate and the
//! boundary traits, with helper mappers for the (external) transport layer.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessError {
    /// Rejected locally before any remote call; `code` names the field.
    Validation { code: String, message: String },
    NotFound { code: String, message: String },
    /// Referential violation, e.g. deleting a role users still reference.
    Conflict { code: String, message: String },
    /// The final authorization gate refused the operation.
    Denied { code: String, message: String },
    /// The principal could not be resolved; callers treat this as
    /// "not yet authorized", distinct from a hard denial.
    Resolution { code: String, message: String },
    /// A backend call failed.
    Remote { code: String, message: String },
    Internal { code: String, message: String },
}

impl AccessError {
    pub fn code_str(&self) -> &str {
        match self {
            AccessError::Validation { code, .. }
            | AccessError::NotFound { code, .. }
            | AccessError::Conflict { code, .. }
            | AccessError::Denied { code, .. }
            | AccessError::Resolution { code, .. }
            | AccessError::Remote { code, .. }
            | AccessError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AccessError::Validation { message, .. }
            | AccessError::NotFound { message, .. }
            | AccessError::Conflict { message, .. }
            | AccessError::Denied { message, .. }
            | AccessError::Resolution { message, .. }
            | AccessError::Remote { message, .. }
            | AccessError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn validation<S: Into<String>>(code: S, msg: S) -> Self { AccessError::Validation { code: code.into(), message: msg.into() } }
    pub fn not_found<S: Into<String>>(code: S, msg: S) -> Self { AccessError::NotFound { code: code.into(), message: msg.into() } }
    pub fn conflict<S: Into<String>>(code: S, msg: S) -> Self { AccessError::Conflict { code: code.into(), message: msg.into() } }
    pub fn denied<S: Into<String>>(code: S, msg: S) -> Self { AccessError::Denied { code: code.into(), message: msg.into() } }
    pub fn resolution<S: Into<String>>(code: S, msg: S) -> Self { AccessError::Resolution { code: code.into(), message: msg.into() } }
    pub fn remote<S: Into<String>>(code: S, msg: S) -> Self { AccessError::Remote { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { AccessError::Internal { code: code.into(), message: msg.into() } }

    /// Map to HTTP status code for the console's API layer.
    pub fn http_status(&self) -> u16 {
        match self {
            AccessError::Validation { .. } => 400,
            AccessError::NotFound { .. } => 404,
            AccessError::Conflict { .. } => 409,
            AccessError::Denied { .. } => 403,
            AccessError::Resolution { .. } => 401,
            AccessError::Remote { .. } => 502,
            AccessError::Internal { .. } => 500,
        }
    }

    /// True for failures the user can recover from by correction or retry.
    /// Nothing in this core is fatal to the process.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AccessError::Internal { .. })
    }
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AccessError {}

pub type AccessResult<T> = Result<T, AccessError>;

impl From<anyhow::Error> for AccessError {
    fn from(err: anyhow::Error) -> Self {
        // Default mapping: treat as a failed backend call unless downcasted elsewhere
        AccessError::Remote { code: "remote_error".into(), message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_mapping() {
        assert_eq!(AccessError::validation("empty_name", "name required").http_status(), 400);
        assert_eq!(AccessError::not_found("role_not_found", "missing").http_status(), 404);
        assert_eq!(AccessError::conflict("role_in_use", "assigned users").http_status(), 409);
        assert_eq!(AccessError::denied("denied", "no").http_status(), 403);
        assert_eq!(AccessError::resolution("unresolved", "pending").http_status(), 401);
        assert_eq!(AccessError::remote("remote_error", "backend down").http_status(), 502);
        assert_eq!(AccessError::internal("internal", "bug").http_status(), 500);
    }

    #[test]
    fn recoverability() {
        assert!(AccessError::conflict("role_in_use", "assigned users").is_recoverable());
        assert!(AccessError::resolution("unresolved", "pending").is_recoverable());
        assert!(!AccessError::internal("internal", "bug").is_recoverable());
    }

    #[test]
    fn anyhow_maps_to_remote() {
        let err: AccessError = anyhow::anyhow!("connection refused").into();
        assert!(matches!(err, AccessError::Remote { .. }));
        assert_eq!(err.code_str(), "remote_error");
    }
}

//! Role-based access control core for the Parlor admin console: the closed
//! permission catalog, role editing semantics, and the authorization gate.

pub mod catalog;
pub mod permissions;
pub mod role;
pub mod user;
pub mod identity;
pub mod admin;
pub mod config;
pub mod error;

pub use catalog::{Action, Resource};
pub use config::AccessConfig;
pub use error::{AccessError, AccessResult};
pub use identity::{authorize, ensure_allowed, Principal, PrincipalContext, PrincipalSource, ResolutionState};
pub use permissions::PermissionSet;
pub use role::{Role, RoleDraft, RoleId};
pub use user::{UserDetails, UserStatus};

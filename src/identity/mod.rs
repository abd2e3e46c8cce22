//! Principal resolution and the authorization gate for the console.
//! Keep the public surface thin and split implementation across sub-modules.

mod principal;
mod authorizer;
mod provider;
mod context;

pub use principal::Principal;
pub use authorizer::{authorize, ensure_allowed};
pub use provider::PrincipalSource;
pub use context::{PrincipalContext, ResolutionState};

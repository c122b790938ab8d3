//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod identity;
mod modifiers;
mod principal_kind;

pub use identity::{PrincipalId, PrincipalKey};
pub use modifiers::Modifiers;
pub use principal_kind::{KindInfo, PrincipalKind};

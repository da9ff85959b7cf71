//! Role-based visibility gating
//!
//! This module decides whether UI elements should be shown to the current
//! user. It is presentational only: the gate toggles visibility the way a
//! CSS-class toggle would, it does not remove anything from the structural
//! tree, and it is NOT a security boundary. Server-side enforcement is the
//! responsibility of the backing services.
//!
//! The decision point is [`VisibilityGate`], which reads the current
//! [`RoleSet`] from an injected [`RoleProvider`] and answers a single
//! question: may an element that requires a given [`Role`] be shown right
//! now. The view layer re-invokes the gate on every render; the gate holds
//! no cached decision.

mod gate;
mod provider;
mod roles;

pub use gate::VisibilityGate;
pub use provider::{RoleProvider, StaticRoleProvider};
pub use roles::{Role, RoleSet};

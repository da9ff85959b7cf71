//! The visibility decision point

use super::provider::RoleProvider;
use super::roles::Role;
use std::sync::Arc;

/// Decides whether role-gated UI elements may be shown
///
/// Holds a shared reference to the injected [`RoleProvider`] and nothing
/// else; every call to [`is_visible`](Self::is_visible) reads the provider
/// afresh. Owners that need to react to role changes must trigger a
/// re-render and re-invoke the gate (see the reload channel in
/// [`crate::events`]).
#[derive(Clone)]
pub struct VisibilityGate {
    provider: Arc<dyn RoleProvider>,
}

impl VisibilityGate {
    /// Create a gate backed by the given provider
    pub fn new(provider: Arc<dyn RoleProvider>) -> Self {
        Self { provider }
    }

    /// Whether an element with the given role requirement may be shown
    ///
    /// - No requirement (`None`) is unconditionally visible.
    /// - Unauthenticated sessions and sessions without the required role
    ///   are denied.
    /// - A provider failure denies (fail-safe): a visibility bug should
    ///   hide affordances, not leak them. The failure is logged, never
    ///   propagated.
    pub fn is_visible(&self, required_role: Option<&Role>) -> bool {
        let Some(required) = required_role else {
            return true;
        };
        match self.provider.current_roles() {
            Ok(Some(roles)) => roles.contains(required),
            Ok(None) => false,
            Err(err) => {
                log::warn!(
                    "role query failed on provider '{}': {:#}; hiding element",
                    self.provider.name(),
                    err
                );
                false
            }
        }
    }

    /// Convenience wrapper for a mandatory requirement
    pub fn requires(&self, role: &str) -> bool {
        self.is_visible(Some(&Role::new(role)))
    }
}

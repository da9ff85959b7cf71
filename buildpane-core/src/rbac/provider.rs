//! Role provider seam
//!
//! The gate never owns role state; it queries a [`RoleProvider`] injected
//! at construction. The process-wide session implementation lives in
//! [`crate::session`]; [`StaticRoleProvider`] serves fixtures and
//! single-role deployments.

use super::roles::RoleSet;
use anyhow::Result;
use std::sync::Arc;

/// Source of truth for the current user's roles
///
/// `Ok(None)` means unauthenticated, which is distinct from an empty set
/// (authenticated, but holding no roles). Both deny every role requirement.
/// An `Err` is a soft failure: the gate coerces it to "no roles" rather
/// than propagating, since visibility gating must never crash the render
/// path.
pub trait RoleProvider: Send + Sync {
    /// The current role set, or `None` when no user is authenticated
    fn current_roles(&self) -> Result<Option<RoleSet>>;

    /// Provider name for logging and identification
    fn name(&self) -> &str {
        "role-provider"
    }
}

// Allow sharing a provider handle directly
impl<P: RoleProvider + ?Sized> RoleProvider for Arc<P> {
    fn current_roles(&self) -> Result<Option<RoleSet>> {
        (**self).current_roles()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Fixed role set, useful for tests and unauthenticated-only surfaces
#[derive(Debug, Clone, Default)]
pub struct StaticRoleProvider {
    roles: Option<RoleSet>,
}

impl StaticRoleProvider {
    /// Provider reporting an authenticated user holding `roles`
    pub fn authenticated(roles: RoleSet) -> Self {
        Self { roles: Some(roles) }
    }

    /// Provider reporting no authenticated user
    pub fn unauthenticated() -> Self {
        Self { roles: None }
    }
}

impl RoleProvider for StaticRoleProvider {
    fn current_roles(&self) -> Result<Option<RoleSet>> {
        Ok(self.roles.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbac::Role;

    #[test]
    fn test_static_provider_authenticated() {
        let provider = StaticRoleProvider::authenticated(["user"].into_iter().collect());
        let roles = provider.current_roles().unwrap().unwrap();
        assert!(roles.contains(&Role::new("user")));
    }

    #[test]
    fn test_static_provider_unauthenticated() {
        let provider = StaticRoleProvider::unauthenticated();
        assert!(provider.current_roles().unwrap().is_none());
    }
}

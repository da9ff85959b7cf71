//! Role identifiers and role sets

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Opaque role identifier
///
/// Roles are case-sensitive strings with no assumed hierarchy:
/// `"Admin"` and `"admin"` are distinct roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Create a role from its identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The role identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of roles held by a session
///
/// Unordered; a user may hold zero or more roles. An empty set is a valid
/// authenticated state and still denies every role requirement. The
/// unauthenticated state is represented as an absent `RoleSet`
/// (`Option<RoleSet>` at the [`RoleProvider`] seam), not as an empty one.
///
/// [`RoleProvider`]: super::RoleProvider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(HashSet<Role>);

impl RoleSet {
    /// Create an empty role set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role to the set
    pub fn insert(&mut self, role: impl Into<Role>) -> bool {
        self.0.insert(role.into())
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    /// Number of roles held
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no roles are held
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the held roles (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }
}

impl<R: Into<Role>> FromIterator<R> for RoleSet {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_equality_is_case_sensitive() {
        assert_ne!(Role::new("Admin"), Role::new("admin"));
        assert_eq!(Role::new("admin"), Role::from("admin"));
    }

    #[test]
    fn test_role_set_membership() {
        let roles: RoleSet = ["admin", "user"].into_iter().collect();
        assert!(roles.contains(&Role::new("admin")));
        assert!(roles.contains(&Role::new("user")));
        assert!(!roles.contains(&Role::new("superadmin")));
        assert!(!roles.contains(&Role::new("Admin")));
    }

    #[test]
    fn test_role_set_insert_deduplicates() {
        let mut roles = RoleSet::new();
        assert!(roles.insert("admin"));
        assert!(!roles.insert("admin"));
        assert_eq!(roles.len(), 1);
    }

    #[test]
    fn test_empty_role_set() {
        let roles = RoleSet::new();
        assert!(roles.is_empty());
        assert!(!roles.contains(&Role::new("user")));
    }

    #[test]
    fn test_role_set_serialization() {
        let roles: RoleSet = ["admin"].into_iter().collect();
        let json = serde_json::to_value(&roles).unwrap();
        assert_eq!(json, serde_json::json!(["admin"]));

        let parsed: RoleSet = serde_json::from_str(r#"["admin","user"]"#).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}

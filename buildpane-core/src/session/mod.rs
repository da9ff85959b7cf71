//! Process-wide session role state
//!
//! The console holds exactly one user session per process. [`SessionRoles`]
//! models it as explicit shared state with a defined lifecycle:
//! [`login`](SessionRoles::login) initializes it, [`logout`](SessionRoles::logout)
//! tears it down. Handles are cheap to clone and are passed by injection to
//! the [`VisibilityGate`](crate::rbac::VisibilityGate), never reached for as
//! ambient global state.
//!
//! Sessions expire; an expired session reads as unauthenticated until the
//! next login.

use crate::rbac::{RoleProvider, RoleSet};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// An authenticated user session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session ID
    pub id: String,

    /// Identifier of the logged-in user
    pub user_id: String,

    /// Roles granted to this session
    pub roles: RoleSet,

    /// Session creation time
    pub created_at: DateTime<Utc>,

    /// Session expiration time
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for `user_id` valid for `ttl` from now
    pub fn new(user_id: impl Into<String>, roles: RoleSet, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            roles,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Check if the session is expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Shared handle to the process-wide session
///
/// Thread-safe via `RwLock`; all operations are synchronous. Implements
/// [`RoleProvider`] so a gate can be constructed directly from it.
#[derive(Clone, Default)]
pub struct SessionRoles {
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionRoles {
    /// Create a handle with no active session
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the session (login)
    ///
    /// Replaces any existing session. Returns a snapshot of the stored
    /// session.
    pub fn login(
        &self,
        user_id: impl Into<String>,
        roles: RoleSet,
        ttl: Duration,
    ) -> Result<Session> {
        let session = Session::new(user_id, roles, ttl);
        let mut guard = self.current.write().map_err(|_| anyhow!("session lock poisoned"))?;
        log::info!("session {} started for user {}", session.id, session.user_id);
        *guard = Some(session.clone());
        Ok(session)
    }

    /// Tear the session down (logout)
    ///
    /// Subsequent role queries report unauthenticated. No-op when already
    /// logged out.
    pub fn logout(&self) -> Result<()> {
        let mut guard = self.current.write().map_err(|_| anyhow!("session lock poisoned"))?;
        if let Some(session) = guard.take() {
            log::info!("session {} ended for user {}", session.id, session.user_id);
        }
        Ok(())
    }

    /// Snapshot of the active, unexpired session
    pub fn current(&self) -> Option<Session> {
        let guard = self.current.read().ok()?;
        guard.as_ref().filter(|s| !s.is_expired()).cloned()
    }

    /// Whether an unexpired session is active
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

impl RoleProvider for SessionRoles {
    fn current_roles(&self) -> Result<Option<RoleSet>> {
        let guard = self.current.read().map_err(|_| anyhow!("session lock poisoned"))?;
        Ok(guard.as_ref().filter(|s| !s.is_expired()).map(|s| s.roles.clone()))
    }

    fn name(&self) -> &str {
        "session"
    }
}

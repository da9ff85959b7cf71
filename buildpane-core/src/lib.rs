//! Buildpane - Console Core
//!
//! The front-end core of a build-automation console. Console pages bind
//! REST-backed entities (projects, build configurations, build groups) to
//! paginated list views, and UI affordances are shown or hidden by the
//! current user's roles. This crate provides the pieces those pages share;
//! fetching, routing and rendering stay in the hosting application.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use buildpane_core::prelude::*;
//! use chrono::Duration;
//! use std::sync::Arc;
//!
//! // Process-wide session, initialized at login
//! let session = SessionRoles::new();
//! session.login("alice", ["admin"].into_iter().collect(), Duration::hours(8))?;
//!
//! // Gate UI affordances on roles
//! let gate = VisibilityGate::new(Arc::new(session.clone()));
//! assert!(gate.requires("admin"));
//!
//! // Bind a fetched collection to a paginated list view
//! let mut view = ListView::new().with_display_fields(["name", "project", "buildStatus"]);
//! view.bind(fetched_build_configs)?;
//! view.next_page();
//! ```
//!
//! # Architecture
//!
//! - [`pager`] - Page windowing over fetched collections
//! - [`rbac`] - Role-based visibility gating (presentational, not a
//!   security boundary)
//! - [`session`] - Process-wide session role state with login/logout
//!   lifecycle
//! - [`view`] - List-view binding (display fields + paginator)
//! - [`events`] - Typed reload notifications with scoped subscriptions
//! - [`config`] - TOML + environment configuration
//! - [`logging`] - `log` facade initialization

pub mod config; // Configuration system with TOML support
pub mod events; // Typed reload notifications
pub mod logging; // Standard log crate integration
pub mod pager; // Page windowing over fetched collections
pub mod rbac; // Role-based visibility gating
pub mod session; // Process-wide session role state
pub mod view; // List-view binding

// Prelude module for convenient imports
pub mod prelude;

// Re-exports of main types
pub use config::BuildpaneConfig;
pub use events::{BuildNotification, EventChannel};
pub use pager::{Page, PagerError, Paginator};
pub use rbac::{Role, RoleProvider, RoleSet, VisibilityGate};
pub use session::SessionRoles;
pub use view::ListView;

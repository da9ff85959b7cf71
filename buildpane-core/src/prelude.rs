//! Convenient imports for Buildpane applications
//!
//! ```rust,ignore
//! use buildpane_core::prelude::*;
//! ```

pub use crate::config::{BuildpaneConfig, LoggingConfig, PagingConfig, RbacConfig};
pub use crate::events::{BuildEventType, BuildNotification, EventChannel, Subscription};
pub use crate::logging::init_logging;
pub use crate::pager::{Page, PagerError, Paginator, DEFAULT_PAGE_SIZE};
pub use crate::rbac::{Role, RoleProvider, RoleSet, StaticRoleProvider, VisibilityGate};
pub use crate::session::{Session, SessionRoles};
pub use crate::view::ListView;

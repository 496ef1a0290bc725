//! In-memory authorization decision engine.
//!
//! Access is decided against explicitly registered allow/deny rules combined
//! with per-resource defaults: a resource nobody has been allowed anything on
//! is open to everyone, while the first allow rule on a resource closes it
//! for every role not listed. Specific rules (one action) take precedence
//! over global rules (every action), and allow beats deny within each pair.
//! Use [`MemoryPermissionManager`] directly, or behind the
//! [`PermissionManager`] contract when the backend should be swappable.
//!
//! # Examples
//!
//! Registering rules and querying access:
//! ```
//! use rs_permit::{MemoryPermissionManager, ResourceId, RoleId};
//!
//! # fn main() -> rs_permit::Result<()> {
//! let manager = MemoryPermissionManager::new();
//! let editor = RoleId::new("editor")?;
//! let report = ResourceId::new("document", "report-2024")?;
//!
//! manager.allow(&editor, "read", &report)?;
//! assert!(manager.has_access(&editor, "read", &report)?);
//! assert!(!manager.has_access(&editor, "write", &report)?);
//! # Ok(())
//! # }
//! ```
//!
//! Global rules cover every action and yield to specific rules:
//! ```
//! use rs_permit::{MemoryPermissionManager, ResourceId, RoleId};
//!
//! # fn main() -> rs_permit::Result<()> {
//! let manager = MemoryPermissionManager::new();
//! let intern = RoleId::new("intern")?;
//! let ledger = ResourceId::new("ledger", "2024-q3")?;
//!
//! manager.deny_all(&intern, &ledger)?;
//! manager.allow(&intern, "read", &ledger)?;
//! assert!(manager.has_access(&intern, "read", &ledger)?);
//! assert!(!manager.has_access(&intern, "post", &ledger)?);
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod error;
mod manager;
mod map;
mod memory;
mod types;

#[cfg(feature = "session")]
pub mod session;

pub use crate::error::{BackendError, Error, Result};
pub use crate::manager::{GLOBAL_ACTION, PermissionManager};
pub use crate::map::PermissionMap;
pub use crate::memory::MemoryPermissionManager;
pub use crate::types::{Resource, ResourceId, Role, RoleId};

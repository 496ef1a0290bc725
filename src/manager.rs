use crate::error::Result;
use crate::types::{Resource, Role};
use async_trait::async_trait;

/// Action token under which global rules are stored.
///
/// Reserved: mutators reject it as an explicit action. Querying with it is
/// allowed and resolves against the global rule class.
pub const GLOBAL_ACTION: &str = "all";

/// Mutation and query contract for permission backends.
///
/// [`MemoryPermissionManager`](crate::MemoryPermissionManager) is the
/// reference implementation; durable backends implement the same contract and
/// surface their failures through [`Error::Backend`](crate::Error::Backend).
#[async_trait]
pub trait PermissionManager: Send + Sync {
    /// Grants `role` the explicit `action` on `resource`.
    ///
    /// Removes a matching specific deny rule, if any. Idempotent.
    async fn allow(&self, role: &dyn Role, action: &str, resource: &dyn Resource) -> Result<()>;

    /// Denies `role` the explicit `action` on `resource`.
    ///
    /// Removes a matching specific allow rule, if any. Idempotent.
    async fn deny(&self, role: &dyn Role, action: &str, resource: &dyn Resource) -> Result<()>;

    /// Grants `role` every action on `resource`.
    ///
    /// Purges the specific and global deny rules for the pair first.
    async fn allow_all(&self, role: &dyn Role, resource: &dyn Resource) -> Result<()>;

    /// Denies `role` every action on `resource`.
    ///
    /// Purges the specific and global allow rules for the pair first.
    async fn deny_all(&self, role: &dyn Role, resource: &dyn Resource) -> Result<()>;

    /// Decides whether `role` may perform `action` on `resource`.
    async fn has_access(
        &self,
        role: &dyn Role,
        action: &str,
        resource: &dyn Resource,
    ) -> Result<bool>;
}

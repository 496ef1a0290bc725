use crate::error::{Error, Result};
use crate::manager::{GLOBAL_ACTION, PermissionManager};
use crate::map::PermissionMap;
use crate::types::{Resource, Role, resource_key, role_key};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;

/// In-memory [`PermissionManager`] implementation. No rules are persisted.
///
/// A clone shares the same rule state, so one manager can be handed to
/// concurrent callers. All operations are atomic with respect to each other:
/// the four rule maps sit behind a single lock, writes exclusive.
#[derive(Debug, Default, Clone)]
pub struct MemoryPermissionManager {
    inner: Arc<RwLock<RuleSets>>,
}

#[derive(Debug, Default)]
struct RuleSets {
    /// Allow rules carrying an explicit action.
    allowed: PermissionMap,
    /// Deny rules carrying an explicit action.
    denied: PermissionMap,
    /// Allow rules covering every action, stored under [`GLOBAL_ACTION`].
    global_allowed: PermissionMap,
    /// Deny rules covering every action, stored under [`GLOBAL_ACTION`].
    global_denied: PermissionMap,
}

impl MemoryPermissionManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `role` the explicit `action` on `resource`.
    ///
    /// A matching specific deny rule is removed, keeping the specific allow
    /// and deny sets disjoint. Idempotent.
    pub fn allow(&self, role: &dyn Role, action: &str, resource: &dyn Resource) -> Result<()> {
        let role = role_key(role)?;
        let resource = resource_key(resource)?;
        let action = explicit_action(action)?;

        let mut rules = self.inner.write().expect("poisoned lock");
        rules.denied.remove(&role, action, &resource);
        rules.allowed.put(&role, action, &resource);
        Ok(())
    }

    /// Denies `role` the explicit `action` on `resource`.
    ///
    /// A matching specific allow rule is removed. Idempotent.
    pub fn deny(&self, role: &dyn Role, action: &str, resource: &dyn Resource) -> Result<()> {
        let role = role_key(role)?;
        let resource = resource_key(resource)?;
        let action = explicit_action(action)?;

        let mut rules = self.inner.write().expect("poisoned lock");
        rules.allowed.remove(&role, action, &resource);
        rules.denied.put(&role, action, &resource);
        Ok(())
    }

    /// Grants `role` every action on `resource`.
    ///
    /// Every specific deny and the global deny for the pair are purged before
    /// the global allow is inserted. Prior specific allows are left in place.
    pub fn allow_all(&self, role: &dyn Role, resource: &dyn Resource) -> Result<()> {
        let role = role_key(role)?;
        let resource = resource_key(resource)?;

        let mut rules = self.inner.write().expect("poisoned lock");
        rules.denied.remove_all(&role, &resource);
        rules.global_denied.remove_all(&role, &resource);
        rules.global_allowed.put(&role, GLOBAL_ACTION, &resource);
        Ok(())
    }

    /// Denies `role` every action on `resource`.
    ///
    /// Every specific allow and the global allow for the pair are purged
    /// before the global deny is inserted. Prior specific denies are left in
    /// place.
    pub fn deny_all(&self, role: &dyn Role, resource: &dyn Resource) -> Result<()> {
        let role = role_key(role)?;
        let resource = resource_key(resource)?;

        let mut rules = self.inner.write().expect("poisoned lock");
        rules.allowed.remove_all(&role, &resource);
        rules.global_allowed.remove_all(&role, &resource);
        rules.global_denied.put(&role, GLOBAL_ACTION, &resource);
        Ok(())
    }

    /// Decides whether `role` may perform `action` on `resource`.
    ///
    /// Specific rules are consulted before global ones, and within each pair
    /// allow wins over deny. When no rule for the role matches, the resource
    /// is closed if any allow rule references it and open otherwise. The
    /// action is not validated here; an unknown action string falls through
    /// to the per-resource default.
    pub fn has_access(
        &self,
        role: &dyn Role,
        action: &str,
        resource: &dyn Resource,
    ) -> Result<bool> {
        let role = role_key(role)?;
        let resource = resource_key(resource)?;

        let rules = self.inner.read().expect("poisoned lock");
        if rules.allowed.contains(&role, action, &resource) {
            return Ok(true);
        }
        if rules.denied.contains(&role, action, &resource) {
            return Ok(false);
        }
        if rules.global_allowed.contains(&role, GLOBAL_ACTION, &resource) {
            return Ok(true);
        }
        if rules.global_denied.contains(&role, GLOBAL_ACTION, &resource) {
            return Ok(false);
        }
        // First allow rule on a resource closes it for every unlisted role.
        if rules.global_allowed.has_permissions(&resource)
            || rules.allowed.has_permissions(&resource)
        {
            return Ok(false);
        }
        Ok(true)
    }

    /// Returns the number of live rule triples across all rule classes.
    pub fn rule_count(&self) -> usize {
        let rules = self.inner.read().expect("poisoned lock");
        rules.allowed.len()
            + rules.denied.len()
            + rules.global_allowed.len()
            + rules.global_denied.len()
    }
}

fn explicit_action(action: &str) -> Result<&str> {
    if action.trim().is_empty() {
        return Err(Error::InvalidAction(
            "action must not be empty".to_string(),
        ));
    }
    if action == GLOBAL_ACTION {
        return Err(Error::InvalidAction(format!(
            "action {GLOBAL_ACTION:?} is reserved for global rules"
        )));
    }
    Ok(action)
}

#[async_trait]
impl PermissionManager for MemoryPermissionManager {
    async fn allow(&self, role: &dyn Role, action: &str, resource: &dyn Resource) -> Result<()> {
        MemoryPermissionManager::allow(self, role, action, resource)
    }

    async fn deny(&self, role: &dyn Role, action: &str, resource: &dyn Resource) -> Result<()> {
        MemoryPermissionManager::deny(self, role, action, resource)
    }

    async fn allow_all(&self, role: &dyn Role, resource: &dyn Resource) -> Result<()> {
        MemoryPermissionManager::allow_all(self, role, resource)
    }

    async fn deny_all(&self, role: &dyn Role, resource: &dyn Resource) -> Result<()> {
        MemoryPermissionManager::deny_all(self, role, resource)
    }

    async fn has_access(
        &self,
        role: &dyn Role,
        action: &str,
        resource: &dyn Resource,
    ) -> Result<bool> {
        MemoryPermissionManager::has_access(self, role, action, resource)
    }
}

use crate::types::{ResourceId, RoleId};
use std::collections::{HashMap, HashSet};

/// Indexed set of (role, action, resource) rule triples.
///
/// The index is keyed by resource first, then by role, so
/// [`has_permissions`](PermissionMap::has_permissions) is answered from the
/// outer map without scanning actions. Iteration order is not observable.
#[derive(Debug, Default, Clone)]
pub struct PermissionMap {
    by_resource: HashMap<ResourceId, HashMap<RoleId, HashSet<String>>>,
}

impl PermissionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule triple. Inserting a present triple is a no-op.
    pub fn put(&mut self, role: &RoleId, action: &str, resource: &ResourceId) {
        self.by_resource
            .entry(resource.clone())
            .or_default()
            .entry(role.clone())
            .or_default()
            .insert(action.to_string());
    }

    /// Removes a rule triple. Removing an absent triple is a no-op.
    pub fn remove(&mut self, role: &RoleId, action: &str, resource: &ResourceId) {
        let Some(roles) = self.by_resource.get_mut(resource) else {
            return;
        };
        if let Some(actions) = roles.get_mut(role.as_str()) {
            actions.remove(action);
            if actions.is_empty() {
                roles.remove(role.as_str());
            }
        }
        if roles.is_empty() {
            self.by_resource.remove(resource);
        }
    }

    /// Returns whether the exact rule triple is present.
    pub fn contains(&self, role: &RoleId, action: &str, resource: &ResourceId) -> bool {
        self.by_resource
            .get(resource)
            .and_then(|roles| roles.get(role.as_str()))
            .is_some_and(|actions| actions.contains(action))
    }

    /// Removes every rule for (role, resource), regardless of action.
    pub fn remove_all(&mut self, role: &RoleId, resource: &ResourceId) {
        let Some(roles) = self.by_resource.get_mut(resource) else {
            return;
        };
        roles.remove(role.as_str());
        if roles.is_empty() {
            self.by_resource.remove(resource);
        }
    }

    /// Returns whether any rule references `resource`, for any role or action.
    pub fn has_permissions(&self, resource: &ResourceId) -> bool {
        // Emptied entries are pruned on removal, so presence in the outer
        // index implies at least one live triple.
        self.by_resource.contains_key(resource)
    }

    /// Returns the number of rule triples.
    pub fn len(&self) -> usize {
        self.by_resource
            .values()
            .flat_map(|roles| roles.values())
            .map(HashSet::len)
            .sum()
    }

    /// Returns whether the map holds no rules.
    pub fn is_empty(&self) -> bool {
        self.by_resource.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(value: &str) -> RoleId {
        RoleId::new(value).unwrap()
    }

    fn document(value: &str) -> ResourceId {
        ResourceId::new("document", value).unwrap()
    }

    #[test]
    fn put_should_be_idempotent() {
        let mut map = PermissionMap::new();
        let editor = role("editor");
        let report = document("report");

        map.put(&editor, "read", &report);
        map.put(&editor, "read", &report);

        assert!(map.contains(&editor, "read", &report));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_should_prune_emptied_entries() {
        let mut map = PermissionMap::new();
        let editor = role("editor");
        let report = document("report");

        map.put(&editor, "read", &report);
        map.remove(&editor, "read", &report);

        assert!(!map.contains(&editor, "read", &report));
        assert!(!map.has_permissions(&report));
        assert!(map.is_empty());
    }

    #[test]
    fn remove_absent_triple_should_be_noop() {
        let mut map = PermissionMap::new();
        let editor = role("editor");
        let report = document("report");

        map.put(&editor, "read", &report);
        map.remove(&editor, "write", &report);
        map.remove(&role("viewer"), "read", &report);
        map.remove(&editor, "read", &document("other"));

        assert!(map.contains(&editor, "read", &report));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_all_should_drop_every_action_for_the_pair() {
        let mut map = PermissionMap::new();
        let editor = role("editor");
        let viewer = role("viewer");
        let report = document("report");

        map.put(&editor, "read", &report);
        map.put(&editor, "write", &report);
        map.put(&viewer, "read", &report);

        map.remove_all(&editor, &report);

        assert!(!map.contains(&editor, "read", &report));
        assert!(!map.contains(&editor, "write", &report));
        assert!(map.contains(&viewer, "read", &report));
        assert!(map.has_permissions(&report));
    }

    #[test]
    fn has_permissions_should_see_rules_of_any_role() {
        let mut map = PermissionMap::new();
        let report = document("report");

        assert!(!map.has_permissions(&report));
        map.put(&role("editor"), "read", &report);
        assert!(map.has_permissions(&report));
        assert!(!map.has_permissions(&document("other")));
    }

    #[test]
    fn len_should_count_triples_across_resources() {
        let mut map = PermissionMap::new();
        let editor = role("editor");

        map.put(&editor, "read", &document("a"));
        map.put(&editor, "write", &document("a"));
        map.put(&role("viewer"), "read", &document("b"));

        assert_eq!(map.len(), 3);
    }
}

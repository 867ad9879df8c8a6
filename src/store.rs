use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StoreError;

/// Read-only query contract the decision engine requires from role and
/// permission storage.
///
/// Both operations must be safe to call concurrently; the engine performs no
/// coordination around its queries. Any backend may implement this as long
/// as it honors exact-match semantics on `(resource, action)` pairs.
#[async_trait]
pub trait RolePermissionStore: Send + Sync {
    /// Names of the roles currently assigned to a user.
    async fn roles_of(&self, user_id: Uuid) -> Result<HashSet<String>, StoreError>;

    /// Whether any role in the set holds a grant for the exact
    /// `(resource, action)` pair.
    async fn has_grant(
        &self,
        roles: &HashSet<String>,
        resource: &str,
        action: &str,
    ) -> Result<bool, StoreError>;
}

/// Role/permission store backed by plain maps.
///
/// Built once with the `with_*` methods and read-only afterwards, so
/// concurrent reads need no coordination. Backs the test suite and
/// embeddings that run without an external store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoleStore {
    assignments: HashMap<Uuid, HashSet<String>>,
    grants: HashMap<String, HashSet<(String, String)>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a role and the `(resource, action)` grants it holds.
    pub fn with_role<'a>(
        mut self,
        role: &str,
        grants: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let entry = self.grants.entry(role.to_string()).or_default();
        for (resource, action) in grants {
            entry.insert((resource.to_string(), action.to_string()));
        }
        self
    }

    /// Assign a role to a user.
    pub fn with_assignment(mut self, user_id: Uuid, role: &str) -> Self {
        self.assignments
            .entry(user_id)
            .or_default()
            .insert(role.to_string());
        self
    }
}

#[async_trait]
impl RolePermissionStore for InMemoryRoleStore {
    async fn roles_of(&self, user_id: Uuid) -> Result<HashSet<String>, StoreError> {
        Ok(self.assignments.get(&user_id).cloned().unwrap_or_default())
    }

    async fn has_grant(
        &self,
        roles: &HashSet<String>,
        resource: &str,
        action: &str,
    ) -> Result<bool, StoreError> {
        Ok(roles.iter().any(|role| {
            self.grants
                .get(role)
                .map(|grants| grants.iter().any(|(r, a)| r == resource && a == action))
                .unwrap_or(false)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_user_has_no_roles() {
        let store = InMemoryRoleStore::new();
        let roles = store.roles_of(Uuid::new_v4()).await.unwrap();
        assert!(roles.is_empty());
    }

    #[tokio::test]
    async fn test_grant_lookup_unions_roles() {
        let store = InMemoryRoleStore::new()
            .with_role("Editor", [("Products", "Create")])
            .with_role("Viewer", [("Products", "View")]);

        let roles: HashSet<String> = ["Editor".to_string(), "Viewer".to_string()]
            .into_iter()
            .collect();

        assert!(store.has_grant(&roles, "Products", "Create").await.unwrap());
        assert!(store.has_grant(&roles, "Products", "View").await.unwrap());
        assert!(!store.has_grant(&roles, "Products", "Delete").await.unwrap());
    }

    #[tokio::test]
    async fn test_roles_follow_assignments() {
        let user_id = Uuid::new_v4();
        let store = InMemoryRoleStore::new()
            .with_role("Editor", [("Products", "Create")])
            .with_assignment(user_id, "Editor")
            .with_assignment(user_id, "Viewer");

        let roles = store.roles_of(user_id).await.unwrap();
        assert_eq!(roles.len(), 2);
        assert!(roles.contains("Editor"));
        assert!(roles.contains("Viewer"));
    }
}

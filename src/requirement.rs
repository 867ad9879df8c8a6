use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RequirementError;

/// Prefix shared by every derived policy name.
const POLICY_PREFIX: &str = "Permission";

/// A required capability, declared by a protected operation as a
/// `(resource, action)` pair.
///
/// Matching is exact and case-sensitive; there is no wildcard or
/// hierarchical form. Requirements are cheap value objects constructed per
/// authorization check and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionRequirement {
    resource: String,
    action: String,
}

impl PermissionRequirement {
    /// Build a requirement from a resource and an action name.
    ///
    /// Empty segments are rejected so a bad binding fails when the operation
    /// is declared, not as a silent deny during evaluation.
    pub fn new(
        resource: impl Into<String>,
        action: impl Into<String>,
    ) -> Result<Self, RequirementError> {
        let resource = resource.into();
        let action = action.into();

        if resource.is_empty() {
            return Err(RequirementError::EmptyResource);
        }
        if action.is_empty() {
            return Err(RequirementError::EmptyAction);
        }

        Ok(Self { resource, action })
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Stable lookup key for this requirement, e.g. `Permission:Products:Create`.
    pub fn policy_name(&self) -> String {
        format!("{}:{}:{}", POLICY_PREFIX, self.resource, self.action)
    }

    /// Parse a policy name produced by [`PermissionRequirement::policy_name`].
    ///
    /// The resource segment must not contain `:`; everything after the second
    /// separator is taken as the action.
    pub fn from_policy_name(name: &str) -> Result<Self, RequirementError> {
        let mut parts = name.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(POLICY_PREFIX), Some(resource), Some(action)) => {
                Self::new(resource, action)
                    .map_err(|_| RequirementError::MalformedPolicyName(name.to_string()))
            }
            _ => Err(RequirementError::MalformedPolicyName(name.to_string())),
        }
    }
}

impl fmt::Display for PermissionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", POLICY_PREFIX, self.resource, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_segments() {
        assert_eq!(
            PermissionRequirement::new("", "Create").unwrap_err(),
            RequirementError::EmptyResource
        );
        assert_eq!(
            PermissionRequirement::new("Products", "").unwrap_err(),
            RequirementError::EmptyAction
        );
    }

    #[test]
    fn test_policy_name_derivation() {
        let req = PermissionRequirement::new("Products", "Create").unwrap();
        assert_eq!(req.policy_name(), "Permission:Products:Create");
        assert_eq!(req.to_string(), req.policy_name());
    }

    #[test]
    fn test_policy_name_round_trip() {
        let req = PermissionRequirement::from_policy_name("Permission:Orders:View").unwrap();
        assert_eq!(req.resource(), "Orders");
        assert_eq!(req.action(), "View");
        assert_eq!(req.policy_name(), "Permission:Orders:View");
    }

    #[test]
    fn test_malformed_policy_names_rejected() {
        for name in [
            "Products:Create",
            "Role:Products:Create",
            "Permission:Products",
            "Permission::Create",
            "Permission:Products:",
            "",
        ] {
            assert!(
                matches!(
                    PermissionRequirement::from_policy_name(name),
                    Err(RequirementError::MalformedPolicyName(_))
                ),
                "expected {name:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_serializes_as_plain_fields() {
        let req = PermissionRequirement::new("Products", "Create").unwrap();
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"resource": "Products", "action": "Create"})
        );
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{AuthzError, AuthzResult, StoreError};
use crate::principal::Principal;
use crate::requirement::PermissionRequirement;
use crate::roles;
use crate::store::RolePermissionStore;

/// Terminal outcome of one authorization evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Granted,
    Denied,
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Decision::Granted)
    }
}

/// The decision engine; the sole place permission logic lives.
///
/// Evaluation order:
/// 1. unauthenticated principal -> deny, store untouched
/// 2. `SuperAdmin` role present -> grant, grant resolution skipped
/// 3. any assigned role holds the exact grant -> grant
/// 4. deny
///
/// The engine is stateless; all role and grant state lives behind the
/// injected [`RolePermissionStore`], and a decision reflects that state at
/// the instant of evaluation. Evaluation is read-only, issues at most two
/// store queries, and does not cache or retry.
#[derive(Clone)]
pub struct PolicyEngine {
    store: Arc<dyn RolePermissionStore>,
}

impl PolicyEngine {
    pub fn new(store: Arc<dyn RolePermissionStore>) -> Self {
        Self { store }
    }

    /// Evaluate one requirement for one principal.
    ///
    /// Store failures propagate as errors, never as decisions; the caller
    /// must treat them as a deny.
    pub async fn evaluate(
        &self,
        principal: &Principal,
        requirement: &PermissionRequirement,
    ) -> Result<Decision, StoreError> {
        let Some(user_id) = principal.user_id() else {
            tracing::debug!(
                policy = %requirement.policy_name(),
                "unauthenticated principal denied"
            );
            return Ok(Decision::Denied);
        };

        let role_names = self.store.roles_of(user_id).await?;

        if role_names.contains(roles::SUPER_ADMIN) {
            tracing::debug!(
                user_id = %user_id,
                policy = %requirement.policy_name(),
                "super admin bypass"
            );
            return Ok(Decision::Granted);
        }

        // No roles means no grants; skip the grant query.
        if role_names.is_empty() {
            tracing::debug!(
                user_id = %user_id,
                policy = %requirement.policy_name(),
                "no roles assigned"
            );
            return Ok(Decision::Denied);
        }

        let granted = self
            .store
            .has_grant(&role_names, requirement.resource(), requirement.action())
            .await?;

        if granted {
            tracing::debug!(
                user_id = %user_id,
                policy = %requirement.policy_name(),
                "role grant match"
            );
            Ok(Decision::Granted)
        } else {
            tracing::debug!(
                user_id = %user_id,
                policy = %requirement.policy_name(),
                "permission denied"
            );
            Ok(Decision::Denied)
        }
    }

    /// Enforcement helper for dispatchers: `?` on the result rejects the
    /// operation whenever the decision is not granted.
    pub async fn authorize(
        &self,
        principal: &Principal,
        requirement: &PermissionRequirement,
    ) -> AuthzResult<()> {
        match self.evaluate(principal, requirement).await? {
            Decision::Granted => Ok(()),
            Decision::Denied => Err(AuthzError::forbidden(requirement.policy_name())),
        }
    }
}

//! Authorization core for the storefront backend.
//!
//! This crate implements the RBAC read path that sits in front of protected
//! storefront operations:
//! - Declarative `(resource, action)` permission requirements
//! - Principal -> role -> grant resolution with a reserved super-admin bypass
//! - Fail-closed decision semantics: a missing identity or a store failure
//!   never authorizes
//!
//! Transport, credential issuance, and role administration live outside this
//! crate; a dispatcher calls [`PolicyEngine::authorize`] before executing a
//! protected operation and rejects on anything but success.

pub mod engine;
pub mod errors;
pub mod principal;
pub mod requirement;
pub mod store;

pub use engine::{Decision, PolicyEngine};
pub use errors::{AuthzError, AuthzResult, RequirementError, StoreError};
pub use principal::Principal;
pub use requirement::PermissionRequirement;
pub use store::{InMemoryRoleStore, RolePermissionStore};

/// Well-known role names
pub mod roles {
    /// Reserved bypass role: satisfies every requirement without explicit grants.
    pub const SUPER_ADMIN: &str = "SuperAdmin";
    pub const STORE_MANAGER: &str = "StoreManager";
    pub const EDITOR: &str = "Editor";
}

/// Well-known resource names
pub mod resources {
    pub const PRODUCTS: &str = "Products";
    pub const CATEGORIES: &str = "Categories";
    pub const ORDERS: &str = "Orders";
    pub const CONTACTS: &str = "Contacts";
    pub const LOCATIONS: &str = "Locations";
}

/// Well-known action names
pub mod actions {
    pub const CREATE: &str = "Create";
    pub const VIEW: &str = "View";
    pub const UPDATE: &str = "Update";
    pub const DELETE: &str = "Delete";
}

pub type AuthzResult<T> = Result<T, AuthzError>;

/// Error surfaced to the dispatcher that invoked an authorization check.
#[derive(thiserror::Error, Debug)]
pub enum AuthzError {
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("invalid permission binding: {0}")]
    Requirement(#[from] RequirementError),
    #[error("authorization store error")]
    Store(#[from] StoreError),
}

impl AuthzError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
}

/// Raised while constructing a permission binding.
///
/// Empty segments are a caller programming error; they surface here at
/// declaration time rather than as a silent deny during evaluation.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RequirementError {
    #[error("permission resource must not be empty")]
    EmptyResource,
    #[error("permission action must not be empty")]
    EmptyAction,
    #[error("malformed policy name: {0}")]
    MalformedPolicyName(String),
}

/// Failure reported by the role/permission store collaborator.
///
/// Store failures are never folded into a decision; callers treat them as a
/// deny.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("role store unavailable: {0}")]
    Unavailable(String),
    #[error("role store query failed")]
    Query(#[source] anyhow::Error),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn query(err: impl Into<anyhow::Error>) -> Self {
        Self::Query(err.into())
    }
}

use uuid::Uuid;

/// The actor an authorization decision is made for.
///
/// A principal is resolved per request from a verified identity assertion
/// and carries only the stable identifier the engine needs; everything else
/// about the user stays with the identity layer. It is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Principal {
    user_id: Option<Uuid>,
}

impl Principal {
    /// An unauthenticated caller. Every evaluation for it denies.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn authenticated(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Resolve a raw subject claim into a principal.
    ///
    /// A missing or malformed identifier resolves to the anonymous
    /// principal; an unresolvable identity is an expected input, not an
    /// error.
    pub fn from_subject(subject: Option<&str>) -> Self {
        match subject.and_then(|value| Uuid::parse_str(value).ok()) {
            Some(user_id) => Self::authenticated(user_id),
            None => Self::anonymous(),
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_claim_resolves() {
        let user_id = Uuid::new_v4();
        let principal = Principal::from_subject(Some(&user_id.to_string()));
        assert_eq!(principal.user_id(), Some(user_id));
        assert!(principal.is_authenticated());
    }

    #[test]
    fn test_missing_or_malformed_subject_is_anonymous() {
        assert_eq!(Principal::from_subject(None), Principal::anonymous());
        assert_eq!(
            Principal::from_subject(Some("not-an-identifier")),
            Principal::anonymous()
        );
        assert!(!Principal::from_subject(Some("")).is_authenticated());
    }
}

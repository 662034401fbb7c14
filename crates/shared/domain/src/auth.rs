//! Per-request authentication context.

use std::collections::BTreeSet;

use crate::constants::ROLE_ADMIN;
use crate::error::{DomainError, DomainResult};

/// Caller identity resolved from a bearer token.
///
/// Lives for a single request and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Token subject (user id in the issuing realm)
    pub subject: String,
    /// Human readable login name, when the token carries one
    pub username: Option<String>,
    /// Realm the token was issued for
    pub realm: String,
    /// Realm roles granted to the caller
    pub roles: BTreeSet<String>,
}

impl AuthContext {
    /// Create a context from resolved token data.
    pub fn new<I, S>(subject: impl Into<String>, realm: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subject: subject.into(),
            username: None,
            realm: realm.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach the caller's login name.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Check role membership.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Check if the caller holds the realm admin role.
    pub fn is_realm_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    /// Ensure the context was issued for `realm`.
    pub fn require_realm(&self, realm: &str) -> DomainResult<()> {
        if self.realm == realm {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }

    /// Ensure the caller holds the realm admin role.
    pub fn require_realm_admin(&self) -> DomainResult<()> {
        if self.is_realm_admin() {
            Ok(())
        } else {
            Err(DomainError::forbidden("Does not have realm admin role"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_among_other_roles() {
        let ctx = AuthContext::new("sub-1", "acme", ["offline_access", "admin", "uma_authorization"]);
        assert!(ctx.is_realm_admin());
        assert!(ctx.require_realm_admin().is_ok());
    }

    #[test]
    fn test_role_check_is_exact_membership() {
        let ctx = AuthContext::new("sub-1", "acme", ["administrator", "Admin"]);
        assert!(!ctx.is_realm_admin());
        assert!(matches!(
            ctx.require_realm_admin(),
            Err(DomainError::Forbidden(_))
        ));
    }

    #[test]
    fn test_require_realm() {
        let ctx = AuthContext::new("sub-1", "acme", Vec::<String>::new()).with_username("alice");
        assert!(ctx.require_realm("acme").is_ok());
        assert_eq!(ctx.require_realm("other"), Err(DomainError::Unauthorized));
        assert_eq!(ctx.username.as_deref(), Some("alice"));
    }
}

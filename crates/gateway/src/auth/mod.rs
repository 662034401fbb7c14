//! Caller authentication.
//!
//! The gateway never inspects token formats directly; it asks an
//! `Authenticator` to turn a bearer token into an `AuthContext`.

mod jwt;

use async_trait::async_trait;

use common::AppResult;
use domain::AuthContext;

pub use jwt::{AccessTokenClaims, JwtAuthenticator, RealmAccess};

/// Resolves bearer tokens issued by the identity platform.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve a token into the caller's context.
    ///
    /// Fails with `AppError::Unauthorized` (or `AppError::Jwt`) when the
    /// token is malformed, expired, or not issued for the served realm.
    async fn resolve(&self, token: &str) -> AppResult<AuthContext>;
}

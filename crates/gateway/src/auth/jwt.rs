//! JWT access token verification.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{AppError, AppResult};
use domain::AuthContext;

use super::Authenticator;
use crate::config::GatewayConfig;

/// Realm role grants as carried in the access token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Claims read from an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub iss: String,
    pub exp: u64,
    #[serde(default)]
    pub iat: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm_access: Option<RealmAccess>,
}

/// Authenticator verifying tokens signed by the identity platform.
pub struct JwtAuthenticator {
    key: DecodingKey,
    validation: Validation,
    realm: String,
}

impl JwtAuthenticator {
    /// Build from gateway configuration.
    ///
    /// Uses RS256 when a public key is configured, HS256 with the shared
    /// secret otherwise.
    pub fn from_config(config: &GatewayConfig) -> AppResult<Self> {
        let issuer = config.expected_issuer();

        if let Some(pem) = &config.jwt.public_key_pem {
            let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|e| AppError::internal(format!("Invalid JWT_PUBLIC_KEY: {}", e)))?;
            return Ok(Self::new(key, Algorithm::RS256, &issuer, &config.realm));
        }

        if let Some(secret) = &config.jwt.secret {
            let key = DecodingKey::from_secret(secret.as_bytes());
            return Ok(Self::new(key, Algorithm::HS256, &issuer, &config.realm));
        }

        Err(AppError::internal(
            "Either JWT_PUBLIC_KEY or JWT_SECRET must be set",
        ))
    }

    /// Create an authenticator for tokens issued by `issuer` for `realm`.
    pub fn new(key: DecodingKey, algorithm: Algorithm, issuer: &str, realm: &str) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        // Access tokens are audienced to the platform's own clients
        validation.validate_aud = false;

        Self {
            key,
            validation,
            realm: realm.to_string(),
        }
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn resolve(&self, token: &str) -> AppResult<AuthContext> {
        let data = decode::<AccessTokenClaims>(token, &self.key, &self.validation)?;
        let claims = data.claims;

        let roles = claims.realm_access.unwrap_or_default().roles;
        debug!(subject = %claims.sub, roles = roles.len(), "Resolved access token");

        let context = AuthContext::new(claims.sub, self.realm.clone(), roles);
        Ok(match claims.preferred_username {
            Some(username) => context.with_username(username),
            None => context,
        })
    }
}

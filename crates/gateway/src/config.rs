//! Gateway configuration.

use std::env;

use common::{DatabaseConfig, JwtConfig};
use domain::REALMS_PATH_SEGMENT;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Realm this gateway serves; never taken from caller input
    pub realm: String,
    /// User directory database
    pub database: DatabaseConfig,
    /// Access token verification
    pub jwt: JwtConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            realm: env::var("REALM").unwrap_or_else(|_| "master".to_string()),
            database: DatabaseConfig::from_env("DIRECTORY"),
            jwt: JwtConfig::from_env(),
        }
    }

    /// Issuer expected in access tokens for the served realm.
    pub fn expected_issuer(&self) -> String {
        format!(
            "{}{}{}",
            self.jwt.issuer_url.trim_end_matches('/'),
            REALMS_PATH_SEGMENT,
            self.realm
        )
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            realm: "master".to_string(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}

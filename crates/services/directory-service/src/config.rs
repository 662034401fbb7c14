//! Directory service configuration.

use common::DatabaseConfig;

/// Directory service configuration.
#[derive(Debug, Clone, Default)]
pub struct DirectoryServiceConfig {
    /// Connection settings for the directory database
    pub database: DatabaseConfig,
}

impl DirectoryServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `DIRECTORY_DATABASE_URL` takes precedence over `DATABASE_URL`.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env("DIRECTORY"),
        }
    }
}

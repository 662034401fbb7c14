//! Application state for dependency injection.

use std::sync::Arc;

use directory_service_lib::UserDirectory;

use crate::auth::Authenticator;
use crate::config::GatewayConfig;
use crate::service::{ConfirmationMailManager, ConfirmationMailService};

/// Application state shared across handlers.
///
/// Immutable after construction; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
    pub directory: Arc<dyn UserDirectory>,
    pub confirmation_mail: Arc<dyn ConfirmationMailService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state, wiring services on top of the directory.
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        directory: Arc<dyn UserDirectory>,
        config: GatewayConfig,
    ) -> Self {
        let confirmation_mail = Arc::new(ConfirmationMailManager::new(directory.clone()));
        Self {
            authenticator,
            directory,
            confirmation_mail,
            config,
        }
    }
}

//! Confirmation mail service - finds verified users still waiting on their
//! confirmation mail.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use common::{AppError, AppResult};
use directory_service_lib::UserDirectory;
use domain::{
    AuthContext, User, UserSummary, ATTR_CONFIRMATION_MAIL_SENT, CONFIRMATION_MAIL_NOT_SENT,
};

/// Confirmation mail use cases.
#[async_trait]
pub trait ConfirmationMailService: Send + Sync {
    /// List verified users of `realm` whose confirmation mail is marked as not sent.
    ///
    /// Requires `auth` to be valid for `realm` and to hold the realm admin role.
    /// Results keep the order the directory returned them in.
    async fn list_users_pending_confirmation_mail(
        &self,
        realm: &str,
        auth: &AuthContext,
    ) -> AppResult<Vec<UserSummary>>;
}

/// Concrete implementation of ConfirmationMailService using the user directory.
pub struct ConfirmationMailManager {
    directory: Arc<dyn UserDirectory>,
}

impl ConfirmationMailManager {
    /// Create new service instance with directory
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl ConfirmationMailService for ConfirmationMailManager {
    async fn list_users_pending_confirmation_mail(
        &self,
        realm: &str,
        auth: &AuthContext,
    ) -> AppResult<Vec<UserSummary>> {
        auth.require_realm(realm)?;
        auth.require_realm_admin()?;

        let users = self
            .directory
            .search_by_attribute(realm, ATTR_CONFIRMATION_MAIL_SENT, CONFIRMATION_MAIL_NOT_SENT)
            .await
            .map_err(|err| match err {
                AppError::DirectoryUnavailable(_) => err,
                other => {
                    warn!("Directory search failed: {}", other);
                    AppError::directory_unavailable(other.to_string())
                }
            })?;

        let found = users.len();
        let pending: Vec<UserSummary> = users
            .into_iter()
            .filter(User::is_pending_confirmation_mail)
            .map(UserSummary::from)
            .collect();

        debug!(
            realm,
            subject = %auth.subject,
            username = auth.username.as_deref().unwrap_or("-"),
            found,
            pending = pending.len(),
            "Listed users pending confirmation mail"
        );

        Ok(pending)
    }
}

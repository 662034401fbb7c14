//! User domain entity and its disclosed representation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ATTR_CONFIRMATION_MAIL_SENT, CONFIRMATION_MAIL_NOT_SENT};

/// User record as held by the directory.
///
/// The directory owns these records; the query side only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub realm_id: String,
    pub username: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    /// Custom string attributes, unique by key
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl User {
    /// Create a new enabled user without attributes
    pub fn new(id: impl Into<String>, realm_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            realm_id: realm_id.into(),
            username: username.into(),
            email: None,
            email_verified: false,
            first_name: None,
            last_name: None,
            enabled: true,
            created_at: Utc::now(),
            attributes: BTreeMap::new(),
        }
    }

    /// Look up a custom attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Exact string comparison of an attribute value
    pub fn has_attribute(&self, key: &str, value: &str) -> bool {
        self.attribute(key) == Some(value)
    }

    /// Check if the user's email has been verified
    pub fn is_email_verified(&self) -> bool {
        self.email_verified
    }

    /// Verified email, but the confirmation mail is still marked as not sent
    pub fn is_pending_confirmation_mail(&self) -> bool {
        self.is_email_verified()
            && self.has_attribute(ATTR_CONFIRMATION_MAIL_SENT, CONFIRMATION_MAIL_NOT_SENT)
    }
}

/// User representation (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Directory user identifier
    pub id: String,
    /// Login name
    pub username: String,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the email address has been verified
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Whether the account is enabled
    pub enabled: bool,
    /// Account creation time in epoch milliseconds
    pub created_timestamp: i64,
    /// Custom attributes
    pub attributes: BTreeMap<String, String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            email_verified: user.email_verified,
            first_name: user.first_name,
            last_name: user.last_name,
            enabled: user.enabled,
            created_timestamp: user.created_at.timestamp_millis(),
            attributes: user.attributes,
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary::from(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_user(mail_sent: &str, verified: bool) -> User {
        let mut user = User::new("u-1", "acme", "alice");
        user.email = Some("alice@example.com".to_string());
        user.email_verified = verified;
        user.attributes
            .insert(ATTR_CONFIRMATION_MAIL_SENT.to_string(), mail_sent.to_string());
        user
    }

    #[test]
    fn test_pending_requires_exact_false_and_verified_email() {
        assert!(pending_user("false", true).is_pending_confirmation_mail());
        assert!(!pending_user("false", false).is_pending_confirmation_mail());
        assert!(!pending_user("true", true).is_pending_confirmation_mail());
        assert!(!pending_user("False", true).is_pending_confirmation_mail());
        assert!(!pending_user(" false", true).is_pending_confirmation_mail());
        assert!(!User::new("u-2", "acme", "bob").is_pending_confirmation_mail());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let user = pending_user("false", true);
        let created = user.created_at.timestamp_millis();
        let summary = UserSummary::from(&user);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["id"], "u-1");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["emailVerified"], true);
        assert_eq!(json["enabled"], true);
        assert_eq!(json["createdTimestamp"], created);
        assert_eq!(json["attributes"]["confirmation_mail_sent"], "false");
        assert!(json.get("firstName").is_none());
        assert!(json.get("realmId").is_none());
    }
}

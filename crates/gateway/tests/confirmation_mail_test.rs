//! Confirmation mail service tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use common::AppError;
use directory_service_lib::repository::MockUserDirectory;
use domain::{AuthContext, User, UserSummary};
use gateway_lib::service::{ConfirmationMailManager, ConfirmationMailService};

const REALM: &str = "acme";

fn create_test_user(id: &str, mail_sent: Option<&str>, verified: bool) -> User {
    let mut user = User::new(id, REALM, format!("user-{}", id));
    user.email = Some(format!("{}@example.com", id));
    user.email_verified = verified;
    user.created_at = Utc::now();
    if let Some(value) = mail_sent {
        user.attributes
            .insert("confirmation_mail_sent".to_string(), value.to_string());
    }
    user
}

fn admin() -> AuthContext {
    AuthContext::new("admin-sub", REALM, ["admin"])
}

fn ids(summaries: &[UserSummary]) -> Vec<&str> {
    summaries.iter().map(|s| s.id.as_str()).collect()
}

#[tokio::test]
async fn test_returns_only_verified_users_with_mail_not_sent() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_search_by_attribute()
        .with(eq(REALM), eq("confirmation_mail_sent"), eq("false"))
        .times(1)
        .returning(|_, _, _| {
            Ok(vec![
                create_test_user("u1", Some("false"), true),
                create_test_user("u2", Some("false"), false),
            ])
        });

    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &admin())
        .await
        .unwrap();

    assert_eq!(ids(&result), vec!["u1"]);
    assert!(result[0].email_verified);
    assert_eq!(
        result[0].attributes.get("confirmation_mail_sent").map(String::as_str),
        Some("false")
    );
}

#[tokio::test]
async fn test_mixed_directory_returns_exactly_first_user() {
    // U3 would never come back from a correct directory; guard the invariant anyway
    let mut directory = MockUserDirectory::new();
    directory.expect_search_by_attribute().returning(|_, _, _| {
        Ok(vec![
            create_test_user("u1", Some("false"), true),
            create_test_user("u2", Some("false"), false),
            create_test_user("u3", Some("true"), true),
            create_test_user("u4", Some("False"), true),
            create_test_user("u5", None, true),
        ])
    });

    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &admin())
        .await
        .unwrap();

    assert_eq!(ids(&result), vec!["u1"]);
}

#[tokio::test]
async fn test_empty_directory_returns_empty_list() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_search_by_attribute()
        .returning(|_, _, _| Ok(vec![]));

    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &admin())
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_preserves_directory_order() {
    let mut directory = MockUserDirectory::new();
    directory.expect_search_by_attribute().returning(|_, _, _| {
        Ok(vec![
            create_test_user("zed", Some("false"), true),
            create_test_user("amy", Some("false"), false),
            create_test_user("bob", Some("false"), true),
            create_test_user("kim", Some("false"), true),
        ])
    });

    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &admin())
        .await
        .unwrap();

    assert_eq!(ids(&result), vec!["zed", "bob", "kim"]);
}

#[tokio::test]
async fn test_repeated_requests_return_same_result() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_search_by_attribute()
        .times(2)
        .returning(|_, _, _| {
            Ok(vec![
                create_test_user("u1", Some("false"), true),
                create_test_user("u2", Some("false"), true),
            ])
        });

    let service = ConfirmationMailManager::new(Arc::new(directory));
    let first = service
        .list_users_pending_confirmation_mail(REALM, &admin())
        .await
        .unwrap();
    let second = service
        .list_users_pending_confirmation_mail(REALM, &admin())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_admin_among_other_roles_succeeds() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_search_by_attribute()
        .times(1)
        .returning(|_, _, _| Ok(vec![create_test_user("u1", Some("false"), true)]));

    let auth = AuthContext::new(
        "admin-sub",
        REALM,
        ["offline_access", "uma_authorization", "admin", "support"],
    );
    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &auth)
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn test_non_admin_is_forbidden_without_directory_access() {
    let mut directory = MockUserDirectory::new();
    directory.expect_search_by_attribute().never();

    let auth = AuthContext::new("user-sub", REALM, ["offline_access", "user"]);
    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &auth)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn test_context_from_other_realm_is_unauthorized() {
    let mut directory = MockUserDirectory::new();
    directory.expect_search_by_attribute().never();

    let auth = AuthContext::new("admin-sub", "other", ["admin"]);
    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &auth)
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn test_directory_failure_is_unavailable() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_search_by_attribute()
        .times(1)
        .returning(|_, _, _| Err(AppError::directory_unavailable("connection refused")));

    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &admin())
        .await;

    assert!(matches!(result, Err(AppError::DirectoryUnavailable(_))));
}

#[tokio::test]
async fn test_other_directory_errors_surface_as_unavailable() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_search_by_attribute()
        .returning(|_, _, _| Err(AppError::internal("driver panicked")));

    let service = ConfirmationMailManager::new(Arc::new(directory));
    let result = service
        .list_users_pending_confirmation_mail(REALM, &admin())
        .await;

    assert!(matches!(result, Err(AppError::DirectoryUnavailable(_))));
}

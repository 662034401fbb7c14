//! User directory: attribute search over realm users.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Query, SelectStatement},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Statement,
};
use tracing::{debug, warn};

use super::entities::user::{self, Entity as UserEntity};
use super::entities::user_attribute::{self, Entity as UserAttributeEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only directory of realm users.
///
/// Failures surface as `AppError::DirectoryUnavailable`; a search never
/// returns partial results.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Every user in `realm` whose attribute `key` equals `value` exactly
    async fn search_by_attribute(&self, realm: &str, key: &str, value: &str)
        -> AppResult<Vec<User>>;

    /// Check that the directory is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed implementation of UserDirectory
pub struct DirectoryStore {
    db: DatabaseConnection,
}

impl DirectoryStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_attributes(
        &self,
        matched_users: SelectStatement,
    ) -> Result<HashMap<String, BTreeMap<String, String>>, DbErr> {
        let rows = UserAttributeEntity::find()
            .filter(user_attribute::Column::UserId.in_subquery(matched_users))
            .all(&self.db)
            .await?;

        let mut by_user: HashMap<String, BTreeMap<String, String>> = HashMap::new();
        for row in rows {
            by_user
                .entry(row.user_id)
                .or_default()
                .insert(row.name, row.value);
        }
        Ok(by_user)
    }
}

/// Ids of the users in `realm` carrying attribute `key` with exactly `value`.
///
/// Both queries of a search filter through this subquery, so the bind
/// parameter count stays constant however many users match.
fn matching_user_ids(realm: &str, key: &str, value: &str) -> SelectStatement {
    let with_attribute = Query::select()
        .column(user_attribute::Column::UserId)
        .from(UserAttributeEntity)
        .and_where(user_attribute::Column::Name.eq(key))
        .and_where(user_attribute::Column::Value.eq(value))
        .to_owned();

    Query::select()
        .column(user::Column::Id)
        .from(UserEntity)
        .and_where(user::Column::RealmId.eq(realm))
        .and_where(user::Column::Id.in_subquery(with_attribute))
        .to_owned()
}

fn unavailable(err: DbErr) -> AppError {
    warn!("Directory query failed: {}", err);
    AppError::directory_unavailable(err.to_string())
}

#[async_trait]
impl UserDirectory for DirectoryStore {
    async fn search_by_attribute(
        &self,
        realm: &str,
        key: &str,
        value: &str,
    ) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Id.in_subquery(matching_user_ids(realm, key, value)))
            .order_by_asc(user::Column::Username)
            .all(&self.db)
            .await
            .map_err(unavailable)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let mut attributes = self
            .load_attributes(matching_user_ids(realm, key, value))
            .await
            .map_err(unavailable)?;

        debug!(realm, key, count = models.len(), "Directory attribute search");

        Ok(models
            .into_iter()
            .map(|model| {
                let attrs = attributes.remove(&model.id).unwrap_or_default();
                model.into_domain(attrs)
            })
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}

/*
 * Responsibility
 * - read-only access to the users table for the auth gate
 * - the projection never selects "password"
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::services::accounts::AccountStore;

/// Account projection attached to authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    pub email: String,
    #[sqlx(rename = "userName")]
    pub user_name: String,
    #[sqlx(rename = "isActive")]
    pub is_active: bool,
    #[sqlx(rename = "isAdmin")]
    pub is_admin: bool,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub async fn get(db: &PgPool, account_id: Uuid) -> Result<Option<Account>, RepoError> {
    let row = sqlx::query_as::<_, Account>(
        r#"
        SELECT "userId", email, "userName", "isActive", "isAdmin", "createdAt"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// PostgreSQL-backed account store.
#[derive(Clone, Debug)]
pub struct PgAccountStore {
    db: PgPool,
}

impl PgAccountStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepoError> {
        get(&self.db, id).await
    }
}

//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::debug;
use uuid::Uuid;

use portal_core::domain::entities::User;
use portal_core::errors::AuthError;
use portal_core::repositories::UserRepository;

/// MySQL duplicate-key error number.
const ER_DUP_ENTRY: &str = "1062";

pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, AuthError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| AuthError::storage(format!("read id: {e}")))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| AuthError::storage(format!("invalid user id: {e}")))?,
            mobile: row
                .try_get("mobile")
                .map_err(|e| AuthError::storage(format!("read mobile: {e}")))?,
            nick_name: row
                .try_get("nick_name")
                .map_err(|e| AuthError::storage(format!("read nick_name: {e}")))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| AuthError::storage(format!("read password_hash: {e}")))?,
            last_login: row
                .try_get::<DateTime<Utc>, _>("last_login")
                .map_err(|e| AuthError::storage(format!("read last_login: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| AuthError::storage(format!("read created_at: {e}")))?,
        })
    }

    fn map_insert_error(e: sqlx::Error) -> AuthError {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some(ER_DUP_ENTRY) {
                return AuthError::DuplicateUser;
            }
        }
        AuthError::storage(format!("insert failed: {e}"))
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, AuthError> {
        let query = r#"
            SELECT id, mobile, nick_name, password_hash, last_login, created_at
            FROM users
            WHERE mobile = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(mobile)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::storage(format!("query failed: {e}")))?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, AuthError> {
        let query = r#"
            INSERT INTO users (id, mobile, nick_name, password_hash, last_login, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.mobile)
            .bind(&user.nick_name)
            .bind(&user.password_hash)
            .bind(user.last_login)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;

        debug!(user_id = %user.id, "user row inserted");
        Ok(user)
    }

    async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), AuthError> {
        let result = sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
            .bind(at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::storage(format!("update failed: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }
        Ok(())
    }
}

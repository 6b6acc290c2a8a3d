//! UserRepository - database access for user accounts.

use chrono::Utc;
use sqlx::{Error, SqlitePool};

use super::{Create, Read};
use crate::dtos::CreateUserDTO;
use crate::entities::{User, UserStatus};

pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Find a user by exact e-mail match; e-mails are unique.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, email, password, status, kind, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    /// `data.password` must already be hashed; registration enables the
    /// account directly.
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        let now = Utc::now();
        let status = UserStatus::Enabled;

        let result = sqlx::query(
            "INSERT INTO users (email, password, status, kind, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&data.email)
        .bind(&data.password)
        .bind(status)
        .bind(data.kind)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(User {
            user_id: result.last_insert_rowid(),
            email: data.email.clone(),
            password: data.password.clone(),
            status,
            kind: data.kind,
            created_at: now,
        })
    }
}

impl Read<User, i64> for UserRepository {
    async fn read(&self, id: &i64) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, email, password, status, kind, created_at FROM users WHERE user_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

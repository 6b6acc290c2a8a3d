//! GroupRepository - database access for search groups and their member set.

use chrono::Utc;
use sqlx::{Error, SqlitePool};

use super::{Create, Read, Update};
use crate::dtos::{CreateGroupDTO, UpdateGroupDTO};
use crate::entities::{Group, GroupStatus};

const COLUMNS: &str = "group_id, creator_id, name, description, status, created_at";

pub struct GroupRepository {
    connection_pool: SqlitePool,
}

impl GroupRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// A search user owns at most one group.
    pub async fn find_by_creator(&self, creator_id: &i64) -> Result<Option<Group>, Error> {
        let group = sqlx::query_as::<_, Group>(&format!(
            "SELECT {COLUMNS} FROM search_groups WHERE creator_id = ?"
        ))
        .bind(creator_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(group)
    }

    /// Add a user to the member set; inserting an existing member is a no-op.
    pub async fn add_member(&self, group_id: &i64, user_id: &i64) -> Result<(), Error> {
        sqlx::query(
            "INSERT OR IGNORE INTO group_members (group_id, user_id, added_at) VALUES (?, ?, ?)",
        )
        .bind(group_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    pub async fn is_member(&self, group_id: &i64, user_id: &i64) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM group_members WHERE group_id = ? AND user_id = ?",
        )
        .bind(group_id)
        .bind(user_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }
}

impl Create<Group, CreateGroupDTO> for GroupRepository {
    async fn create(&self, data: &CreateGroupDTO) -> Result<Group, Error> {
        let now = Utc::now();
        let status = GroupStatus::Opened;

        let result = sqlx::query(
            "INSERT INTO search_groups (creator_id, name, description, status, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(data.creator_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(status)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Group {
            group_id: result.last_insert_rowid(),
            creator_id: data.creator_id,
            name: data.name.clone(),
            description: data.description.clone(),
            status,
            created_at: now,
        })
    }
}

impl Read<Group, i64> for GroupRepository {
    async fn read(&self, id: &i64) -> Result<Option<Group>, Error> {
        let group = sqlx::query_as::<_, Group>(&format!(
            "SELECT {COLUMNS} FROM search_groups WHERE group_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(group)
    }
}

impl Update<Group, UpdateGroupDTO, i64> for GroupRepository {
    async fn update(&self, id: &i64, data: &UpdateGroupDTO) -> Result<Group, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let Some(status) = data.status else {
            return Ok(current);
        };

        sqlx::query("UPDATE search_groups SET status = ? WHERE group_id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

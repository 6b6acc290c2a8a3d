//! AnnouncementRepository - database access for announcements and their
//! candidate set.

use chrono::Utc;
use sqlx::{Error, SqlitePool};

use super::{Create, Read, Update};
use crate::dtos::{CreateAnnouncementDTO, UpdateAnnouncementDTO};
use crate::entities::{Announcement, AnnouncementStatus};

const COLUMNS: &str =
    "announcement_id, creator_id, title, description, status, created_at";

pub struct AnnouncementRepository {
    connection_pool: SqlitePool,
}

impl AnnouncementRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// A proposal user owns at most one announcement.
    pub async fn find_by_creator(&self, creator_id: &i64) -> Result<Option<Announcement>, Error> {
        let announcement = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {COLUMNS} FROM announcements WHERE creator_id = ?"
        ))
        .bind(creator_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(announcement)
    }

    /// Add a user to the candidate set; inserting an existing candidate is a
    /// no-op.
    pub async fn add_candidate(&self, announcement_id: &i64, user_id: &i64) -> Result<(), Error> {
        sqlx::query(
            "INSERT OR IGNORE INTO announcement_candidates (announcement_id, user_id, added_at) VALUES (?, ?, ?)",
        )
        .bind(announcement_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    pub async fn is_candidate(&self, announcement_id: &i64, user_id: &i64) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM announcement_candidates WHERE announcement_id = ? AND user_id = ?",
        )
        .bind(announcement_id)
        .bind(user_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count > 0)
    }
}

impl Create<Announcement, CreateAnnouncementDTO> for AnnouncementRepository {
    async fn create(&self, data: &CreateAnnouncementDTO) -> Result<Announcement, Error> {
        let now = Utc::now();
        let status = AnnouncementStatus::Enabled;

        let result = sqlx::query(
            "INSERT INTO announcements (creator_id, title, description, status, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(data.creator_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(status)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Announcement {
            announcement_id: result.last_insert_rowid(),
            creator_id: data.creator_id,
            title: data.title.clone(),
            description: data.description.clone(),
            status,
            created_at: now,
        })
    }
}

impl Read<Announcement, i64> for AnnouncementRepository {
    async fn read(&self, id: &i64) -> Result<Option<Announcement>, Error> {
        let announcement = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {COLUMNS} FROM announcements WHERE announcement_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(announcement)
    }
}

impl Update<Announcement, UpdateAnnouncementDTO, i64> for AnnouncementRepository {
    async fn update(&self, id: &i64, data: &UpdateAnnouncementDTO) -> Result<Announcement, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        let Some(status) = data.status else {
            return Ok(current);
        };

        sqlx::query("UPDATE announcements SET status = ? WHERE announcement_id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

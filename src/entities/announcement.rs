//! Announcement entity - a rental listing published by a proposal user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::AnnouncementStatus;

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Announcement {
    pub announcement_id: i64,
    pub creator_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: AnnouncementStatus,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    /// An announcement takes invitations only while `enabled`; `filled` and
    /// `disabled` close it.
    pub fn is_available(&self) -> bool {
        self.status == AnnouncementStatus::Enabled
    }
}

//! Group entity - a search party of users hunting for a place together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::GroupStatus;

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Group {
    pub group_id: i64,
    pub creator_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: GroupStatus,
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn is_available(&self) -> bool {
        self.status == GroupStatus::Opened
    }
}

//! Announcement DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{Announcement, AnnouncementStatus};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnnouncementDTO {
    pub announcement_id: Option<i64>,
    pub creator_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<AnnouncementStatus>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Announcement> for AnnouncementDTO {
    fn from(value: Announcement) -> Self {
        Self {
            announcement_id: Some(value.announcement_id),
            creator_id: Some(value.creator_id),
            title: Some(value.title),
            description: Some(value.description.unwrap_or_default()),
            status: Some(value.status),
            created_at: Some(value.created_at),
        }
    }
}

/// Repository-facing creation DTO, built by the service from the request
/// body and the authenticated creator.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAnnouncementDTO {
    pub creator_id: i64,
    #[validate(length(min = 3, max = 120, message = "must be 3 to 120 characters"))]
    pub title: String,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
}

/// Partial update; only the status can change through the API.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateAnnouncementDTO {
    pub status: Option<AnnouncementStatus>,
}

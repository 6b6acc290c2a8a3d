//! Group DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{Group, GroupStatus};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupDTO {
    pub group_id: Option<i64>,
    pub creator_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<GroupStatus>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Group> for GroupDTO {
    fn from(value: Group) -> Self {
        Self {
            group_id: Some(value.group_id),
            creator_id: Some(value.creator_id),
            name: Some(value.name),
            description: Some(value.description.unwrap_or_default()),
            status: Some(value.status),
            created_at: Some(value.created_at),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateGroupDTO {
    pub creator_id: i64,
    #[validate(length(min = 3, max = 120, message = "must be 3 to 120 characters"))]
    pub name: String,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateGroupDTO {
    pub status: Option<GroupStatus>,
}

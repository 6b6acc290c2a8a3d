//! Query-parameter DTOs.

use serde::{Deserialize, Serialize};

use crate::entities::{InvitableKind, InvitationStatus, SourceType};

const MAX_PER_PAGE: u32 = 100;

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

/// `?page=&per_page=` pagination parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl PageQuery {
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page.clamp(1, MAX_PER_PAGE))
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.max(1) - 1) * self.limit()
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

/// `GET /users/{id}/invitations?type=&status=&page=&per_page=`.
#[derive(Deserialize, Debug)]
pub struct RecipientInvitationsQuery {
    #[serde(rename = "type")]
    pub kind: Option<InvitableKind>,
    pub status: Option<InvitationStatus>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl RecipientInvitationsQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// `POST /users/{id}/invitations?type=announcement|group`.
#[derive(Deserialize, Debug)]
pub struct JoinRequestQuery {
    #[serde(rename = "type")]
    pub kind: InvitableKind,
}

/// Filter handed to the invitation repository's search.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvitationFilter {
    pub recipient_id: Option<i64>,
    pub invitable_kind: Option<InvitableKind>,
    pub status: Option<InvitationStatus>,
    pub source_type: Option<SourceType>,
}

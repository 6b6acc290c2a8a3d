//! Invitation DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{Invitation, InvitableKind, InvitationStatus, SourceType};

/// Wire representation of an invitation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InvitationDTO {
    pub invitation_id: i64,
    pub invitable_kind: InvitableKind,
    pub invitable_id: i64,
    pub recipient_id: i64,
    pub source_type: SourceType,
    pub status: InvitationStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Invitation> for InvitationDTO {
    fn from(value: Invitation) -> Self {
        Self {
            invitation_id: value.invitation_id,
            invitable_kind: value.invitable_kind,
            invitable_id: value.invitable_id,
            recipient_id: value.recipient_id,
            source_type: value.source_type,
            status: value.status,
            message: value.message,
            created_at: value.created_at,
        }
    }
}

/// Repository-facing creation DTO; validated by the manager before insert.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateInvitationDTO {
    pub invitable_kind: InvitableKind,
    pub invitable_id: i64,
    pub recipient_id: i64,
    pub source_type: SourceType,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub message: Option<String>,
}

/// Body of `POST /announcements/{id}/invitations` and the group equivalent:
/// the creator invites a search user.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InviteUserDTO {
    pub recipient_id: i64,
    pub message: Option<String>,
}

/// Body of `POST /users/{id}/invitations`: a search user asks to join an
/// invitable.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JoinRequestDTO {
    pub invitable_id: i64,
    pub message: Option<String>,
}

/// Body of `POST /invitations/{id}/answer`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnswerInvitationDTO {
    pub accepted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_message_is_rejected() {
        let dto = CreateInvitationDTO {
            invitable_kind: InvitableKind::Announcement,
            invitable_id: 1,
            recipient_id: 2,
            source_type: SourceType::Search,
            message: Some("x".repeat(501)),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn missing_message_is_fine() {
        let dto = CreateInvitationDTO {
            invitable_kind: InvitableKind::Group,
            invitable_id: 1,
            recipient_id: 2,
            source_type: SourceType::Invitable,
            message: None,
        };
        assert!(dto.validate().is_ok());
    }
}

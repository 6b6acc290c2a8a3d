//! Invitation entity and its state machine.
//!
//! An invitation links one invitable to one recipient user. It starts in
//! `waiting` and moves exactly once to `accepted` or `refused`; business-rule
//! validation (availability, recipient eligibility) belongs to the manager,
//! not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{InvitableKind, InvitationStatus, SourceType};

/// Returned when `answer` is called on an invitation that already left the
/// `waiting` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invitation is already {status:?}")]
pub struct AlreadyAnswered {
    pub status: InvitationStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Invitation {
    pub invitation_id: i64,
    pub invitable_kind: InvitableKind,
    pub invitable_id: i64,
    pub recipient_id: i64,
    pub source_type: SourceType,
    pub status: InvitationStatus,
    pub message: Option<String>,
    /// Optimistic row version, bumped on every status change.
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Apply the answer transition in memory.
    ///
    /// Fails if the invitation is no longer `waiting`; a second call must
    /// never silently succeed, whatever value is passed.
    pub fn answer(&mut self, accept: bool) -> Result<(), AlreadyAnswered> {
        if self.status != InvitationStatus::Waiting {
            return Err(AlreadyAnswered {
                status: self.status,
            });
        }
        self.status = if accept {
            InvitationStatus::Accepted
        } else {
            InvitationStatus::Refused
        };
        Ok(())
    }

    pub fn is_waiting(&self) -> bool {
        self.status == InvitationStatus::Waiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waiting_invitation() -> Invitation {
        Invitation {
            invitation_id: 1,
            invitable_kind: InvitableKind::Announcement,
            invitable_id: 10,
            recipient_id: 2,
            source_type: SourceType::Invitable,
            status: InvitationStatus::Waiting,
            message: None,
            version: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn accept_moves_waiting_to_accepted() {
        let mut invitation = waiting_invitation();
        invitation.answer(true).unwrap();
        assert_eq!(invitation.status, InvitationStatus::Accepted);
    }

    #[test]
    fn refuse_moves_waiting_to_refused() {
        let mut invitation = waiting_invitation();
        invitation.answer(false).unwrap();
        assert_eq!(invitation.status, InvitationStatus::Refused);
    }

    #[test]
    fn second_answer_fails_regardless_of_value() {
        let mut invitation = waiting_invitation();
        invitation.answer(true).unwrap();

        let err = invitation.answer(false).unwrap_err();
        assert_eq!(err.status, InvitationStatus::Accepted);
        let err = invitation.answer(true).unwrap_err();
        assert_eq!(err.status, InvitationStatus::Accepted);
        assert_eq!(invitation.status, InvitationStatus::Accepted);
    }

    #[test]
    fn refused_invitation_cannot_be_accepted_later() {
        let mut invitation = waiting_invitation();
        invitation.answer(false).unwrap();
        assert!(invitation.answer(true).is_err());
        assert_eq!(invitation.status, InvitationStatus::Refused);
    }
}

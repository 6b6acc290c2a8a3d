//! InvitationPolicy - every authorization predicate for the invitation
//! endpoints, in one place.
//!
//! The policy is pure: it looks only at the data it is handed and performs
//! no I/O, so every rule is unit-testable. Handlers load the subjects,
//! establish existence (404) first, then ask the policy (403).

use crate::entities::{Invitable, InvitableEntity, Invitation, SourceType, User, UserKind};

#[derive(Debug, Default)]
pub struct InvitationPolicy;

impl InvitationPolicy {
    /// Only the creator may list the invitations targeting their invitable.
    pub fn can_list_invitable(&self, actor: &User, invitable: &InvitableEntity) -> bool {
        invitable.creator_id() == actor.user_id
    }

    /// Recipient-scoped endpoints (`/users/{id}/invitations...`) are
    /// self-only.
    pub fn can_act_for_recipient(&self, actor: &User, recipient_id: i64) -> bool {
        actor.user_id == recipient_id
    }

    /// The invitable's creator invites a search user (source `search`).
    ///
    /// Self-invites and targets already involved with the invitable
    /// (creator, candidate or member) are denied here rather than in
    /// handler code.
    pub fn can_invite(
        &self,
        actor: &User,
        target: &User,
        invitable: &InvitableEntity,
        target_involved: bool,
    ) -> bool {
        invitable.creator_id() == actor.user_id
            && target.kind == UserKind::Search
            && target.user_id != actor.user_id
            && !target_involved
    }

    /// A search user asks to join an invitable (source `invitable`).
    pub fn can_request_join(
        &self,
        actor: &User,
        invitable: &InvitableEntity,
        involved: bool,
    ) -> bool {
        actor.kind == UserKind::Search && invitable.creator_id() != actor.user_id && !involved
    }

    /// Who answers depends on the direction: the creator answers `search`
    /// invitations, the recipient answers `invitable` ones.
    pub fn can_answer(
        &self,
        actor: &User,
        invitation: &Invitation,
        invitable: &InvitableEntity,
    ) -> bool {
        match invitation.source_type {
            SourceType::Search => invitable.creator_id() == actor.user_id,
            SourceType::Invitable => invitation.recipient_id == actor.user_id,
        }
    }

    /// The recipient may always delete; the creator may delete as long as
    /// the invitable still resolves.
    pub fn can_delete(
        &self,
        actor: &User,
        invitation: &Invitation,
        invitable: Option<&InvitableEntity>,
    ) -> bool {
        invitation.recipient_id == actor.user_id
            || invitable.is_some_and(|i| i.creator_id() == actor.user_id)
    }
}

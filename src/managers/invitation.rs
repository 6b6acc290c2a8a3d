//! InvitationManager - the one place invitation business rules are
//! enforced.
//!
//! Handlers load subjects and check authorization; the manager validates
//! payloads, guards availability and recipient eligibility, drives the
//! state machine, and persists. It never notifies.

use sqlx::SqlitePool;
use tracing::{debug, instrument, warn};
use validator::Validate;

use crate::core::InvitationError;
use crate::dtos::{CreateInvitationDTO, InvitationFilter, Page, PageQuery};
use crate::entities::{
    Invitable, InvitableEntity, InvitableKind, Invitation, SourceType, User,
};
use crate::repositories::{
    AnnouncementRepository, Create, Delete, GroupRepository, InvitationRepository, Read,
};

pub struct InvitationManager {
    invitation: InvitationRepository,
    announcement: AnnouncementRepository,
    group: GroupRepository,
}

impl InvitationManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            invitation: InvitationRepository::new(pool.clone()),
            announcement: AnnouncementRepository::new(pool.clone()),
            group: GroupRepository::new(pool),
        }
    }

    /// Resolve an invitable reference `(kind, id)` to the loaded entity.
    pub async fn load_invitable(
        &self,
        kind: InvitableKind,
        id: i64,
    ) -> Result<InvitableEntity, InvitationError> {
        let invitable = match kind {
            InvitableKind::Announcement => self
                .announcement
                .read(&id)
                .await?
                .map(InvitableEntity::Announcement),
            InvitableKind::Group => self.group.read(&id).await?.map(InvitableEntity::Group),
        };

        invitable.ok_or(InvitationError::EntityNotFound("invitable"))
    }

    /// Whether a user is already tied to the invitable: its creator, or a
    /// member of its invitee set.
    pub async fn is_involved(
        &self,
        invitable: &InvitableEntity,
        user_id: i64,
    ) -> Result<bool, InvitationError> {
        if invitable.creator_id() == user_id {
            return Ok(true);
        }
        let involved = match invitable {
            InvitableEntity::Announcement(a) => {
                self.announcement
                    .is_candidate(&a.announcement_id, &user_id)
                    .await?
            }
            InvitableEntity::Group(g) => self.group.is_member(&g.group_id, &user_id).await?,
        };
        Ok(involved)
    }

    /// Create an invitation after checking every business precondition.
    #[instrument(skip(self, invitable, recipient), fields(kind = ?invitable.kind(), invitable_id = invitable.id(), recipient_id = recipient.user_id, source = ?source_type))]
    pub async fn create(
        &self,
        invitable: &InvitableEntity,
        recipient: &User,
        source_type: SourceType,
        message: Option<String>,
    ) -> Result<Invitation, InvitationError> {
        let dto = CreateInvitationDTO {
            invitable_kind: invitable.kind(),
            invitable_id: invitable.id(),
            recipient_id: recipient.user_id,
            source_type,
            message,
        };
        dto.validate()?;

        if !invitable.is_available() {
            warn!("Invitable is not available");
            return Err(InvitationError::UnavailableInvitable);
        }

        if !recipient.is_enabled() {
            warn!("Recipient account is not enabled");
            return Err(InvitationError::InvalidRecipient(
                "recipient account is not enabled",
            ));
        }

        if self
            .invitation
            .has_waiting_invitation(&dto.recipient_id, dto.invitable_kind, &dto.invitable_id)
            .await?
        {
            warn!("A waiting invitation already exists");
            return Err(InvitationError::InvalidParameter(
                "a waiting invitation already exists for this recipient",
            ));
        }

        let invitation = self.invitation.create(&dto).await?;
        debug!(invitation_id = invitation.invitation_id, "invitation created");
        Ok(invitation)
    }

    pub async fn read(&self, id: i64) -> Result<Invitation, InvitationError> {
        self.invitation
            .read(&id)
            .await?
            .ok_or(InvitationError::EntityNotFound("invitation"))
    }

    /// Invitations targeting one invitable, newest first.
    pub async fn list_by_invitable(
        &self,
        kind: InvitableKind,
        invitable_id: i64,
        page: &PageQuery,
    ) -> Result<Page<Invitation>, InvitationError> {
        let (items, total) = self
            .invitation
            .find_page_by_invitable(kind, &invitable_id, page.limit(), page.offset())
            .await?;
        Ok(Page::new(items, page.page, page.per_page, total))
    }

    /// Filtered search; filters translate directly to the repository, no
    /// business logic here. An empty filter lists every invitation; a
    /// recipient-only filter is the per-recipient list.
    pub async fn search(
        &self,
        filter: &InvitationFilter,
        page: &PageQuery,
    ) -> Result<Page<Invitation>, InvitationError> {
        let (items, total) = self
            .invitation
            .search(filter, page.limit(), page.offset())
            .await?;
        Ok(Page::new(items, page.page, page.per_page, total))
    }

    /// Answer an invitation exactly once.
    ///
    /// The in-memory state machine rejects non-waiting invitations; the
    /// conditional UPDATE on `(status, version)` rejects the loser of a
    /// concurrent race. On accept, the recipient joins the invitable's
    /// invitee set.
    #[instrument(skip(self, invitation, invitable), fields(invitation_id = invitation.invitation_id, accepted))]
    pub async fn answer(
        &self,
        mut invitation: Invitation,
        invitable: &InvitableEntity,
        accepted: bool,
    ) -> Result<Invitation, InvitationError> {
        invitation.answer(accepted).map_err(|_| {
            warn!("Invitation has already been answered");
            InvitationError::InvalidParameter("invitation has already been answered")
        })?;

        let updated = self
            .invitation
            .mark_answered(&invitation.invitation_id, invitation.version, invitation.status)
            .await?;
        if updated == 0 {
            warn!("Lost the answer race, invitation already terminal");
            return Err(InvitationError::InvalidParameter(
                "invitation has already been answered",
            ));
        }
        invitation.version += 1;

        if accepted {
            match invitable {
                InvitableEntity::Announcement(a) => {
                    self.announcement
                        .add_candidate(&a.announcement_id, &invitation.recipient_id)
                        .await?;
                }
                InvitableEntity::Group(g) => {
                    self.group
                        .add_member(&g.group_id, &invitation.recipient_id)
                        .await?;
                }
            }
            debug!("Recipient added to the invitee set");
        }

        Ok(invitation)
    }

    /// Unconditional removal; deleting an absent invitation is a success.
    pub async fn delete(&self, id: i64) -> Result<(), InvitationError> {
        self.invitation.delete(&id).await?;
        Ok(())
    }
}

//! Invitation services - the HTTP surface of the invitation core.
//!
//! Every handler follows the same order: load the subjects (absence is a
//! 404, established before ownership), ask the policy (denial is a 403),
//! then let the manager apply the business rules (violations are 400).

use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::{AppError, AppState, InvitationError};
use crate::dtos::{
    AnswerInvitationDTO, InvitationDTO, InvitationFilter, InviteUserDTO, JoinRequestDTO,
    JoinRequestQuery, Page, PageQuery, RecipientInvitationsQuery,
};
use crate::entities::{InvitableKind, SourceType, User};
use crate::repositories::Read;

// ---- invitable-side endpoints -------------------------------------------

#[instrument(skip(state, current_user), fields(announcement_id = %announcement_id, user_id = %current_user.user_id))]
pub async fn list_announcement_invitations(
    State(state): State<Arc<AppState>>,
    Path(announcement_id): Path<i64>,
    Query(page): Query<PageQuery>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Page<InvitationDTO>>, AppError> {
    list_for_invitable(
        &state,
        InvitableKind::Announcement,
        announcement_id,
        page,
        &current_user,
    )
    .await
}

#[instrument(skip(state, current_user, body), fields(announcement_id = %announcement_id, user_id = %current_user.user_id))]
pub async fn invite_to_announcement(
    State(state): State<Arc<AppState>>,
    Path(announcement_id): Path<i64>,
    Extension(current_user): Extension<User>,
    Json(body): Json<InviteUserDTO>,
) -> Result<(StatusCode, Json<InvitationDTO>), AppError> {
    invite_for_invitable(
        &state,
        InvitableKind::Announcement,
        announcement_id,
        body,
        &current_user,
    )
    .await
}

#[instrument(skip(state, current_user), fields(group_id = %group_id, user_id = %current_user.user_id))]
pub async fn list_group_invitations(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<i64>,
    Query(page): Query<PageQuery>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Page<InvitationDTO>>, AppError> {
    list_for_invitable(&state, InvitableKind::Group, group_id, page, &current_user).await
}

#[instrument(skip(state, current_user, body), fields(group_id = %group_id, user_id = %current_user.user_id))]
pub async fn invite_to_group(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<i64>,
    Extension(current_user): Extension<User>,
    Json(body): Json<InviteUserDTO>,
) -> Result<(StatusCode, Json<InvitationDTO>), AppError> {
    invite_for_invitable(&state, InvitableKind::Group, group_id, body, &current_user).await
}

async fn list_for_invitable(
    state: &AppState,
    kind: InvitableKind,
    invitable_id: i64,
    page: PageQuery,
    current_user: &User,
) -> Result<Json<Page<InvitationDTO>>, AppError> {
    // Existence first (404), ownership second (403).
    let invitable = state.invitations.load_invitable(kind, invitable_id).await?;

    if !state.policy.can_list_invitable(current_user, &invitable) {
        warn!("Only the creator can list these invitations");
        return Err(AppError::forbidden("You do not own this invitable"));
    }

    let result = state
        .invitations
        .list_by_invitable(kind, invitable_id, &page)
        .await?;

    Ok(Json(result.map(InvitationDTO::from)))
}

/// The invitable's creator invites a search user (source `search`).
async fn invite_for_invitable(
    state: &AppState,
    kind: InvitableKind,
    invitable_id: i64,
    body: InviteUserDTO,
    current_user: &User,
) -> Result<(StatusCode, Json<InvitationDTO>), AppError> {
    let invitable = state.invitations.load_invitable(kind, invitable_id).await?;

    let target = state.user.read(&body.recipient_id).await?.ok_or_else(|| {
        warn!("Target user not found: {}", body.recipient_id);
        AppError::not_found("Resource not found").with_details("user")
    })?;

    let involved = state
        .invitations
        .is_involved(&invitable, target.user_id)
        .await?;

    if !state
        .policy
        .can_invite(current_user, &target, &invitable, involved)
    {
        warn!("Invite denied by policy");
        return Err(AppError::forbidden("You are not allowed to invite this user"));
    }

    let invitation = state
        .invitations
        .create(&invitable, &target, SourceType::Search, body.message)
        .await?;

    state.notifier.invitation_created(&invitation);

    info!(invitation_id = invitation.invitation_id, "User invited");
    Ok((StatusCode::CREATED, Json(InvitationDTO::from(invitation))))
}

// ---- recipient-side endpoints -------------------------------------------

#[instrument(skip(state, current_user), fields(user_id = %user_id, actor_id = %current_user.user_id))]
pub async fn list_recipient_invitations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Query(query): Query<RecipientInvitationsQuery>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Page<InvitationDTO>>, AppError> {
    if !state.policy.can_act_for_recipient(&current_user, user_id) {
        warn!("Recipient endpoints are self-only");
        return Err(AppError::forbidden("You can only list your own invitations"));
    }

    let filter = InvitationFilter {
        recipient_id: Some(user_id),
        invitable_kind: query.kind,
        status: query.status,
        source_type: None,
    };

    let result = state
        .invitations
        .search(&filter, &query.page_query())
        .await?;

    Ok(Json(result.map(InvitationDTO::from)))
}

/// A search user asks to join an announcement or a group (source
/// `invitable`); the recipient of the created invitation is the caller.
#[instrument(skip(state, current_user, body), fields(user_id = %user_id, actor_id = %current_user.user_id))]
pub async fn request_to_join(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Query(query): Query<JoinRequestQuery>,
    Extension(current_user): Extension<User>,
    Json(body): Json<JoinRequestDTO>,
) -> Result<(StatusCode, Json<InvitationDTO>), AppError> {
    if !state.policy.can_act_for_recipient(&current_user, user_id) {
        warn!("Recipient endpoints are self-only");
        return Err(AppError::forbidden(
            "You can only create your own join requests",
        ));
    }

    let invitable = state
        .invitations
        .load_invitable(query.kind, body.invitable_id)
        .await?;

    let involved = state
        .invitations
        .is_involved(&invitable, current_user.user_id)
        .await?;

    if !state
        .policy
        .can_request_join(&current_user, &invitable, involved)
    {
        warn!("Join request denied by policy");
        return Err(AppError::forbidden(
            "You are not allowed to ask to join this invitable",
        ));
    }

    let invitation = state
        .invitations
        .create(&invitable, &current_user, SourceType::Invitable, body.message)
        .await?;

    state.notifier.invitation_created(&invitation);

    info!(invitation_id = invitation.invitation_id, "Join request created");
    Ok((StatusCode::CREATED, Json(InvitationDTO::from(invitation))))
}

#[instrument(skip(state, current_user), fields(user_id = %user_id, invitation_id = %invitation_id))]
pub async fn get_recipient_invitation(
    State(state): State<Arc<AppState>>,
    Path((user_id, invitation_id)): Path<(i64, i64)>,
    Extension(current_user): Extension<User>,
) -> Result<Json<InvitationDTO>, AppError> {
    if !state.policy.can_act_for_recipient(&current_user, user_id) {
        return Err(AppError::forbidden("You can only read your own invitations"));
    }

    let invitation = state.invitations.read(invitation_id).await?;

    // Scoped lookup: an invitation addressed to someone else stays a 404.
    if invitation.recipient_id != user_id {
        warn!("Invitation is not addressed to this recipient");
        return Err(AppError::not_found("Resource not found").with_details("invitation"));
    }

    Ok(Json(InvitationDTO::from(invitation)))
}

#[instrument(skip(state, current_user), fields(user_id = %user_id, invitation_id = %invitation_id))]
pub async fn delete_recipient_invitation(
    State(state): State<Arc<AppState>>,
    Path((user_id, invitation_id)): Path<(i64, i64)>,
    Extension(current_user): Extension<User>,
) -> Result<StatusCode, AppError> {
    if !state.policy.can_act_for_recipient(&current_user, user_id) {
        return Err(AppError::forbidden(
            "You can only delete your own invitations",
        ));
    }

    let invitation = match state.invitations.read(invitation_id).await {
        Ok(invitation) => invitation,
        // Idempotent delete: already gone is a success.
        Err(InvitationError::EntityNotFound(_)) => return Ok(StatusCode::OK),
        Err(err) => return Err(err.into()),
    };

    if invitation.recipient_id != user_id {
        warn!("Invitation is not addressed to this recipient");
        return Err(AppError::not_found("Resource not found").with_details("invitation"));
    }

    state.invitations.delete(invitation_id).await?;

    info!("Invitation deleted");
    Ok(StatusCode::OK)
}

// ---- invitation endpoints -----------------------------------------------

#[debug_handler]
#[instrument(skip(state, current_user, body), fields(invitation_id = %invitation_id, user_id = %current_user.user_id, accepted = body.accepted))]
pub async fn answer_invitation(
    State(state): State<Arc<AppState>>,
    Path(invitation_id): Path<i64>,
    Extension(current_user): Extension<User>,
    Json(body): Json<AnswerInvitationDTO>,
) -> Result<Json<InvitationDTO>, AppError> {
    let invitation = state.invitations.read(invitation_id).await?;

    let invitable = state
        .invitations
        .load_invitable(invitation.invitable_kind, invitation.invitable_id)
        .await?;

    if !state
        .policy
        .can_answer(&current_user, &invitation, &invitable)
    {
        warn!("Answer denied by policy");
        return Err(AppError::forbidden(
            "You are not allowed to answer this invitation",
        ));
    }

    let answered = state
        .invitations
        .answer(invitation, &invitable, body.accepted)
        .await?;

    info!(status = ?answered.status, "Invitation answered");
    Ok(Json(InvitationDTO::from(answered)))
}

#[instrument(skip(state, current_user), fields(invitation_id = %invitation_id, user_id = %current_user.user_id))]
pub async fn delete_invitation(
    State(state): State<Arc<AppState>>,
    Path(invitation_id): Path<i64>,
    Extension(current_user): Extension<User>,
) -> Result<StatusCode, AppError> {
    let invitation = match state.invitations.read(invitation_id).await {
        Ok(invitation) => invitation,
        // Idempotent delete: already gone is a success.
        Err(InvitationError::EntityNotFound(_)) => return Ok(StatusCode::OK),
        Err(err) => return Err(err.into()),
    };

    // The invitable may have been deleted underneath the invitation; the
    // recipient can still clean up.
    let invitable = match state
        .invitations
        .load_invitable(invitation.invitable_kind, invitation.invitable_id)
        .await
    {
        Ok(invitable) => Some(invitable),
        Err(InvitationError::EntityNotFound(_)) => None,
        Err(err) => return Err(err.into()),
    };

    if !state
        .policy
        .can_delete(&current_user, &invitation, invitable.as_ref())
    {
        warn!("Delete denied by policy");
        return Err(AppError::forbidden(
            "You are not allowed to delete this invitation",
        ));
    }

    state.invitations.delete(invitation_id).await?;

    info!("Invitation deleted");
    Ok(StatusCode::OK)
}

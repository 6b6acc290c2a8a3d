//! Group services - the thin CRUD surface around search groups.

use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::core::{AppError, AppState};
use crate::dtos::{CreateGroupDTO, GroupDTO, UpdateGroupDTO};
use crate::entities::{User, UserKind};
use crate::repositories::{Create, Read, Update};

#[instrument(skip(state, current_user, body), fields(creator_id = %current_user.user_id))]
pub async fn create_group(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<GroupDTO>,
) -> Result<(StatusCode, Json<GroupDTO>), AppError> {
    if current_user.kind != UserKind::Search {
        warn!("Non-search user tried to create a group");
        return Err(AppError::bad_request(
            "Only search accounts can create a group",
        ));
    }

    // One group per search user.
    if state
        .group
        .find_by_creator(&current_user.user_id)
        .await?
        .is_some()
    {
        warn!("User already owns a group");
        return Err(AppError::conflict("You already own a group"));
    }

    let name = body
        .name
        .ok_or_else(|| AppError::bad_request("Name is required"))?;

    let create_dto = CreateGroupDTO {
        creator_id: current_user.user_id,
        name,
        description: body.description,
    };
    create_dto.validate()?;

    let created = state.group.create(&create_dto).await?;

    info!(group_id = created.group_id, "Group created");
    Ok((StatusCode::CREATED, Json(GroupDTO::from(created))))
}

#[instrument(skip(state), fields(group_id = %group_id))]
pub async fn get_group(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<i64>,
) -> Result<Json<GroupDTO>, AppError> {
    let group = state.group.read(&group_id).await?.ok_or_else(|| {
        warn!("Group not found");
        AppError::not_found("Resource not found").with_details("group")
    })?;

    Ok(Json(GroupDTO::from(group)))
}

#[instrument(skip(state, current_user, body), fields(group_id = %group_id, user_id = %current_user.user_id))]
pub async fn update_group(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<i64>,
    Extension(current_user): Extension<User>,
    Json(body): Json<UpdateGroupDTO>,
) -> Result<Json<GroupDTO>, AppError> {
    let group = state.group.read(&group_id).await?.ok_or_else(|| {
        warn!("Group not found");
        AppError::not_found("Resource not found").with_details("group")
    })?;

    if group.creator_id != current_user.user_id {
        warn!("Only the creator can update the group");
        return Err(AppError::forbidden("You do not own this group"));
    }

    let updated = state.group.update(&group_id, &body).await?;

    info!("Group updated");
    Ok(Json(GroupDTO::from(updated)))
}

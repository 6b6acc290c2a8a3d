//! Announcement services - the thin CRUD surface around listings.

use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::core::{AppError, AppState};
use crate::dtos::{AnnouncementDTO, CreateAnnouncementDTO, UpdateAnnouncementDTO};
use crate::entities::{User, UserKind};
use crate::repositories::{Create, Read, Update};

#[instrument(skip(state, current_user, body), fields(creator_id = %current_user.user_id))]
pub async fn create_announcement(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<AnnouncementDTO>,
) -> Result<(StatusCode, Json<AnnouncementDTO>), AppError> {
    if current_user.kind != UserKind::Proposal {
        warn!("Non-proposal user tried to publish an announcement");
        return Err(AppError::bad_request(
            "Only proposal accounts can publish an announcement",
        ));
    }

    // One announcement per proposal user.
    if state
        .announcement
        .find_by_creator(&current_user.user_id)
        .await?
        .is_some()
    {
        warn!("User already owns an announcement");
        return Err(AppError::conflict("You already own an announcement"));
    }

    let title = body
        .title
        .ok_or_else(|| AppError::bad_request("Title is required"))?;

    let create_dto = CreateAnnouncementDTO {
        creator_id: current_user.user_id,
        title,
        description: body.description,
    };
    create_dto.validate()?;

    let created = state.announcement.create(&create_dto).await?;

    info!(announcement_id = created.announcement_id, "Announcement created");
    Ok((StatusCode::CREATED, Json(AnnouncementDTO::from(created))))
}

#[instrument(skip(state), fields(announcement_id = %announcement_id))]
pub async fn get_announcement(
    State(state): State<Arc<AppState>>,
    Path(announcement_id): Path<i64>,
) -> Result<Json<AnnouncementDTO>, AppError> {
    let announcement = state
        .announcement
        .read(&announcement_id)
        .await?
        .ok_or_else(|| {
            warn!("Announcement not found");
            AppError::not_found("Resource not found").with_details("announcement")
        })?;

    Ok(Json(AnnouncementDTO::from(announcement)))
}

#[instrument(skip(state, current_user, body), fields(announcement_id = %announcement_id, user_id = %current_user.user_id))]
pub async fn update_announcement(
    State(state): State<Arc<AppState>>,
    Path(announcement_id): Path<i64>,
    Extension(current_user): Extension<User>,
    Json(body): Json<UpdateAnnouncementDTO>,
) -> Result<Json<AnnouncementDTO>, AppError> {
    let announcement = state
        .announcement
        .read(&announcement_id)
        .await?
        .ok_or_else(|| {
            warn!("Announcement not found");
            AppError::not_found("Resource not found").with_details("announcement")
        })?;

    if announcement.creator_id != current_user.user_id {
        warn!("Only the creator can update the announcement");
        return Err(AppError::forbidden("You do not own this announcement"));
    }

    let updated = state.announcement.update(&announcement_id, &body).await?;

    info!("Announcement updated");
    Ok(Json(AnnouncementDTO::from(updated)))
}

//! User services.

use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::core::{AppError, AppState};
use crate::dtos::UserDTO;
use crate::repositories::Read;

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserDTO>, AppError> {
    let user = state.user.read(&user_id).await?.ok_or_else(|| {
        warn!("User not found");
        AppError::not_found("Resource not found").with_details("user")
    })?;

    Ok(Json(UserDTO::from(user)))
}

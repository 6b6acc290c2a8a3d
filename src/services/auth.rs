//! Auth services - registration and login.

use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;

/// Login payload (e-mail and password only).
#[derive(serde::Deserialize)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>,
) -> Result<impl IntoResponse, AppError> {
    let user = match state.user.find_by_email(&body.email).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown e-mail");
            return Err(AppError::unauthorized("E-mail or password are not correct"));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Wrong password");
        return Err(AppError::unauthorized("E-mail or password are not correct"));
    }

    let token = encode_jwt(user.email, user.user_id, &state.jwt_secret)?;

    let cookie_value = format!(
        "token={}; HttpOnly; Secure; SameSite=Lax; Max-Age={}",
        token,
        24 * 60 * 60
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        "Set-Cookie",
        HeaderValue::from_str(&cookie_value)
            .map_err(|_| AppError::internal_server_error("Failed to build cookie"))?,
    );
    headers.insert(
        "Authorization",
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::internal_server_error("Failed to build header"))?,
    );

    info!("User logged in");
    Ok((StatusCode::OK, headers))
}

#[instrument(skip(state, body), fields(email = %body.email, kind = ?body.kind))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>,
) -> Result<(StatusCode, Json<UserDTO>), AppError> {
    body.validate()?;

    if state.user.find_by_email(&body.email).await?.is_some() {
        warn!("E-mail already registered");
        return Err(AppError::conflict("E-mail already registered"));
    }

    let password_hash = User::hash_password(&body.password)
        .map_err(|_| AppError::internal_server_error("Failed to hash password"))?;

    let new_user = CreateUserDTO {
        email: body.email,
        password: password_hash,
        kind: body.kind,
    };

    let created_user = state.user.create(&new_user).await?;

    info!(user_id = created_user.user_id, "User registered");
    Ok((StatusCode::CREATED, Json(UserDTO::from(created_user))))
}

//! Services module - HTTP handlers, one sub-module per resource.

pub mod announcement;
pub mod auth;
pub mod group;
pub mod invitation;
pub mod user;

pub use announcement::{create_announcement, get_announcement, update_announcement};
pub use auth::{login_user, register_user};
pub use group::{create_group, get_group, update_group};
pub use invitation::{
    answer_invitation, delete_invitation, delete_recipient_invitation, get_recipient_invitation,
    invite_to_announcement, invite_to_group, list_announcement_invitations,
    list_group_invitations, list_recipient_invitations, request_to_join,
};
pub use user::get_user_by_id;

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check.
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}

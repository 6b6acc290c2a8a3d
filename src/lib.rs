//! Coliving-matching server library - exposes the main modules and the
//! router for integration tests.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod managers;
pub mod notifier;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState};
pub use crate::services::root;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .nest("/users", configure_user_routes(state.clone()))
        .nest("/announcements", configure_announcement_routes(state.clone()))
        .nest("/groups", configure_group_routes(state.clone()))
        .nest("/invitations", configure_invitation_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Authentication routes (login, register) - no token required.
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use crate::services::*;
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
}

fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/{user_id}", get(get_user_by_id))
        .route(
            "/{user_id}/invitations",
            get(list_recipient_invitations).post(request_to_join),
        )
        .route(
            "/{user_id}/invitations/{invitation_id}",
            get(get_recipient_invitation).delete(delete_recipient_invitation),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_announcement_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/", post(create_announcement))
        .route(
            "/{announcement_id}",
            get(get_announcement).patch(update_announcement),
        )
        .route(
            "/{announcement_id}/invitations",
            get(list_announcement_invitations).post(invite_to_announcement),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_group_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/", post(create_group))
        .route("/{group_id}", get(get_group).patch(update_group))
        .route(
            "/{group_id}/invitations",
            get(list_group_invitations).post(invite_to_group),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_invitation_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/{invitation_id}/answer", post(answer_invitation))
        .route("/{invitation_id}", delete(delete_invitation))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

//! Application state shared by all routes and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::policy::InvitationPolicy;
use crate::managers::InvitationManager;
use crate::notifier::{LogNotifier, Notifier};
use crate::repositories::{AnnouncementRepository, GroupRepository, UserRepository};

pub struct AppState {
    /// User accounts.
    pub user: UserRepository,

    /// Announcements (listings by proposal users).
    pub announcement: AnnouncementRepository,

    /// Search groups.
    pub group: GroupRepository,

    /// Invitation business rules; the only writer of invitations.
    pub invitations: InvitationManager,

    /// Authorization rules for the invitation endpoints.
    pub policy: InvitationPolicy,

    /// Outbound notifications.
    pub notifier: Arc<dyn Notifier>,

    /// Secret key for JWT tokens.
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(pool: SqlitePool, jwt_secret: String) -> Self {
        Self::with_notifier(pool, jwt_secret, Arc::new(LogNotifier))
    }

    pub fn with_notifier(pool: SqlitePool, jwt_secret: String, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            announcement: AnnouncementRepository::new(pool.clone()),
            group: GroupRepository::new(pool.clone()),
            invitations: InvitationManager::new(pool),
            policy: InvitationPolicy,
            notifier,
            jwt_secret,
        }
    }
}

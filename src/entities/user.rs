//! User entity with password helpers.

use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{UserKind, UserStatus};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub password: String,
    pub status: UserStatus,
    pub kind: UserKind,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Verify a candidate password against the stored bcrypt hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        verify(candidate, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with default cost.
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, DEFAULT_COST)
    }

    /// Only enabled accounts may receive invitations.
    pub fn is_enabled(&self) -> bool {
        self.status == UserStatus::Enabled
    }
}

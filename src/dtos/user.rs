//! User DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{User, UserKind, UserStatus};

/// Public user representation; the password hash never leaves the server.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub status: Option<UserStatus>,
    pub kind: Option<UserKind>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            user_id: Some(value.user_id),
            email: Some(value.email),
            status: Some(value.status),
            kind: Some(value.kind),
        }
    }
}

/// Registration payload; the service replaces `password` with its hash
/// before handing it to the repository.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "must be 8 to 128 characters"))]
    pub password: String,
    pub kind: UserKind,
}

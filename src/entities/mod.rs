//! Domain entities persisted in the database.
//!
//! One module per aggregate; enums live together in `enums`.

pub mod announcement;
pub mod enums;
pub mod group;
pub mod invitable;
pub mod invitation;
pub mod user;

pub use announcement::Announcement;
pub use enums::{
    AnnouncementStatus, GroupStatus, InvitableKind, InvitationStatus, SourceType, UserKind,
    UserStatus,
};
pub use group::Group;
pub use invitable::{Invitable, InvitableEntity};
pub use invitation::{AlreadyAnswered, Invitation};
pub use user::User;

//! Data Transfer Objects.
//!
//! DTOs separate the API representation from the persisted entities;
//! conversions are explicit `From<Entity>` impls at the boundary.

pub mod announcement;
pub mod group;
pub mod invitation;
pub mod page;
pub mod query;
pub mod user;

pub use announcement::{AnnouncementDTO, CreateAnnouncementDTO, UpdateAnnouncementDTO};
pub use group::{CreateGroupDTO, GroupDTO, UpdateGroupDTO};
pub use invitation::{
    AnswerInvitationDTO, CreateInvitationDTO, InvitationDTO, InviteUserDTO, JoinRequestDTO,
};
pub use page::Page;
pub use query::{InvitationFilter, JoinRequestQuery, PageQuery, RecipientInvitationsQuery};
pub use user::{CreateUserDTO, UserDTO};

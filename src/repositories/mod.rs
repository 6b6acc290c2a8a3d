//! Repositories - one per aggregate, each owning a cloned connection pool.
//!
//! Queries use the runtime sqlx API (`query`, `query_as`, `QueryBuilder`)
//! so the crate builds without a live database.

pub mod announcement;
pub mod group;
pub mod invitation;
pub mod traits;
pub mod user;

pub use traits::{Create, Delete, Read, Update};

pub use announcement::AnnouncementRepository;
pub use group::GroupRepository;
pub use invitation::InvitationRepository;
pub use user::UserRepository;

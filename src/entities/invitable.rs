//! Invitable capability - the shared surface of Announcement and Group.
//!
//! Invitations reference their target as `(invitable_kind, invitable_id)`
//! and resolve it through this sum type; there is no polymorphic join at the
//! database level.

use super::enums::InvitableKind;
use super::{Announcement, Group};

/// What an invitation needs to know about its target, regardless of whether
/// the target is an announcement or a group.
pub trait Invitable {
    fn kind(&self) -> InvitableKind;
    fn id(&self) -> i64;
    fn creator_id(&self) -> i64;
    fn is_available(&self) -> bool;
}

impl Invitable for Announcement {
    fn kind(&self) -> InvitableKind {
        InvitableKind::Announcement
    }

    fn id(&self) -> i64 {
        self.announcement_id
    }

    fn creator_id(&self) -> i64 {
        self.creator_id
    }

    fn is_available(&self) -> bool {
        self.is_available()
    }
}

impl Invitable for Group {
    fn kind(&self) -> InvitableKind {
        InvitableKind::Group
    }

    fn id(&self) -> i64 {
        self.group_id
    }

    fn creator_id(&self) -> i64 {
        self.creator_id
    }

    fn is_available(&self) -> bool {
        self.is_available()
    }
}

/// Loaded invitable, dispatched by kind.
#[derive(Debug, Clone)]
pub enum InvitableEntity {
    Announcement(Announcement),
    Group(Group),
}

impl Invitable for InvitableEntity {
    fn kind(&self) -> InvitableKind {
        match self {
            Self::Announcement(a) => a.kind(),
            Self::Group(g) => g.kind(),
        }
    }

    fn id(&self) -> i64 {
        match self {
            Self::Announcement(a) => Invitable::id(a),
            Self::Group(g) => Invitable::id(g),
        }
    }

    fn creator_id(&self) -> i64 {
        match self {
            Self::Announcement(a) => a.creator_id,
            Self::Group(g) => g.creator_id,
        }
    }

    fn is_available(&self) -> bool {
        match self {
            Self::Announcement(a) => a.is_available(),
            Self::Group(g) => g.is_available(),
        }
    }
}

//! Managers - business-rule orchestration between handlers and
//! repositories.

pub mod invitation;

pub use invitation::InvitationManager;

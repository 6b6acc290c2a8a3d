//! Notifier seam - outbound notifications about invitations.
//!
//! The manager never notifies; handlers call the notifier after a
//! successful create. The default implementation writes to the log; a mail
//! transport can be swapped in behind the same trait.

use tracing::info;

use crate::entities::Invitation;

pub trait Notifier: Send + Sync {
    /// A new invitation was persisted.
    fn invitation_created(&self, invitation: &Invitation);

    /// An invitation has been waiting too long; used by reminder jobs.
    fn remind(&self, invitation: &Invitation);
}

/// Logs instead of sending mail.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn invitation_created(&self, invitation: &Invitation) {
        info!(
            invitation_id = invitation.invitation_id,
            recipient_id = invitation.recipient_id,
            kind = ?invitation.invitable_kind,
            source = ?invitation.source_type,
            "invitation created"
        );
    }

    fn remind(&self, invitation: &Invitation) {
        info!(
            invitation_id = invitation.invitation_id,
            recipient_id = invitation.recipient_id,
            "invitation still waiting"
        );
    }
}

//! Share-link domain events.

use serde::{Deserialize, Serialize};

use crate::types::id::{LinkId, VideoId};

/// Events related to share-link operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShareEvent {
    /// A share link was created.
    Created {
        /// The link ID.
        link_id: LinkId,
        /// The video the link points at.
        video_id: VideoId,
        /// `"PUBLIC"` or `"PRIVATE"`.
        visibility: String,
    },
    /// A share link's visibility, allow-list, or expiry was replaced.
    Updated {
        /// The link ID.
        link_id: LinkId,
        /// `"PUBLIC"` or `"PRIVATE"`.
        visibility: String,
    },
    /// A share link was deleted.
    Deleted {
        /// The link ID.
        link_id: LinkId,
        /// The video the link pointed at.
        video_id: VideoId,
    },
    /// A viewer was granted access and the view was recorded.
    Viewed {
        /// The link ID.
        link_id: LinkId,
        /// View count after this view.
        view_count: u64,
    },
    /// A viewer was turned away.
    AccessDenied {
        /// The link ID that was requested.
        link_id: LinkId,
        /// Deny reason code, e.g. `"EXPIRED"`.
        reason: String,
    },
}

impl ShareEvent {
    /// The link this event concerns.
    pub fn link_id(&self) -> &LinkId {
        match self {
            Self::Created { link_id, .. }
            | Self::Updated { link_id, .. }
            | Self::Deleted { link_id, .. }
            | Self::Viewed { link_id, .. }
            | Self::AccessDenied { link_id, .. } => link_id,
        }
    }
}

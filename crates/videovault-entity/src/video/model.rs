//! Video entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use videovault_core::types::id::VideoId;

use super::status::VideoStatus;

/// An uploaded video. Read-only from the point of view of share links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique video identifier.
    pub id: VideoId,
    /// Display title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Processing status.
    pub status: VideoStatus,
    /// Display name of the uploader.
    pub owner: String,
    /// When the upload started.
    pub uploaded_at: DateTime<Utc>,
}

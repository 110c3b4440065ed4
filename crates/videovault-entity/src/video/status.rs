//! Video processing status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an uploaded video is in its processing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoStatus {
    /// Bytes are still arriving.
    Uploading,
    /// Upload finished; transcoding in progress.
    Processing,
    /// Available for playback.
    Ready,
    /// Upload or processing failed.
    Failed,
}

impl VideoStatus {
    /// Whether the video can be played back.
    pub fn is_playable(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Return the status as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uploading => "UPLOADING",
            Self::Processing => "PROCESSING",
            Self::Ready => "READY",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

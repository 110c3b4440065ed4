//! Share-link entity model.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use videovault_core::types::id::{LinkId, VideoId};

use super::visibility::Visibility;

/// Derived lifecycle state of a share link at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkStatus {
    /// The link can still be opened.
    Active,
    /// The expiry instant has been reached.
    Expired,
}

impl LinkStatus {
    /// Return the status as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shareable link to a video.
///
/// Expiry is never stored as a flag; call [`ShareLink::is_expired`] with the
/// current instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    /// Unique link identifier.
    pub id: LinkId,
    /// The video this link opens.
    pub video_id: VideoId,
    /// Public or email-restricted.
    pub visibility: Visibility,
    /// Normalized emails allowed to view a private link. Empty for public links.
    #[serde(default)]
    pub allowed_emails: BTreeSet<String>,
    /// When the link stops working. `None` means never.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
    /// When the link was last opened successfully.
    pub last_viewed_at: Option<DateTime<Utc>>,
    /// Number of successful views.
    #[serde(default)]
    pub view_count: u64,
}

impl ShareLink {
    /// Build a fresh link with zero views.
    pub fn new(id: LinkId, data: CreateShareLink, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            video_id: data.video_id,
            visibility: data.visibility,
            allowed_emails: data.allowed_emails,
            expires_at: data.expires_at,
            created_at,
            last_viewed_at: None,
            view_count: 0,
        }
    }

    /// Whether the link has expired at `now`. The boundary instant counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Derived status at `now`.
    pub fn status(&self, now: DateTime<Utc>) -> LinkStatus {
        if self.is_expired(now) {
            LinkStatus::Expired
        } else {
            LinkStatus::Active
        }
    }

    /// Whether the link is restricted to an allow-list.
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    /// Exact allow-list membership. Meaningless for public links.
    pub fn lists_email(&self, email: &str) -> bool {
        self.allowed_emails.contains(email)
    }

    /// Public URL of the link under `base_url`.
    pub fn share_url(&self, base_url: &str) -> String {
        format!("{}/share/{}", base_url.trim_end_matches('/'), self.id)
    }

    /// Replace the mutable fields. Identity, creation time, and view stats are kept.
    pub fn apply(&mut self, changes: ShareLinkChanges) {
        self.visibility = changes.visibility;
        self.allowed_emails = changes.allowed_emails;
        self.expires_at = changes.expires_at;
    }

    /// Count a successful view at `at`.
    pub fn record_view(&mut self, at: DateTime<Utc>) {
        self.view_count = self.view_count.saturating_add(1);
        self.last_viewed_at = Some(at);
    }
}

/// Data required to create a new share link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShareLink {
    /// The video to share.
    pub video_id: VideoId,
    /// Public or email-restricted.
    pub visibility: Visibility,
    /// Normalized allow-list.
    pub allowed_emails: BTreeSet<String>,
    /// Resolved expiry instant (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}

/// Full replacement of a link's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkChanges {
    /// New visibility.
    pub visibility: Visibility,
    /// New normalized allow-list.
    pub allowed_emails: BTreeSet<String>,
    /// New resolved expiry instant.
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn link(expires_at: Option<DateTime<Utc>>) -> ShareLink {
        ShareLink::new(
            LinkId::new("link-1"),
            CreateShareLink {
                video_id: VideoId::new("video-1"),
                visibility: Visibility::Public,
                allowed_emails: BTreeSet::new(),
                expires_at,
            },
            t0(),
        )
    }

    #[test]
    fn test_never_expiring_link() {
        let link = link(None);
        assert!(!link.is_expired(t0()));
        assert!(!link.is_expired(t0() + Duration::days(365 * 50)));
        assert_eq!(link.status(t0()), LinkStatus::Active);
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let t = t0() + Duration::hours(1);
        let link = link(Some(t));
        assert!(!link.is_expired(t - Duration::milliseconds(1)));
        assert!(link.is_expired(t));
        assert!(link.is_expired(t + Duration::seconds(1)));
        assert_eq!(link.status(t), LinkStatus::Expired);
    }

    #[test]
    fn test_apply_keeps_identity_and_stats() {
        let mut link = link(None);
        link.record_view(t0() + Duration::minutes(5));

        link.apply(ShareLinkChanges {
            visibility: Visibility::Private,
            allowed_emails: BTreeSet::from(["a@x.com".to_string()]),
            expires_at: Some(t0() + Duration::days(1)),
        });

        assert_eq!(link.id.as_str(), "link-1");
        assert_eq!(link.created_at, t0());
        assert_eq!(link.view_count, 1);
        assert_eq!(link.visibility, Visibility::Private);
        assert!(link.lists_email("a@x.com"));
    }

    #[test]
    fn test_share_url() {
        let link = link(None);
        assert_eq!(
            link.share_url("https://videovault.example/"),
            "https://videovault.example/share/link-1"
        );
    }
}

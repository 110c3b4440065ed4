//! Pure access decision for a viewer opening a share link.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use videovault_entity::share::{ShareLink, Visibility};

/// Why a viewer was turned away. Denial is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenyReason {
    /// No link with that id exists (or its video is gone).
    LinkNotFound,
    /// The link's expiry instant has been reached.
    Expired,
    /// The link is private and no email was supplied yet.
    AccessFormRequired,
    /// The supplied email is not on the allow-list.
    EmailNotAuthorized,
}

impl DenyReason {
    /// Stable uppercase code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinkNotFound => "LINK_NOT_FOUND",
            Self::Expired => "EXPIRED",
            Self::AccessFormRequired => "ACCESS_FORM_REQUIRED",
            Self::EmailNotAuthorized => "EMAIL_NOT_AUTHORIZED",
        }
    }

    /// Message shown to the viewer.
    pub fn message(&self) -> &'static str {
        match self {
            Self::LinkNotFound => "This shared link does not exist or has been removed.",
            Self::Expired => "This shared link has expired and is no longer available.",
            Self::AccessFormRequired => "This video requires access permission from the owner.",
            Self::EmailNotAuthorized => "Email not authorized to access this video.",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of evaluating a viewer against a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "decision", content = "reason", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessDecision {
    /// The viewer may watch the video.
    Granted,
    /// The viewer may not watch the video.
    Denied(DenyReason),
}

impl AccessDecision {
    /// Whether access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// The deny reason, if denied.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Granted => None,
            Self::Denied(reason) => Some(*reason),
        }
    }
}

/// Stateless grant/deny rule for share links.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessEvaluator;

impl AccessEvaluator {
    /// Decide whether `viewer_email` may open `link` at `now`.
    ///
    /// Rules are checked in order and the first match wins:
    /// missing link, expiry, public visibility, then allow-list membership.
    /// Membership is an exact string match; callers normalize emails first.
    /// The result depends only on the arguments.
    pub fn decide(
        link: Option<&ShareLink>,
        viewer_email: Option<&str>,
        now: DateTime<Utc>,
    ) -> AccessDecision {
        let Some(link) = link else {
            return AccessDecision::Denied(DenyReason::LinkNotFound);
        };

        if link.is_expired(now) {
            return AccessDecision::Denied(DenyReason::Expired);
        }

        match link.visibility {
            Visibility::Public => AccessDecision::Granted,
            Visibility::Private => match viewer_email {
                None => AccessDecision::Denied(DenyReason::AccessFormRequired),
                Some(email) if link.lists_email(email) => AccessDecision::Granted,
                Some(_) => AccessDecision::Denied(DenyReason::EmailNotAuthorized),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::BTreeSet;
    use videovault_core::types::id::{LinkId, VideoId};
    use videovault_entity::share::CreateShareLink;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 10, 10, 0, 0).unwrap()
    }

    fn link(
        visibility: Visibility,
        emails: &[&str],
        expires_at: Option<DateTime<Utc>>,
    ) -> ShareLink {
        ShareLink::new(
            LinkId::new("link-1"),
            CreateShareLink {
                video_id: VideoId::new("video-1"),
                visibility,
                allowed_emails: emails.iter().map(|e| e.to_string()).collect::<BTreeSet<_>>(),
                expires_at,
            },
            t0(),
        )
    }

    #[test]
    fn test_missing_link() {
        assert_eq!(
            AccessEvaluator::decide(None, Some("a@x.com"), t0()),
            AccessDecision::Denied(DenyReason::LinkNotFound)
        );
    }

    #[test]
    fn test_public_ignores_email() {
        // allow-list on a public link has no effect
        let link = link(Visibility::Public, &["a@x.com"], None);
        for viewer in [None, Some("a@x.com"), Some("b@x.com")] {
            assert_eq!(
                AccessEvaluator::decide(Some(&link), viewer, t0()),
                AccessDecision::Granted
            );
        }
    }

    #[test]
    fn test_private_membership() {
        let link = link(Visibility::Private, &["a@x.com"], None);
        assert_eq!(
            AccessEvaluator::decide(Some(&link), Some("a@x.com"), t0()),
            AccessDecision::Granted
        );
        assert_eq!(
            AccessEvaluator::decide(Some(&link), Some("b@x.com"), t0()),
            AccessDecision::Denied(DenyReason::EmailNotAuthorized)
        );
        assert_eq!(
            AccessEvaluator::decide(Some(&link), None, t0()),
            AccessDecision::Denied(DenyReason::AccessFormRequired)
        );
    }

    #[test]
    fn test_membership_is_exact() {
        let link = link(Visibility::Private, &["a@x.com"], None);
        assert_eq!(
            AccessEvaluator::decide(Some(&link), Some("A@x.com"), t0()),
            AccessDecision::Denied(DenyReason::EmailNotAuthorized)
        );
    }

    #[test]
    fn test_expired_beats_everything() {
        let expires = t0() + Duration::hours(1);
        let private = link(Visibility::Private, &["a@x.com"], Some(expires));
        let public = link(Visibility::Public, &[], Some(expires));

        for now in [expires, expires + Duration::days(3)] {
            assert_eq!(
                AccessEvaluator::decide(Some(&private), Some("a@x.com"), now),
                AccessDecision::Denied(DenyReason::Expired)
            );
            assert_eq!(
                AccessEvaluator::decide(Some(&public), None, now),
                AccessDecision::Denied(DenyReason::Expired)
            );
        }
        assert!(
            AccessEvaluator::decide(Some(&public), None, expires - Duration::seconds(1))
                .is_granted()
        );
    }

    #[test]
    fn test_deterministic() {
        let link = link(Visibility::Private, &["a@x.com"], Some(t0() + Duration::days(1)));
        let first = AccessEvaluator::decide(Some(&link), Some("b@x.com"), t0());
        for _ in 0..10 {
            assert_eq!(AccessEvaluator::decide(Some(&link), Some("b@x.com"), t0()), first);
        }
        assert_eq!(first.deny_reason(), Some(DenyReason::EmailNotAuthorized));
    }

    #[test]
    fn test_decision_serializes_with_reason() {
        let json = serde_json::to_string(&AccessDecision::Denied(DenyReason::Expired)).unwrap();
        assert_eq!(json, r#"{"decision":"DENIED","reason":"EXPIRED"}"#);
    }
}

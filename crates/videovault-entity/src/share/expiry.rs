//! Fixed set of share-link lifetimes offered when creating or editing a link.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use videovault_core::error::AppError;

/// How long a share link stays valid after it is created or edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpiryPolicy {
    /// One hour.
    #[serde(rename = "1h")]
    OneHour,
    /// Twelve hours.
    #[serde(rename = "12h")]
    TwelveHours,
    /// One day.
    #[serde(rename = "1d")]
    OneDay,
    /// Thirty days.
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    /// The link never expires.
    #[serde(rename = "never")]
    Never,
}

impl ExpiryPolicy {
    /// Every policy, shortest first, `Never` last.
    pub const ALL: [ExpiryPolicy; 5] = [
        Self::OneHour,
        Self::TwelveHours,
        Self::OneDay,
        Self::ThirtyDays,
        Self::Never,
    ];

    /// The lifetime this policy grants, or `None` for [`ExpiryPolicy::Never`].
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::OneHour => Some(Duration::hours(1)),
            Self::TwelveHours => Some(Duration::hours(12)),
            Self::OneDay => Some(Duration::days(1)),
            Self::ThirtyDays => Some(Duration::days(30)),
            Self::Never => None,
        }
    }

    /// The absolute expiry instant when applied at `now`.
    pub fn resolve(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.duration().map(|d| now + d)
    }

    /// Pick the policy matching an existing expiry, for pre-filling an edit form.
    ///
    /// Chooses the shortest window that still covers the remaining time.
    /// Anything beyond thirty days, or no expiry at all, maps to `Never`.
    /// An already-elapsed expiry maps to `OneHour`.
    pub fn infer(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let Some(expires_at) = expires_at else {
            return Self::Never;
        };
        let remaining = expires_at - now;

        Self::ALL
            .into_iter()
            .find(|policy| policy.duration().is_some_and(|window| remaining <= window))
            .unwrap_or(Self::Never)
    }

    /// Short code used in forms and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::TwelveHours => "12h",
            Self::OneDay => "1d",
            Self::ThirtyDays => "30d",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ExpiryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpiryPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown expiry '{code}', expected one of 1h, 12h, 1d, 30d, never"
                ))
            })
    }
}

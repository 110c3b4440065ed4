//! Share-link visibility.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use videovault_core::error::AppError;

/// Who may open a share link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Anyone holding the URL.
    Public,
    /// Only viewers whose email is on the allow-list.
    Private,
}

impl Visibility {
    /// Return the visibility as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PUBLIC" => Ok(Self::Public),
            "PRIVATE" => Ok(Self::Private),
            other => Err(AppError::validation(format!(
                "Unknown visibility '{other}', expected PUBLIC or PRIVATE"
            ))),
        }
    }
}

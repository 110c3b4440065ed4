//! Newtype wrappers for domain entity identifiers.
//!
//! Identifiers are opaque strings (`"video-1"`, `"link-3"`, or a random
//! token). Distinct types prevent passing a `VideoId` where a `LinkId`
//! is expected.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for an uploaded video.
    VideoId
);

define_id!(
    /// Unique identifier for a share link. Also the path segment of its URL.
    LinkId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_id_display() {
        let id = LinkId::new("link-1");
        assert_eq!(id.to_string(), "link-1");
        assert_eq!(id.as_str(), "link-1");
    }

    #[test]
    fn test_video_id_from_str() {
        let id: VideoId = "video-2".parse().unwrap();
        assert_eq!(id, VideoId::from("video-2"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = LinkId::new("link-7");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"link-7\"");
        let parsed: LinkId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_borrow_allows_str_lookup() {
        let mut set = std::collections::HashSet::new();
        set.insert(LinkId::new("link-1"));
        assert!(set.contains("link-1"));
    }
}

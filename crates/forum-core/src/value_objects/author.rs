//! Author type - which account collection an author belongs to

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of account that authored a piece of content
///
/// Stored as a free-form string; anything unrecognised reads back as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthorType {
    User,
    Professional,
    Organization,
    #[default]
    Unknown,
}

impl AuthorType {
    /// Stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Professional => "professional",
            Self::Organization => "organization",
            Self::Unknown => "Unknown",
        }
    }

    /// Lenient parse; never fails
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Self::User,
            "professional" => Self::Professional,
            "organization" => Self::Organization,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AuthorType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AuthorType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

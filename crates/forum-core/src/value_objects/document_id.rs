//! Document ID - opaque string key of a stored document
//!
//! Ids are segments of a slash-separated document path
//! (`forums/{forum}/posts/{post}/...`), so they may never be empty or contain `/`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque document identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Maximum accepted id length
    pub const MAX_LEN: usize = 128;

    /// Wrap a raw id without validation
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Parse and validate an id coming from outside the process
    pub fn parse(s: &str) -> Result<Self, DocumentIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DocumentIdError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(DocumentIdError::TooLong { max: Self::MAX_LEN });
        }
        if trimmed.contains('/') {
            return Err(DocumentIdError::InvalidCharacter('/'));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a document id
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdError {
    #[error("document id must not be empty")]
    Empty,

    #[error("document id longer than {max} characters")]
    TooLong { max: usize },

    #[error("document id contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentId::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DocumentId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = DocumentId::generate();
        let b = DocumentId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_parse_trims() {
        let id = DocumentId::parse("  abc123 ").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(DocumentId::parse("   "), Err(DocumentIdError::Empty));
        assert_eq!(
            DocumentId::parse("posts/1"),
            Err(DocumentIdError::InvalidCharacter('/'))
        );
        let long = "x".repeat(DocumentId::MAX_LEN + 1);
        assert!(matches!(
            DocumentId::parse(&long),
            Err(DocumentIdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = DocumentId::new("report-9");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"report-9\"");

        let parsed: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<DocumentId>("\"\"").is_err());
    }
}

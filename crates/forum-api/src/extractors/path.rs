//! Path parameter extractors
//!
//! Type-safe extraction of document ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use forum_core::DocumentId;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

async fn raw_path<T, S>(parts: &mut Parts, state: &S) -> Result<T, ApiError>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    let Path(raw) = Path::<T>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.body_text()))?;
    Ok(raw)
}

fn parse_id(name: &str, raw: &str) -> Result<DocumentId, ApiError> {
    DocumentId::parse(raw).map_err(|e| ApiError::invalid_path(format!("{name}: {e}")))
}

/// `/forums/:forum_id`
#[derive(Debug, Clone)]
pub struct ForumPath {
    pub forum_id: DocumentId,
}

#[derive(Deserialize)]
struct RawForumPath {
    forum_id: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ForumPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw: RawForumPath = raw_path(parts, state).await?;
        Ok(Self {
            forum_id: parse_id("forum_id", &raw.forum_id)?,
        })
    }
}

/// `/forums/:forum_id/reports/:report_id`
#[derive(Debug, Clone)]
pub struct ReportPath {
    pub forum_id: DocumentId,
    pub report_id: DocumentId,
}

#[derive(Deserialize)]
struct RawReportPath {
    forum_id: String,
    report_id: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ReportPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw: RawReportPath = raw_path(parts, state).await?;
        Ok(Self {
            forum_id: parse_id("forum_id", &raw.forum_id)?,
            report_id: parse_id("report_id", &raw.report_id)?,
        })
    }
}

/// `/forums/:forum_id/members/:user_id`
#[derive(Debug, Clone)]
pub struct MemberPath {
    pub forum_id: DocumentId,
    pub user_id: DocumentId,
}

#[derive(Deserialize)]
struct RawMemberPath {
    forum_id: String,
    user_id: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for MemberPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw: RawMemberPath = raw_path(parts, state).await?;
        Ok(Self {
            forum_id: parse_id("forum_id", &raw.forum_id)?,
            user_id: parse_id("user_id", &raw.user_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("forum_id", " f1 ").unwrap(), DocumentId::new("f1"));

        let err = parse_id("forum_id", "   ").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PATH_PARAMETER");
        assert!(err.to_string().contains("forum_id"));
    }
}

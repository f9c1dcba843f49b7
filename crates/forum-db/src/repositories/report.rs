//! PostgreSQL implementation of ReportRepository
//!
//! All three report collections share one table keyed by collection path.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use forum_core::entities::Report;
use forum_core::traits::{RepoResult, ReportCounts, ReportRepository};
use forum_core::value_objects::{DocumentId, ReportLevel, ReportLocation};

use crate::mappers::ReportInsert;
use crate::models::{ReportCountModel, ReportModel};

use super::error::{map_db_error, to_count};

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self), fields(path = %location))]
    async fn find(
        &self,
        location: &ReportLocation,
        report_id: &DocumentId,
    ) -> RepoResult<Option<Report>> {
        let result = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT path, id, level, forum_id, post_id, comment_id, author_id, author_name,
                   author_type, reason, reported_by, created_at
            FROM reports
            WHERE path = $1 AND id = $2
            ",
        )
        .bind(location.collection_path())
        .bind(report_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Report::try_from).transpose()
    }

    #[instrument(skip(self), fields(path = %location))]
    async fn find_at(&self, location: &ReportLocation) -> RepoResult<Vec<Report>> {
        let results = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT path, id, level, forum_id, post_id, comment_id, author_id, author_name,
                   author_type, reason, reported_by, created_at
            FROM reports
            WHERE path = $1
            ORDER BY created_at, id
            ",
        )
        .bind(location.collection_path())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Report::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_by_level(&self, forum_id: &DocumentId) -> RepoResult<ReportCounts> {
        let rows = sqlx::query_as::<_, ReportCountModel>(
            r"
            SELECT level, COUNT(*) AS count
            FROM reports
            WHERE forum_id = $1
            GROUP BY level
            ",
        )
        .bind(forum_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut counts = ReportCounts::default();
        for row in rows {
            match ReportLevel::parse(&row.level) {
                Some(level) => counts.add(level, to_count(row.count)),
                None => warn!(level = %row.level, "Skipping reports with unknown level"),
            }
        }
        Ok(counts)
    }

    #[instrument(skip(self, report), fields(report_id = %report.id, path = %report.location))]
    async fn create(&self, report: &Report) -> RepoResult<()> {
        let insert = ReportInsert::new(report);

        sqlx::query(
            r"
            INSERT INTO reports (path, id, level, forum_id, post_id, comment_id, author_id,
                                 author_name, author_type, reason, reported_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(&insert.path)
        .bind(insert.id)
        .bind(insert.level)
        .bind(insert.forum_id)
        .bind(insert.post_id)
        .bind(insert.comment_id)
        .bind(report.author_id.as_ref().map(DocumentId::as_str))
        .bind(&report.author_name)
        .bind(report.author_type.as_str())
        .bind(&report.reason)
        .bind(report.reported_by.as_str())
        .bind(report.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(path = %location))]
    async fn delete(&self, location: &ReportLocation, report_id: &DocumentId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM reports WHERE path = $1 AND id = $2
            ",
        )
        .bind(location.collection_path())
        .bind(report_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

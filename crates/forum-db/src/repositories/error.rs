//! Error handling utilities for repositories

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Convert a row count from `COUNT(*)`
pub fn to_count(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}

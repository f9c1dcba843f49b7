//! # forum-db
//!
//! Storage layer implementing the forum-core repository traits.
//!
//! ## Overview
//!
//! Two backends are provided:
//!
//! - PostgreSQL via SQLx (`repositories`): connection pool, `FromRow`
//!   models, entity ↔ model mappers and the `Pg*Repository` types
//! - In-memory (`memory`): a single [`MemoryStore`] implementing every trait
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::pool::{create_pool, ensure_schema, PoolConfig};
//! use forum_db::repositories::PgPostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/forum")).await?;
//!     ensure_schema(&pool).await?;
//!     let posts = PgPostRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryStore, StoreCounts};
pub use pool::{create_pool, ensure_schema, PgPool, PoolConfig};
pub use repositories::{
    PgBannedUserRepository, PgCommentRepository, PgForumRepository, PgLikeRepository,
    PgNotificationRepository, PgPostRepository, PgReportRepository, PgSuspendedUserRepository,
};

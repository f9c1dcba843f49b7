//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod forum;
mod like;
mod moderation;
mod notification;
mod post;
mod report;

pub use comment::PgCommentRepository;
pub use forum::PgForumRepository;
pub use like::PgLikeRepository;
pub use moderation::{PgBannedUserRepository, PgSuspendedUserRepository};
pub use notification::PgNotificationRepository;
pub use post::PgPostRepository;
pub use report::PgReportRepository;

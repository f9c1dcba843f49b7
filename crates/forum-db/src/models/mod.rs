//! Database models - SQLx-compatible structs for PostgreSQL tables

mod content;
mod forum;
mod moderation;
mod notification;
mod report;

pub use content::{CommentModel, LikeModel, PostModel};
pub use forum::ForumModel;
pub use moderation::{BannedUserModel, SuspendedUserModel};
pub use notification::NotificationModel;
pub use report::{ReportCountModel, ReportModel};

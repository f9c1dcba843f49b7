//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BannedUserRepository, CommentRepository, ForumRepository, LikeRepository,
    NotificationRepository, PostRepository, RepoResult, ReportCounts, ReportRepository,
    SuspendedUserRepository,
};

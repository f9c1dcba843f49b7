//! # forum-core
//!
//! Domain layer containing forum entities, value objects, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BanStatus, BannedUser, Comment, Forum, Like, Notification, NotificationKind, Post, Report,
    ResolvedAuthor, SuspendedUser, UNKNOWN_AUTHOR,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    BannedUserRepository, CommentRepository, ForumRepository, LikeRepository,
    NotificationRepository, PostRepository, RepoResult, ReportCounts, ReportRepository,
    SuspendedUserRepository,
};
pub use value_objects::{AuthorType, DocumentId, ReportLevel, ReportLocation};

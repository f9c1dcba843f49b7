//! Domain entities - core business objects

mod comment;
mod forum;
mod like;
mod moderation;
mod notification;
mod post;
mod report;

pub use comment::Comment;
pub use forum::Forum;
pub use like::Like;
pub use moderation::{BanStatus, BannedUser, SuspendedUser};
pub use notification::{Notification, NotificationKind};
pub use post::Post;
pub use report::{Report, ResolvedAuthor, UNKNOWN_AUTHOR};

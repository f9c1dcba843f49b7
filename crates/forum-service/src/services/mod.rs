//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! validation and orchestration of repository calls.

pub mod context;
pub mod error;
pub mod forum;
pub mod listener;
pub mod moderation;
pub mod report;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ModerationStage, ServiceError, ServiceResult};
pub use forum::ForumService;
pub use listener::{LoggingListener, ModerationListener};
pub use moderation::{BanOutcome, ContentDeletion, ModerationService, SuspensionOutcome};
pub use report::{week_start, ReportService, ReportSummary, WeeklyPostCount};

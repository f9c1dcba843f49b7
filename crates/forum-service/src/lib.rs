//! # forum-service
//!
//! Application layer containing the moderation workflows, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    BanOutcome, ContentDeletion, ForumService, LoggingListener, ModerationListener,
    ModerationService, ModerationStage, ReportService, ReportSummary, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SuspensionOutcome, WeeklyPostCount,
};

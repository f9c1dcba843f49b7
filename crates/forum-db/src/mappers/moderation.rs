//! BannedUser / SuspendedUser entity <-> model mappers

use forum_core::entities::{BanStatus, BannedUser, SuspendedUser};
use forum_core::value_objects::{AuthorType, DocumentId, ReportLevel};

use crate::models::{BannedUserModel, SuspendedUserModel};

impl From<BannedUserModel> for BannedUser {
    fn from(model: BannedUserModel) -> Self {
        BannedUser {
            id: DocumentId::new(model.id),
            report_id: DocumentId::new(model.report_id),
            forum_id: DocumentId::new(model.forum_id),
            author_id: model.author_id.map(DocumentId::new),
            author_name: model.author_name,
            author_type: AuthorType::parse(&model.author_type),
            report_source: model.report_source.as_deref().and_then(ReportLevel::parse),
            banned_at: model.banned_at,
            banned_by: DocumentId::new(model.banned_by),
            reason: model.reason,
            status: BanStatus::Banned,
        }
    }
}

impl From<SuspendedUserModel> for SuspendedUser {
    fn from(model: SuspendedUserModel) -> Self {
        SuspendedUser {
            id: DocumentId::new(model.id),
            report_id: DocumentId::new(model.report_id),
            forum_id: DocumentId::new(model.forum_id),
            author_id: model.author_id.map(DocumentId::new),
            author_name: model.author_name,
            author_type: AuthorType::parse(&model.author_type),
            report_source: model.report_source.as_deref().and_then(ReportLevel::parse),
            suspended_at: model.suspended_at,
            suspended_by: DocumentId::new(model.suspended_by),
            reason: model.reason,
            suspended_until: model.suspended_until,
            status: BanStatus::Suspended,
        }
    }
}

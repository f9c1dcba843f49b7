//! Notification entity <-> model mapper

use forum_core::entities::{Notification, NotificationKind};
use forum_core::error::DomainError;
use forum_core::value_objects::{AuthorType, DocumentId};

use crate::models::NotificationModel;

impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let kind = NotificationKind::parse(&model.kind).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown notification kind: {}", model.kind))
        })?;

        Ok(Notification {
            id: DocumentId::new(model.id),
            recipient_id: DocumentId::new(model.recipient_id),
            recipient_type: AuthorType::parse(&model.recipient_type),
            message: model.message,
            kind,
            created_at: model.created_at,
            is_read: model.is_read,
            additional_data: model.additional_data,
        })
    }
}

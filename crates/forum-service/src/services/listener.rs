//! Moderation listeners
//!
//! Receive a [`DomainEvent`] after a moderation action has committed all of
//! its writes. This is the completion callback of the workflows.

use async_trait::async_trait;
use tracing::info;

use forum_core::{DomainError, DomainEvent};

/// Observer of completed moderation actions
#[async_trait]
pub trait ModerationListener: Send + Sync {
    /// Handle a completed action. An error is reported as a failure of the
    /// action's completion stage; nothing is rolled back.
    async fn on_event(&self, event: &DomainEvent) -> Result<(), DomainError>;
}

/// Writes every event to the audit log
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingListener;

#[async_trait]
impl ModerationListener for LoggingListener {
    async fn on_event(&self, event: &DomainEvent) -> Result<(), DomainError> {
        let payload = serde_json::to_string(event)
            .map_err(|e| DomainError::InternalError(format!("failed to encode event: {e}")))?;

        info!(
            target: "audit",
            event_type = event.event_type(),
            forum_id = %event.forum_id(),
            at = %event.timestamp(),
            payload = %payload,
            "Moderation event"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::events::MemberKickedEvent;

    #[tokio::test]
    async fn test_logging_listener_accepts_events() {
        let event = DomainEvent::MemberKicked(MemberKickedEvent::new(
            "f1".into(),
            "u1".into(),
            "admin".into(),
        ));
        assert!(LoggingListener.on_event(&event).await.is_ok());
    }
}

//! Domain events

mod domain_event;

pub use domain_event::{
    DomainEvent, MemberKickedEvent, ReportSubmittedEvent, UserBannedEvent, UserSuspendedEvent,
};

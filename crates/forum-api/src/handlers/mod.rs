//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod forums;
pub mod health;
pub mod moderation;
pub mod reports;
pub mod stats;

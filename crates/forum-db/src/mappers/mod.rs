//! Entity to model mappers
//!
//! Conversions between domain entities (forum-core) and database models.
//! - `From<Model> for Entity` where every row is representable
//! - `TryFrom<Model> for Entity` where a row can carry an invalid value
//! - `*Insert` structs: flatten entity data for database writes

mod content;
mod forum;
mod moderation;
mod notification;
mod report;

pub use report::ReportInsert;

//! Axum extractors for request handling
//!
//! Custom extractors for path parameters and validated JSON bodies.

mod path;
mod validated;

pub use path::{ForumPath, MemberPath, ReportPath};
pub use validated::ValidatedJson;

//! Value objects - immutable types that represent domain concepts

mod author;
mod document_id;
mod location;

pub use author::AuthorType;
pub use document_id::{DocumentId, DocumentIdError};
pub use location::{ReportLevel, ReportLocation};

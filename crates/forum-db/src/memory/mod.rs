//! In-memory storage backend
//!
//! A single [`MemoryStore`] implements every repository trait over one
//! shared document tree. Used by the `memory` store backend and by tests.

mod repositories;
mod store;

pub use store::{MemoryStore, StoreCounts};

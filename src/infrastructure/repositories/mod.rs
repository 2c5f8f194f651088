// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod sqlite_slug;

pub use memory::{InMemoryRecordStore, InMemorySlugRepository};
pub use sqlite_slug::SqliteSlugRepository;

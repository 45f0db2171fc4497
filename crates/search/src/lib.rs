//! Meilisearch facade for the Quorum forum.
//!
//! The API proxies search queries instead of exposing Meilisearch to
//! clients. Indexing is eventually consistent: content writes enqueue
//! document upserts after commit and never fail the write path.

pub mod client;
pub mod documents;
pub mod page;

pub use client::{SearchClient, SortField, SortOrder};
pub use page::{SearchPage, PAGE_SIZE};

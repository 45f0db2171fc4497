//! Quorum domain core.
//!
//! Pure domain logic shared by the db and api crates: identifier types,
//! the error taxonomy, the vote-ledger transition rules, the reputation
//! delta table, flag/moderation rules, and the content validator. Nothing
//! in this crate touches the network or the database.

pub mod content;
pub mod error;
pub mod moderation;
pub mod reputation;
pub mod roles;
pub mod types;
pub mod validation;
pub mod voting;

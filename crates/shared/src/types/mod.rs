//! Shared type definitions.

pub mod id;

pub use id::{EntryId, InvalidUserId, UserId};

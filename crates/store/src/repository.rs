//! Repository contract for gage entries.

use async_trait::async_trait;

use crate::error::StoreError;
use gageboek_core::entry::{GageEntry, NewGageEntry};
use gageboek_core::period::Quarter;
use gageboek_shared::types::{EntryId, UserId};

/// The four operations the rest of the system depends on.
///
/// Exactly one production implementation exists
/// ([`crate::BlobGageRepository`]); the trait is the seam that keeps the
/// HTTP layer independent of the storage technology.
#[async_trait]
pub trait GageRepository: Send + Sync {
    /// Materializes and persists a new entry: assigns a fresh id and
    /// timestamps and computes the VAT split. Atomic per entry.
    async fn save(&self, user_id: &UserId, entry: NewGageEntry) -> Result<GageEntry, StoreError>;

    /// Returns all entries owned by the user, most-recent-date-first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<GageEntry>, StoreError>;

    /// Returns the user's entries dated inside the given quarter and year.
    async fn list_by_quarter(
        &self,
        user_id: &UserId,
        quarter: Quarter,
        year: i32,
    ) -> Result<Vec<GageEntry>, StoreError>;

    /// Deletes one entry. Deleting an unknown entry is reported as
    /// [`StoreError::NotFound`], never a crash.
    async fn delete(&self, user_id: &UserId, entry_id: EntryId) -> Result<(), StoreError>;
}

//! Object-storage implementation of the gage repository using Apache OpenDAL.

use async_trait::async_trait;
use chrono::Utc;
use opendal::{Operator, services};
use tracing::debug;

use crate::error::StoreError;
use crate::repository::GageRepository;
use gageboek_core::entry::{GageEntry, NewGageEntry};
use gageboek_core::period::{Quarter, filter_by_quarter};
use gageboek_core::vat::VatRates;
use gageboek_shared::config::StorageProvider;
use gageboek_shared::types::{EntryId, UserId};

/// Gage repository storing one JSON object per entry.
///
/// Key format: `{user_id}/{entry_id}.json`. A save is a single object
/// write, so per-entry atomicity comes from the backend.
pub struct BlobGageRepository {
    operator: Operator,
    rates: VatRates,
}

impl BlobGageRepository {
    /// Creates a repository over an existing operator.
    #[must_use]
    pub fn new(operator: Operator, rates: VatRates) -> Self {
        Self { operator, rates }
    }

    /// Creates a repository from provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: &StorageProvider, rates: VatRates) -> Result<Self, StoreError> {
        let operator = create_operator(provider)?;
        Ok(Self::new(operator, rates))
    }

    fn entry_key(user_id: &UserId, entry_id: EntryId) -> String {
        format!("{user_id}/{entry_id}.json")
    }
}

/// Create an OpenDAL operator from provider config.
fn create_operator(provider: &StorageProvider) -> Result<Operator, StoreError> {
    let operator = match provider {
        StorageProvider::AzureBlob {
            account,
            access_key,
            container,
        } => {
            let builder = services::Azblob::default()
                .account_name(account)
                .account_key(access_key)
                .container(container);

            Operator::new(builder)
                .map_err(|e| StoreError::Configuration(e.to_string()))?
                .finish()
        }
        StorageProvider::S3 {
            endpoint,
            bucket,
            access_key_id,
            secret_access_key,
            region,
        } => {
            let builder = services::S3::default()
                .endpoint(endpoint)
                .bucket(bucket)
                .access_key_id(access_key_id)
                .secret_access_key(secret_access_key)
                .region(region);

            Operator::new(builder)
                .map_err(|e| StoreError::Configuration(e.to_string()))?
                .finish()
        }
        StorageProvider::LocalFs { root } => {
            let builder = services::Fs::default().root(
                root.to_str()
                    .ok_or_else(|| StoreError::Configuration("invalid path".to_string()))?,
            );

            Operator::new(builder)
                .map_err(|e| StoreError::Configuration(e.to_string()))?
                .finish()
        }
        StorageProvider::Memory => {
            let builder = services::Memory::default();

            Operator::new(builder)
                .map_err(|e| StoreError::Configuration(e.to_string()))?
                .finish()
        }
    };

    Ok(operator)
}

#[async_trait]
impl GageRepository for BlobGageRepository {
    async fn save(&self, user_id: &UserId, entry: NewGageEntry) -> Result<GageEntry, StoreError> {
        entry.validate()?;
        let amount = self.rates.split(entry.amount_including_vat, entry.vat_rate)?;

        let now = Utc::now();
        let materialized = GageEntry {
            id: EntryId::new(),
            user_id: user_id.clone(),
            date: entry.date,
            description: entry.description,
            category: entry.category,
            amount,
            created_at: now,
            updated_at: now,
        };

        let key = Self::entry_key(user_id, materialized.id);
        let content = serde_json::to_vec(&materialized)?;
        self.operator.write(&key, content).await?;

        debug!(entry_id = %materialized.id, user_id = %user_id, "saved gage entry");
        Ok(materialized)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<GageEntry>, StoreError> {
        let prefix = format!("{user_id}/");
        let listing = match self.operator.list(&prefix).await {
            Ok(listing) => listing,
            // A user with no entries has no prefix yet.
            Err(e) if e.kind() == opendal::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::with_capacity(listing.len());
        for object in listing {
            if !object.path().ends_with(".json") {
                continue;
            }
            let content = self.operator.read(object.path()).await?;
            let entry: GageEntry = serde_json::from_slice(&content.to_vec())?;
            entries.push(entry);
        }

        entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(entries)
    }

    async fn list_by_quarter(
        &self,
        user_id: &UserId,
        quarter: Quarter,
        year: i32,
    ) -> Result<Vec<GageEntry>, StoreError> {
        let entries = self.list_by_user(user_id).await?;
        Ok(filter_by_quarter(entries, quarter, year))
    }

    async fn delete(&self, user_id: &UserId, entry_id: EntryId) -> Result<(), StoreError> {
        let key = Self::entry_key(user_id, entry_id);

        // OpenDAL's delete is idempotent; stat first so a stale id surfaces
        // as an explicit not-found instead of silently succeeding.
        match self.operator.stat(&key).await {
            Ok(_) => {}
            Err(e) if e.kind() == opendal::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(entry_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        self.operator.delete(&key).await?;
        debug!(entry_id = %entry_id, user_id = %user_id, "deleted gage entry");
        Ok(())
    }
}

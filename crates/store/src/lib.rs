//! Entry store for Gageboek.
//!
//! Persists one JSON object per gage entry under `{user_id}/{entry_id}.json`
//! in object storage. The storage backend (Azure Blob, S3, local fs, or
//! in-memory for tests) is selected by configuration through Apache OpenDAL;
//! nothing in this crate branches on the provider.

pub mod blob;
pub mod error;
pub mod repository;

pub use blob::BlobGageRepository;
pub use error::StoreError;
pub use repository::GageRepository;

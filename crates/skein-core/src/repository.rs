use crate::error::StorageError;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a stored URL record.
///
/// Monotonically increasing, first assignment is 1 — the in-process
/// analogue of a SQL auto-increment primary key. The short path is derived
/// from this id by the chain codec, so changing an id after assignment
/// breaks the bidirectional mapping for that record.
pub type RecordId = u64;

/// A stored URL record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    pub original_url: String,
    /// When the record was created.
    pub created_at: Timestamp,
}

type Result<T> = std::result::Result<T, StorageError>;

/// Persistence seam for id-keyed URL records.
///
/// Original URLs are not deduplicated: inserting the same URL twice creates
/// two records with two distinct ids, and therefore two distinct short
/// paths. All issued ids stay unique, so every short path still resolves
/// unambiguously.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Persists a URL and returns the freshly assigned record id.
    async fn insert(&self, url: &str) -> Result<RecordId>;

    /// Retrieves a record by id. Returns `None` for ids never assigned.
    async fn get(&self, id: RecordId) -> Result<Option<UrlRecord>>;
}

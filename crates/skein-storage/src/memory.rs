use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use skein_core::{RecordId, Repository, StorageError, UrlRecord};
use std::sync::atomic::{AtomicU64, Ordering};

type Result<T> = std::result::Result<T, StorageError>;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap uses sharded locks, so concurrent reads and writes to different
/// buckets do not block each other. Ids come from an atomic counter starting
/// at 1, mirroring the auto-increment primary key a SQL backend would
/// assign; within one instance an id is never reused.
#[derive(Debug)]
pub struct InMemoryRepository {
    records: DashMap<RecordId, UrlRecord>,
    next_id: AtomicU64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, url: &str) -> Result<RecordId> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = UrlRecord {
            original_url: url.to_owned(),
            created_at: Timestamp::now(),
        };
        self.records.insert(id, record);
        Ok(id)
    }

    async fn get(&self, id: RecordId) -> Result<Option<UrlRecord>> {
        Ok(self.records.get(&id).map(|entry| entry.clone()))
    }
}

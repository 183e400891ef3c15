//! Meme storage seam.
//!
//! DESIGN
//! ======
//! `MemeStore` is injected into handlers as `Arc<dyn MemeStore>`. Postgres
//! backs it in production; `MemoryMemeStore` serves local runs without a
//! database and every route test.
//!
//! Listing order is newest first. Ties on `created_at_ms` are broken by
//! insertion order so two uploads in the same millisecond still list in the
//! order they arrived.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::image_kind::ImageKind;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored meme {id} has unknown content type {content_type:?}")]
    CorruptRow { id: Uuid, content_type: String },
}

/// Metadata of a stored meme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemeRecord {
    pub id: Uuid,
    pub kind: ImageKind,
    pub byte_len: usize,
    pub created_at_ms: i64,
}

/// A meme with its image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMeme {
    pub record: MemeRecord,
    pub bytes: Vec<u8>,
}

impl StoredMeme {
    /// Build a new meme with a fresh id, stamped now.
    #[must_use]
    pub fn new(kind: ImageKind, bytes: Vec<u8>) -> Self {
        let record = MemeRecord { id: Uuid::new_v4(), kind, byte_len: bytes.len(), created_at_ms: now_ms_i64() };
        Self { record, bytes }
    }
}

#[async_trait]
pub trait MemeStore: Send + Sync {
    /// Persist a meme.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend write fails.
    async fn insert(&self, meme: StoredMeme) -> Result<MemeRecord, StoreError>;

    /// Up to `limit` memes, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend read fails.
    async fn list(&self, limit: usize) -> Result<Vec<MemeRecord>, StoreError>;

    /// Fetch one meme with its bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend read fails.
    async fn get(&self, id: Uuid) -> Result<Option<StoredMeme>, StoreError>;

    /// Remove a meme. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend write fails.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryMemeStore {
    /// Insertion order; newest last.
    memes: RwLock<Vec<StoredMeme>>,
}

impl MemoryMemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemeStore for MemoryMemeStore {
    async fn insert(&self, meme: StoredMeme) -> Result<MemeRecord, StoreError> {
        let record = meme.record.clone();
        self.memes.write().await.push(meme);
        Ok(record)
    }

    async fn list(&self, limit: usize) -> Result<Vec<MemeRecord>, StoreError> {
        let memes = self.memes.read().await;
        let mut records: Vec<(usize, MemeRecord)> = memes
            .iter()
            .enumerate()
            .map(|(seq, m)| (seq, m.record.clone()))
            .collect();
        records.sort_by(|(a_seq, a), (b_seq, b)| {
            b.created_at_ms
                .cmp(&a.created_at_ms)
                .then(b_seq.cmp(a_seq))
        });
        Ok(records
            .into_iter()
            .take(limit)
            .map(|(_, r)| r)
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredMeme>, StoreError> {
        let memes = self.memes.read().await;
        Ok(memes.iter().find(|m| m.record.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut memes = self.memes.write().await;
        let before = memes.len();
        memes.retain(|m| m.record.id != id);
        Ok(memes.len() != before)
    }
}

pub(crate) fn now_ms_i64() -> i64 {
    let Ok(duration) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

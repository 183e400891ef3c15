//! Postgres-backed meme store.
//!
//! Image bytes live in the `memes` table next to their metadata. Memes are
//! small (bounded by `MAX_UPLOAD_BYTES`) and written once, so a `bytea`
//! column keeps the deployment to a single stateful service.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::image_kind::ImageKind;
use super::store::{MemeRecord, MemeStore, StoreError, StoredMeme};

pub struct PgMemeStore {
    pool: PgPool,
}

impl PgMemeStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_record(id: Uuid, content_type: String, byte_len: i64, created_at_ms: i64) -> Result<MemeRecord, StoreError> {
    let Some(kind) = ImageKind::from_mime(&content_type) else {
        return Err(StoreError::CorruptRow { id, content_type });
    };
    Ok(MemeRecord { id, kind, byte_len: usize::try_from(byte_len).unwrap_or(0), created_at_ms })
}

#[async_trait]
impl MemeStore for PgMemeStore {
    async fn insert(&self, meme: StoredMeme) -> Result<MemeRecord, StoreError> {
        let record = meme.record;
        sqlx::query("INSERT INTO memes (id, content_type, byte_len, bytes, created_at) VALUES ($1, $2, $3, $4, $5)")
            .bind(record.id)
            .bind(record.kind.mime())
            .bind(i64::try_from(record.byte_len).unwrap_or(i64::MAX))
            .bind(&meme.bytes)
            .bind(record.created_at_ms)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    async fn list(&self, limit: usize) -> Result<Vec<MemeRecord>, StoreError> {
        let rows = sqlx::query_as::<_, (Uuid, String, i64, i64)>(
            "SELECT id, content_type, byte_len, created_at
             FROM memes
             ORDER BY created_at DESC, seq DESC
             LIMIT $1",
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, content_type, byte_len, created_at)| to_record(id, content_type, byte_len, created_at))
            .collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredMeme>, StoreError> {
        let row = sqlx::query_as::<_, (Uuid, String, i64, i64, Vec<u8>)>(
            "SELECT id, content_type, byte_len, created_at, bytes FROM memes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, content_type, byte_len, created_at, bytes)) = row else {
            return Ok(None);
        };
        Ok(Some(StoredMeme { record: to_record(id, content_type, byte_len, created_at)?, bytes }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM memes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "pg_store_test.rs"]
mod pg_store_test;

//! Meme upload, listing, and retrieval routes.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::MAX_LIST_LIMIT;
use crate::services::store::{StoreError, StoredMeme};
use crate::services::upload::{self, MEME_FIELD, UploadError};
use crate::state::AppState;

/// Meme ids never change content, so clients may cache forever.
const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// `POST /upload`: store an image sent as multipart field `meme`.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), StatusCode> {
    let bytes = read_meme_field(multipart)
        .await
        .map_err(reject_upload)?;
    let kind = upload::validate(&bytes, state.config.max_upload_bytes).map_err(reject_upload)?;

    let record = state
        .store
        .insert(StoredMeme::new(kind, bytes))
        .await
        .map_err(store_error_to_status)?;

    info!(id = %record.id, kind = ?record.kind, bytes = record.byte_len, "meme uploaded");
    Ok((StatusCode::CREATED, Json(UploadResponse { id: record.id, url: state.config.meme_url(record.id) })))
}

/// `GET /memes`: URLs of stored memes, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let limit = query
        .limit
        .unwrap_or(state.config.list_default_limit)
        .min(MAX_LIST_LIMIT);
    let records = state
        .store
        .list(limit)
        .await
        .map_err(store_error_to_status)?;

    Ok(Json(
        records
            .into_iter()
            .map(|record| state.config.meme_url(record.id))
            .collect(),
    ))
}

/// `GET /memes/{id}`: raw image bytes.
pub async fn get_meme(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Response, StatusCode> {
    let meme = state
        .store
        .get(id)
        .await
        .map_err(store_error_to_status)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok((
        [
            (CONTENT_TYPE, meme.record.kind.mime()),
            (CACHE_CONTROL, IMMUTABLE_CACHE),
            (X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        meme.bytes,
    )
        .into_response())
}

/// `DELETE /memes/{id}`: remove a stored meme.
pub async fn delete_meme(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    let existed = state
        .store
        .delete(id)
        .await
        .map_err(store_error_to_status)?;
    if !existed {
        return Err(StatusCode::NOT_FOUND);
    }
    info!(%id, "meme deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn read_meme_field(mut multipart: Multipart) -> Result<Vec<u8>, UploadError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(MEME_FIELD) {
            continue;
        }
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(bytes.to_vec());
    }
    Err(UploadError::MissingField)
}

fn multipart_error(err: MultipartError) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::BodyTooLarge
    } else {
        UploadError::Malformed(err.body_text())
    }
}

fn reject_upload(err: UploadError) -> StatusCode {
    warn!(error = %err, "upload rejected");
    upload_error_to_status(&err)
}

pub(crate) fn upload_error_to_status(err: &UploadError) -> StatusCode {
    match err {
        UploadError::MissingField | UploadError::Malformed(_) | UploadError::Empty => StatusCode::BAD_REQUEST,
        UploadError::TooLarge { .. } | UploadError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        UploadError::UnsupportedType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
    }
}

pub(crate) fn store_error_to_status(err: StoreError) -> StatusCode {
    error!(error = %err, "meme store failure");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
#[path = "memes_test.rs"]
mod memes_test;

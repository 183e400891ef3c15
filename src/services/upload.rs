//! Upload validation.
//!
//! ERROR HANDLING
//! ==============
//! Every rejection is a distinct `UploadError` variant so the route layer can
//! map it to the matching status code and the log line says exactly why an
//! upload was refused.

use super::image_kind::ImageKind;

/// Multipart field carrying the image, as sent by the editor's save action.
pub const MEME_FIELD: &str = "meme";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("multipart form has no `{MEME_FIELD}` field")]
    MissingField,
    #[error("malformed multipart body: {0}")]
    Malformed(String),
    #[error("uploaded file is empty")]
    Empty,
    #[error("uploaded file is {len} bytes; limit is {max}")]
    TooLarge { len: usize, max: usize },
    #[error("request body exceeds the upload limit")]
    BodyTooLarge,
    #[error("uploaded file is not a PNG, JPEG, GIF or WebP image")]
    UnsupportedType,
}

/// Check an uploaded payload and detect its image format.
///
/// # Errors
///
/// Returns [`UploadError::Empty`], [`UploadError::TooLarge`] or
/// [`UploadError::UnsupportedType`].
pub fn validate(bytes: &[u8], max_bytes: usize) -> Result<ImageKind, UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(UploadError::TooLarge { len: bytes.len(), max: max_bytes });
    }
    ImageKind::sniff(bytes).ok_or(UploadError::UnsupportedType)
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

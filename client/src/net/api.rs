//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `fetch_memes` is a stub returning an error, and
//! `upload_meme` is not compiled since blobs only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` messages suitable for display, so a
//! dead API degrades the gallery or save button without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::UploadedMeme;

/// Multipart field the server reads the image from.
pub const MEME_FIELD: &str = "meme";
/// File name attached to uploaded canvas exports.
pub const UPLOAD_FILE_NAME: &str = "meme.png";

#[cfg(any(test, feature = "hydrate"))]
fn memes_endpoint(limit: Option<usize>) -> String {
    match limit {
        Some(limit) => format!("/memes?limit={limit}"),
        None => "/memes".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_endpoint() -> &'static str {
    "/upload"
}

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16) -> String {
    format!("could not load memes: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_failed_message(status: u16) -> String {
    match status {
        413 => "meme is too large to upload".to_owned(),
        415 => "server rejected the image format".to_owned(),
        _ => format!("upload failed: {status}"),
    }
}

/// Fetch saved meme URLs from `GET /memes`, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a list of URLs.
pub async fn fetch_memes() -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&memes_endpoint(None))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<Vec<String>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Upload a PNG export to `POST /upload` as multipart field `meme`.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the request fails,
/// or the server rejects the upload.
#[cfg(feature = "hydrate")]
pub async fn upload_meme(blob: &web_sys::Blob) -> Result<UploadedMeme, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename(MEME_FIELD, blob, UPLOAD_FILE_NAME)
        .map_err(|e| format!("{e:?}"))?;

    let resp = gloo_net::http::Request::post(upload_endpoint())
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(upload_failed_message(resp.status()));
    }
    resp.json::<UploadedMeme>().await.map_err(|e| e.to_string())
}

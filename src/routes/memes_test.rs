use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use serde_json::Value;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;
use crate::services::store::{MemeRecord, MemeStore};
use crate::state::test_helpers::{TEST_BASE_URL, test_app_state, test_app_state_with};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR fake png body";
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3, 4];
const BOUNDARY: &str = "memegen-test-boundary";

// =============================================================
// Helpers
// =============================================================

fn multipart_body(field: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"meme.png\"\r\n").as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(field: &str, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(multipart_body(field, bytes)))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn json_body(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Store that records the limit each `list` call received and holds nothing.
#[derive(Default)]
struct LimitRecordingStore {
    seen_limits: Mutex<Vec<usize>>,
}

#[async_trait]
impl MemeStore for LimitRecordingStore {
    async fn insert(&self, meme: StoredMeme) -> Result<MemeRecord, StoreError> {
        Ok(meme.record)
    }

    async fn list(&self, limit: usize) -> Result<Vec<MemeRecord>, StoreError> {
        self.seen_limits.lock().unwrap().push(limit);
        Ok(Vec::new())
    }

    async fn get(&self, _id: Uuid) -> Result<Option<StoredMeme>, StoreError> {
        Ok(None)
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, StoreError> {
        Ok(false)
    }
}

fn recording_app() -> (Router, Arc<LimitRecordingStore>) {
    let store = Arc::new(LimitRecordingStore::default());
    let config = ServerConfig { public_base_url: TEST_BASE_URL.to_owned(), ..ServerConfig::default() };
    let app = api_routes(AppState::new(store.clone(), config));
    (app, store)
}

async fn upload_ok(app: &Router, bytes: &[u8]) -> UploadResponse {
    let response = app.clone().oneshot(upload_request("meme", bytes)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    serde_json::from_value(json_body(response).await).unwrap()
}

// =============================================================
// Upload
// =============================================================

#[tokio::test]
async fn upload_returns_public_url() {
    let app = api_routes(test_app_state());
    let uploaded = upload_ok(&app, PNG).await;
    assert_eq!(uploaded.url, format!("{TEST_BASE_URL}/memes/{}", uploaded.id));
}

#[tokio::test]
async fn upload_without_meme_field_is_bad_request() {
    let app = api_routes(test_app_state());
    let response = app.oneshot(upload_request("image", PNG)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_of_non_image_is_unsupported() {
    let app = api_routes(test_app_state());
    let response = app
        .oneshot(upload_request("meme", b"<html>nope</html>"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn upload_of_empty_file_is_bad_request() {
    let app = api_routes(test_app_state());
    let response = app.oneshot(upload_request("meme", b"")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_over_limit_is_payload_too_large() {
    let app = api_routes(test_app_state_with(|c| c.max_upload_bytes = 8));
    let response = app.oneshot(upload_request("meme", PNG)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn upload_body_over_transport_limit_is_payload_too_large() {
    let app = api_routes(test_app_state_with(|c| c.max_upload_bytes = 8));
    let mut bytes = PNG.to_vec();
    bytes.resize(200 * 1024, 0);
    let response = app.oneshot(upload_request("meme", &bytes)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn upload_without_multipart_content_type_is_rejected() {
    let app = api_routes(test_app_state());
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

// =============================================================
// List
// =============================================================

#[tokio::test]
async fn list_is_empty_initially() {
    let app = api_routes(test_app_state());
    let response = app.oneshot(get("/memes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn list_returns_uploaded_urls_newest_first() {
    let app = api_routes(test_app_state());
    let first = upload_ok(&app, PNG).await;
    let second = upload_ok(&app, JPEG).await;

    let response = app.clone().oneshot(get("/memes")).await.unwrap();
    let urls: Vec<String> = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(urls, vec![second.url, first.url]);
}

#[tokio::test]
async fn list_honors_limit_query() {
    let app = api_routes(test_app_state());
    for _ in 0..3 {
        upload_ok(&app, PNG).await;
    }
    let response = app.clone().oneshot(get("/memes?limit=2")).await.unwrap();
    let urls: Vec<String> = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(urls.len(), 2);
}

#[tokio::test]
async fn list_uses_configured_default_limit() {
    let app = api_routes(test_app_state_with(|c| c.list_default_limit = 1));
    upload_ok(&app, PNG).await;
    upload_ok(&app, PNG).await;
    let response = app.clone().oneshot(get("/memes")).await.unwrap();
    let urls: Vec<String> = serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(urls.len(), 1);
}

#[tokio::test]
async fn list_limit_is_capped() {
    let (app, store) = recording_app();
    let response = app.clone().oneshot(get("/memes?limit=100000")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = app.oneshot(get("/memes?limit=7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(*store.seen_limits.lock().unwrap(), vec![MAX_LIST_LIMIT, 7]);
}

#[tokio::test]
async fn list_with_invalid_limit_is_bad_request() {
    let app = api_routes(test_app_state());
    let response = app.oneshot(get("/memes?limit=lots")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================
// Fetch / delete
// =============================================================

#[tokio::test]
async fn get_serves_bytes_with_sniffed_type() {
    let app = api_routes(test_app_state());
    let uploaded = upload_ok(&app, JPEG).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/memes/{}", uploaded.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/jpeg");
    assert_eq!(response.headers()[CACHE_CONTROL], IMMUTABLE_CACHE);
    assert_eq!(body_bytes(response).await, JPEG);
}

#[tokio::test]
async fn get_unknown_meme_is_not_found() {
    let app = api_routes(test_app_state());
    let response = app
        .oneshot(get(&format!("/memes/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_malformed_id_is_bad_request() {
    let app = api_routes(test_app_state());
    let response = app.oneshot(get("/memes/not-a-uuid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_meme_from_list() {
    let app = api_routes(test_app_state());
    let uploaded = upload_ok(&app, PNG).await;
    let uri = format!("/memes/{}", uploaded.id);

    let delete = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = app.clone().oneshot(get("/memes")).await.unwrap();
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn delete_unknown_meme_is_not_found() {
    let app = api_routes(test_app_state());
    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/memes/{}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_app_state());
    let response = app.oneshot(get("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================
// Status mapping
// =============================================================

#[test]
fn upload_errors_map_to_statuses() {
    assert_eq!(upload_error_to_status(&UploadError::MissingField), StatusCode::BAD_REQUEST);
    assert_eq!(upload_error_to_status(&UploadError::Malformed("x".into())), StatusCode::BAD_REQUEST);
    assert_eq!(upload_error_to_status(&UploadError::Empty), StatusCode::BAD_REQUEST);
    assert_eq!(upload_error_to_status(&UploadError::TooLarge { len: 2, max: 1 }), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(upload_error_to_status(&UploadError::BodyTooLarge), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(upload_error_to_status(&UploadError::UnsupportedType), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[test]
fn store_errors_map_to_internal_error() {
    let err = StoreError::CorruptRow { id: Uuid::nil(), content_type: "text/plain".into() };
    assert_eq!(store_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

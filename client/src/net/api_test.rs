use super::*;

#[test]
fn memes_endpoint_without_limit() {
    assert_eq!(memes_endpoint(None), "/memes");
}

#[test]
fn memes_endpoint_with_limit() {
    assert_eq!(memes_endpoint(Some(20)), "/memes?limit=20");
}

#[test]
fn upload_endpoint_matches_server_route() {
    assert_eq!(upload_endpoint(), "/upload");
}

#[test]
fn list_failed_message_formats_status() {
    assert_eq!(list_failed_message(503), "could not load memes: 503");
}

#[test]
fn upload_failed_message_explains_known_rejections() {
    assert_eq!(upload_failed_message(413), "meme is too large to upload");
    assert_eq!(upload_failed_message(415), "server rejected the image format");
    assert_eq!(upload_failed_message(500), "upload failed: 500");
}

#[test]
fn upload_field_matches_server_contract() {
    assert_eq!(MEME_FIELD, "meme");
    assert_eq!(UPLOAD_FILE_NAME, "meme.png");
}

#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn new_doc_is_blank_and_centered() {
    let doc = MemeDoc::new();
    assert!(doc.image.is_none());
    assert!(doc.caption.is_empty());
    assert_eq!(doc.anchor, Point::new(250.0, 250.0));
    assert_eq!(doc.width, 500.0);
    assert_eq!(doc.height, 500.0);
}

#[test]
fn with_size_centers_anchor() {
    let doc = MemeDoc::with_size(300.0, 120.0);
    assert_eq!(doc.anchor, Point::new(150.0, 60.0));
    assert_eq!(doc.center(), doc.anchor);
}

#[test]
fn display_text_is_uppercased() {
    let mut doc = MemeDoc::new();
    doc.set_caption("one does not simply");
    assert_eq!(doc.display_text(), "ONE DOES NOT SIMPLY");
    assert_eq!(doc.caption, "one does not simply");
}

#[test]
fn has_caption_tracks_emptiness() {
    let mut doc = MemeDoc::new();
    assert!(!doc.has_caption());
    doc.set_caption("x");
    assert!(doc.has_caption());
    doc.set_caption("");
    assert!(!doc.has_caption());
}

#[test]
fn set_and_clear_image() {
    let mut doc = MemeDoc::new();
    doc.set_image(ImageSource::remote("https://example.test/memes/1"));
    assert_eq!(doc.image.as_ref().map(|i| i.origin), Some(ImageOrigin::Remote));
    doc.clear_image();
    assert!(doc.image.is_none());
}

#[test]
fn image_source_constructors_set_origin() {
    assert_eq!(ImageSource::local("blob:abc").origin, ImageOrigin::Local);
    assert_eq!(ImageSource::remote("/memes/1").origin, ImageOrigin::Remote);
    assert_eq!(ImageSource::local("blob:abc").url, "blob:abc");
}

#[test]
fn move_anchor_clamps_to_surface() {
    let mut doc = MemeDoc::new();
    doc.move_anchor_to(Point::new(120.0, 40.0));
    assert_eq!(doc.anchor, Point::new(120.0, 40.0));
    doc.move_anchor_to(Point::new(-30.0, 650.0));
    assert_eq!(doc.anchor, Point::new(0.0, 500.0));
}

#[test]
fn reset_restores_blank_state_and_keeps_size() {
    let mut doc = MemeDoc::with_size(400.0, 200.0);
    doc.set_image(ImageSource::local("blob:1"));
    doc.set_caption("hello");
    doc.move_anchor_to(Point::new(10.0, 10.0));
    doc.reset();
    assert_eq!(doc, MemeDoc::with_size(400.0, 200.0));
}

#![allow(clippy::float_cmp)]

use super::*;
use crate::text::FixedAdvance;

fn doc_with(caption: &str) -> MemeDoc {
    let mut doc = MemeDoc::new();
    doc.set_caption(caption);
    doc
}

// =============================================================
// caption_bounds
// =============================================================

#[test]
fn bounds_none_without_caption() {
    assert!(caption_bounds(&MemeDoc::new(), &FixedAdvance(10.0)).is_none());
}

#[test]
fn bounds_centered_on_anchor_above_baseline() {
    let doc = doc_with("hi");
    let r = caption_bounds(&doc, &FixedAdvance(20.0)).unwrap();
    assert_eq!(r, Rect::new(230.0, 210.0, 40.0, 40.0));
}

#[test]
fn bounds_measure_the_uppercased_caption() {
    struct UpperOnly;
    impl TextMeasure for UpperOnly {
        fn text_width(&self, text: &str) -> f64 {
            if text.chars().all(|c| !c.is_lowercase()) { 100.0 } else { 0.0 }
        }
    }
    let r = caption_bounds(&doc_with("lower"), &UpperOnly).unwrap();
    assert_eq!(r.width, 100.0);
}

#[test]
fn bounds_follow_anchor() {
    let mut doc = doc_with("abcd");
    doc.move_anchor_to(Point::new(100.0, 60.0));
    let r = caption_bounds(&doc, &FixedAdvance(10.0)).unwrap();
    assert_eq!(r, Rect::new(80.0, 20.0, 40.0, 40.0));
}

// =============================================================
// hit_caption
// =============================================================

#[test]
fn hit_inside_returns_offset_from_anchor() {
    let doc = doc_with("hi");
    let offset = hit_caption(Point::new(240.0, 230.0), &doc, &FixedAdvance(20.0));
    assert_eq!(offset, Some(Point::new(-10.0, -20.0)));
}

#[test]
fn hit_on_edges_counts() {
    let doc = doc_with("hi");
    let m = FixedAdvance(20.0);
    assert!(hit_caption(Point::new(230.0, 210.0), &doc, &m).is_some());
    assert!(hit_caption(Point::new(270.0, 250.0), &doc, &m).is_some());
}

#[test]
fn miss_below_baseline() {
    let doc = doc_with("hi");
    assert!(hit_caption(Point::new(250.0, 251.0), &doc, &FixedAdvance(20.0)).is_none());
}

#[test]
fn miss_outside_horizontal_extent() {
    let doc = doc_with("hi");
    let m = FixedAdvance(20.0);
    assert!(hit_caption(Point::new(229.0, 230.0), &doc, &m).is_none());
    assert!(hit_caption(Point::new(271.0, 230.0), &doc, &m).is_none());
}

#[test]
fn miss_above_font_height() {
    let doc = doc_with("hi");
    assert!(hit_caption(Point::new(250.0, 209.0), &doc, &FixedAdvance(20.0)).is_none());
}

#[test]
fn empty_caption_is_never_hit() {
    let doc = MemeDoc::new();
    assert!(hit_caption(doc.anchor, &doc, &FixedAdvance(20.0)).is_none());
}

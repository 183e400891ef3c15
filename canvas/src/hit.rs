use crate::consts::CAPTION_FONT_PX;
use crate::doc::MemeDoc;
use crate::geom::{Point, Rect};
use crate::text::TextMeasure;

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

/// Bounding box of the drawn caption, or `None` when there is no caption.
///
/// Horizontally the box is centered on the anchor and as wide as the measured
/// upper-cased caption. Vertically it spans one font height above the
/// baseline; descenders are not grabbable.
#[must_use]
pub fn caption_bounds(doc: &MemeDoc, measure: &dyn TextMeasure) -> Option<Rect> {
    if !doc.has_caption() {
        return None;
    }
    let width = measure.text_width(&doc.display_text()).max(0.0);
    Some(Rect::new(doc.anchor.x - width / 2.0, doc.anchor.y - CAPTION_FONT_PX, width, CAPTION_FONT_PX))
}

/// Test whether `pt` grabs the caption.
///
/// On a hit, returns the offset from the caption anchor to the pointer so a
/// drag keeps the caption under the same spot of the cursor.
#[must_use]
pub fn hit_caption(pt: Point, doc: &MemeDoc, measure: &dyn TextMeasure) -> Option<Point> {
    let bounds = caption_bounds(doc, measure)?;
    bounds.contains(pt).then(|| pt.sub(doc.anchor))
}

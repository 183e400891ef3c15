//! Rendering: paints the meme composite onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the document plus the loaded image and
//! produces pixels; it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{BLANK_FILL, CAPTION_FILL, CAPTION_FONT, CAPTION_STROKE, CAPTION_STROKE_WIDTH};
use crate::doc::MemeDoc;
use crate::text::{FixedAdvance, TextMeasure};

/// Draw the full composite: background image (or blank fill), then caption.
///
/// The image is stretched to the surface; aspect ratio is not preserved.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. a broken image).
pub fn draw(ctx: &CanvasRenderingContext2d, doc: &MemeDoc, image: Option<&HtmlImageElement>) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, doc.width, doc.height);

    match image {
        Some(img) => ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, doc.width, doc.height)?,
        None => draw_blank(ctx, doc),
    }

    draw_caption(ctx, doc)
}

fn draw_blank(ctx: &CanvasRenderingContext2d, doc: &MemeDoc) {
    ctx.set_fill_style_str(BLANK_FILL);
    ctx.fill_rect(0.0, 0.0, doc.width, doc.height);
}

fn draw_caption(ctx: &CanvasRenderingContext2d, doc: &MemeDoc) -> Result<(), JsValue> {
    if !doc.has_caption() {
        return Ok(());
    }
    let text = doc.display_text();

    ctx.save();
    ctx.set_font(CAPTION_FONT);
    ctx.set_fill_style_str(CAPTION_FILL);
    ctx.set_stroke_style_str(CAPTION_STROKE);
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.set_line_width(CAPTION_STROKE_WIDTH);

    // Fill first, outline on top, so the outline stays crisp.
    let result = ctx
        .fill_text(&text, doc.anchor.x, doc.anchor.y)
        .and_then(|()| ctx.stroke_text(&text, doc.anchor.x, doc.anchor.y));
    ctx.restore();
    result
}

/// Measures caption text with the browser's font engine.
pub struct CanvasMeasure<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasMeasure<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for CanvasMeasure<'_> {
    fn text_width(&self, text: &str) -> f64 {
        self.ctx.save();
        self.ctx.set_font(CAPTION_FONT);
        let width = match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => FixedAdvance::default().text_width(text),
        };
        self.ctx.restore();
        width
    }
}

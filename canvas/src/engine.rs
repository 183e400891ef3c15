use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::EXPORT_MIME;
use crate::doc::{ImageSource, MemeDoc};
use crate::geom::Point;
use crate::hit;
use crate::input::{Button, InputState};
use crate::render::{self, CanvasMeasure};
use crate::text::TextMeasure;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor shown while hovering the caption.
pub const CURSOR_GRAB: &str = "grab";
/// Cursor shown while dragging the caption.
pub const CURSOR_GRABBING: &str = "grabbing";
/// Cursor shown everywhere else.
pub const CURSOR_DEFAULT: &str = "default";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// The caption anchor changed; hosts mirroring the position should update.
    CaptionMoved { anchor: Point },
    SetCursor(String),
    RenderNeeded,
}

/// Identifies one `set_image` request. Only the most recent ticket may
/// complete a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLoadTicket(u64);

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub doc: MemeDoc,
    pub input: InputState,
    /// Last cursor reported to the host; avoids re-emitting the same one.
    last_cursor: Option<String>,
    image_seq: u64,
    image_ready: bool,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Document inputs ---

    /// Replace the caption text. The anchor is left where it is.
    pub fn set_caption(&mut self, caption: impl Into<String>) -> Action {
        self.doc.set_caption(caption);
        Action::RenderNeeded
    }

    /// Start showing a new image. The image is not drawn until the host
    /// reports the load finished with the returned ticket.
    pub fn set_image(&mut self, source: ImageSource) -> ImageLoadTicket {
        self.doc.set_image(source);
        self.image_ready = false;
        self.next_ticket()
    }

    /// Complete a load started by [`Self::set_image`].
    ///
    /// Returns `false` for a ticket superseded by a later `set_image` or
    /// `reset`; the host must then discard the loaded image.
    pub fn finish_image_load(&mut self, ticket: ImageLoadTicket) -> bool {
        if ticket.0 != self.image_seq || self.doc.image.is_none() {
            return false;
        }
        self.image_ready = true;
        true
    }

    /// Record that a load failed. The surface stays blank until another image is set.
    pub fn fail_image_load(&mut self, ticket: ImageLoadTicket) -> bool {
        if ticket.0 != self.image_seq {
            return false;
        }
        self.image_ready = false;
        true
    }

    /// Whether the current image finished loading and should be drawn.
    #[must_use]
    pub fn image_ready(&self) -> bool {
        self.image_ready && self.doc.image.is_some()
    }

    /// Remove the image and caption, recenter the anchor, and cancel any drag.
    /// Pending image loads are invalidated.
    pub fn reset(&mut self) -> Vec<Action> {
        self.doc.reset();
        self.image_ready = false;
        self.next_ticket();
        let was_dragging = self.input.is_dragging();
        self.input = InputState::Idle;
        let mut actions = vec![Action::CaptionMoved { anchor: self.doc.anchor }];
        if was_dragging {
            actions.extend(self.cursor(CURSOR_DEFAULT));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn next_ticket(&mut self) -> ImageLoadTicket {
        self.image_seq = self.image_seq.wrapping_add(1);
        ImageLoadTicket(self.image_seq)
    }

    // --- Pointer input ---

    /// Pointer pressed at `pt` (canvas space). A primary press on the caption
    /// starts a drag.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button, measure: &dyn TextMeasure) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some(offset) = hit::hit_caption(pt, &self.doc, measure) else {
            return Vec::new();
        };
        self.input = InputState::DraggingCaption { offset };
        self.cursor(CURSOR_GRABBING).into_iter().collect()
    }

    /// Pointer moved to `pt`. While dragging, the caption follows the pointer;
    /// otherwise only the hover cursor is updated.
    pub fn on_pointer_move(&mut self, pt: Point, measure: &dyn TextMeasure) -> Vec<Action> {
        match self.input {
            InputState::DraggingCaption { offset } => {
                self.doc.move_anchor_to(pt.sub(offset));
                vec![Action::CaptionMoved { anchor: self.doc.anchor }, Action::RenderNeeded]
            }
            InputState::Idle => {
                let over = hit::hit_caption(pt, &self.doc, measure).is_some();
                let cursor = if over { CURSOR_GRAB } else { CURSOR_DEFAULT };
                self.cursor(cursor).into_iter().collect()
            }
        }
    }

    /// Pointer released. Ends any drag.
    pub fn on_pointer_up(&mut self, _pt: Point, _button: Button) -> Vec<Action> {
        self.end_drag()
    }

    /// Pointer left the canvas. Ends any drag.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    fn end_drag(&mut self) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        let mut actions = vec![Action::CaptionMoved { anchor: self.doc.anchor }];
        actions.extend(self.cursor(CURSOR_DEFAULT));
        actions
    }

    fn cursor(&mut self, cursor: &str) -> Option<Action> {
        if self.last_cursor.as_deref() == Some(cursor) {
            return None;
        }
        self.last_cursor = Some(cursor.to_owned());
        Some(Action::SetCursor(cursor.to_owned()))
    }

    // --- Queries ---

    #[must_use]
    pub fn doc(&self) -> &MemeDoc {
        &self.doc
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas
/// element, its 2D context, and the currently loaded image.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Bind an engine to `canvas`, sizing it to the meme surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let core = EngineCore::new();
        canvas.set_width(core.doc.width as u32);
        canvas.set_height(core.doc.height as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx, image: None, core })
    }

    // --- Delegated document inputs ---

    pub fn set_caption(&mut self, caption: impl Into<String>) -> Action {
        self.core.set_caption(caption)
    }

    /// Begin loading `source`. Returns the ticket and the image element the
    /// host should attach `onload`/`onerror` handlers to.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the image element cannot be created.
    pub fn begin_image_load(&mut self, source: ImageSource) -> Result<(ImageLoadTicket, HtmlImageElement), JsValue> {
        let img = HtmlImageElement::new()?;
        // Remote memes must be CORS-clean or the canvas becomes tainted and
        // cannot be exported.
        img.set_cross_origin(Some("anonymous"));
        img.set_src(&source.url);
        self.image = None;
        let ticket = self.core.set_image(source);
        Ok((ticket, img))
    }

    /// Adopt a loaded image if its ticket is still current.
    pub fn finish_image_load(&mut self, ticket: ImageLoadTicket, img: HtmlImageElement) -> bool {
        if !self.core.finish_image_load(ticket) {
            return false;
        }
        self.image = Some(img);
        true
    }

    pub fn fail_image_load(&mut self, ticket: ImageLoadTicket) -> bool {
        if !self.core.fail_image_load(ticket) {
            return false;
        }
        self.image = None;
        true
    }

    pub fn reset(&mut self) -> Vec<Action> {
        self.image = None;
        self.core.reset()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        let measure = CanvasMeasure::new(&self.ctx);
        self.core.on_pointer_down(pt, button, &measure)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let measure = CanvasMeasure::new(&self.ctx);
        self.core.on_pointer_move(pt, &measure)
    }

    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render / export ---

    /// Draw the current composite to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let image = if self.core.image_ready() { self.image.as_ref() } else { None };
        render::draw(&self.ctx, &self.core.doc, image)
    }

    /// Encode the current composite as a PNG `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas is tainted by a non-CORS image.
    pub fn to_png_data_url(&self) -> Result<String, JsValue> {
        self.canvas.to_data_url_with_type(EXPORT_MIME)
    }

    /// The bound canvas element, for blob export.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn doc(&self) -> &MemeDoc {
        self.core.doc()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.is_dragging()
    }
}

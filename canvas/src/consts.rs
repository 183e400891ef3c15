//! Shared constants for the meme surface.

// ── Surface ─────────────────────────────────────────────────────

/// Canvas width in CSS pixels.
pub const CANVAS_WIDTH: f64 = 500.0;

/// Canvas height in CSS pixels.
pub const CANVAS_HEIGHT: f64 = 500.0;

/// Fill used when no image is loaded.
pub const BLANK_FILL: &str = "#f4f4f4";

// ── Caption ─────────────────────────────────────────────────────

/// Caption font size in pixels. Also the caption's hit-box height.
pub const CAPTION_FONT_PX: f64 = 40.0;

/// CSS font shorthand used for both drawing and measuring the caption.
pub const CAPTION_FONT: &str = "40px Impact";

/// Caption fill color.
pub const CAPTION_FILL: &str = "white";

/// Caption outline color.
pub const CAPTION_STROKE: &str = "black";

/// Caption outline width in pixels.
pub const CAPTION_STROKE_WIDTH: f64 = 3.0;

/// Per-character advance used when no canvas context can measure text.
pub const FALLBACK_ADVANCE_PX: f64 = CAPTION_FONT_PX * 0.6;

// ── Export ──────────────────────────────────────────────────────

/// MIME type of exported composites.
pub const EXPORT_MIME: &str = "image/png";

/// File name offered for downloads and uploads.
pub const EXPORT_FILE_NAME: &str = "meme.png";

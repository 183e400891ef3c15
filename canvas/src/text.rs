//! Caption width measurement.
//!
//! Hit-testing needs the rendered caption's width, which only the browser's
//! font engine knows. The engine takes a [`TextMeasure`] so the drag logic can
//! run against the real canvas in the browser and a fixed advance in tests.

use crate::consts::FALLBACK_ADVANCE_PX;

/// Measures caption text in the caption font.
pub trait TextMeasure {
    /// Width in CSS pixels of `text` drawn in the caption font.
    fn text_width(&self, text: &str) -> f64;
}

/// Monospace approximation: every character advances by the same amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance(pub f64);

impl Default for FixedAdvance {
    fn default() -> Self {
        Self(FALLBACK_ADVANCE_PX)
    }
}

impl TextMeasure for FixedAdvance {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.0
    }
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;

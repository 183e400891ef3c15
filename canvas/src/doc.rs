//! The meme document: which image is on the surface, the caption, and where
//! the caption sits.
//!
//! The caption anchor is the point passed to `fillText` with center alignment
//! and an alphabetic baseline, so `anchor.x` is the caption's horizontal
//! center and `anchor.y` its baseline.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::geom::Point;

/// Where an image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    /// Picked from the user's device; the URL is a revocable object URL.
    Local,
    /// A previously uploaded meme served by the API.
    Remote,
}

/// An image the editor is compositing onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub url: String,
    pub origin: ImageOrigin,
}

impl ImageSource {
    #[must_use]
    pub fn local(url: impl Into<String>) -> Self {
        Self { url: url.into(), origin: ImageOrigin::Local }
    }

    #[must_use]
    pub fn remote(url: impl Into<String>) -> Self {
        Self { url: url.into(), origin: ImageOrigin::Remote }
    }
}

/// Editor composition state.
#[derive(Debug, Clone, PartialEq)]
pub struct MemeDoc {
    pub image: Option<ImageSource>,
    /// Caption exactly as typed.
    pub caption: String,
    /// Caption anchor: center x, baseline y.
    pub anchor: Point,
    pub width: f64,
    pub height: f64,
}

impl Default for MemeDoc {
    fn default() -> Self {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl MemeDoc {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty document for a surface of the given size.
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { image: None, caption: String::new(), anchor: Point::new(width / 2.0, height / 2.0), width, height }
    }

    /// The surface center, where a fresh caption is placed.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn set_image(&mut self, source: ImageSource) {
        self.image = Some(source);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// The caption as drawn: upper-cased.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.caption.to_uppercase()
    }

    #[must_use]
    pub fn has_caption(&self) -> bool {
        !self.caption.is_empty()
    }

    /// Move the caption anchor, pinned to the surface so it stays reachable.
    pub fn move_anchor_to(&mut self, pt: Point) {
        self.anchor = pt.clamp_to(self.width, self.height);
    }

    /// Drop the image and caption and re-center the anchor.
    pub fn reset(&mut self) {
        *self = Self::with_size(self.width, self.height);
    }
}

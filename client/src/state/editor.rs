//! Meme editor state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canvas engine lives inside `CanvasHost` and is not shareable through
//! context. Components therefore talk to it through this struct: plain data
//! (`caption`, `image`) that the host mirrors, plus request counters
//! (`reset_seq`, `download_seq`, `save_seq`) that the host reacts to once
//! per bump.
//!
//! Object URLs created for local files must be revoked by the caller; every
//! transition that drops one returns it.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Where the editor's background image came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOrigin {
    /// A file picked from the device, referenced by an object URL.
    Local,
    /// A meme served by the API.
    Remote,
}

/// The image currently selected in the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorImage {
    pub url: String,
    pub origin: ImageOrigin,
}

#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub image: Option<EditorImage>,
    /// Bumped on every image selection, including re-selecting the same URL.
    pub image_seq: u64,
    /// Caption as typed; the canvas upper-cases it when drawing.
    pub caption: String,
    pub saving: bool,
    pub share_open: bool,
    /// URL of the last saved or selected server meme; the share target.
    pub last_saved_url: Option<String>,
    pub error: Option<String>,
    pub reset_seq: u64,
    pub download_seq: u64,
    pub save_seq: u64,
}

impl EditorState {
    /// Use a device file (already turned into an object URL) as the image.
    /// Returns the previous local object URL, which the caller must revoke.
    pub fn choose_local(&mut self, object_url: String) -> Option<String> {
        self.replace_image(EditorImage { url: object_url, origin: ImageOrigin::Local })
    }

    /// Load a gallery meme. Its URL also becomes the share target.
    /// Returns the previous local object URL, which the caller must revoke.
    pub fn choose_remote(&mut self, url: String) -> Option<String> {
        self.last_saved_url = Some(url.clone());
        self.replace_image(EditorImage { url, origin: ImageOrigin::Remote })
    }

    pub fn set_caption(&mut self, caption: String) {
        self.caption = caption;
    }

    /// Remove the image and start over: empty caption, no share target, and
    /// a reset request for the canvas. Returns the local object URL to revoke.
    pub fn reset(&mut self) -> Option<String> {
        let stale = self.take_local_url();
        self.image = None;
        self.caption.clear();
        self.last_saved_url = None;
        self.share_open = false;
        self.error = None;
        self.reset_seq = self.reset_seq.wrapping_add(1);
        stale
    }

    pub fn request_download(&mut self) {
        self.download_seq = self.download_seq.wrapping_add(1);
    }

    /// Ask the canvas host to export and upload. Returns `false` (and does
    /// nothing) while a save is already in flight.
    pub fn request_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        self.error = None;
        self.save_seq = self.save_seq.wrapping_add(1);
        true
    }

    pub fn save_succeeded(&mut self, url: String) {
        self.saving = false;
        self.last_saved_url = Some(url);
        self.share_open = true;
    }

    pub fn save_failed(&mut self, message: String) {
        self.saving = false;
        self.error = Some(message);
    }

    pub fn toggle_share(&mut self) {
        self.share_open = !self.share_open;
    }

    fn replace_image(&mut self, next: EditorImage) -> Option<String> {
        let stale = self.take_local_url();
        self.image = Some(next);
        self.image_seq = self.image_seq.wrapping_add(1);
        self.error = None;
        stale
    }

    fn take_local_url(&mut self) -> Option<String> {
        match self.image.take() {
            Some(EditorImage { url, origin: ImageOrigin::Local }) => Some(url),
            other => {
                self.image = other;
                None
            }
        }
    }
}

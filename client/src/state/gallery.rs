//! Gallery listing state.
//!
//! DESIGN
//! ======
//! Loads are keyed by a monotonically increasing ticket. A response that
//! arrives after a newer load started is dropped, so a slow list request can
//! never overwrite a fresher one.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Saved memes shown below the editor.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    /// Meme URLs, newest first.
    pub memes: Vec<String>,
    /// True while a list request is in flight.
    pub loading: bool,
    /// Message from the most recent failed load.
    pub error: Option<String>,
    /// Bumped to ask the gallery to reload (e.g. after a save).
    pub refresh_seq: u64,
    load_seq: u64,
}

impl GalleryState {
    /// Ask the gallery component to reload the list.
    pub fn request_refresh(&mut self) {
        self.refresh_seq = self.refresh_seq.wrapping_add(1);
    }

    /// Mark a load as started and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq = self.load_seq.wrapping_add(1);
        self.loading = true;
        self.load_seq
    }

    /// Apply a load result. Returns `false` when `ticket` is stale.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<String>, String>) -> bool {
        if ticket != self.load_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(memes) => {
                self.memes = memes;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }
}

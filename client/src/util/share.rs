//! Social share link builders.
//!
//! Links open the network's own share page with the meme URL filled in; no
//! network API is called. Encoding matches `encodeURIComponent`.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Text prefilled into networks that accept a message.
pub const SHARE_TEXT: &str = "Check out this meme I created 😄";

/// Characters `encodeURIComponent` leaves unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    WhatsApp,
    Telegram,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 4] = [Self::Facebook, Self::Twitter, Self::WhatsApp, Self::Telegram];

    pub fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
        }
    }

    /// Facebook's sharer only takes a URL; the others can share the text alone.
    pub fn requires_url(self) -> bool {
        matches!(self, Self::Facebook)
    }

    /// Build the share link, or `None` when this target needs a URL and
    /// there is none.
    pub fn link(self, meme_url: Option<&str>) -> Option<String> {
        let url = meme_url.unwrap_or_default();
        if url.is_empty() && self.requires_url() {
            return None;
        }
        Some(match self {
            Self::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", encode(url)),
            Self::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                encode(SHARE_TEXT),
                encode(url)
            ),
            Self::WhatsApp => format!("https://wa.me/?text={}", encode(&format!("{SHARE_TEXT} {url}"))),
            Self::Telegram => format!(
                "https://t.me/share/url?url={}&text={}",
                encode(url),
                encode(SHARE_TEXT)
            ),
        })
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

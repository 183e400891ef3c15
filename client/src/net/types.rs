//! Wire types for the meme API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a successful `POST /upload`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMeme {
    pub id: Uuid,
    /// Public URL of the stored image.
    pub url: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

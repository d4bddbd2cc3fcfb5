//! Core data types for message navigation.
//!
//! Messages are owned by the host chat store; the types here are transient
//! views and results created per operation, never persisted.

use serde::{Deserialize, Serialize};

/// Maximum number of characters in a search-result preview.
pub const PREVIEW_LEN: usize = 50;

/// Marker appended to a preview when the message text was truncated.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// A read-only view of one message in the host's ordered message list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Zero-based, stable position in the message list ("floor").
    pub floor: usize,
    /// The message text.
    pub text: String,
}

impl Message {
    /// Create a message view.
    #[must_use]
    pub fn new(floor: usize, text: impl Into<String>) -> Self {
        Self {
            floor,
            text: text.into(),
        }
    }

    /// Bounded-length preview of the message text.
    ///
    /// First [`PREVIEW_LEN`] characters, with [`PREVIEW_ELLIPSIS`] appended
    /// only when the text was actually truncated. Counts characters rather
    /// than bytes so multi-byte text never splits mid-character.
    #[must_use]
    pub fn preview(&self) -> String {
        preview_of(&self.text)
    }
}

/// One search hit: the matching floor plus a bounded preview of its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Floor of the matching message.
    pub floor: usize,
    /// Bounded-length prefix of the message text.
    pub preview: String,
}

/// A validated navigation request.
///
/// Only ever constructed after bounds validation; holding one means the
/// floor was inside `[0, len)` at the time of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTarget {
    /// The validated floor to scroll to.
    pub floor: usize,
}

/// Build a bounded preview of arbitrary message text.
#[must_use]
pub fn preview_of(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_LEN) {
        // More text follows the preview window, so truncate and mark it.
        Some((byte_end, _)) => {
            let mut preview = text[..byte_end].to_string();
            preview.push_str(PREVIEW_ELLIPSIS);
            preview
        }
        None => text.to_string(),
    }
}

//! Error types for message-navigator.
//!
//! Every failure here is a user-visible, non-fatal condition: an invalid
//! floor, a search with no hits, an empty chat. Hosts surface them through
//! their notification collaborator (a toast, a status line) and the user
//! re-triggers after correcting the input. Nothing is ever silently clamped
//! to a nearby valid value.

use thiserror::Error;

/// Primary error type for navigator operations.
#[derive(Error, Debug)]
pub enum NavigatorError {
    /// Requested floor falls outside the message list bounds.
    #[error("Floor {floor} is out of range (chat has {len} messages)")]
    OutOfRange {
        /// The requested floor.
        floor: usize,
        /// Message count at the time of the request.
        len: usize,
    },

    /// Navigation requested against a chat with no messages.
    #[error("Chat has no messages")]
    EmptyChat,

    /// First-loaded navigation requested with an empty loaded set.
    #[error("No messages are currently loaded")]
    NothingLoaded,

    /// A valid floor whose element is not currently rendered by the host.
    #[error("Message {floor} is not loaded")]
    NotLoaded {
        /// The floor that is not rendered.
        floor: usize,
    },

    /// Search found no matching message.
    #[error("No messages match \"{keyword}\"")]
    NoMatch {
        /// The keyword that failed to match.
        keyword: String,
    },

    /// Keyword could not be compiled into a match pattern.
    #[error("Invalid keyword: {message}")]
    InvalidKeyword {
        /// Human-readable error message.
        message: String,
    },

    /// Settings could not be deserialized.
    #[error("Invalid settings: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error while persisting or loading settings.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl NavigatorError {
    /// Create a new out-of-range error.
    #[must_use]
    pub fn out_of_range(floor: usize, len: usize) -> Self {
        Self::OutOfRange { floor, len }
    }

    /// Create a new no-match error.
    #[must_use]
    pub fn no_match(keyword: impl Into<String>) -> Self {
        Self::NoMatch {
            keyword: keyword.into(),
        }
    }

    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Check whether this error should be surfaced to the user as a toast.
    ///
    /// All navigation and search failures are; configuration and I/O
    /// failures belong to the embedding host's own error reporting.
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::EmptyChat
                | Self::NothingLoaded
                | Self::NotLoaded { .. }
                | Self::NoMatch { .. }
        )
    }
}

/// Result type alias for navigator operations.
pub type Result<T> = std::result::Result<T, NavigatorError>;

impl From<std::io::Error> for NavigatorError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

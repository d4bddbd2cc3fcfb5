//! message-navigator: search, highlight, and floor-jump navigation for chat message lists.
//!
//! This crate implements the decision core of a chat "message navigator"
//! panel: keyword search over the host's ordered message list, strictly
//! validated floor navigation, and lossless keyword highlighting. The host
//! application keeps ownership of the messages, the rendering, and the
//! persistence; the core consumes them through small trait seams and stays
//! independently testable.
//!
//! # Quick Start
//!
//! ```rust
//! use message_navigator::index::MessageIndex;
//! use message_navigator::navigation::NavigationController;
//! use message_navigator::search::SearchEngine;
//!
//! fn main() -> message_navigator::Result<()> {
//!     let chat = vec!["hello world", "foo", "hello again"];
//!     let index = MessageIndex::new(&chat);
//!
//!     let results = SearchEngine::default().search("hello", &index);
//!     assert_eq!(results.len(), 2);
//!
//!     let nav = NavigationController::new();
//!     let target = nav.jump_to(&index, results[0].floor)?;
//!     assert_eq!(target.floor, 0);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`model`]: message views, search results, validated navigation targets
//! - [`index`]: the host chat-store capability and its bounds-checked view
//! - [`search`]: keyword containment search, incremental or on-demand
//! - [`highlight`]: marker apply/clear as a pure text transformation
//! - [`navigation`]: first/last/first-loaded/jump-to resolution
//! - [`settings`]: the settings value and its accessor seam
//! - [`panel`]: thin dispatch from UI events to core calls and side effects
//! - [`error`]: error types and handling
//!
//! # Design rules
//!
//! The core never caches the message list across event callbacks: every
//! operation re-queries the store it is handed. Invalid floors are rejected
//! with an error, never clamped to the nearest valid one. All failures are
//! user-visible and non-fatal; the host re-triggers after correction.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod highlight;
pub mod index;
pub mod model;
pub mod navigation;
pub mod panel;
pub mod search;
pub mod settings;
pub mod util;

// Re-export commonly used types at the crate root
pub use error::{NavigatorError, Result};
pub use model::{Message, NavigationTarget, SearchResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module for convenient imports.
pub mod prelude {

    pub use crate::error::{NavigatorError, Result};
    pub use crate::highlight::Highlighter;
    pub use crate::index::{MessageIndex, MessageStore};
    pub use crate::model::{Message, NavigationTarget, SearchResult};
    pub use crate::navigation::NavigationController;
    pub use crate::panel::{Notifier, Panel, ScrollOutcome, ScrollSink};
    pub use crate::search::{CaseMatching, SearchEngine, SearchMode, SearchOptions};
    pub use crate::settings::{Settings, SettingsStore};
}

//! Read-only access to the host's ordered message list.
//!
//! The host chat store owns the messages; this module only defines the
//! capability the core needs from it ([`MessageStore`]) plus a thin
//! bounds-validating view ([`MessageIndex`]). The core re-queries the store
//! on every operation and never caches a length across event callbacks, so
//! a store that grows between keystrokes is always observed at its current
//! size.

use crate::error::{NavigatorError, Result};
use crate::model::Message;

/// Capability interface over the host's message list.
///
/// Implemented for plain slices and vectors of string-like items, so both
/// hosts and tests can hand the core an ordinary collection.
pub trait MessageStore {
    /// Number of messages currently in the chat.
    fn len(&self) -> usize;

    /// Text of the message at `floor`, or `None` when out of bounds.
    fn message_text(&self, floor: usize) -> Option<&str>;

    /// Check whether the chat has no messages.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: AsRef<str>> MessageStore for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn message_text(&self, floor: usize) -> Option<&str> {
        self.get(floor).map(AsRef::as_ref)
    }
}

impl<T: AsRef<str>> MessageStore for Vec<T> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn message_text(&self, floor: usize) -> Option<&str> {
        self.get(floor).map(AsRef::as_ref)
    }
}

impl<S: MessageStore + ?Sized> MessageStore for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn message_text(&self, floor: usize) -> Option<&str> {
        (**self).message_text(floor)
    }
}

/// Bounds-validating view over a [`MessageStore`].
///
/// Construct one per operation from a fresh store reference; holding it
/// across an async boundary such as a popup keystroke callback would defeat
/// the re-query rule.
#[derive(Debug, Clone, Copy)]
pub struct MessageIndex<'a, S: MessageStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: MessageStore + ?Sized> MessageIndex<'a, S> {
    /// Create an index over the given store.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Number of messages in the store right now.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check whether the chat has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Resolve a floor to a message view.
    ///
    /// Fails with [`NavigatorError::OutOfRange`] when `floor >= len()`;
    /// invalid floors are rejected, never clamped.
    pub fn at(&self, floor: usize) -> Result<Message> {
        match self.store.message_text(floor) {
            Some(text) => Ok(Message::new(floor, text)),
            None => Err(NavigatorError::out_of_range(floor, self.len())),
        }
    }

    /// Iterate over all messages in floor order.
    pub fn iter(&self) -> impl Iterator<Item = Message> + '_ {
        (0..self.len()).filter_map(|floor| {
            self.store
                .message_text(floor)
                .map(|text| Message::new(floor, text))
        })
    }
}

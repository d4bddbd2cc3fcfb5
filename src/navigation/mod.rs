//! Floor-jump resolution and bounds validation.
//!
//! Every request is validated against the index before a
//! [`NavigationTarget`] is produced. An out-of-range request is always a
//! reported failure, never coerced to the nearest valid floor.

use tracing::debug;

use crate::error::{NavigatorError, Result};
use crate::index::{MessageIndex, MessageStore};
use crate::model::NavigationTarget;

/// Resolve navigation requests against a message index.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationController;

impl NavigationController {
    /// Create a controller.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Target the first message ever (floor 0).
    pub fn first<S: MessageStore + ?Sized>(
        &self,
        index: &MessageIndex<'_, S>,
    ) -> Result<NavigationTarget> {
        if index.is_empty() {
            return Err(NavigatorError::EmptyChat);
        }
        Ok(NavigationTarget { floor: 0 })
    }

    /// Target the last message (floor `len - 1`).
    pub fn last<S: MessageStore + ?Sized>(
        &self,
        index: &MessageIndex<'_, S>,
    ) -> Result<NavigationTarget> {
        let len = index.len();
        if len == 0 {
            return Err(NavigatorError::EmptyChat);
        }
        Ok(NavigationTarget { floor: len - 1 })
    }

    /// Target the earliest message currently rendered by the host.
    ///
    /// With a virtualized chat, floor 0 is not always in the DOM; the host
    /// passes the floors it actually has rendered and navigation goes to
    /// their minimum. An empty loaded set is a reported failure.
    pub fn first_loaded<S: MessageStore + ?Sized>(
        &self,
        index: &MessageIndex<'_, S>,
        loaded: &[usize],
    ) -> Result<NavigationTarget> {
        let Some(&floor) = loaded.iter().min() else {
            return Err(NavigatorError::NothingLoaded);
        };
        self.jump_to(index, floor)
    }

    /// Target an arbitrary floor, validating it against current bounds.
    pub fn jump_to<S: MessageStore + ?Sized>(
        &self,
        index: &MessageIndex<'_, S>,
        floor: usize,
    ) -> Result<NavigationTarget> {
        let len = index.len();
        if floor >= len {
            debug!(floor, len, "Rejecting out-of-range navigation");
            return Err(NavigatorError::out_of_range(floor, len));
        }
        Ok(NavigationTarget { floor })
    }
}

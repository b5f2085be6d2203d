//! Single-open disclosure state keyed by item identity.
//!
//! A [`DisclosureController`] tracks which one item of a collection is open
//! (an expanded review thread, an accordion panel, a drawer). Every operation
//! is total: unknown identities simply compare as closed.

use std::fmt;

use tracing::trace;

pub mod collection;

pub use collection::{CollectionRenderer, Disclosable, DisclosureList};

/// Which item, if any, is currently open.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisclosureState<I> {
    Closed,
    Open(I),
}

impl<I> Default for DisclosureState<I> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<I: PartialEq> DisclosureState<I> {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    pub fn is_open(&self, identity: &I) -> bool {
        matches!(self, Self::Open(open) if open == identity)
    }

    pub fn open_identity(&self) -> Option<&I> {
        match self {
            Self::Closed => None,
            Self::Open(identity) => Some(identity),
        }
    }
}

impl<I> From<Option<I>> for DisclosureState<I> {
    fn from(value: Option<I>) -> Self {
        match value {
            Some(identity) => Self::Open(identity),
            None => Self::Closed,
        }
    }
}

/// Owns the open identity for exactly one collection.
///
/// Each independent list of disclosable items gets its own controller; the
/// controller is owned by value by its view so open identities never leak
/// between unrelated collections.
#[derive(Clone, PartialEq, Eq)]
pub struct DisclosureController<I> {
    state: DisclosureState<I>,
}

impl<I> Default for DisclosureController<I> {
    fn default() -> Self {
        Self {
            state: DisclosureState::Closed,
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for DisclosureController<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureController")
            .field("state", &self.state)
            .finish()
    }
}

impl<I> DisclosureController<I>
where
    I: Clone + PartialEq + fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller that starts with `identity` already open.
    pub fn with_open(identity: I) -> Self {
        Self {
            state: DisclosureState::Open(identity),
        }
    }

    /// Flips `identity`: closes it when it is the open item, otherwise makes
    /// it the open item (closing whatever was open before).
    pub fn toggle(&mut self, identity: I) -> DisclosureState<I> {
        let next = if self.state.is_open(&identity) {
            DisclosureState::Closed
        } else {
            DisclosureState::Open(identity)
        };
        trace!(from = ?self.state, to = ?next, "disclosure toggle");
        self.state = next;
        self.state.clone()
    }

    /// Makes `identity` the open item regardless of the current state.
    pub fn open(&mut self, identity: I) -> DisclosureState<I> {
        trace!(from = ?self.state, to = ?identity, "disclosure open");
        self.state = DisclosureState::Open(identity);
        self.state.clone()
    }

    /// Forces the closed state. Must be called whenever the backing
    /// collection is replaced.
    pub fn close(&mut self) -> DisclosureState<I> {
        if !self.state.is_closed() {
            trace!(from = ?self.state, "disclosure close");
        }
        self.state = DisclosureState::Closed;
        DisclosureState::Closed
    }

    pub fn is_open(&self, identity: &I) -> bool {
        self.state.is_open(identity)
    }

    pub fn current_state(&self) -> &DisclosureState<I> {
        &self.state
    }

    pub fn open_identity(&self) -> Option<&I> {
        self.state.open_identity()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

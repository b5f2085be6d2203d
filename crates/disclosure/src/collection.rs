//! Composition of domain items with their disclosure controller.

use std::fmt;

use tracing::debug;

use crate::{DisclosureController, DisclosureState};

/// A domain item the disclosure core can address. Only the identity is read.
pub trait Disclosable {
    type Id: Clone + PartialEq + fmt::Debug;

    fn disclosure_id(&self) -> Self::Id;
}

/// Turns one item plus its open flag into view output.
pub trait CollectionRenderer<T: Disclosable> {
    type Output;

    fn render_item(&self, item: &T, open: bool) -> Self::Output;

    /// One render pass: `is_open` is consulted exactly once per item.
    fn render_all(&self, items: &[T], controller: &DisclosureController<T::Id>) -> Vec<Self::Output> {
        items
            .iter()
            .map(|item| self.render_item(item, controller.is_open(&item.disclosure_id())))
            .collect()
    }
}

/// A collection together with the controller that owns its open identity.
#[derive(Debug, Clone)]
pub struct DisclosureList<T: Disclosable> {
    items: Vec<T>,
    controller: DisclosureController<T::Id>,
}

impl<T: Disclosable> Default for DisclosureList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            controller: DisclosureController::default(),
        }
    }
}

impl<T: Disclosable> DisclosureList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            controller: DisclosureController::new(),
        }
    }

    pub fn with_controller(items: Vec<T>, controller: DisclosureController<T::Id>) -> Self {
        Self { items, controller }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn controller(&self) -> &DisclosureController<T::Id> {
        &self.controller
    }

    pub fn toggle(&mut self, identity: T::Id) -> DisclosureState<T::Id> {
        self.controller.toggle(identity)
    }

    pub fn open(&mut self, identity: T::Id) -> DisclosureState<T::Id> {
        self.controller.open(identity)
    }

    pub fn close(&mut self) -> DisclosureState<T::Id> {
        self.controller.close()
    }

    pub fn is_open(&self, identity: &T::Id) -> bool {
        self.controller.is_open(identity)
    }

    /// The item whose identity is currently open, if it is still present.
    pub fn open_item(&self) -> Option<&T> {
        let open = self.controller.open_identity()?;
        self.items.iter().find(|item| &item.disclosure_id() == open)
    }

    /// Swaps in a refetched collection. The controller is closed first so a
    /// stale identity from the previous collection never reports open.
    pub fn replace(&mut self, items: Vec<T>) {
        self.controller.close();
        debug!(
            previous = self.items.len(),
            next = items.len(),
            "disclosure list replaced"
        );
        self.items = items;
    }

    pub fn iter_with_state(&self) -> impl Iterator<Item = (&T, bool)> + '_ {
        self.items
            .iter()
            .map(|item| (item, self.controller.is_open(&item.disclosure_id())))
    }

    pub fn render<R: CollectionRenderer<T>>(&self, renderer: &R) -> Vec<R::Output> {
        renderer.render_all(&self.items, &self.controller)
    }
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;

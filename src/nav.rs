//! Navigation capabilities supplied by the host.
//!
//! The product view only needs two things from whatever hosts it: the
//! identifier currently being shown and a way to go back. Keeping that as a
//! trait lets the view run under tests without a terminal.

use crate::catalog::ProductId;

pub trait Navigation: Send {
    /// Identifier of the current entry, if any.
    fn current_id(&self) -> Option<ProductId>;

    /// Return to the previous entry. Returns `false` when there is nothing
    /// to go back to.
    fn back(&mut self) -> bool;
}

/// Stack of visited product identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<ProductId>,
}

impl History {
    /// History starting at `id`, or empty when no identifier was given.
    pub fn starting_at(id: Option<ProductId>) -> Self {
        Self {
            entries: id.into_iter().collect(),
        }
    }

    /// Open `id` as a new entry. Re-opening the current entry is a no-op.
    pub fn push(&mut self, id: ProductId) {
        if self.entries.last() != Some(&id) {
            self.entries.push(id);
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }
}

impl Navigation for History {
    fn current_id(&self) -> Option<ProductId> {
        self.entries.last().cloned()
    }

    fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.entries.pop();
            true
        } else {
            false
        }
    }
}

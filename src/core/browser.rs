//! Cursor-based state machine for paging through search results.
//!
//! The browser owns the hit list (store indices) and a cursor over it, and
//! nothing else: rendering and input collection live in the CLI layer, which
//! drives the machine with [`BrowserAction`]s. This keeps every transition
//! unit-testable without a terminal.

/// Where the cursor is. `Viewing(slot)` indexes into the hit list, not the
/// store; the slot is always in `0..hits.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserState {
    Empty,
    Viewing(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    Previous,
    Next,
    Edit,
    Delete,
    Return,
}

#[derive(Debug)]
pub struct Browser {
    hits: Vec<usize>,
    state: BrowserState,
}

impl Browser {
    /// Build a browser over search hits (store indices, in store order).
    /// An empty hit list starts, and stays, in the `Empty` state.
    pub fn new(hits: Vec<usize>) -> Self {
        let state = if hits.is_empty() {
            BrowserState::Empty
        } else {
            BrowserState::Viewing(0)
        };
        Self { hits, state }
    }

    pub fn state(&self) -> BrowserState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Store index of the record under the cursor.
    pub fn current(&self) -> Option<usize> {
        match self.state {
            BrowserState::Viewing(slot) => Some(self.hits[slot]),
            BrowserState::Empty => None,
        }
    }

    /// The actions valid right now. Previous only exists past the first hit,
    /// Next only before the last one, so a single remaining hit offers just
    /// Edit, Delete and Return.
    pub fn actions(&self) -> Vec<BrowserAction> {
        let BrowserState::Viewing(slot) = self.state else {
            return Vec::new();
        };

        let mut actions = Vec::with_capacity(5);
        if slot > 0 {
            actions.push(BrowserAction::Previous);
        }
        if slot + 1 < self.hits.len() {
            actions.push(BrowserAction::Next);
        }
        actions.push(BrowserAction::Edit);
        actions.push(BrowserAction::Delete);
        actions.push(BrowserAction::Return);
        actions
    }

    /// Move to the next hit. Rejected (returns false) at the last hit.
    pub fn next(&mut self) -> bool {
        if let BrowserState::Viewing(slot) = self.state
            && slot + 1 < self.hits.len()
        {
            self.state = BrowserState::Viewing(slot + 1);
            return true;
        }
        false
    }

    /// Move to the previous hit. Rejected (returns false) at the first hit.
    pub fn previous(&mut self) -> bool {
        if let BrowserState::Viewing(slot) = self.state
            && slot > 0
        {
            self.state = BrowserState::Viewing(slot - 1);
            return true;
        }
        false
    }

    /// Drop the hit under the cursor after the caller removed the record
    /// from the store. Returns the removed store index. Hits pointing past
    /// the removed slot shift down by one to stay aligned with the store;
    /// the cursor lands on `max(0, slot - 1)`, or `Empty` when nothing is
    /// left.
    pub fn remove_current(&mut self) -> Option<usize> {
        let BrowserState::Viewing(slot) = self.state else {
            return None;
        };

        let removed = self.hits.remove(slot);
        for hit in self.hits.iter_mut() {
            if *hit > removed {
                *hit -= 1;
            }
        }

        self.state = if self.hits.is_empty() {
            BrowserState::Empty
        } else {
            BrowserState::Viewing(slot.saturating_sub(1))
        };

        Some(removed)
    }
}

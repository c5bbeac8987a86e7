//! Cyclic cursor over the flashcard sequence.

use crate::types::NavigatorState;

/// Flashcard cursor with a reveal toggle.
///
/// Navigation wraps around in both directions; there is no terminal state.
/// Moving to another card always hides its back.
#[derive(Debug, Clone)]
pub struct CardNavigator {
    len: usize,
    index: usize,
    revealed: bool,
}

impl CardNavigator {
    /// `len` is the card count; the catalog guarantees it is non-zero.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            revealed: false,
        }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.revealed = false;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.revealed = false;
    }

    /// Flip the current card without moving.
    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn state(&self) -> NavigatorState {
        NavigatorState {
            index: self.index,
            revealed: self.revealed,
        }
    }

    /// Back to the first card, hidden.
    pub fn reset(&mut self) {
        self.index = 0;
        self.revealed = false;
    }
}

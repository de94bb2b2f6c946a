//! Card carousel selection.
//!
//! The home screen pages cards horizontally; the selected index is derived
//! from the scroll offset at rest. Changing selection swaps the transactions
//! panel behind a fade, described here as a value (the animation itself is
//! the shell's job).

use crate::models::{CardRecord, Transaction, transactions_for_card};

/// Duration of each leg of the transactions-panel fade.
pub const FADE_LEG_MS: u64 = 150;

/// Fade-out/fade-in transition descriptor (opacity 1 -> 0 -> 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTransition {
    pub fade_out_ms: u64,
    pub fade_in_ms: u64,
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self {
            fade_out_ms: FADE_LEG_MS,
            fade_in_ms: FADE_LEG_MS,
        }
    }
}

/// Map a resting scroll offset to a page index.
///
/// Offset over viewport width, rounded to nearest, clamped to the deck.
/// `None` for an empty deck or a non-positive viewport width.
#[must_use]
pub fn page_index(scroll_offset: f32, viewport_width: f32, deck_len: usize) -> Option<usize> {
    if deck_len == 0 || viewport_width <= 0.0 || !scroll_offset.is_finite() {
        return None;
    }

    let raw = (scroll_offset / viewport_width).round().max(0.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped non-negative
    let index = raw as usize;
    Some(index.min(deck_len - 1))
}

/// The carousel's deck and current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CardCarousel {
    cards: Vec<CardRecord>,
    selected: usize,
}

impl CardCarousel {
    /// Build a carousel with the first card selected.
    #[must_use]
    pub const fn new(cards: Vec<CardRecord>) -> Self {
        Self { cards, selected: 0 }
    }

    /// The deck.
    #[must_use]
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Currently selected index.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Currently selected card, if the deck is non-empty.
    #[must_use]
    pub fn selected_card(&self) -> Option<&CardRecord> {
        self.cards.get(self.selected)
    }

    /// Append a freshly added card to the deck.
    pub fn push(&mut self, card: CardRecord) {
        self.cards.push(card);
    }

    /// Update selection from a resting scroll position.
    ///
    /// Returns the fade transition when the selection actually changed,
    /// `None` when it stayed put (including the empty-deck no-op).
    pub fn settle_scroll(&mut self, scroll_offset: f32, viewport_width: f32) -> Option<FadeTransition> {
        let index = page_index(scroll_offset, viewport_width, self.cards.len())?;
        if index == self.selected {
            return None;
        }

        self.selected = index;
        tracing::debug!(index, "carousel selection changed");
        Some(FadeTransition::default())
    }

    /// The selected card's mock transaction feed (empty beyond card 1).
    #[must_use]
    pub fn transactions(&self) -> Vec<Transaction> {
        transactions_for_card(self.selected)
    }
}

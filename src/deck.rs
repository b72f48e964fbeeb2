//! Card sources: the single 52-card deck the round is dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A source of cards the engine deals from.
///
/// The engine calls [`reset`](CardSource::reset) at the start of every round
/// and then draws one card at a time. An empty source is not an error on its
/// own; callers decide what exhaustion means for the action in progress.
pub trait CardSource {
    /// Discards any remaining cards and rebuilds a freshly shuffled set.
    fn reset(&mut self);

    /// Removes and returns the top card, or `None` if the source is exhausted.
    fn draw(&mut self) -> Option<Card>;

    /// Returns the number of cards left.
    fn remaining(&self) -> usize;
}

/// Returns the 52 cards of a standard deck in suit-major order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// A single deck shuffled with an injected random number generator.
///
/// Draws come from the end of the shuffled sequence.
#[derive(Debug, Clone)]
pub struct Deck<R> {
    cards: Vec<Card>,
    rng: R,
}

impl<R: Rng> Deck<R> {
    /// Creates a deck that shuffles with `rng` and deals a first shuffle
    /// immediately.
    #[must_use]
    pub fn new(rng: R) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.reset();
        deck
    }

    /// Returns the remaining cards, bottom first; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl<R: Rng> CardSource for Deck<R> {
    fn reset(&mut self) {
        self.cards = standard_deck();
        // Fisher-Yates: i from last down to 1, j uniform in [0, i].
        self.cards.shuffle(&mut self.rng);
        tracing::debug!(cards = self.cards.len(), "deck reshuffled");
    }

    fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if card.is_none() {
            tracing::warn!("draw from exhausted deck");
        }
        card
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn standard_deck_has_every_card_once() {
        let cards = standard_deck();
        assert_eq!(cards.len(), DECK_SIZE);
        for (i, a) in cards.iter().enumerate() {
            assert!(cards[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn draw_empties_then_reports_exhaustion() {
        let mut deck = Deck::new(ChaCha8Rng::seed_from_u64(3));
        for left in (0..DECK_SIZE).rev() {
            assert!(deck.draw().is_some());
            assert_eq!(deck.remaining(), left);
        }
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn reset_discards_leftovers() {
        let mut deck = Deck::new(ChaCha8Rng::seed_from_u64(9));
        deck.draw();
        deck.draw();
        deck.reset();
        assert_eq!(deck.remaining(), DECK_SIZE);
    }
}

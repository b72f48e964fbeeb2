//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Largest total a hand can hold without busting.
pub const BLACKJACK: u16 = 21;

/// Computes the best blackjack total of `cards`.
///
/// Every card adds its score (aces count 11). While the total is over 21 and
/// an ace is still counted as 11, that ace is reduced to 1. A hand that
/// busts with every ace at 1 reports that minimum total.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    let mut value: u16 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u16::from(card.score()));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// Returns whether `cards` total more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The face-down card is kept apart from the visible cards until it is
/// revealed. It never counts toward [`visible_value`](Self::visible_value)
/// but always counts toward [`value`](Self::value).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Face-up cards, in the order they were dealt or revealed.
    cards: Vec<Card>,
    /// The face-down card, if one is still hidden.
    hole: Option<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole: None,
        }
    }

    /// Adds a face-up card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Places the face-down card.
    pub const fn set_hole(&mut self, card: Card) {
        self.hole = Some(card);
    }

    /// Returns the face-up cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-down card, if it has not been revealed yet.
    #[must_use]
    pub const fn hole(&self) -> Option<Card> {
        self.hole
    }

    /// Returns whether a card is still face down.
    #[must_use]
    pub const fn has_hidden_card(&self) -> bool {
        self.hole.is_some()
    }

    /// Turns the face-down card over.
    ///
    /// Returns the revealed card. Once the slot is empty further calls do
    /// nothing and return `None`.
    pub fn reveal_hole(&mut self) -> Option<Card> {
        let card = self.hole.take()?;
        self.cards.push(card);
        Some(card)
    }

    /// Value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Full value of the hand, including any face-down card.
    #[must_use]
    pub fn value(&self) -> u16 {
        match self.hole {
            Some(hole) => {
                let mut all = self.cards.clone();
                all.push(hole);
                hand_value(&all)
            }
            None => hand_value(&self.cards),
        }
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards, including any face-down card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() + usize::from(self.hole.is_some())
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.hole.is_none()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole = None;
    }
}

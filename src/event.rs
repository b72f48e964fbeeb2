//! Intents coming in from the presentation layer and events going out to it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::game::Phase;

/// A request from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Add one bet unit to the current bet.
    PlaceBet,
    /// Shuffle and deal the opening hands.
    StartRound,
    /// Draw a card for the player.
    Hit,
    /// End the player's turn and let the dealer play.
    Stick,
    /// Clear the table for another round.
    PlayAgain,
    /// Restore the starting bankroll and clear the table.
    ResetSession,
}

impl Intent {
    /// All intents, in the order a round uses them.
    pub const ALL: [Self; 6] = [
        Self::PlaceBet,
        Self::StartRound,
        Self::Hit,
        Self::Stick,
        Self::PlayAgain,
        Self::ResetSession,
    ];
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PlaceBet => "Place bet",
            Self::StartRound => "Start round",
            Self::Hit => "Hit",
            Self::Stick => "Stick",
            Self::PlayAgain => "Play again",
            Self::ResetSession => "Reset",
        };
        f.write_str(name)
    }
}

/// What the presentation layer may show of the table.
///
/// This is an owned copy; it never borrows from the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The dealer's face-up cards.
    pub dealer_cards: Vec<Card>,
    /// Whether the dealer still has a card face down.
    pub dealer_hidden: bool,
    /// The player's hand value.
    pub player_value: u16,
    /// The value of the dealer's face-up cards.
    pub dealer_value: u16,
}

/// A state change the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// New bankroll.
    BankrollChanged(usize),
    /// New current bet.
    BetChanged(usize),
    /// Status line for the player.
    Info(String),
    /// New table contents.
    HandsUpdated(TableView),
    /// New phase.
    PhaseChanged(Phase),
}

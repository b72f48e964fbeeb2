//! Error types for game operations.
//!
//! Every error leaves the round untouched, except
//! [`ActionError::DeckExhausted`] which ends the round in progress.

use alloc::format;
use alloc::string::String;

use thiserror::Error;

use crate::event::Intent;

/// Player-facing text for a rejected intent.
pub trait Notice {
    /// Message shown to the player after `intent` failed with this error.
    fn notice(&self, intent: Intent) -> String;
}

fn unavailable(intent: Intent) -> String {
    format!("{intent} is not available right now")
}

/// Errors that can occur while placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only accepted before the round starts.
    #[error("invalid game state for betting")]
    InvalidTransition,
    /// Bankroll is below the bet unit.
    #[error("insufficient funds")]
    InsufficientFunds,
}

impl Notice for BetError {
    fn notice(&self, intent: Intent) -> String {
        match self {
            Self::InvalidTransition => unavailable(intent),
            Self::InsufficientFunds => "Not enough money!".into(),
        }
    }
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already running or has not been cleared.
    #[error("invalid game state for dealing")]
    InvalidTransition,
    /// No bet has been placed.
    #[error("no bet placed")]
    NoBetPlaced,
    /// The card source cannot supply the opening four cards.
    #[error("not enough cards to deal")]
    DeckExhausted,
}

impl Notice for DealError {
    fn notice(&self, intent: Intent) -> String {
        match self {
            Self::InvalidTransition => unavailable(intent),
            Self::NoBetPlaced => "Please place a bet first!".into(),
            Self::DeckExhausted => "Deck is empty!".into(),
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidTransition,
    /// No cards left; the round ended and the bet was forfeited.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl Notice for ActionError {
    fn notice(&self, intent: Intent) -> String {
        match self {
            Self::InvalidTransition => unavailable(intent),
            Self::DeckExhausted => "Deck is empty!".into(),
        }
    }
}

/// Errors that can occur when moving between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The round has not finished, or the bankroll cannot cover a bet.
    #[error("invalid game state for a new round")]
    InvalidTransition,
}

impl Notice for SessionError {
    fn notice(&self, intent: Intent) -> String {
        match self {
            Self::InvalidTransition => unavailable(intent),
        }
    }
}

//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a betting round against a
//! persistent bankroll: bet, deal, hit or stick, dealer play, and payout.
//! Rendering is left to the caller, which sends [`Intent`]s and renders the
//! [`GameEvent`]s that come back.
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet().unwrap();
//! game.start_round().unwrap();
//! assert_eq!(game.phase(), Phase::PlayerTurn);
//! assert_eq!(game.player_hand().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{CardSource, Deck};
pub use error::{ActionError, BetError, DealError, Notice, SessionError};
pub use event::{GameEvent, Intent, TableView};
pub use game::{Game, Phase, RoundState};
pub use hand::{DealerHand, Hand, hand_value};
pub use options::GameOptions;
pub use result::{RoundOutcome, RoundResult};

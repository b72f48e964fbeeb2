//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::{CardSource, Deck};
use crate::error::Notice;
use crate::event::{GameEvent, Intent, TableView};
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use state::{Phase, RoundState};

/// A single-player blackjack engine that manages the bankroll, betting, and
/// round flow.
///
/// The game owns the card source and the round state. Every intent runs to
/// completion and records [`GameEvent`]s for the presentation layer, which
/// collects them with [`take_events`](Self::take_events). Rejected intents
/// leave the state as it was and only record an [`GameEvent::Info`] message.
#[derive(Debug)]
pub struct Game<S = Deck<ChaCha8Rng>> {
    /// Cards the round is dealt from.
    source: S,
    /// Game options.
    options: GameOptions,
    /// Bankroll, bet, hands and phase.
    round: RoundState,
    /// Result of the most recently finished round.
    last_result: Option<RoundResult>,
    /// Events not yet collected by the presentation layer.
    events: Vec<GameEvent>,
}

impl Game {
    /// Creates a new game whose deck is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.bankroll(), 100);
    /// assert_eq!(game.phase(), Phase::AwaitingBet);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, Deck::new(ChaCha8Rng::seed_from_u64(seed)))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a new game that deals from `source`.
    #[must_use]
    pub fn with_source(options: GameOptions, source: S) -> Self {
        Self {
            source,
            options,
            round: RoundState::new(options.starting_bankroll),
            last_result: None,
            events: Vec::new(),
        }
    }

    /// Runs one intent and returns the events it produced.
    ///
    /// Errors are not returned here; they show up as [`GameEvent::Info`].
    pub fn dispatch(&mut self, intent: Intent) -> Vec<GameEvent> {
        let accepted = match intent {
            Intent::PlaceBet => self.place_bet().is_ok(),
            Intent::StartRound => self.start_round().is_ok(),
            Intent::Hit => self.hit().is_ok(),
            Intent::Stick => self.stick().is_ok(),
            Intent::PlayAgain => self.play_again().is_ok(),
            Intent::ResetSession => {
                self.reset_session();
                true
            }
        };
        tracing::debug!(%intent, accepted, "intent dispatched");
        self.take_events()
    }

    /// Returns whether `intent` is accepted in the current phase.
    pub const fn can(&self, intent: Intent) -> bool {
        self.round.phase.permits(intent)
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.round.phase
    }

    /// Returns the current bankroll.
    pub const fn bankroll(&self) -> usize {
        self.round.bankroll
    }

    /// Returns the current bet.
    pub const fn bet(&self) -> usize {
        self.round.bet
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.round.player.clone()
    }

    /// Returns a clone of the dealer's hand, face-down card included.
    pub fn dealer_hand(&self) -> DealerHand {
        self.round.dealer.clone()
    }

    /// Returns the result of the most recently finished round.
    ///
    /// Cleared when the table is cleared for the next round.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards remaining in the card source.
    pub fn cards_remaining(&self) -> usize {
        self.source.remaining()
    }

    /// Returns what the presentation layer may show of the table.
    pub fn table_view(&self) -> TableView {
        let player = &self.round.player;
        let dealer = &self.round.dealer;
        TableView {
            player_cards: player.cards().to_vec(),
            dealer_cards: dealer.cards().to_vec(),
            dealer_hidden: dealer.has_hidden_card(),
            player_value: player.value(),
            dealer_value: dealer.visible_value(),
        }
    }

    /// Draws a card from the card source.
    fn draw(&mut self) -> Option<Card> {
        let card = self.source.draw();
        if let Some(card) = card {
            tracing::debug!(%card, remaining = self.source.remaining(), "card drawn");
        }
        card
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn info(&mut self, message: impl Into<String>) {
        self.emit(GameEvent::Info(message.into()));
    }

    fn emit_hands(&mut self) {
        let view = self.table_view();
        self.emit(GameEvent::HandsUpdated(view));
    }

    fn emit_money(&mut self) {
        self.emit(GameEvent::BankrollChanged(self.round.bankroll));
        self.emit(GameEvent::BetChanged(self.round.bet));
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.round.phase != phase {
            tracing::debug!(from = ?self.round.phase, to = ?phase, "phase changed");
            self.round.phase = phase;
            self.emit(GameEvent::PhaseChanged(phase));
        }
    }

    /// Records a rejected intent and hands the error back.
    fn reject<E: Notice + core::fmt::Debug>(&mut self, intent: Intent, err: E) -> E {
        tracing::debug!(%intent, ?err, "intent rejected");
        let notice = err.notice(intent);
        self.info(notice);
        err
    }

    /// Stores the result and moves to the end-of-round phase.
    fn finish_round(&mut self, result: RoundResult) {
        tracing::info!(
            outcome = ?result.outcome,
            bet = result.bet,
            payout = result.payout,
            player = result.player_value,
            dealer = result.dealer_value,
            bankroll = self.round.bankroll,
            "round finished"
        );
        self.last_result = Some(result);
        self.emit_hands();
        let phase = self.round.end_phase(self.options.bet_unit);
        self.set_phase(phase);
    }
}

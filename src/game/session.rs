use crate::deck::CardSource;
use crate::error::SessionError;
use crate::event::{GameEvent, Intent};

use super::{Game, Phase};

impl<S: CardSource> Game<S> {
    /// Clears the table after a finished round and waits for a new bet.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round has been resolved with money left
    /// in the bankroll.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        if !self.can(Intent::PlayAgain) {
            let err = SessionError::InvalidTransition;
            return Err(self.reject(Intent::PlayAgain, err));
        }

        self.new_round();
        Ok(())
    }

    /// Restores the starting bankroll and clears the table.
    ///
    /// Accepted in every phase. A bet still on the table is discarded.
    pub fn reset_session(&mut self) {
        self.round.bankroll = self.options.starting_bankroll;
        tracing::info!(bankroll = self.round.bankroll, "session reset");
        self.emit(GameEvent::BankrollChanged(self.round.bankroll));
        self.new_round();
    }

    fn new_round(&mut self) {
        self.round.clear_round();
        self.last_result = None;
        self.source.reset();

        self.emit(GameEvent::BetChanged(0));
        self.emit(GameEvent::PhaseChanged(Phase::AwaitingBet));
        self.emit_hands();
        self.info("Place your bet!");
    }
}

use crate::deck::CardSource;
use crate::error::{BetError, DealError};
use crate::event::Intent;

use super::{Game, Phase};

/// Cards needed for the opening deal: two for the dealer, two for the player.
const OPENING_CARDS: usize = 4;

impl<S: CardSource> Game<S> {
    /// Adds one bet unit to the current bet.
    ///
    /// Bets accumulate until the round starts. Returns the new current bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet or the bankroll is
    /// below the bet unit. The state is unchanged in both cases.
    pub fn place_bet(&mut self) -> Result<usize, BetError> {
        if !self.can(Intent::PlaceBet) {
            let err = BetError::InvalidTransition;
            return Err(self.reject(Intent::PlaceBet, err));
        }

        let unit = self.options.bet_unit;
        if self.round.bankroll < unit {
            let err = BetError::InsufficientFunds;
            return Err(self.reject(Intent::PlaceBet, err));
        }

        self.round.bankroll -= unit;
        self.round.bet += unit;
        tracing::debug!(bet = self.round.bet, bankroll = self.round.bankroll, "bet placed");

        self.emit_money();
        self.info("Bet placed! Start the game!");

        Ok(self.round.bet)
    }

    /// Shuffles a fresh deck and deals the opening hands.
    ///
    /// The dealer gets one face-up and one face-down card, then the player
    /// gets two face-up cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet, no bet has been
    /// placed, or the card source cannot supply the opening cards. The bet
    /// and bankroll are unchanged in every case.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if !self.can(Intent::StartRound) {
            let err = DealError::InvalidTransition;
            return Err(self.reject(Intent::StartRound, err));
        }

        if self.round.bet == 0 {
            let err = DealError::NoBetPlaced;
            return Err(self.reject(Intent::StartRound, err));
        }

        self.source.reset();
        if self.source.remaining() < OPENING_CARDS {
            let err = DealError::DeckExhausted;
            return Err(self.reject(Intent::StartRound, err));
        }

        let (Some(up), Some(hole), Some(first), Some(second)) =
            (self.draw(), self.draw(), self.draw(), self.draw())
        else {
            let err = DealError::DeckExhausted;
            return Err(self.reject(Intent::StartRound, err));
        };

        self.last_result = None;
        self.round.player.clear();
        self.round.dealer.clear();

        self.round.dealer.add_card(up);
        self.round.dealer.set_hole(hole);
        self.round.player.add_card(first);
        self.round.player.add_card(second);

        tracing::info!(bet = self.round.bet, "round started");

        self.set_phase(Phase::PlayerTurn);
        self.emit_hands();
        self.info("Your turn!");

        Ok(())
    }
}

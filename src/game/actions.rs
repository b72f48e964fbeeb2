use alloc::format;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::ActionError;
use crate::event::{GameEvent, Intent};
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, Phase};

impl<S: CardSource> Game<S> {
    /// Player action: Hit (draw a card).
    ///
    /// If the new card takes the hand over 21 the dealer's card is revealed,
    /// the bet is lost and the round ends.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidTransition`] outside the player's turn,
    /// leaving the state unchanged.
    ///
    /// Returns [`ActionError::DeckExhausted`] if no card is left. Unlike the
    /// other errors this ends the round: the bet is forfeited without a
    /// showdown.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if !self.can(Intent::Hit) {
            let err = ActionError::InvalidTransition;
            return Err(self.reject(Intent::Hit, err));
        }

        let Some(card) = self.draw() else {
            tracing::warn!(bet = self.round.bet, "deck exhausted on hit, bet forfeited");
            self.end_early(RoundOutcome::Forfeit);
            let err = ActionError::DeckExhausted;
            return Err(self.reject(Intent::Hit, err));
        };

        self.round.player.add_card(card);

        if self.round.player.is_bust() {
            let bet = self.round.bet;
            self.end_early(RoundOutcome::Bust);
            self.info(format!("You bust! You lost ${bet}"));
        } else {
            self.emit_hands();
            self.info("You drew a card");
        }

        Ok(card)
    }

    /// Player action: Stick (keep the current hand).
    ///
    /// Reveals the dealer's card, lets the dealer draw, and settles the bet.
    ///
    /// # Errors
    ///
    /// Returns an error outside the player's turn, leaving the state
    /// unchanged.
    pub fn stick(&mut self) -> Result<RoundResult, ActionError> {
        if !self.can(Intent::Stick) {
            let err = ActionError::InvalidTransition;
            return Err(self.reject(Intent::Stick, err));
        }

        self.round.dealer.reveal_hole();
        self.set_phase(Phase::DealerTurn);
        self.emit_hands();

        let drawn = self.dealer_play();
        tracing::debug!(drawn = drawn.len(), "dealer finished drawing");

        Ok(self.settle())
    }

    /// Ends the round before the dealer plays; the bet is lost.
    fn end_early(&mut self, outcome: RoundOutcome) {
        self.round.dealer.reveal_hole();

        let bet = self.round.bet;
        self.round.bet = 0;
        self.emit(GameEvent::BetChanged(0));

        self.finish_round(RoundResult {
            outcome,
            bet,
            payout: 0,
            player_value: self.round.player.value(),
            dealer_value: self.round.dealer.value(),
        });
    }
}

use alloc::format;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::CardSource;
use crate::result::{RoundOutcome, RoundResult};

use super::Game;

/// Compares final values. The player is never bust here.
const fn outcome(player_value: u16, dealer_value: u16) -> RoundOutcome {
    if dealer_value > 21 || player_value > dealer_value {
        RoundOutcome::Win
    } else if player_value < dealer_value {
        RoundOutcome::Lose
    } else {
        RoundOutcome::Push
    }
}

impl<S: CardSource> Game<S> {
    /// Dealer draws until reaching the stand value.
    ///
    /// Drawing is best effort: if the card source runs out the dealer stops
    /// and the hand is settled as it stands.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Vec<Card> {
        let mut drawn_cards = Vec::new();

        while self.round.dealer.value() < self.options.dealer_stands_on {
            let Some(card) = self.draw() else {
                tracing::warn!(
                    dealer = self.round.dealer.value(),
                    "deck exhausted during dealer play, settling as is"
                );
                break;
            };
            self.round.dealer.add_card(card);
            drawn_cards.push(card);
            self.emit_hands();
        }

        drawn_cards
    }

    /// Compares hands, pays out, and ends the round.
    pub(super) fn settle(&mut self) -> RoundResult {
        let player_value = self.round.player.value();
        let dealer_value = self.round.dealer.value();
        let bet = self.round.bet;

        let outcome = outcome(player_value, dealer_value);
        let (payout, verdict) = match outcome {
            RoundOutcome::Win => (bet * 2, format!("You win! You earned ${}", bet * 2)),
            RoundOutcome::Push => (bet, format!("Push! You get back ${bet}")),
            RoundOutcome::Lose | RoundOutcome::Bust | RoundOutcome::Forfeit => {
                (0, format!("Dealer wins! You lost ${bet}"))
            }
        };

        self.round.bankroll += payout;
        self.round.bet = 0;
        self.emit_money();

        let result = RoundResult {
            outcome,
            bet,
            payout,
            player_value,
            dealer_value,
        };
        self.finish_round(result);
        self.info(format!(
            "You: {player_value} | Dealer: {dealer_value}\n{verdict}"
        ));

        result
    }
}

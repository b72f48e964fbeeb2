//! Round phase and the state carried between intents.

use crate::event::Intent;
use crate::hand::{DealerHand, Hand};

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Accepting bets for the next round.
    AwaitingBet,
    /// Waiting for the player to hit or stick.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the bankroll can fund another one.
    Resolved,
    /// Round has ended and the bankroll cannot cover another bet; only a
    /// full reset continues.
    Bankrupt,
}

impl Phase {
    /// Returns whether `intent` is accepted in this phase.
    #[must_use]
    pub const fn permits(self, intent: Intent) -> bool {
        match intent {
            Intent::PlaceBet | Intent::StartRound => matches!(self, Self::AwaitingBet),
            Intent::Hit | Intent::Stick => matches!(self, Self::PlayerTurn),
            Intent::PlayAgain => matches!(self, Self::Resolved),
            Intent::ResetSession => true,
        }
    }
}

/// Bankroll, bet, hands and phase of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Money the player can still bet.
    pub bankroll: usize,
    /// Amount staked on the current round (0 when no bet is active).
    pub bet: usize,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand, including the face-down card.
    pub dealer: DealerHand,
    /// Current phase.
    pub phase: Phase,
}

impl RoundState {
    /// Creates the state for a new session.
    #[must_use]
    pub const fn new(bankroll: usize) -> Self {
        Self {
            bankroll,
            bet: 0,
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: Phase::AwaitingBet,
        }
    }

    /// Clears bet and hands and waits for the next bet.
    pub fn clear_round(&mut self) {
        self.bet = 0;
        self.player.clear();
        self.dealer.clear();
        self.phase = Phase::AwaitingBet;
    }

    /// Phase a finished round settles into.
    ///
    /// A bankroll that cannot cover one more `bet_unit` is bankrupt.
    #[must_use]
    pub const fn end_phase(&self, bet_unit: usize) -> Phase {
        if self.bankroll == 0 || self.bankroll < bet_unit {
            Phase::Bankrupt
        } else {
            Phase::Resolved
        }
    }
}

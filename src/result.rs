//! Round result types.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Dealer busts or player has the higher value.
    Win,
    /// Dealer has the higher value.
    Lose,
    /// Equal values; the stake is returned.
    Push,
    /// Player went over 21 on a hit.
    Bust,
    /// The deck ran out on a hit; the bet is lost without a showdown.
    Forfeit,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet that was at stake.
    pub bet: usize,
    /// Amount credited back to the bankroll (0 on a loss).
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value, face-down card included.
    pub dealer_value: u16,
}

impl RoundResult {
    /// Net change for the player over the whole round.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

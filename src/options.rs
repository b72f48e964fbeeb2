//! Game configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(200)
///     .with_bet_unit(25)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Bankroll at the start of a session and after a full reset.
    pub starting_bankroll: usize,
    /// Amount added to the current bet by each bet placement.
    pub bet_unit: usize,
    /// The dealer keeps drawing while its total is below this value.
    pub dealer_stands_on: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 100,
            bet_unit: 10,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the bet unit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet_unit(5);
    /// assert_eq!(options.bet_unit, 5);
    /// ```
    #[must_use]
    pub const fn with_bet_unit(mut self, unit: usize) -> Self {
        self.bet_unit = unit;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u16) -> Self {
        self.dealer_stands_on = value;
        self
    }
}

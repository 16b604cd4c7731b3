//! Round configuration options.

/// Balance the player starts with.
pub const STARTING_BALANCE: i64 = 200;

/// Bet shown before the player locks one in.
pub const DEFAULT_BET: i64 = 10;

/// Configuration options for a blackjack round engine.
///
/// The dealer's draw policy (stand on 17 and above) is fixed and not an
/// option. Use the builder pattern to customize the rest:
///
/// ```
/// use twentyone::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_starting_balance(500)
///     .with_default_bet(25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Balance the player starts with.
    pub starting_balance: i64,
    /// Bet used before the player locks one in.
    pub default_bet: i64,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            default_bet: DEFAULT_BET,
        }
    }
}

impl RoundOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_starting_balance(500);
    /// assert_eq!(options.starting_balance, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the default bet.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_default_bet(25);
    /// assert_eq!(options.default_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, bet: i64) -> Self {
        self.default_bet = bet;
        self
    }
}

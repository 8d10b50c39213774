//! Game configuration options.

use crate::error::OptionsError;

/// Highest supported bust limit.
///
/// A player stops below the bust limit plus one card, and the dealer below
/// the dealer limit plus one card. With both limits in range the two totals
/// together stay far below the 380 points in a deck, so a round can never
/// run out of cards.
pub const MAX_BUST_LIMIT: u8 = 100;

/// Configuration options for a round.
///
/// The defaults are the standard limits: bust above 21, dealer draws
/// below 17. Use the builder methods to customize them:
///
/// ```
/// use blackjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_bust_limit(21)
///     .with_dealer_limit(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Highest score that does not bust. The player is no longer asked to
    /// hit once their score reaches it.
    pub bust_limit: u8,
    /// The dealer keeps drawing while their score is below this value.
    pub dealer_limit: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            bust_limit: 21,
            dealer_limit: 17,
        }
    }
}

impl GameOptions {
    /// Sets the bust limit.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_bust_limit(31);
    /// assert_eq!(options.bust_limit, 31);
    /// ```
    #[must_use]
    pub const fn with_bust_limit(mut self, limit: u8) -> Self {
        self.bust_limit = limit;
        self
    }

    /// Sets the score below which the dealer must draw.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_limit(16);
    /// assert_eq!(options.dealer_limit, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_limit(mut self, limit: u8) -> Self {
        self.dealer_limit = limit;
        self
    }

    /// Checks that a round played with these options cannot exhaust the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the bust limit is above [`MAX_BUST_LIMIT`] or the
    /// dealer limit is more than one above the bust limit.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{GameOptions, OptionsError};
    ///
    /// assert!(GameOptions::default().validate().is_ok());
    /// assert_eq!(
    ///     GameOptions::default().with_bust_limit(200).validate(),
    ///     Err(OptionsError::BustLimitTooHigh)
    /// );
    /// ```
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.bust_limit > MAX_BUST_LIMIT {
            return Err(OptionsError::BustLimitTooHigh);
        }
        if self.dealer_limit as u16 > self.bust_limit as u16 + 1 {
            return Err(OptionsError::DealerLimitTooHigh);
        }
        Ok(())
    }
}

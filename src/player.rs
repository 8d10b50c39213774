//! Running score for one side of the table.

use crate::card::Card;

/// A participant's running score.
///
/// Both the player and the dealer use this type. Only the total is kept;
/// the cards themselves are not retained. A `u16` holds the point total of
/// the whole deck (380), so the score is never capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    score: u16,
}

impl Player {
    /// Creates a participant with a score of zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { score: 0 }
    }

    /// Adds the card's value to the score and returns the new score.
    pub const fn take(&mut self, card: Card) -> u16 {
        self.score += card.value() as u16;
        self.score
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Returns whether the score is over `limit`.
    #[must_use]
    pub const fn is_bust(&self, limit: u8) -> bool {
        self.score > limit as u16
    }
}

//! Round result types.

/// Result of the round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (player busts, dealer has the higher score, or the
    /// scores are equal).
    Lose,
}

impl Outcome {
    /// Returns whether the player won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u16,
    /// The dealer's final score.
    pub dealer_score: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer's turn was played.
    pub dealer_played: bool,
    /// Number of cards dealt from the deck during the round.
    pub cards_dealt: usize,
}

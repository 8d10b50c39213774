//! Game state types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the opening cards to be dealt.
    Dealing,
    /// Waiting for the player to finish hitting.
    PlayerTurn,
    /// Dealer plays out their score.
    DealerTurn,
    /// Round has ended and the result can be read.
    RoundOver,
}

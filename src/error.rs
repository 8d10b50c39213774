//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is not allowed in the current game state.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// The game options could run the deck out of cards.
    #[error("invalid game options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// Errors that can occur while validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Bust limit is above the supported maximum.
    #[error("bust limit is above the supported maximum")]
    BustLimitTooHigh,
    /// Dealer limit is more than one above the bust limit.
    #[error("dealer limit is more than one above the bust limit")]
    DealerLimitTooHigh,
}

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card was requested more than once.
    #[error("card appears more than once")]
    DuplicateCard,
}

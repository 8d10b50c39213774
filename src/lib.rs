//! A single-deck blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays one simplified round:
//! the dealer shows one card, the player gets two and hits or stands, then
//! the dealer draws to 17. Only running totals are kept and aces always
//! count as 11.
//!
//! # Example
//!
//! ```
//! use blackjack::{Action, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut stand = |_score: u16| Action::Stand;
//! let result = game.play(&mut stand, &mut ()).unwrap();
//! assert!(result.dealer_played || result.player_bust);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod prompt;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, GameError, OptionsError};
pub use event::{Action, Event, Observer, PlayerInput};
pub use game::{Game, GameState};
pub use options::{GameOptions, MAX_BUST_LIMIT};
pub use player::Player;
#[cfg(feature = "std")]
pub use prompt::Prompt;
pub use result::{Outcome, RoundResult};

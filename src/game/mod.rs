//! Round engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::GameError;
use crate::event::{Observer, PlayerInput};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{Outcome, RoundResult};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single round of blackjack between one player and the dealer.
///
/// The game owns the deck and both running scores. A round is driven either
/// in one call with [`Game::play`], or step by step with [`Game::deal`],
/// [`Game::player_turn`], [`Game::dealer_turn`] and [`Game::result`].
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    deck: Deck,
    state: GameState,
    player: Player,
    dealer: Player,
    dealer_played: bool,
}

impl Game {
    /// Creates a new game whose deck is shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.deck().remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a new game whose deck is shuffled with a caller-supplied RNG.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::with_deck(options, deck)
    }

    /// Creates a new game that deals from `deck` exactly as given.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            state: GameState::Dealing,
            player: Player::new(),
            dealer: Player::new(),
            dealer_played: false,
        }
    }

    /// Plays the whole round.
    ///
    /// The dealer's turn is skipped when the player busts.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started or the game options
    /// are invalid.
    pub fn play<I, O>(&mut self, input: &mut I, observer: &mut O) -> Result<RoundResult, GameError>
    where
        I: PlayerInput + ?Sized,
        O: Observer + ?Sized,
    {
        self.deal(observer)?;
        if !self.player_turn(input, observer)? {
            self.dealer_turn(observer)?;
        }
        self.result()
    }

    /// Decides the round.
    ///
    /// A player bust loses and a dealer bust wins. Otherwise the strictly
    /// higher score wins; equal scores go to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn result(&self) -> Result<RoundResult, GameError> {
        if self.state != GameState::RoundOver {
            return Err(GameError::InvalidState);
        }

        let limit = self.options.bust_limit;
        let player_bust = self.player.is_bust(limit);
        let dealer_bust = self.dealer_played && self.dealer.is_bust(limit);

        let outcome = if player_bust {
            Outcome::Lose
        } else if dealer_bust || self.player.score() > self.dealer.score() {
            Outcome::Win
        } else {
            Outcome::Lose
        };

        tracing::info!(
            ?outcome,
            player = self.player.score(),
            dealer = self.dealer.score(),
            "round over"
        );

        Ok(RoundResult {
            outcome,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            player_bust,
            dealer_bust,
            dealer_played: self.dealer_played,
            cards_dealt: self.deck.dealt(),
        })
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState)
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck being dealt from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's current score.
    #[must_use]
    pub const fn player_score(&self) -> u16 {
        self.player.score()
    }

    /// Returns the dealer's current score.
    #[must_use]
    pub const fn dealer_score(&self) -> u16 {
        self.dealer.score()
    }
}

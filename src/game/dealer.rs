use crate::error::GameError;
use crate::event::{Event, Observer};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their score according to the rules.
    ///
    /// The dealer draws while below the dealer limit and stands as soon as
    /// it is reached, so the final score is never below it.
    ///
    /// Returns `true` if the dealer busted.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_turn<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Result<bool, GameError> {
        self.ensure_state(GameState::DealerTurn)?;

        while self.dealer.score() < u16::from(self.options.dealer_limit) {
            let card = self.deck.deal_card();
            let score = self.dealer.take(card);
            tracing::debug!(card = %card, score, "dealer draws");
            observer.notify(Event::DealerFlips { card, score });
        }

        self.dealer_played = true;
        self.state = GameState::RoundOver;

        let bust = self.dealer.is_bust(self.options.bust_limit);
        if bust {
            let score = self.dealer.score();
            tracing::debug!(score, "dealer bust");
            observer.notify(Event::DealerBust { score });
        }

        Ok(bust)
    }
}

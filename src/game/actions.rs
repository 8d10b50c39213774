use crate::error::GameError;
use crate::event::{Action, Event, Observer, PlayerInput};

use super::{Game, GameState};

impl Game {
    /// Plays the player's turn.
    ///
    /// The player is asked to hit or stand for as long as their score is
    /// below the bust limit. Reaching the limit exactly ends the turn
    /// without another prompt.
    ///
    /// Returns `true` if the player busted. A bust ends the round at once
    /// and the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn player_turn<I, O>(&mut self, input: &mut I, observer: &mut O) -> Result<bool, GameError>
    where
        I: PlayerInput + ?Sized,
        O: Observer + ?Sized,
    {
        self.ensure_state(GameState::PlayerTurn)?;

        let limit = self.options.bust_limit;
        while self.player.score() < u16::from(limit) {
            let action = input.decide(self.player.score());
            tracing::debug!(?action, score = self.player.score(), "player decision");
            if action == Action::Stand {
                break;
            }

            let card = self.deck.deal_card();
            let score = self.player.take(card);
            tracing::debug!(card = %card, score, "player hits");
            observer.notify(Event::PlayerDealt { card, score });
        }

        let bust = self.player.is_bust(limit);
        if bust {
            let score = self.player.score();
            tracing::debug!(score, "player bust");
            observer.notify(Event::PlayerBust { score });
            self.state = GameState::RoundOver;
        } else {
            self.state = GameState::DealerTurn;
        }

        Ok(bust)
    }
}

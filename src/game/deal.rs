use crate::error::GameError;
use crate::event::{Event, Observer};

use super::{Game, GameState};

impl Game {
    /// Deals the opening cards: one to the dealer, then two to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt or the game
    /// options fail [`GameOptions::validate`](crate::GameOptions::validate).
    pub fn deal<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Result<(), GameError> {
        self.ensure_state(GameState::Dealing)?;
        self.options.validate()?;

        let up_card = self.deck.deal_card();
        let score = self.dealer.take(up_card);
        tracing::debug!(card = %up_card, score, "dealer up card");
        observer.notify(Event::DealerShows {
            card: up_card,
            score,
        });

        let cards = [self.deck.deal_card(), self.deck.deal_card()];
        for card in cards {
            self.player.take(card);
        }
        let score = self.player.score();
        tracing::debug!(first = %cards[0], second = %cards[1], score, "player opening cards");
        observer.notify(Event::PlayerShows { cards, score });

        self.state = GameState::PlayerTurn;
        Ok(())
    }
}

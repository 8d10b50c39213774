//! Player input and table events.
//!
//! The engine does no I/O of its own. It asks a [`PlayerInput`] whether to
//! hit or stand, and reports what happens at the table to an [`Observer`].

use crate::card::Card;

/// A player's decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current score.
    Stand,
}

impl Action {
    /// Parses a typed response.
    ///
    /// Only the first non-whitespace character counts, case-insensitively:
    /// `h` is a hit and `s` is a stand. Anything else yields `None` and the
    /// caller should ask again.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::Action;
    ///
    /// assert_eq!(Action::parse(" h\n"), Some(Action::Hit));
    /// assert_eq!(Action::parse("S"), Some(Action::Stand));
    /// assert_eq!(Action::parse("x"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim_start().chars().next()? {
            'h' | 'H' => Some(Self::Hit),
            's' | 'S' => Some(Self::Stand),
            _ => None,
        }
    }
}

/// Source of the player's hit/stand decisions.
pub trait PlayerInput {
    /// Decides the next action given the player's current score.
    fn decide(&mut self, score: u16) -> Action;
}

impl<F: FnMut(u16) -> Action> PlayerInput for F {
    fn decide(&mut self, score: u16) -> Action {
        self(score)
    }
}

/// Something that happened at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The dealer's face-up card was dealt.
    DealerShows {
        /// The card dealt.
        card: Card,
        /// The dealer's score after the card.
        score: u16,
    },
    /// The player's two opening cards were dealt.
    PlayerShows {
        /// The cards dealt, in order.
        cards: [Card; 2],
        /// The player's score after both cards.
        score: u16,
    },
    /// The player hit and received a card.
    PlayerDealt {
        /// The card dealt.
        card: Card,
        /// The player's new score.
        score: u16,
    },
    /// The player went over the bust limit.
    PlayerBust {
        /// The player's final score.
        score: u16,
    },
    /// The dealer drew a card.
    DealerFlips {
        /// The card drawn.
        card: Card,
        /// The dealer's new score.
        score: u16,
    },
    /// The dealer went over the bust limit.
    DealerBust {
        /// The dealer's final score.
        score: u16,
    },
}

/// Receiver of table events.
pub trait Observer {
    /// Called once for every event, in order.
    fn notify(&mut self, event: Event);
}

impl Observer for () {
    fn notify(&mut self, _event: Event) {}
}

impl<F: FnMut(Event)> Observer for F {
    fn notify(&mut self, event: Event) {
        self(event);
    }
}

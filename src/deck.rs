//! A single 52-card deck with a deal cursor.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of exactly 52 distinct cards.
///
/// Cards are dealt from the front; [`Deck::dealt`] is the index of the next
/// card to hand out. The deck never owns a random number generator: callers
/// pass one to [`Deck::shuffle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    next: usize,
}

impl Deck {
    /// Creates an unshuffled deck, suits outer and ranks inner.
    #[must_use]
    pub fn new() -> Self {
        let cards = core::array::from_fn(|index| {
            Card::new(
                Rank::ALL[index % Rank::ALL.len()],
                Suit::ALL[index / Rank::ALL.len()],
            )
        });
        Self { cards, next: 0 }
    }

    /// Creates a deck whose first cards are `top`, in order.
    ///
    /// The remaining cards follow in [`Deck::new`] order, so the result is
    /// still a permutation of the full deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if `top` names a card twice.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let mut deck = Deck::stacked(&[ace]).unwrap();
    /// assert_eq!(deck.deal_card(), ace);
    /// ```
    pub fn stacked(top: &[Card]) -> Result<Self, DeckError> {
        let mut deck = Self::new();
        for (position, card) in top.iter().enumerate() {
            let tail = deck.cards.get(position..).unwrap_or_default();
            let offset = tail
                .iter()
                .position(|candidate| candidate == card)
                .ok_or(DeckError::DuplicateCard)?;
            deck.cards[position..=position + offset].rotate_right(1);
        }
        Ok(deck)
    }

    /// Randomly permutes all 52 cards and resets the deal cursor.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.next = 0;
        tracing::trace!("deck shuffled");
    }

    /// Deals the next card.
    ///
    /// # Panics
    ///
    /// Panics if all 52 cards have already been dealt. A round can never
    /// get that far, so reaching it is a logic error.
    pub fn deal_card(&mut self) -> Card {
        assert!(self.next < DECK_SIZE, "deck has gone through all cards");
        let card = self.cards[self.next];
        self.next += 1;
        card
    }

    /// Returns the cards in deal order, including those already dealt.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Returns how many cards have been dealt.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.next
    }

    /// Returns how many cards are left to deal.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.next
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.next == DECK_SIZE
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

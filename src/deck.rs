//! Deck construction and dealing.

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::TakeError;
use crate::filter::CardFilter;
use crate::options::DeckOption;

/// An ordered sequence of cards.
///
/// The front of the deck is index 0. Identical cards may appear more than
/// once, for example after [`DeckOption::multiple`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck and applies `options` in order.
    ///
    /// The deck is populated suit by suit (Spade, Diamond, Club, Heart), each
    /// suit from Ace to King, before any option runs.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOption};
    ///
    /// let deck = Deck::new([DeckOption::jokers(2), DeckOption::multiple(3)?]);
    /// assert_eq!(deck.size(), (52 + 2) * 3);
    /// # Ok::<(), deckrs::OptionError>(())
    /// ```
    #[must_use]
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut deck = Self::standard();
        let mut applied = 0_usize;
        for option in options {
            deck.apply(option);
            applied += 1;
        }
        tracing::debug!(options = applied, size = deck.size(), "deck constructed");
        deck
    }

    /// Creates a deck from an explicit card sequence, front first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::STANDARD {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Applies a single option to the deck.
    pub fn apply(&mut self, option: DeckOption) {
        let name = option.name();
        option.apply(&mut self.cards);
        tracing::trace!(option = name, size = self.cards.len(), "deck option applied");
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// The last card moves into the vacated front slot, so the order of the
    /// remaining cards is not preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TakeError::EmptyDeck`] if the deck has no cards.
    pub fn take(&mut self) -> Result<Card, TakeError> {
        if self.cards.is_empty() {
            tracing::debug!("take from empty deck");
            return Err(TakeError::EmptyDeck);
        }
        Ok(self.cards.swap_remove(0))
    }

    /// Returns how many cards are in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Alias for [`Deck::size`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards, front first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Counts the cards matching `filter`.
    #[must_use]
    pub fn count_matching(&self, filter: &CardFilter) -> usize {
        self.cards.iter().filter(|card| filter.matches(card)).count()
    }

    /// Shuffles the deck in place with a caller-provided generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

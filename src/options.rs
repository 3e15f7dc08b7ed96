//! Deck construction options.
//!
//! Options are ordered pipeline stages: [`Deck::new`] applies them one after
//! another to the same card sequence, so their order changes the result.
//! Filtering before [`DeckOption::multiple`] removes cards once and then
//! duplicates the survivors; filtering after it removes matches from every
//! copy.
//!
//! Options are not transactional. Each one is total once constructed, and a
//! deck is only ever observed after the whole chain has run.

use core::cmp::Ordering;
use core::fmt;
use core::num::NonZeroUsize;

use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::OptionError;
use crate::filter::{CardFilter, card_in_list};

/// Comparator used by [`DeckOption::Sort`].
pub type CardCmp = Box<dyn Fn(&Card, &Card) -> Ordering>;

/// Orders cards by [`Card::order_key`] ascending.
///
/// Sorting a fresh deck with this comparator puts the Ace of Spades first
/// and the King of Hearts last.
#[must_use]
pub fn default_cmp(a: &Card, b: &Card) -> Ordering {
    a.order_key().cmp(&b.order_key())
}

/// Orders cards lexicographically by their rendered name.
#[must_use]
pub fn name_cmp(a: &Card, b: &Card) -> Ordering {
    use alloc::string::ToString;

    a.to_string().cmp(&b.to_string())
}

/// Source of randomness for [`DeckOption::Shuffle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Shuffle {
    /// Seed a fresh generator from OS entropy on every application.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    Entropy,
    /// Seed a fresh generator from the given value, giving a reproducible order.
    Seeded(u64),
}

impl Shuffle {
    fn rng(self) -> ChaCha8Rng {
        match self {
            #[cfg(feature = "std")]
            Self::Entropy => ChaCha8Rng::from_rng(&mut rand::rng()),
            Self::Seeded(seed) => ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

/// A single stage of deck construction.
///
/// Build options with the constructor functions and pass them to
/// [`Deck::new`] in the order they should run, or chain them through
/// [`DeckBuilder`].
pub enum DeckOption {
    /// Sort the deck with a comparator. Stability is not guaranteed.
    Sort(CardCmp),
    /// Append this many jokers.
    Jokers(usize),
    /// Remove every card matching any of the filters, keeping survivor order.
    Filter(Vec<CardFilter>),
    /// Repeat the current sequence until it is this many times its size.
    Multiple(NonZeroUsize),
    /// Randomly permute the deck.
    Shuffle(Shuffle),
}

impl DeckOption {
    /// Sorts the deck with the given comparator.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, DeckOption, Rank, Suit, default_cmp};
    ///
    /// let deck = Deck::new([DeckOption::shuffle_seeded(7), DeckOption::sort(default_cmp)]);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Spade, Rank::Ace));
    /// ```
    #[must_use]
    pub fn sort<F>(cmp: F) -> Self
    where
        F: Fn(&Card, &Card) -> Ordering + 'static,
    {
        Self::Sort(Box::new(cmp))
    }

    /// Appends `n` jokers to the end of the deck.
    #[must_use]
    pub const fn jokers(n: usize) -> Self {
        Self::Jokers(n)
    }

    /// Removes cards matching any of the given filters.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{CardFilter, Deck, DeckOption, Rank, Suit};
    ///
    /// let deck = Deck::new([DeckOption::filter([
    ///     CardFilter::suit(Suit::Heart),
    ///     CardFilter::rank(Rank::Three),
    /// ])]);
    /// assert_eq!(deck.size(), 52 - 13 - 3);
    /// ```
    #[must_use]
    pub fn filter<I>(filters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CardFilter>,
    {
        Self::Filter(filters.into_iter().map(Into::into).collect())
    }

    /// Combines `n` copies of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::ZeroMultiple`] if `n` is zero.
    pub fn multiple(n: usize) -> Result<Self, OptionError> {
        NonZeroUsize::new(n)
            .map(Self::Multiple)
            .ok_or(OptionError::ZeroMultiple)
    }

    /// Combines `n` copies of the deck.
    #[must_use]
    pub const fn multiple_nonzero(n: NonZeroUsize) -> Self {
        Self::Multiple(n)
    }

    /// Shuffles the deck with a generator seeded from OS entropy.
    ///
    /// Two applications produce independent orders.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub const fn shuffle() -> Self {
        Self::Shuffle(Shuffle::Entropy)
    }

    /// Shuffles the deck with a generator seeded from `seed`.
    #[must_use]
    pub const fn shuffle_seeded(seed: u64) -> Self {
        Self::Shuffle(Shuffle::Seeded(seed))
    }

    /// Short name of the option, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sort(_) => "sort",
            Self::Jokers(_) => "jokers",
            Self::Filter(_) => "filter",
            Self::Multiple(_) => "multiple",
            Self::Shuffle(_) => "shuffle",
        }
    }

    pub(crate) fn apply(self, cards: &mut Vec<Card>) {
        match self {
            Self::Sort(cmp) => cards.sort_unstable_by(|a, b| cmp(a, b)),
            Self::Jokers(n) => cards.extend(core::iter::repeat_n(Card::joker(), n)),
            Self::Filter(filters) => cards.retain(|card| !card_in_list(card, &filters)),
            Self::Multiple(n) => *cards = cards.repeat(n.get()),
            Self::Shuffle(source) => cards.shuffle(&mut source.rng()),
        }
    }
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sort(_) => f.debug_tuple("Sort").finish_non_exhaustive(),
            Self::Jokers(n) => f.debug_tuple("Jokers").field(n).finish(),
            Self::Filter(filters) => f.debug_tuple("Filter").field(filters).finish(),
            Self::Multiple(n) => f.debug_tuple("Multiple").field(n).finish(),
            Self::Shuffle(source) => f.debug_tuple("Shuffle").field(source).finish(),
        }
    }
}

/// Builder that records deck options in call order.
///
/// ```
/// use deckrs::{CardFilter, DeckBuilder, Rank};
///
/// let deck = DeckBuilder::new()
///     .with_jokers(4)
///     .with_multiple(2)?
///     .with_filter([CardFilter::rank(Rank::Two)])
///     .build();
/// assert_eq!(deck.size(), (52 + 4) * 2 - 8);
/// # Ok::<(), deckrs::OptionError>(())
/// ```
#[derive(Debug, Default)]
pub struct DeckBuilder {
    /// Options to apply, in order.
    pub options: Vec<DeckOption>,
}

impl DeckBuilder {
    /// Creates a builder with no options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends an arbitrary option.
    #[must_use]
    pub fn with_option(mut self, option: DeckOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a sort stage.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckBuilder, Rank, Suit, name_cmp};
    ///
    /// let deck = DeckBuilder::new().with_sort(name_cmp).build();
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Club, Rank::Ace));
    /// ```
    #[must_use]
    pub fn with_sort<F>(self, cmp: F) -> Self
    where
        F: Fn(&Card, &Card) -> Ordering + 'static,
    {
        self.with_option(DeckOption::sort(cmp))
    }

    /// Appends a joker stage.
    #[must_use]
    pub fn with_jokers(self, n: usize) -> Self {
        self.with_option(DeckOption::jokers(n))
    }

    /// Appends a filter stage.
    #[must_use]
    pub fn with_filter<I>(self, filters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CardFilter>,
    {
        self.with_option(DeckOption::filter(filters))
    }

    /// Appends a multiple-deck stage.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::ZeroMultiple`] if `n` is zero.
    pub fn with_multiple(self, n: usize) -> Result<Self, OptionError> {
        Ok(self.with_option(DeckOption::multiple(n)?))
    }

    /// Appends an entropy-seeded shuffle stage.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn with_shuffle(self) -> Self {
        self.with_option(DeckOption::shuffle())
    }

    /// Appends a seeded shuffle stage.
    #[must_use]
    pub fn with_shuffle_seed(self, seed: u64) -> Self {
        self.with_option(DeckOption::shuffle_seeded(seed))
    }

    /// Builds the deck, applying the recorded options in order.
    #[must_use]
    pub fn build(self) -> Deck {
        Deck::new(self.options)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn multiple_rejects_zero() {
        assert_eq!(DeckOption::multiple(0).unwrap_err(), OptionError::ZeroMultiple);
        assert!(matches!(DeckOption::multiple(1), Ok(DeckOption::Multiple(n)) if n.get() == 1));
        assert_eq!(
            DeckBuilder::new().with_multiple(0).unwrap_err(),
            OptionError::ZeroMultiple
        );
    }

    #[test]
    fn multiple_repeats_current_sequence() {
        let a = Card::new(Suit::Spade, Rank::Ace);
        let b = Card::new(Suit::Heart, Rank::Two);
        let mut cards = vec![a, b];
        DeckOption::multiple(3).unwrap().apply(&mut cards);
        assert_eq!(cards, vec![a, b, a, b, a, b]);
    }

    #[test]
    fn jokers_append_to_end() {
        let a = Card::new(Suit::Spade, Rank::Ace);
        let mut cards = vec![a];
        DeckOption::jokers(2).apply(&mut cards);
        assert_eq!(cards, vec![a, Card::joker(), Card::joker()]);

        DeckOption::jokers(0).apply(&mut cards);
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn filter_keeps_survivor_order() {
        let cards_in = [
            Card::new(Suit::Club, Rank::Four),
            Card::new(Suit::Heart, Rank::Ace),
            Card::new(Suit::Spade, Rank::Nine),
            Card::joker(),
            Card::new(Suit::Diamond, Rank::Two),
        ];
        let mut cards = cards_in.to_vec();
        DeckOption::filter([CardFilter::suit(Suit::Heart), CardFilter::suit(Suit::Joker)])
            .apply(&mut cards);
        assert_eq!(cards, vec![cards_in[0], cards_in[2], cards_in[4]]);
    }

    #[test]
    fn filter_accepts_cards_as_exact_entries() {
        let target = Card::new(Suit::Club, Rank::Five);
        let mut cards = vec![target, Card::new(Suit::Club, Rank::Six)];
        DeckOption::filter([target]).apply(&mut cards);
        assert_eq!(cards, vec![Card::new(Suit::Club, Rank::Six)]);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let base: Vec<Card> = Suit::STANDARD
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();

        let mut first = base.clone();
        let mut second = base.clone();
        DeckOption::shuffle_seeded(42).apply(&mut first);
        DeckOption::shuffle_seeded(42).apply(&mut second);
        assert_eq!(first, second);
        assert_ne!(first, base);
    }

    #[test]
    fn debug_names_the_stage() {
        use alloc::format;

        assert_eq!(format!("{:?}", DeckOption::jokers(3)), "Jokers(3)");
        assert_eq!(format!("{:?}", DeckOption::sort(default_cmp)), "Sort(..)");
        assert_eq!(DeckOption::shuffle_seeded(1).name(), "shuffle");
    }
}

//! Card types and ordering.

use core::fmt;

/// Card suit.
///
/// [`Suit::Joker`] marks a wildcard card and is not one of the four playable
/// suits listed in [`Suit::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker (special suit).
    Joker,
}

impl Suit {
    /// The four playable suits, in deck population order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the canonical name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }

    /// Returns `true` for the joker suit.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ordered Ace < Two < ... < King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the canonical name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Numeric value of the rank (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Jokers carry no rank. Any other card produced by [`Deck::new`](crate::Deck::new)
/// has a rank, but callers may build arbitrary pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card, unset for jokers.
    pub rank: Option<Rank>,
}

impl Card {
    /// Creates a new ranked card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank: Some(rank),
        }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: Suit::Joker,
            rank: None,
        }
    }

    /// Returns `true` if the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.suit.is_joker()
    }

    /// Sort key used by [`default_cmp`](crate::options::default_cmp).
    ///
    /// Computed as `suit_index * 13 + rank_value`, so suit is the primary key
    /// and an unset rank sorts before Ace. A joker's key equals the King of
    /// Hearts' key.
    #[must_use]
    pub const fn order_key(&self) -> u8 {
        let rank = match self.rank {
            Some(rank) => rank.value(),
            None => 0,
        };
        self.suit as u8 * Rank::King.value() + rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str("Joker");
        }
        match self.rank {
            Some(rank) => write!(f, "{rank} of {}s", self.suit),
            None => write!(f, "{}s", self.suit),
        }
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

//! Partial-match filters over cards.

use crate::card::{Card, Rank, Suit};

/// A filter entry that matches cards by suit, rank, or both.
///
/// An unset field is a wildcard. See [`card_matches`] for the exact rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardFilter {
    /// Suit to match, or `None` for any suit.
    pub suit: Option<Suit>,
    /// Rank to match, or `None` for any rank.
    pub rank: Option<Rank>,
}

impl CardFilter {
    /// Matches every card of the given suit.
    #[must_use]
    pub const fn suit(suit: Suit) -> Self {
        Self {
            suit: Some(suit),
            rank: None,
        }
    }

    /// Matches every card of the given rank.
    #[must_use]
    pub const fn rank(rank: Rank) -> Self {
        Self {
            suit: None,
            rank: Some(rank),
        }
    }

    /// Matches only the card with this suit and rank.
    #[must_use]
    pub const fn exact(suit: Suit, rank: Rank) -> Self {
        Self {
            suit: Some(suit),
            rank: Some(rank),
        }
    }

    /// Returns `true` if `card` matches this filter.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        card_matches(card, self)
    }
}

impl From<Card> for CardFilter {
    /// Jokers have no rank, so a joker card becomes a suit-only filter.
    fn from(card: Card) -> Self {
        Self {
            suit: Some(card.suit),
            rank: card.rank,
        }
    }
}

/// Returns `true` if `card` matches `filter`.
///
/// A card matches when any of the following holds:
///
/// 1. the filter's suit equals the card's suit and the filter has no rank;
/// 2. the filter's rank equals the card's rank and the filter has no suit;
/// 3. the filter's suit and rank both equal the card's.
///
/// A filter with neither field set matches nothing.
///
/// # Example
///
/// ```
/// use deckrs::{Card, CardFilter, Rank, Suit, card_matches};
///
/// let card = Card::new(Suit::Club, Rank::Five);
/// assert!(card_matches(&card, &CardFilter::suit(Suit::Club)));
/// assert!(card_matches(&card, &CardFilter::rank(Rank::Five)));
/// assert!(!card_matches(&card, &CardFilter::exact(Suit::Heart, Rank::Five)));
/// ```
#[must_use]
pub fn card_matches(card: &Card, filter: &CardFilter) -> bool {
    let suit_eq = filter.suit == Some(card.suit);
    let rank_eq = filter.rank.is_some() && filter.rank == card.rank;

    (suit_eq && filter.rank.is_none()) // suit only
        || (rank_eq && filter.suit.is_none()) // rank only
        || (suit_eq && rank_eq) // both
}

/// Returns `true` if `card` matches any filter in `list`.
#[must_use]
pub fn card_in_list(card: &Card, list: &[CardFilter]) -> bool {
    list.iter().any(|filter| card_matches(card, filter))
}

//! Playing card decks built from composable options, with optional `no_std`
//! support.
//!
//! A [`Deck`] starts as the 52 standard cards and is then shaped by an
//! ordered list of [`DeckOption`]s: sorting, jokers, filtering, combining
//! several decks, and shuffling. Options run in the order given, and that
//! order matters.
//!
//! # Example
//!
//! ```
//! use deckrs::{CardFilter, Deck, DeckOption, Rank, Suit};
//!
//! let mut deck = Deck::new([
//!     DeckOption::jokers(2),
//!     DeckOption::filter([CardFilter::suit(Suit::Heart), CardFilter::rank(Rank::Two)]),
//!     DeckOption::shuffle_seeded(42),
//! ]);
//! assert_eq!(deck.size(), 52 - 13 - 3 + 2);
//!
//! let card = deck.take()?;
//! println!("drew the {card}");
//! # Ok::<(), deckrs::TakeError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod filter;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{OptionError, TakeError};
pub use filter::{CardFilter, card_in_list, card_matches};
pub use options::{CardCmp, DeckBuilder, DeckOption, Shuffle, default_cmp, name_cmp};

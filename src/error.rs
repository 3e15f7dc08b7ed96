//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when taking a card from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TakeError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when constructing a deck option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionError {
    /// Multiple was asked for zero decks.
    #[error("deck multiple must be at least 1")]
    ZeroMultiple,
}

//! Validated playing card values with optional `no_std` support.
//!
//! A [`Card`] is either a standard card with a [`Suit`] and a [`Rank`], a
//! joker, or a guarantee card. Invalid combinations, such as a standard card
//! without a suit, cannot be represented. [`CardBuilder`] offers the same
//! values through setters that validate each field as it is assigned.
//!
//! # Example
//!
//! ```
//! use pitcards::{Card, CardType, Rank, Suit};
//!
//! let card = Card::from_parts(CardType::Standard, Some(Suit::Heart), Some(Rank::Ace))?;
//! assert_eq!(card.to_string(), "ACE of heart");
//! assert_eq!(Card::Joker.to_string(), "joker");
//! # Ok::<(), pitcards::CardError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod builder;
pub mod card;
pub mod card_type;
pub mod error;
pub mod rank;
pub mod suit;

// Re-export main types
pub use builder::CardBuilder;
pub use card::{Card, DECK_SIZE};
pub use card_type::CardType;
pub use error::{Attribute, CardError, Violation};
pub use rank::Rank;
pub use suit::Suit;

//! Card suits.

use core::fmt;
use core::str::FromStr;

use crate::error::{Attribute, CardError};

/// Suit of a standard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
}

impl Suit {
    /// All four suits in declaration order.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Club, Self::Spade, Self::Diamond];

    /// Returns the string value of the suit, as used when rendering a card.
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Club => "club",
            Self::Spade => "spade",
            Self::Diamond => "diamond",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|suit| suit.value().eq_ignore_ascii_case(s))
            .ok_or(CardError::unrecognized(Attribute::Suit))
    }
}

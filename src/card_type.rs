//! Card kinds.

use core::fmt;
use core::str::FromStr;

use crate::error::{Attribute, CardError};

/// The kind of a playing card.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    /// A regular card with a suit and a rank.
    #[default]
    Standard,
    /// The joker.
    Joker,
    /// The guarantee card.
    Guarantee,
}

impl CardType {
    /// All card types in declaration order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Joker, Self::Guarantee];

    /// Returns the string value of the card type.
    ///
    /// ```
    /// use pitcards::CardType;
    ///
    /// assert_eq!(CardType::Guarantee.value(), "guarantee");
    /// ```
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Joker => "joker",
            Self::Guarantee => "guarantee",
        }
    }

    /// Returns whether cards of this type carry a suit and a rank.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self, Self::Standard)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for CardType {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|card_type| card_type.value().eq_ignore_ascii_case(s))
            .ok_or(CardError::unrecognized(Attribute::CardType))
    }
}

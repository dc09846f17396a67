//! Error types for card construction and rendering.

use core::fmt;

use thiserror::Error;

/// The card attribute an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// The card type.
    CardType,
    /// The suit.
    Suit,
    /// The rank.
    Rank,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CardType => "card type",
            Self::Suit => "suit",
            Self::Rank => "rank",
        })
    }
}

/// Why an attribute was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The value is not a member of the enumeration.
    Unrecognized,
    /// A standard card needs the value but none was given.
    Missing,
    /// A joker or guarantee card was given a value it cannot have.
    Unexpected,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unrecognized => "not a recognized value",
            Self::Missing => "required for a standard card",
            Self::Unexpected => "must be empty for a non-standard card",
        })
    }
}

/// Errors that can occur when building or rendering a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Malformed or inconsistent card type, suit or rank.
    #[error("invalid {attribute}: {violation}")]
    InvalidAttribute {
        /// The rejected attribute.
        attribute: Attribute,
        /// What was wrong with it.
        violation: Violation,
    },
    /// A standard card is missing its suit or rank.
    #[error("suit or rank is missing on a standard card")]
    InvalidState,
}

impl CardError {
    pub(crate) const fn unrecognized(attribute: Attribute) -> Self {
        Self::InvalidAttribute {
            attribute,
            violation: Violation::Unrecognized,
        }
    }

    pub(crate) const fn missing(attribute: Attribute) -> Self {
        Self::InvalidAttribute {
            attribute,
            violation: Violation::Missing,
        }
    }

    pub(crate) const fn unexpected(attribute: Attribute) -> Self {
        Self::InvalidAttribute {
            attribute,
            violation: Violation::Unexpected,
        }
    }
}

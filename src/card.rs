//! Card values and the standard deck.

use core::fmt;
use core::str::FromStr;

use crate::card_type::CardType;
use crate::error::{Attribute, CardError};
use crate::rank::Rank;
use crate::suit::Suit;

/// Number of standard cards in a deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Only standard cards carry a suit and a rank, so a standard card without a
/// suit or a joker with a rank cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// A regular card.
    Standard {
        /// The suit of the card.
        suit: Suit,
        /// The rank of the card.
        rank: Rank,
    },
    /// The joker.
    Joker,
    /// The guarantee card.
    Guarantee,
}

impl Card {
    /// Creates a new standard card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self::Standard { suit, rank }
    }

    /// Creates a card from a card type and optional suit and rank.
    ///
    /// The suit is checked before the rank, so a standard card missing both
    /// reports the suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidAttribute`] if a standard card is missing
    /// its suit or rank, or if a joker or guarantee card is given either.
    ///
    /// # Example
    ///
    /// ```
    /// use pitcards::{Attribute, Card, CardError, CardType, Rank, Suit, Violation};
    ///
    /// let card = Card::from_parts(CardType::Standard, Some(Suit::Spade), Some(Rank::King))?;
    /// assert_eq!(card, Card::new(Suit::Spade, Rank::King));
    ///
    /// let err = Card::from_parts(CardType::Joker, None, Some(Rank::Two)).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     CardError::InvalidAttribute { attribute: Attribute::Rank, violation: Violation::Unexpected }
    /// );
    /// # Ok::<(), CardError>(())
    /// ```
    pub const fn from_parts(
        card_type: CardType,
        suit: Option<Suit>,
        rank: Option<Rank>,
    ) -> Result<Self, CardError> {
        match (card_type, suit, rank) {
            (CardType::Standard, Some(suit), Some(rank)) => Ok(Self::Standard { suit, rank }),
            (CardType::Standard, None, _) => Err(CardError::missing(Attribute::Suit)),
            (CardType::Standard, Some(_), None) => Err(CardError::missing(Attribute::Rank)),
            (_, Some(_), _) => Err(CardError::unexpected(Attribute::Suit)),
            (_, None, Some(_)) => Err(CardError::unexpected(Attribute::Rank)),
            (CardType::Joker, None, None) => Ok(Self::Joker),
            (CardType::Guarantee, None, None) => Ok(Self::Guarantee),
        }
    }

    /// Creates a card from unparsed values: a card type string, a suit
    /// string and a numeric rank.
    ///
    /// Values are validated in the order card type, suit, rank. Presence is
    /// checked before membership, so a joker given any suit string reports
    /// an unexpected suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidAttribute`] if any value is not recognized
    /// or the values are inconsistent with the card type.
    ///
    /// # Example
    ///
    /// ```
    /// use pitcards::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_raw("standard", Some("heart"), Some(1))?, Card::new(Suit::Heart, Rank::Ace));
    /// assert_eq!(Card::from_raw("joker", None, None)?, Card::Joker);
    /// assert!(Card::from_raw("wild", None, None).is_err());
    /// # Ok::<(), pitcards::CardError>(())
    /// ```
    pub fn from_raw(
        card_type: &str,
        suit: Option<&str>,
        rank: Option<u8>,
    ) -> Result<Self, CardError> {
        let card_type: CardType = card_type.parse()?;
        let standard = card_type.is_standard();

        let suit = match suit {
            None if standard => return Err(CardError::missing(Attribute::Suit)),
            Some(_) if !standard => return Err(CardError::unexpected(Attribute::Suit)),
            suit => suit.map(str::parse::<Suit>).transpose()?,
        };
        let rank = match rank {
            None if standard => return Err(CardError::missing(Attribute::Rank)),
            Some(_) if !standard => return Err(CardError::unexpected(Attribute::Rank)),
            rank => rank.map(Rank::try_from).transpose()?,
        };

        Self::from_parts(card_type, suit, rank)
    }

    /// Returns the type of the card.
    #[must_use]
    pub const fn card_type(&self) -> CardType {
        match self {
            Self::Standard { .. } => CardType::Standard,
            Self::Joker => CardType::Joker,
            Self::Guarantee => CardType::Guarantee,
        }
    }

    /// Returns the suit, or `None` for jokers and guarantee cards.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Self::Standard { suit, .. } => Some(*suit),
            Self::Joker | Self::Guarantee => None,
        }
    }

    /// Returns the rank, or `None` for jokers and guarantee cards.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Self::Standard { rank, .. } => Some(*rank),
            Self::Joker | Self::Guarantee => None,
        }
    }

    /// Returns whether this is a standard card.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self, Self::Standard { .. })
    }

    /// Returns whether this is the joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns whether this is the guarantee card.
    #[must_use]
    pub const fn is_guarantee(&self) -> bool {
        matches!(self, Self::Guarantee)
    }

    /// Converts the card to another card type.
    ///
    /// Converting to a joker or guarantee card drops the suit and rank.
    /// A standard card converted to [`CardType::Standard`] is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidAttribute`] for the suit when a joker or
    /// guarantee card is converted to a standard card, since there is no
    /// suit or rank to give it.
    ///
    /// # Example
    ///
    /// ```
    /// use pitcards::{Card, CardType, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Club, Rank::Seven).convert(CardType::Joker)?;
    /// assert_eq!(card, Card::Joker);
    /// assert_eq!(card.suit(), None);
    /// assert_eq!(card.rank(), None);
    /// # Ok::<(), pitcards::CardError>(())
    /// ```
    pub const fn convert(self, card_type: CardType) -> Result<Self, CardError> {
        match (self, card_type) {
            (_, CardType::Joker) => Ok(Self::Joker),
            (_, CardType::Guarantee) => Ok(Self::Guarantee),
            (Self::Standard { .. }, CardType::Standard) => Ok(self),
            (Self::Joker | Self::Guarantee, CardType::Standard) => {
                Err(CardError::missing(Attribute::Suit))
            }
        }
    }

    /// Returns a copy of this standard card with a different suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidAttribute`] if the card is not a standard card.
    pub const fn with_suit(self, suit: Suit) -> Result<Self, CardError> {
        match self {
            Self::Standard { rank, .. } => Ok(Self::Standard { suit, rank }),
            Self::Joker | Self::Guarantee => Err(CardError::unexpected(Attribute::Suit)),
        }
    }

    /// Returns a copy of this standard card with a different rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidAttribute`] if the card is not a standard card.
    pub const fn with_rank(self, rank: Rank) -> Result<Self, CardError> {
        match self {
            Self::Standard { suit, .. } => Ok(Self::Standard { suit, rank }),
            Self::Joker | Self::Guarantee => Err(CardError::unexpected(Attribute::Rank)),
        }
    }

    /// Iterates over the 52 standard cards, grouped by suit in
    /// [`Suit::ALL`] order with ranks ascending.
    ///
    /// ```
    /// use pitcards::{Card, DECK_SIZE, Rank, Suit};
    ///
    /// assert_eq!(Card::standard_deck().count(), DECK_SIZE);
    /// assert_eq!(Card::standard_deck().next(), Some(Card::new(Suit::Heart, Rank::Ace)));
    /// ```
    pub fn standard_deck() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Self::new(suit, rank)))
    }
}

impl fmt::Display for Card {
    /// Renders `"<RANK> of <suit>"` for standard cards and the card type
    /// value otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { suit, rank } => write!(f, "{rank} of {suit}"),
            Self::Joker | Self::Guarantee => f.write_str(self.card_type().value()),
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the rendered form of a card, e.g. `"QUEEN of diamond"` or `"joker"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((rank, suit)) = s.split_once(" of ") {
            return Ok(Self::new(suit.parse()?, rank.parse()?));
        }

        match s.parse::<CardType>()? {
            CardType::Standard => Err(CardError::missing(Attribute::Suit)),
            card_type => Self::from_parts(card_type, None, None),
        }
    }
}

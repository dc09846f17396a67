//! A card assembled field by field.

use alloc::string::{String, ToString};

use crate::card::Card;
use crate::card_type::CardType;
use crate::error::{Attribute, CardError};
use crate::rank::Rank;
use crate::suit::Suit;

/// A mutable card whose fields are validated as they are assigned.
///
/// The builder starts out as a blank standard card. Set the card type first,
/// then the suit and the rank: each setter checks its value against the card
/// type currently stored.
///
/// ```
/// use pitcards::{Card, CardBuilder, CardType, Rank, Suit};
///
/// let mut builder = CardBuilder::new();
/// builder.set_suit(Some(Suit::Diamond))?;
/// builder.set_rank(Some(Rank::Jack))?;
/// assert_eq!(builder.to_display_string()?, "JACK of diamond");
///
/// builder.set_card_type(CardType::Guarantee);
/// assert_eq!(builder.suit(), None);
/// assert_eq!(builder.build()?, Card::Guarantee);
/// # Ok::<(), pitcards::CardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardBuilder {
    card_type: CardType,
    suit: Option<Suit>,
    rank: Option<Rank>,
}

impl CardBuilder {
    /// Creates a blank standard card.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            card_type: CardType::Standard,
            suit: None,
            rank: None,
        }
    }

    /// Returns the card type.
    #[must_use]
    pub const fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Returns the suit, if set.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns the rank, if set.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        self.rank
    }

    /// Sets the card type.
    ///
    /// Switching to a joker or guarantee card clears the suit and rank.
    pub const fn set_card_type(&mut self, card_type: CardType) {
        self.card_type = card_type;
        if !card_type.is_standard() {
            self.suit = None;
            self.rank = None;
        }
    }

    /// Sets the suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidAttribute`] if the card is standard and
    /// `suit` is `None`, or the card is not standard and `suit` is `Some`.
    pub const fn set_suit(&mut self, suit: Option<Suit>) -> Result<(), CardError> {
        match (self.card_type.is_standard(), suit) {
            (true, None) => Err(CardError::missing(Attribute::Suit)),
            (false, Some(_)) => Err(CardError::unexpected(Attribute::Suit)),
            _ => {
                self.suit = suit;
                Ok(())
            }
        }
    }

    /// Sets the rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidAttribute`] if the card is standard and
    /// `rank` is `None`, or the card is not standard and `rank` is `Some`.
    pub const fn set_rank(&mut self, rank: Option<Rank>) -> Result<(), CardError> {
        match (self.card_type.is_standard(), rank) {
            (true, None) => Err(CardError::missing(Attribute::Rank)),
            (false, Some(_)) => Err(CardError::unexpected(Attribute::Rank)),
            _ => {
                self.rank = rank;
                Ok(())
            }
        }
    }

    /// Sets the card type and returns the builder.
    #[must_use]
    pub const fn with_card_type(mut self, card_type: CardType) -> Self {
        self.set_card_type(card_type);
        self
    }

    /// Sets the suit and returns the builder.
    ///
    /// # Errors
    ///
    /// See [`CardBuilder::set_suit`].
    pub const fn with_suit(mut self, suit: Option<Suit>) -> Result<Self, CardError> {
        match self.set_suit(suit) {
            Ok(()) => Ok(self),
            Err(err) => Err(err),
        }
    }

    /// Sets the rank and returns the builder.
    ///
    /// # Errors
    ///
    /// See [`CardBuilder::set_rank`].
    pub const fn with_rank(mut self, rank: Option<Rank>) -> Result<Self, CardError> {
        match self.set_rank(rank) {
            Ok(()) => Ok(self),
            Err(err) => Err(err),
        }
    }

    /// Finishes the card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidState`] if the card is standard and its
    /// suit or rank has not been set.
    pub const fn build(&self) -> Result<Card, CardError> {
        match (self.card_type, self.suit, self.rank) {
            (CardType::Standard, Some(suit), Some(rank)) => Ok(Card::new(suit, rank)),
            (CardType::Standard, _, _) => Err(CardError::InvalidState),
            (CardType::Joker, _, _) => Ok(Card::Joker),
            (CardType::Guarantee, _, _) => Ok(Card::Guarantee),
        }
    }

    /// Renders the card the same way as [`Card`]'s `Display`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidState`] if the card is standard and its
    /// suit or rank has not been set.
    ///
    /// ```
    /// use pitcards::{CardBuilder, CardError};
    ///
    /// assert_eq!(CardBuilder::new().to_display_string(), Err(CardError::InvalidState));
    /// ```
    pub fn to_display_string(&self) -> Result<String, CardError> {
        self.build().map(|card| card.to_string())
    }
}

impl From<Card> for CardBuilder {
    fn from(card: Card) -> Self {
        Self {
            card_type: card.card_type(),
            suit: card.suit(),
            rank: card.rank(),
        }
    }
}

impl TryFrom<CardBuilder> for Card {
    type Error = CardError;

    fn try_from(builder: CardBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

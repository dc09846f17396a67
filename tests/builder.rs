//! Card builder integration tests.

use pitcards::{Attribute, Card, CardBuilder, CardError, CardType, Rank, Suit, Violation};

const fn invalid(attribute: Attribute, violation: Violation) -> CardError {
    CardError::InvalidAttribute {
        attribute,
        violation,
    }
}

#[test]
fn blank_standard_builder_cannot_render() {
    let builder = CardBuilder::default();
    assert_eq!(builder.card_type(), CardType::Standard);
    assert_eq!(builder.suit(), None);
    assert_eq!(builder.rank(), None);
    assert_eq!(builder.to_display_string(), Err(CardError::InvalidState));
    assert_eq!(builder.build(), Err(CardError::InvalidState));

    let half = CardBuilder::new().with_suit(Some(Suit::Heart)).unwrap();
    assert_eq!(half.to_display_string(), Err(CardError::InvalidState));
}

#[test]
fn setters_build_a_standard_card() {
    let mut builder = CardBuilder::new();
    builder.set_card_type(CardType::Standard);
    builder.set_suit(Some(Suit::Spade)).unwrap();
    builder.set_rank(Some(Rank::King)).unwrap();

    assert_eq!(builder.to_display_string().unwrap(), "KING of spade");
    assert_eq!(builder.build(), Ok(Card::new(Suit::Spade, Rank::King)));
    assert_eq!(Card::try_from(builder), Ok(Card::new(Suit::Spade, Rank::King)));
}

#[test]
fn standard_builder_rejects_clearing_suit_or_rank() {
    let mut builder = CardBuilder::new();
    assert_eq!(
        builder.set_suit(None),
        Err(invalid(Attribute::Suit, Violation::Missing))
    );
    assert_eq!(
        builder.set_rank(None),
        Err(invalid(Attribute::Rank, Violation::Missing))
    );

    builder.set_suit(Some(Suit::Club)).unwrap();
    assert_eq!(
        builder.set_suit(None),
        Err(invalid(Attribute::Suit, Violation::Missing))
    );
    assert_eq!(builder.suit(), Some(Suit::Club));
}

#[test]
fn switching_to_joker_clears_suit_and_rank() {
    let mut builder = CardBuilder::from(Card::new(Suit::Heart, Rank::Ace));
    assert_eq!(builder.suit(), Some(Suit::Heart));
    assert_eq!(builder.rank(), Some(Rank::Ace));

    builder.set_card_type(CardType::Joker);
    assert_eq!(builder.card_type(), CardType::Joker);
    assert_eq!(builder.suit(), None);
    assert_eq!(builder.rank(), None);
    assert_eq!(builder.to_display_string().unwrap(), "joker");
}

#[test]
fn special_builders_reject_suit_and_rank() {
    let mut builder = CardBuilder::new().with_card_type(CardType::Guarantee);
    assert_eq!(
        builder.set_suit(Some(Suit::Diamond)),
        Err(invalid(Attribute::Suit, Violation::Unexpected))
    );
    assert_eq!(
        builder.set_rank(Some(Rank::Two)),
        Err(invalid(Attribute::Rank, Violation::Unexpected))
    );
    builder.set_suit(None).unwrap();
    builder.set_rank(None).unwrap();

    assert_eq!(builder.build(), Ok(Card::Guarantee));
    assert_eq!(builder.to_display_string().unwrap(), "guarantee");
}

#[test]
fn switching_back_to_standard_starts_blank() {
    let builder = CardBuilder::from(Card::Joker).with_card_type(CardType::Standard);
    assert_eq!(builder.build(), Err(CardError::InvalidState));

    let card = builder
        .with_suit(Some(Suit::Diamond))
        .and_then(|b| b.with_rank(Some(Rank::Four)))
        .and_then(|b| b.build())
        .unwrap();
    assert_eq!(card.to_string(), "FOUR of diamond");
}

#[test]
fn builder_round_trips_every_card() {
    for card in Card::standard_deck().chain([Card::Joker, Card::Guarantee]) {
        let builder = CardBuilder::from(card);
        assert_eq!(builder.card_type(), card.card_type());
        assert_eq!(builder.build(), Ok(card));
        assert_eq!(builder.to_display_string(), Ok(card.to_string()));
    }
}

//! Hand evaluation tests.

use bjround::deck::standard_deck;
use bjround::{Card, DealerHand, Hand, Rank, Suit, hand_value};
use proptest::prelude::*;
use proptest::sample::select;

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.into_iter().cycle())
        .map(|(&rank, suit)| Card::new(suit, rank))
        .collect()
}

/// Best total over every ace counted as 1 or 11.
fn best_total(ranks: &[Rank]) -> u16 {
    let aces = ranks.iter().filter(|&&rank| rank == Rank::Ace).count() as u16;
    let base: u16 = ranks
        .iter()
        .filter(|&&rank| rank != Rank::Ace)
        .map(|rank| u16::from(rank.score()))
        .sum::<u16>()
        + aces;

    (0..=aces)
        .map(|soft| base + soft * 10)
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or(base)
}

#[test]
fn soft_ace_counts_eleven() {
    assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Nine])), 20);
}

#[test]
fn ace_drops_to_one_to_avoid_bust() {
    assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Nine, Rank::Five])), 15);
}

#[test]
fn multiple_aces_reduce_one_at_a_time() {
    assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(
        hand_value(&cards(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen])),
        22
    );
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(hand_value(&cards(&[Rank::Jack, Rank::Queen])), 20);
    assert_eq!(hand_value(&cards(&[Rank::King, Rank::Queen, Rank::Ace])), 21);
    assert_eq!(hand_value(&[]), 0);
}

#[test]
fn busted_total_is_all_aces_low_however_large() {
    assert_eq!(hand_value(&standard_deck()), 340);
}

#[test]
fn player_hand_tracks_bust() {
    let mut hand = Hand::new();
    for card in cards(&[Rank::Ten, Rank::Nine]) {
        hand.add_card(card);
    }
    assert!(!hand.is_bust());

    hand.add_card(Card::new(Suit::Hearts, Rank::Five));
    assert_eq!(hand.value(), 24);
    assert!(hand.is_bust());

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn dealer_hole_card_hidden_until_revealed() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Card::new(Suit::Hearts, Rank::Ace));
    dealer.set_hole(Card::new(Suit::Clubs, Rank::Six));

    assert!(dealer.has_hidden_card());
    assert_eq!(dealer.visible_value(), 11);
    assert_eq!(dealer.value(), 17);
    assert_eq!(dealer.len(), 2);

    assert_eq!(
        dealer.reveal_hole(),
        Some(Card::new(Suit::Clubs, Rank::Six))
    );
    assert!(!dealer.has_hidden_card());
    assert_eq!(dealer.visible_value(), 17);
    assert_eq!(dealer.cards().len(), 2);

    assert_eq!(dealer.reveal_hole(), None);
    assert_eq!(dealer.cards().len(), 2);
}

#[test]
fn card_display_uses_label_and_symbol() {
    assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
    assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(Card::new(Suit::Clubs, Rank::Queen).to_string(), "Q♣");
}

proptest! {
    #[test]
    fn value_is_best_ace_assignment(ranks in prop::collection::vec(select(Rank::ALL.to_vec()), 0..12)) {
        let hand = cards(&ranks);
        prop_assert_eq!(hand_value(&hand), best_total(&ranks));
    }

    #[test]
    fn value_never_busts_with_a_soft_ace_left(ranks in prop::collection::vec(select(Rank::ALL.to_vec()), 1..8)) {
        let hand = cards(&ranks);
        let value = hand_value(&hand);
        let hard: u16 = ranks
            .iter()
            .map(|&rank| if rank == Rank::Ace { 1 } else { u16::from(rank.score()) })
            .sum();
        prop_assert!(value <= 21 || value == hard);
    }
}

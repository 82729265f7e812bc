//! Card, deck, hand, and player tests.

use std::collections::HashSet;

use gofish::{Card, DECK_SIZE, DealError, Deck, Hand, Player, RANKS, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Hearts, 5).to_string(), "5 of Hearts");
    assert_eq!(card(Suit::Spades, 13).to_string(), "13 of Spades");
    assert_eq!(card(Suit::Diamonds, 1).to_string(), "1 of Diamonds");
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let dealt: HashSet<String> = deck.cards().iter().map(ToString::to_string).collect();
    let expected: HashSet<String> = Suit::ALL
        .iter()
        .flat_map(|suit| RANKS.map(move |rank| format!("{rank} of {suit}")))
        .collect();
    assert_eq!(dealt, expected);
}

#[test]
fn fresh_deck_is_suit_major() {
    let deck = Deck::new();
    let cards = deck.cards();
    assert_eq!(cards[0], card(Suit::Hearts, 1));
    assert_eq!(cards[12], card(Suit::Hearts, 13));
    assert_eq!(cards[13], card(Suit::Diamonds, 1));
    assert_eq!(cards[26], card(Suit::Clubs, 1));
    assert_eq!(cards[51], card(Suit::Spades, 13));
}

#[test]
fn shuffle_is_a_permutation() {
    let mut deck = Deck::new();
    let before = deck.cards().to_vec();

    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck.cards(), before.as_slice());

    let mut sorted_before = before;
    let mut sorted_after = deck.cards().to_vec();
    let key = |c: &Card| (c.suit as u8, c.rank);
    sorted_before.sort_by_key(key);
    sorted_after.sort_by_key(key);
    assert_eq!(sorted_before, sorted_after);
}

#[test]
fn shuffle_is_reproducible_with_a_seed() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn shuffle_empty_deck_is_noop() {
    let mut deck = Deck::from_cards(Vec::new());
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(1));
    assert!(deck.is_empty());
}

#[test]
fn deal_pops_from_the_end() {
    let mut deck = Deck::new();
    let dealt = deck.deal(3).unwrap();
    assert_eq!(
        dealt,
        vec![
            card(Suit::Spades, 13),
            card(Suit::Spades, 12),
            card(Suit::Spades, 11),
        ]
    );
    assert_eq!(deck.len(), DECK_SIZE - 3);
}

#[test]
fn repeated_deals_are_disjoint_until_exhausted() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(3));

    let mut seen = HashSet::new();
    for _ in 0..10 {
        let dealt = deck.deal(5).unwrap();
        assert_eq!(dealt.len(), 5);
        for card in dealt {
            assert!(seen.insert(card), "{card} dealt twice");
        }
    }
    assert_eq!(deck.len(), 2);

    let rest = deck.deal(2).unwrap();
    assert_eq!(rest.len(), 2);
    assert!(deck.is_empty());
    assert_eq!(seen.len() + rest.len(), DECK_SIZE);
}

#[test]
fn over_deal_fails_and_leaves_deck_unchanged() {
    let mut deck = Deck::from_cards(vec![card(Suit::Hearts, 2), card(Suit::Clubs, 9)]);
    let before = deck.clone();

    assert_eq!(
        deck.deal(3).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 3,
            remaining: 2,
        }
    );
    assert_eq!(deck, before);

    let mut empty = Deck::from_cards(Vec::new());
    assert_eq!(
        empty.deal(1).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 1,
            remaining: 0,
        }
    );
    assert_eq!(empty.deal(0).unwrap(), Vec::new());
}

#[test]
fn hand_take_rank_keeps_other_cards_in_order() {
    let mut hand = Hand::new();
    hand.add_cards([
        card(Suit::Hearts, 3),
        card(Suit::Clubs, 8),
        card(Suit::Spades, 3),
        card(Suit::Diamonds, 10),
    ]);

    assert_eq!(hand.count_rank(3), 2);
    let taken = hand.take_rank(3);
    assert_eq!(taken, vec![card(Suit::Hearts, 3), card(Suit::Spades, 3)]);
    assert_eq!(
        hand.cards(),
        &[card(Suit::Clubs, 8), card(Suit::Diamonds, 10)]
    );
    assert!(hand.take_rank(3).is_empty());
}

#[test]
fn ask_success_moves_every_card_of_the_rank() {
    let mut asker = Player::new("A");
    let mut target = Player::new("B");
    asker.draw([card(Suit::Hearts, 4)]);
    target.draw([
        card(Suit::Clubs, 4),
        card(Suit::Hearts, 9),
        card(Suit::Diamonds, 4),
    ]);

    assert!(asker.ask(&mut target, 4));
    assert_eq!(asker.hand().len(), 3);
    assert_eq!(asker.hand().count_rank(4), 3);
    assert_eq!(target.hand().cards(), &[card(Suit::Hearts, 9)]);
}

#[test]
fn ask_failure_changes_nothing() {
    let mut asker = Player::new("A");
    let mut target = Player::new("B");
    asker.draw([card(Suit::Hearts, 4)]);
    target.draw([card(Suit::Diamonds, 2)]);

    let (asker_before, target_before) = (asker.clone(), target.clone());
    assert!(!asker.ask(&mut target, 4));
    assert_eq!(asker, asker_before);
    assert_eq!(target, target_before);
}

#[test]
fn four_of_a_rank_completes_a_match() {
    let mut player = Player::new("A");
    player.draw(Suit::ALL.map(|suit| card(suit, 6)));
    player.draw([card(Suit::Hearts, 2)]);

    assert_eq!(player.check_for_matches(), 1);
    assert_eq!(player.matches(), &[6]);
    assert_eq!(player.hand().cards(), &[card(Suit::Hearts, 2)]);
}

#[test]
fn three_of_a_rank_never_matches() {
    let mut player = Player::new("A");
    player.draw([
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 6),
        card(Suit::Spades, 6),
    ]);

    assert_eq!(player.check_for_matches(), 0);
    assert_eq!(player.hand().len(), 3);
    assert!(player.matches().is_empty());
}

#[test]
fn match_count_is_cumulative_and_idempotent() {
    let mut player = Player::new("A");
    player.draw(Suit::ALL.map(|suit| card(suit, 1)));
    player.draw(Suit::ALL.map(|suit| card(suit, 12)));

    assert_eq!(player.check_for_matches(), 2);
    assert_eq!(player.check_for_matches(), 2);
    assert!(player.hand().is_empty());

    player.draw(Suit::ALL.map(|suit| card(suit, 5)));
    assert_eq!(player.check_for_matches(), 3);
    assert_eq!(player.matches(), &[1, 12, 5]);
    assert_eq!(player.score(), 3);
}

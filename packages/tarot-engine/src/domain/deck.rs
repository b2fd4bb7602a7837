//! Deck construction and deterministic dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::{Card, Suit, KING_RANK, MAX_TRUMP};
use crate::domain::rules::{CARDS_PER_PLAYER, DECK_SIZE, DOG_SIZE, PLAYERS};

/// The 78 cards in fresh-deck order (matches [`Card::deck_index`]).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=KING_RANK {
            deck.push(Card::Suited(suit, rank));
        }
    }
    for rank in 0..=MAX_TRUMP {
        deck.push(Card::Trump(rank));
    }
    deck
}

/// Hands and dog produced by one shuffle.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: [Vec<Card>; PLAYERS],
    pub dog: Vec<Card>,
}

/// Fisher-Yates shuffle with an explicitly seeded generator, then 18 cards to
/// each seat and 6 to the dog. Hands come back sorted in deck order.
pub fn deal(seed: u64) -> Deal {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let dog = deck.split_off(DECK_SIZE - DOG_SIZE);
    let mut chunks = deck.chunks_exact(CARDS_PER_PLAYER);
    let hands = std::array::from_fn(|_| {
        let mut hand = chunks.next().map(<[Card]>::to_vec).unwrap_or_default();
        hand.sort();
        hand
    });
    Deal { hands, dog }
}

/// Point value of an arbitrary pile of cards (a trick pot, a hand, the dog).
pub fn pot_value(cards: &[Card]) -> f32 {
    cards.iter().map(|c| c.points()).sum()
}

/// Number of bouts in a pile of cards.
pub fn pot_bouts(cards: &[Card]) -> u8 {
    cards.iter().filter(|c| c.is_bout()).count() as u8
}

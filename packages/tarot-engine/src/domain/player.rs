//! Per-deal player record and seat math.

use crate::domain::bids::Bid;
use crate::domain::cards::Card;
use crate::domain::rules::PLAYERS;

pub type PlayerId = u8; // 0..=3

/// Mutable per-deal state for one seat. Rebuilt wholesale on every (re-)deal.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Vec<Card>,
    /// Trick points accumulated so far (card points are half-integral).
    pub points: f32,
    /// Bouts captured so far.
    pub bouts: u8,
    /// Latest bid this deal, if any.
    pub bid: Option<Bid>,
    pub taking: bool,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self::with_hand(id, Vec::new())
    }

    pub fn with_hand(id: PlayerId, hand: Vec<Card>) -> Self {
        Self {
            id,
            hand,
            points: 0.0,
            bouts: 0,
            bid: None,
            taking: false,
        }
    }

    pub fn has_passed(&self) -> bool {
        self.bid == Some(Bid::Passe)
    }
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(p: PlayerId) -> PlayerId {
    (p + 1) % PLAYERS as u8
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: u8) -> PlayerId {
    (start + n % PLAYERS as u8) % PLAYERS as u8
}

//! Core card types for the 78-card tarot deck.

/// Highest trump rank (the 21).
pub const MAX_TRUMP: u8 = 21;
/// Suited rank of the king.
pub const KING_RANK: u8 = 14;

/// The four plain suits ("colors").
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spade,
    Clover,
    Heart,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Clover, Suit::Heart, Suit::Diamond];
}

/// One of the 78 tarot cards. Compared by value only.
///
/// Trump ranks run 0..=21; rank 0 is the Excuse, a wild card that follows its
/// own rules everywhere (see the trick module). Suited ranks run 1..=14 with
/// 14 the king. Values outside those ranges are never produced by
/// [`crate::domain::deck::full_deck`] or by parsing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Trump(u8),
    Suited(Suit, u8),
}

impl Card {
    pub fn is_trump(self) -> bool {
        matches!(self, Card::Trump(_))
    }

    /// The Excuse: trump rank 0.
    pub fn is_excuse(self) -> bool {
        matches!(self, Card::Trump(0))
    }

    /// One of the three bouts: the Excuse, the Petit (trump 1) and the 21.
    pub fn is_bout(self) -> bool {
        matches!(self, Card::Trump(0 | 1 | MAX_TRUMP))
    }

    pub fn is_king(self) -> bool {
        matches!(self, Card::Suited(_, KING_RANK))
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Trump(_) => None,
            Card::Suited(suit, _) => Some(suit),
        }
    }

    pub fn trump_rank(self) -> Option<u8> {
        match self {
            Card::Trump(rank) => Some(rank),
            Card::Suited(..) => None,
        }
    }

    /// Point value of the card. Bouts and kings are worth 4.5, queens 3.5,
    /// knights 2.5, jacks 1.5, everything else half a point. The full deck
    /// totals 91 points.
    pub fn points(self) -> f32 {
        match self {
            Card::Trump(rank) if rank == 0 || rank == 1 || rank == MAX_TRUMP => 4.5,
            Card::Trump(_) => 0.5,
            Card::Suited(_, rank) if rank <= 10 => 0.5,
            Card::Suited(_, rank) => 0.5 + f32::from(rank - 10),
        }
    }

    /// Stable index in fresh-deck order: suited cards first (suits in
    /// [`Suit::ALL`] order, ranks 1..=14 → 0..=55), then trumps by rank
    /// (56..=77). Also the card's position in any fixed action space.
    pub fn deck_index(self) -> usize {
        match self {
            Card::Suited(suit, rank) => suit as usize * 14 + (rank as usize - 1),
            Card::Trump(rank) => 56 + rank as usize,
        }
    }
}

// Note: Ord on Card is only a stable sorting/display order (deck order).
// Trick strength depends on the target card and lives in the tricks module.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.deck_index().cmp(&other.deck_index())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

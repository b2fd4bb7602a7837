//! Fixed table rules for the four-player game.

pub const PLAYERS: usize = 4;
pub const CARDS_PER_PLAYER: usize = 18;
pub const DOG_SIZE: usize = 6;
pub const DECK_SIZE: usize = 78;
pub const TRICKS_PER_DEAL: usize = CARDS_PER_PLAYER;

/// Points in the full deck.
pub const TOTAL_CARD_POINTS: f32 = 91.0;

/// What the Excuse's owner keeps out of a trick someone else won: a flat
/// 4 points and the bout itself.
pub const EXCUSE_OWNER_POINTS: f32 = 4.0;

/// Points the taker must reach, graduated inversely by bouts held at the end
/// of the deal.
pub fn contract_threshold(bouts: u8) -> f32 {
    match bouts {
        0 => 61.0,
        1 => 51.0,
        2 => 41.0,
        _ => 36.0,
    }
}

//! Shuffle seed derivation for deterministic deals.
//!
//! A game seed plus the deal counter yields the shuffle seed, so the
//! automatic re-deal after an all-pass bid round reshuffles reproducibly
//! instead of handing out the same dead hands again.

/// Derive the shuffle seed for deal number `deal_no` (0-based) of a game.
pub fn derive_deal_seed(game_seed: u64, deal_no: u32) -> u64 {
    game_seed
        .wrapping_add(u64::from(deal_no).wrapping_mul(1_000_000))
        .wrapping_add(1)
}

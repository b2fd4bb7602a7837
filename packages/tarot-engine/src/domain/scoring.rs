//! Payoff computation for a finished deal.

use crate::domain::bids::Bid;
use crate::domain::player::PlayerId;
use crate::domain::rules::{contract_threshold, PLAYERS};

/// Signed payoff vector for the table.
///
/// The contract value is the bid's stake plus one point per full ten-point
/// margin between the taker's score and their threshold (margin truncated
/// toward zero, then taken absolute; it widens the swing whichever way the
/// contract went). The taker wins or loses three defender shares, so the
/// vector always sums to zero.
pub fn contract_payoffs(
    taking_player: PlayerId,
    taking_bid: Bid,
    taker_points: f32,
    taker_bouts: u8,
    taker_won: bool,
) -> [i32; PLAYERS] {
    let threshold = contract_threshold(taker_bouts);
    let extra = (((taker_points - threshold) / 10.0) as i32).abs();
    let total = taking_bid.stake() + extra;
    let sign = if taker_won { 1 } else { -1 };

    let mut payoffs = [-sign * total; PLAYERS];
    payoffs[taking_player as usize] = sign * 3 * total;
    payoffs
}

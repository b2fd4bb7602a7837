//! End-of-deal judge: did the taker make the contract?

use tracing::debug;

use crate::domain::cards::Card;
use crate::domain::deck::{pot_bouts, pot_value};
use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::{contract_threshold, PLAYERS};

/// The taker's effective totals: accumulated trick points and bouts, plus the
/// buried dog when it was exchanged. `None` when no seat is taking.
pub fn taker_totals(
    players: &[Player; PLAYERS],
    new_dog: &[Card],
    dog_exchanged: bool,
) -> Option<(PlayerId, f32, u8)> {
    let taker = players.iter().find(|p| p.taking)?;
    let mut points = taker.points;
    let mut bouts = taker.bouts;
    if dog_exchanged {
        points += pot_value(new_dog);
        bouts += pot_bouts(new_dog);
    }
    Some((taker.id, points, bouts))
}

/// Winner set for a finished deal: the taker alone when their points meet the
/// bout-graduated threshold, otherwise the three defenders collectively.
pub fn judge(players: &[Player; PLAYERS], new_dog: &[Card], dog_exchanged: bool) -> Vec<PlayerId> {
    if let Some((taker, points, bouts)) = taker_totals(players, new_dog, dog_exchanged) {
        if points >= contract_threshold(bouts) {
            debug!(taker, points, bouts, "contract met");
            return vec![taker];
        }
        debug!(taker, points, bouts, "contract failed");
    }
    players.iter().filter(|p| !p.taking).map(|p| p.id).collect()
}

//! Bid phase: sequential polling until a taker emerges or everyone passes.

use tracing::debug;

use crate::domain::bids::Bid;
use crate::domain::player::{next_seat, Player, PlayerId};
use crate::domain::rules::PLAYERS;
use crate::errors::domain::{DomainError, ValidationKind};

/// State of one bid round.
#[derive(Debug, Clone)]
pub struct BidPhase {
    pub current_player: PlayerId,
    /// Highest non-pass bid so far. Non-decreasing across the phase.
    pub max_bid: Option<Bid>,
    /// Seat currently holding the highest bid.
    pub taking_player: Option<PlayerId>,
    pub is_over: bool,
    /// All four seats passed; the orchestrator re-deals.
    pub is_dead: bool,
}

impl BidPhase {
    pub fn new(starting_player: PlayerId) -> Self {
        Self {
            current_player: starting_player,
            max_bid: None,
            taking_player: None,
            is_over: false,
            is_dead: false,
        }
    }
}

/// Bids the current speaker may place: every level strictly above the running
/// maximum, then PASSE.
pub fn legal_bids(phase: &BidPhase) -> Vec<Bid> {
    let floor = phase.max_bid.map_or(0, Bid::order);
    let mut bids: Vec<Bid> = Bid::ALL
        .into_iter()
        .filter(|b| b.order() > floor)
        .collect();
    bids.push(Bid::Passe);
    bids
}

/// Record one bid and advance the phase. Returns the next speaker (the taker
/// once the phase is over).
pub fn place_bid(
    phase: &mut BidPhase,
    players: &mut [Player; PLAYERS],
    who: PlayerId,
    bid: Bid,
) -> Result<PlayerId, DomainError> {
    if phase.is_over || phase.is_dead {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "bid phase already resolved",
        ));
    }
    if who != phase.current_player {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "out of turn",
        ));
    }
    if !legal_bids(phase).contains(&bid) {
        return Err(DomainError::validation(
            ValidationKind::IllegalBid,
            format!("bid {bid} does not outbid the current maximum"),
        ));
    }

    players[who as usize].bid = Some(bid);
    if bid != Bid::Passe {
        phase.max_bid = Some(bid);
        phase.taking_player = Some(who);
    }

    let passed = players.iter().filter(|p| p.has_passed()).count();

    if bid == Bid::GardeContre {
        // Top of the ladder: nobody can outbid, the phase ends on the spot.
        finish(phase, players, who);
    } else if passed == PLAYERS {
        phase.is_dead = true;
        debug!("bid round dead, all seats passed");
    } else if passed == PLAYERS - 1 {
        if let Some(taker) = phase.taking_player {
            finish(phase, players, taker);
        } else {
            advance(phase, players, who);
        }
    } else {
        advance(phase, players, who);
    }
    Ok(phase.current_player)
}

fn advance(phase: &mut BidPhase, players: &[Player; PLAYERS], who: PlayerId) {
    // Next seat clockwise, skipping seats that already passed.
    let mut next = next_seat(who);
    while players[next as usize].has_passed() {
        next = next_seat(next);
    }
    phase.current_player = next;
}

fn finish(phase: &mut BidPhase, players: &mut [Player; PLAYERS], taker: PlayerId) {
    phase.is_over = true;
    phase.taking_player = Some(taker);
    phase.current_player = taker;
    for player in players.iter_mut() {
        player.taking = player.id == taker;
    }
    debug!(taker, max_bid = ?phase.max_bid, "bid phase over");
}

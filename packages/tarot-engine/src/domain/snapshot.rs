//! Per-seat snapshots: what one player can see, phase-tagged.
//!
//! `unknown` is the seat's hidden-card set: the other three hands plus the
//! dog whenever its contents are hidden from that seat. Defenders never see
//! the dog; on the two highest bid levels neither does the taker.

use serde::{Deserialize, Serialize};

use crate::domain::bidding;
use crate::domain::bids::Bid;
use crate::domain::cards::Card;
use crate::domain::dog;
use crate::domain::game::{GamePhase, TarotGame};
use crate::domain::player::PlayerId;
use crate::domain::tricks;

/// Top-level snapshot combining deal facts and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub viewer: PlayerId,
    pub to_act: PlayerId,
    pub deal_count: u32,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Bidding(BiddingSnapshot),
    Dog(DogSnapshot),
    Trick(TrickSnapshot),
}

/// Bid phase view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub hand: Vec<Card>,
    pub max_bid: Option<Bid>,
    pub own_bid: Option<Bid>,
    /// Bids of the other seats, clockwise from the viewer.
    pub other_bids: Vec<Option<Bid>>,
    /// Empty unless the viewer is the seat to act.
    pub legal_bids: Vec<Bid>,
}

/// Dog exchange view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DogSnapshot {
    pub hand: Vec<Card>,
    /// Cards buried so far; `None` for everyone but the taker.
    pub buried: Option<Vec<Card>>,
    pub unknown: Vec<Card>,
    /// Empty unless the viewer is the taker.
    pub legal_discards: Vec<Card>,
}

/// Trick play view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub hand: Vec<Card>,
    pub target: Option<Card>,
    /// Completed tricks so far.
    pub trick_no: u8,
    /// Plays of the trick in progress.
    pub trick_plays: Vec<(PlayerId, Card)>,
    /// Every card played this deal, in play order.
    pub played_cards: Vec<Card>,
    pub taking_player: Option<PlayerId>,
    pub taking_bid: Option<Bid>,
    pub unknown: Vec<Card>,
    /// Empty unless the viewer is the seat to act.
    pub legal_cards: Vec<Card>,
}

/// Build the snapshot of `game` as seen from `viewer`.
pub fn snapshot_for(game: &TarotGame, viewer: PlayerId) -> GameSnapshot {
    let to_act = game.current_player();
    let hand = sorted_hand(game, viewer);

    let phase = match &game.phase {
        GamePhase::Bid(p) => PhaseSnapshot::Bidding(BiddingSnapshot {
            hand,
            max_bid: p.max_bid,
            own_bid: game.players[viewer as usize].bid,
            other_bids: others_clockwise(viewer)
                .map(|seat| game.players[seat as usize].bid)
                .collect(),
            legal_bids: if viewer == to_act {
                bidding::legal_bids(p)
            } else {
                Vec::new()
            },
        }),
        GamePhase::Dog(p) => {
            let is_taker = viewer == p.taking_player;
            let mut unknown = hidden_hands(game, viewer);
            if !is_taker {
                unknown.extend(&p.buried);
            }
            PhaseSnapshot::Dog(DogSnapshot {
                legal_discards: if is_taker {
                    dog::legal_discards(&game.players[viewer as usize].hand)
                } else {
                    Vec::new()
                },
                buried: is_taker.then(|| p.buried.clone()),
                unknown,
                hand,
            })
        }
        GamePhase::Main(p) => {
            let dog_visible = p.dog_exchanged && game.taking_player == Some(viewer);
            let mut unknown = hidden_hands(game, viewer);
            if !dog_visible {
                unknown.extend(&p.new_dog);
            }
            PhaseSnapshot::Trick(TrickSnapshot {
                legal_cards: if viewer == to_act {
                    tricks::legal_moves(p, &game.players[viewer as usize].hand)
                } else {
                    Vec::new()
                },
                hand,
                target: p.target,
                trick_no: p.trick_no(),
                trick_plays: p.trick_plays.clone(),
                played_cards: p.played_cards.clone(),
                taking_player: game.taking_player,
                taking_bid: game.taking_bid,
                unknown,
            })
        }
    };

    GameSnapshot {
        viewer,
        to_act,
        deal_count: game.deal_count(),
        phase,
    }
}

fn sorted_hand(game: &TarotGame, viewer: PlayerId) -> Vec<Card> {
    let mut hand = game.players[viewer as usize].hand.clone();
    hand.sort();
    hand
}

/// Cards sitting in the other three hands, in seat order from the viewer.
fn hidden_hands(game: &TarotGame, viewer: PlayerId) -> Vec<Card> {
    others_clockwise(viewer)
        .flat_map(|seat| game.players[seat as usize].hand.iter().copied())
        .collect()
}

fn others_clockwise(viewer: PlayerId) -> impl Iterator<Item = PlayerId> {
    (1..crate::domain::rules::PLAYERS as u8).map(move |n| crate::domain::player::nth_from(viewer, n))
}

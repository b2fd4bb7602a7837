//! Dog exchange: the taker folds the six dog cards into their hand and buries
//! six cards back face down.

use tracing::debug;

use crate::domain::cards::Card;
use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::{DOG_SIZE, PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

/// State of the exchange. The dog is merged into the taker's hand on entry,
/// so the hand is the single source of truth for what can still be buried.
#[derive(Debug, Clone)]
pub struct DogPhase {
    pub taking_player: PlayerId,
    /// Cards buried so far; becomes the new dog once six are in.
    pub buried: Vec<Card>,
    pub is_over: bool,
}

impl DogPhase {
    /// Merge the dog into the taker's hand and open the exchange.
    pub fn begin(players: &mut [Player; PLAYERS], taking_player: PlayerId, dog: Vec<Card>) -> Self {
        let hand = &mut players[taking_player as usize].hand;
        hand.extend(dog);
        hand.sort();
        Self {
            taking_player,
            buried: Vec::with_capacity(DOG_SIZE),
            is_over: false,
        }
    }
}

/// Cards the taker may bury, in priority order: any plain card below the
/// king; failing that, any trump that is not a bout. Kings and bouts can
/// never be buried.
pub fn legal_discards(hand: &[Card]) -> Vec<Card> {
    let plain: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| !c.is_trump() && !c.is_king())
        .collect();
    if !plain.is_empty() {
        return plain;
    }
    hand.iter()
        .copied()
        .filter(|c| c.is_trump() && !c.is_bout())
        .collect()
}

/// Move one card from the taker's hand to the buried set. The phase completes
/// when exactly six cards are buried.
pub fn bury(
    phase: &mut DogPhase,
    players: &mut [Player; PLAYERS],
    who: PlayerId,
    card: Card,
) -> Result<PlayerId, DomainError> {
    if phase.is_over {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "dog already buried",
        ));
    }
    if who != phase.taking_player {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "only the taker buries cards",
        ));
    }

    let hand = &mut players[who as usize].hand;
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "card not in hand",
        ));
    };
    if !legal_discards(hand).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::IllegalDiscard,
            format!("cannot bury {card}"),
        ));
    }

    hand.remove(pos);
    phase.buried.push(card);
    if phase.buried.len() == DOG_SIZE {
        phase.is_over = true;
        debug!(taker = who, "dog exchange complete");
    }
    Ok(phase.taking_player)
}

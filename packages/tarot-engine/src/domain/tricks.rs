//! Trick-taking phase: play legality, trick resolution, point accrual.

use tracing::debug;

use crate::domain::cards::Card;
use crate::domain::deck::{pot_bouts, pot_value};
use crate::domain::judger::judge;
use crate::domain::player::{next_seat, Player, PlayerId};
use crate::domain::rules::{EXCUSE_OWNER_POINTS, PLAYERS, TRICKS_PER_DEAL};
use crate::errors::domain::{DomainError, ValidationKind};

/// State of the 18-trick main phase.
#[derive(Debug, Clone)]
pub struct MainPhase {
    pub current_player: PlayerId,
    /// First non-Excuse card of the current trick; fixes the suit to follow.
    pub target: Option<Card>,
    /// Highest trump rank seen in the current trick. The Excuse never counts.
    pub highest_trump: Option<u8>,
    /// Every card played this deal, in play order.
    pub played_cards: Vec<Card>,
    /// Plays of the current trick.
    pub trick_plays: Vec<(PlayerId, Card)>,
    /// Who played the Excuse this deal, once they have.
    pub excuse_player: Option<PlayerId>,
    /// The six cards set aside for the deal: the taker's buried cards, or the
    /// untouched dog when the bid level skipped the exchange.
    pub new_dog: Vec<Card>,
    /// Whether the taker exchanged with the dog (bury levels only).
    pub dog_exchanged: bool,
    pub is_over: bool,
    /// Judged winner set once all tricks are played.
    pub winners: Option<Vec<PlayerId>>,
}

impl MainPhase {
    pub fn new(starting_player: PlayerId, new_dog: Vec<Card>, dog_exchanged: bool) -> Self {
        Self {
            current_player: starting_player,
            target: None,
            highest_trump: None,
            played_cards: Vec::with_capacity(PLAYERS * TRICKS_PER_DEAL),
            trick_plays: Vec::with_capacity(PLAYERS),
            excuse_player: None,
            new_dog,
            dog_exchanged,
            is_over: false,
            winners: None,
        }
    }

    /// Completed tricks so far.
    pub fn trick_no(&self) -> u8 {
        (self.played_cards.len() / PLAYERS) as u8
    }
}

/// What one card play did to the phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayResult {
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// Card points in the completed trick.
    pub trick_value: f32,
    /// Bouts in the completed trick.
    pub trick_bouts: u8,
    /// Seat to act next: the trick winner after a resolution, the next seat
    /// otherwise.
    pub next_player: PlayerId,
}

/// Cards the player may put down, given the current trick.
///
/// The Excuse is playable at any time; the follow rules apply to the rest of
/// the hand: follow the target suit if possible, otherwise overtrump, failing
/// that any trump, failing that anything.
pub fn legal_moves(phase: &MainPhase, hand: &[Card]) -> Vec<Card> {
    let rest: Vec<Card> = hand.iter().copied().filter(|c| !c.is_excuse()).collect();

    let mut legal = match phase.target {
        None => rest.clone(),
        Some(target) => match target.suit() {
            Some(suit) => {
                let follow: Vec<Card> =
                    rest.iter().copied().filter(|c| c.suit() == Some(suit)).collect();
                if follow.is_empty() {
                    trump_fallback(&rest, phase.highest_trump)
                } else {
                    follow
                }
            }
            None => trump_fallback(&rest, phase.highest_trump),
        },
    };
    legal.extend(hand.iter().copied().filter(|c| c.is_excuse()));
    legal
}

fn trump_fallback(rest: &[Card], highest_trump: Option<u8>) -> Vec<Card> {
    let over: Vec<Card> = rest
        .iter()
        .copied()
        .filter(|c| c.trump_rank() > highest_trump)
        .collect();
    if !over.is_empty() {
        return over;
    }
    let any: Vec<Card> = rest.iter().copied().filter(|c| c.is_trump()).collect();
    if !any.is_empty() {
        return any;
    }
    rest.to_vec()
}

/// Play one card into the current trick, enforcing turn and follow rules.
pub fn play_card(
    phase: &mut MainPhase,
    players: &mut [Player; PLAYERS],
    who: PlayerId,
    card: Card,
) -> Result<PlayResult, DomainError> {
    if phase.is_over {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "all tricks already played",
        ));
    }
    if who != phase.current_player {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "out of turn",
        ));
    }
    let hand = &players[who as usize].hand;
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "card not in hand",
        ));
    };
    if !legal_moves(phase, hand).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            format!("{card} does not follow the trick"),
        ));
    }

    players[who as usize].hand.remove(pos);

    if card.is_excuse() {
        // Wild: never sets the target, never raises the trump bar.
        phase.excuse_player = Some(who);
    } else {
        if phase.target.is_none() {
            phase.target = Some(card);
        }
        if let Some(rank) = card.trump_rank() {
            if Some(rank) > phase.highest_trump {
                phase.highest_trump = Some(rank);
            }
        }
    }
    phase.played_cards.push(card);
    phase.trick_plays.push((who, card));

    if phase.trick_plays.len() < PLAYERS {
        phase.current_player = next_seat(who);
        return Ok(PlayResult {
            trick_completed: false,
            trick_winner: None,
            trick_value: 0.0,
            trick_bouts: 0,
            next_player: phase.current_player,
        });
    }

    // Fourth card: resolve the trick.
    let target = phase
        .target
        .ok_or_else(|| DomainError::invariant("complete trick has no target card"))?;
    let winner = resolve_trick(&phase.trick_plays, target)?;
    let cards: Vec<Card> = phase.trick_plays.iter().map(|&(_, c)| c).collect();
    let value = pot_value(&cards);
    let bouts = pot_bouts(&cards);
    players[winner as usize].points += value;
    players[winner as usize].bouts += bouts;

    // The Excuse stays with its owner: a flat 4 points and its bout move from
    // the nominal winner back to whoever played it.
    if let Some(owner) = cards
        .iter()
        .position(|c| c.is_excuse())
        .map(|i| phase.trick_plays[i].0)
    {
        if owner != winner {
            players[owner as usize].points += EXCUSE_OWNER_POINTS;
            players[owner as usize].bouts += 1;
            players[winner as usize].points -= EXCUSE_OWNER_POINTS;
            players[winner as usize].bouts -= 1;
        }
    }

    debug!(winner, value, bouts, trick_no = phase.trick_no(), "trick resolved");

    phase.trick_plays.clear();
    phase.target = None;
    phase.highest_trump = None;
    phase.current_player = winner;

    if phase.played_cards.len() == PLAYERS * TRICKS_PER_DEAL {
        phase.is_over = true;
        phase.winners = Some(judge(players, &phase.new_dog, phase.dog_exchanged));
    }

    Ok(PlayResult {
        trick_completed: true,
        trick_winner: Some(winner),
        trick_value: value,
        trick_bouts: bouts,
        next_player: winner,
    })
}

/// Resolve a complete trick. Pure: same plays and target, same winner.
///
/// The Excuse never wins. If the target is a trump or any trump was played,
/// the highest trump wins; otherwise the highest card of the target suit.
pub fn resolve_trick(plays: &[(PlayerId, Card)], target: Card) -> Result<PlayerId, DomainError> {
    let best_trump = plays
        .iter()
        .filter(|(_, c)| !c.is_excuse())
        .filter_map(|&(p, c)| c.trump_rank().map(|r| (r, p)))
        .max_by_key(|&(r, _)| r);
    if let Some((_, winner)) = best_trump {
        return Ok(winner);
    }

    let suit = target
        .suit()
        .ok_or_else(|| DomainError::invariant("trump target but no trump in trick"))?;
    plays
        .iter()
        .filter_map(|&(p, c)| match c {
            Card::Suited(s, r) if s == suit => Some((r, p)),
            _ => None,
        })
        .max_by_key(|&(r, _)| r)
        .map(|(_, p)| p)
        .ok_or_else(|| DomainError::invariant("complete trick has no card in the target suit"))
}

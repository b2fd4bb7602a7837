//! Deal orchestrator: sequences the bid, dog and trick phases.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::bidding::{self, BidPhase};
use crate::domain::bids::Bid;
use crate::domain::cards::Card;
use crate::domain::deck::{self, Deal};
use crate::domain::dog::{self, DogPhase};
use crate::domain::judger::taker_totals;
use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::scoring::contract_payoffs;
use crate::domain::seed_derivation::derive_deal_seed;
use crate::domain::snapshot::{self, GameSnapshot};
use crate::domain::tricks::{self, MainPhase};
use crate::errors::domain::{DomainError, ValidationKind};

/// One action submitted by the seat to move: a bid during the bid phase, a
/// card afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Bid(Bid),
    Card(Card),
}

impl Action {
    /// Stable index into the active phase's action space: 0..6 for bids,
    /// 0..78 (deck order) for cards.
    pub fn index(self) -> usize {
        match self {
            Action::Bid(bid) => bid.order() as usize,
            Action::Card(card) => card.deck_index(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Bid(bid) => bid.fmt(f),
            Action::Card(card) => card.fmt(f),
        }
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Bid names carry no rank separator with a digit, so try them first.
        if let Ok(bid) = s.parse::<Bid>() {
            return Ok(Action::Bid(bid));
        }
        s.parse::<Card>().map(Action::Card)
    }
}

/// Active phase, selected by exhaustive match.
#[derive(Debug, Clone)]
pub enum GamePhase {
    Bid(BidPhase),
    Dog(DogPhase),
    Main(MainPhase),
}

/// One full deal of four-player tarot.
///
/// Owns the players, the dog and the active phase; every mutation goes
/// through [`TarotGame::step`]. Given the same seed and action sequence the
/// whole deal replays identically, re-deals included.
#[derive(Debug, Clone)]
pub struct TarotGame {
    seed: u64,
    deal_no: u32,
    starting_player: PlayerId,
    pub(crate) players: [Player; PLAYERS],
    /// Face-down dog; emptied once a bid hands it to a phase.
    pub(crate) dog: Vec<Card>,
    pub(crate) taking_player: Option<PlayerId>,
    pub(crate) taking_bid: Option<Bid>,
    pub(crate) phase: GamePhase,
    is_over: bool,
}

impl TarotGame {
    /// Build the game and deal the first hands. The starting seat is derived
    /// from the seed, never from ambient randomness.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let starting_player: PlayerId = rng.random_range(0..PLAYERS as u8);
        let mut game = Self {
            seed,
            deal_no: 0,
            starting_player,
            players: [
                Player::new(0),
                Player::new(1),
                Player::new(2),
                Player::new(3),
            ],
            dog: Vec::new(),
            taking_player: None,
            taking_bid: None,
            phase: GamePhase::Bid(BidPhase::new(starting_player)),
            is_over: false,
        };
        game.init_deal();
        game
    }

    /// Deal (or re-deal) hands and reset every per-deal structure.
    fn init_deal(&mut self) {
        let Deal { hands, dog } = deck::deal(derive_deal_seed(self.seed, self.deal_no));
        let [h0, h1, h2, h3] = hands;
        self.players = [
            Player::with_hand(0, h0),
            Player::with_hand(1, h1),
            Player::with_hand(2, h2),
            Player::with_hand(3, h3),
        ];
        self.dog = dog;
        self.taking_player = None;
        self.taking_bid = None;
        self.phase = GamePhase::Bid(BidPhase::new(self.starting_player));
        self.is_over = false;
        debug!(deal_no = self.deal_no, starter = self.starting_player, "hands dealt");
    }

    /// Snapshot for the first seat to speak.
    pub fn init_state(&self) -> (GameSnapshot, PlayerId) {
        let player = self.current_player();
        (self.state_for(player), player)
    }

    /// Apply one action for the seat to move and return the next seat's
    /// snapshot. Illegal actions are rejected without touching the deal.
    pub fn step(&mut self, action: Action) -> Result<(GameSnapshot, PlayerId), DomainError> {
        if self.is_over {
            return Err(DomainError::validation(
                ValidationKind::GameOver,
                "deal already complete",
            ));
        }
        match action {
            Action::Bid(bid) if matches!(self.phase, GamePhase::Bid(_)) => self.step_bid(bid)?,
            Action::Card(card) if matches!(self.phase, GamePhase::Dog(_)) => self.step_dog(card)?,
            Action::Card(card) if matches!(self.phase, GamePhase::Main(_)) => {
                self.step_main(card)?
            }
            action => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    format!("action {action} does not belong to the current phase"),
                ))
            }
        }
        self.check_conservation()?;
        let player = self.current_player();
        Ok((self.state_for(player), player))
    }

    fn step_bid(&mut self, bid: Bid) -> Result<(), DomainError> {
        let GamePhase::Bid(phase) = &mut self.phase else {
            return Err(DomainError::invariant("bid step outside the bid phase"));
        };
        let who = phase.current_player;
        bidding::place_bid(phase, &mut self.players, who, bid)?;

        if phase.is_dead {
            self.deal_no += 1;
            info!(deal_no = self.deal_no, "all seats passed, re-dealing");
            self.init_deal();
            return Ok(());
        }
        if !phase.is_over {
            return Ok(());
        }

        let taker = phase
            .taking_player
            .ok_or_else(|| DomainError::invariant("bid phase over without a taker"))?;
        let taking_bid = phase
            .max_bid
            .ok_or_else(|| DomainError::invariant("bid phase over without a max bid"))?;
        self.taking_player = Some(taker);
        self.taking_bid = Some(taking_bid);
        info!(taker, bid = %taking_bid, "bid phase resolved");

        let dog = std::mem::take(&mut self.dog);
        if taking_bid.skips_dog() {
            // The dog stays face down for everyone, the taker included.
            self.phase = GamePhase::Main(MainPhase::new(self.starting_player, dog, false));
        } else {
            self.phase = GamePhase::Dog(DogPhase::begin(&mut self.players, taker, dog));
        }
        Ok(())
    }

    fn step_dog(&mut self, card: Card) -> Result<(), DomainError> {
        let GamePhase::Dog(phase) = &mut self.phase else {
            return Err(DomainError::invariant("dog step outside the dog phase"));
        };
        let who = phase.taking_player;
        dog::bury(phase, &mut self.players, who, card)?;
        if phase.is_over {
            let buried = std::mem::take(&mut phase.buried);
            info!(taker = who, "dog buried, trick play begins");
            self.phase = GamePhase::Main(MainPhase::new(self.starting_player, buried, true));
        }
        Ok(())
    }

    fn step_main(&mut self, card: Card) -> Result<(), DomainError> {
        let GamePhase::Main(phase) = &mut self.phase else {
            return Err(DomainError::invariant("card step outside the main phase"));
        };
        let who = phase.current_player;
        tricks::play_card(phase, &mut self.players, who, card)?;
        if phase.is_over {
            self.is_over = true;
            info!(winners = ?phase.winners, "deal complete");
        }
        Ok(())
    }

    /// Seat expected to act next.
    pub fn current_player(&self) -> PlayerId {
        match &self.phase {
            GamePhase::Bid(p) => p.current_player,
            GamePhase::Dog(p) => p.taking_player,
            GamePhase::Main(p) => p.current_player,
        }
    }

    /// Ordered legal actions for the seat to move. Never empty while the deal
    /// is running.
    pub fn legal_actions(&self) -> Vec<Action> {
        match &self.phase {
            GamePhase::Bid(p) => bidding::legal_bids(p).into_iter().map(Action::Bid).collect(),
            GamePhase::Dog(p) => {
                legal_cards(&self.players[p.taking_player as usize].hand, |hand| {
                    dog::legal_discards(hand)
                })
            }
            GamePhase::Main(p) => {
                legal_cards(&self.players[p.current_player as usize].hand, |hand| {
                    tricks::legal_moves(p, hand)
                })
            }
        }
    }

    /// What `player` can see right now, phase-tagged.
    pub fn state_for(&self, player: PlayerId) -> GameSnapshot {
        snapshot::snapshot_for(self, player)
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Deals attempted so far, counting automatic re-deals after dead bid
    /// rounds. Training wrappers may use this to penalize wasted deals.
    pub fn deal_count(&self) -> u32 {
        self.deal_no
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn players(&self) -> &[Player; PLAYERS] {
        &self.players
    }

    pub fn taking_player(&self) -> Option<PlayerId> {
        self.taking_player
    }

    pub fn taking_bid(&self) -> Option<Bid> {
        self.taking_bid
    }

    /// Signed point deltas once the deal is complete. Always sums to zero.
    pub fn payoffs(&self) -> Result<[i32; PLAYERS], DomainError> {
        let GamePhase::Main(phase) = &self.phase else {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "deal not finished",
            ));
        };
        if !phase.is_over {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "deal not finished",
            ));
        }
        let winners = phase
            .winners
            .as_ref()
            .ok_or_else(|| DomainError::invariant("finished deal without a judgment"))?;
        let taking_bid = self
            .taking_bid
            .ok_or_else(|| DomainError::invariant("finished deal without a taking bid"))?;
        let (taker, points, bouts) =
            taker_totals(&self.players, &phase.new_dog, phase.dog_exchanged)
                .ok_or_else(|| DomainError::invariant("finished deal without a taker"))?;
        let taker_won = winners.len() == 1;
        Ok(contract_payoffs(taker, taking_bid, points, bouts, taker_won))
    }

    /// Every card must sit in exactly one place: a hand, the dog (in whatever
    /// form the phase holds it), or the played-card history.
    fn check_conservation(&self) -> Result<(), DomainError> {
        let mut indexes: Vec<usize> = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter().map(|c| c.deck_index()))
            .collect();
        indexes.extend(self.dog.iter().map(|c| c.deck_index()));
        match &self.phase {
            GamePhase::Bid(_) => {}
            GamePhase::Dog(p) => indexes.extend(p.buried.iter().map(|c| c.deck_index())),
            GamePhase::Main(p) => {
                indexes.extend(p.new_dog.iter().map(|c| c.deck_index()));
                indexes.extend(p.played_cards.iter().map(|c| c.deck_index()));
            }
        }
        if indexes.len() != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "card conservation broken: {} cards tracked",
                indexes.len()
            )));
        }
        indexes.sort_unstable();
        if indexes.iter().enumerate().any(|(i, &idx)| i != idx) {
            return Err(DomainError::invariant(
                "card conservation broken: duplicate or missing card",
            ));
        }
        Ok(())
    }
}

fn legal_cards(hand: &[Card], f: impl Fn(&[Card]) -> Vec<Card>) -> Vec<Action> {
    f(hand).into_iter().map(Action::Card).collect()
}

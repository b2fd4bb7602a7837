//! Scenario tests driving whole deals through [`TarotGame`].

use crate::domain::bids::Bid;
use crate::domain::game::{Action, GamePhase, TarotGame};
use crate::domain::lenient::LenientGame;
use crate::domain::rules::{CARDS_PER_PLAYER, DOG_SIZE};
use crate::domain::snapshot::PhaseSnapshot;
use crate::errors::domain::{DomainError, ValidationKind};

/// Feed the first legal action until the deal completes.
fn drive_to_completion(game: &mut TarotGame) {
    let mut steps = 0;
    while !game.is_over() {
        steps += 1;
        assert!(steps < 200, "deal did not complete");
        let action = game.legal_actions()[0];
        game.step(action).unwrap();
    }
}

/// Current bidder takes at `level`, everyone else passes.
fn settle_bid(game: &mut TarotGame, level: Bid) {
    game.step(Action::Bid(level)).unwrap();
    while matches!(game.state_for(0).phase, PhaseSnapshot::Bidding(_)) {
        game.step(Action::Bid(Bid::Passe)).unwrap();
    }
}

#[test]
fn same_seed_same_deal() {
    let a = TarotGame::new(99);
    let b = TarotGame::new(99);
    assert_eq!(a.current_player(), b.current_player());
    for (pa, pb) in a.players().iter().zip(b.players().iter()) {
        assert_eq!(pa.hand, pb.hand);
    }
    let (snap_a, _) = a.init_state();
    let (snap_b, _) = b.init_state();
    assert_eq!(snap_a, snap_b);
}

#[test]
fn all_passes_trigger_a_redeal() {
    let mut game = TarotGame::new(7);
    let before: Vec<_> = game.players().iter().map(|p| p.hand.clone()).collect();
    let starter = game.current_player();

    for _ in 0..4 {
        game.step(Action::Bid(Bid::Passe)).unwrap();
    }

    assert_eq!(game.deal_count(), 1);
    assert!(!game.is_over());
    assert_eq!(game.current_player(), starter, "same seat opens the re-deal");
    assert!(matches!(
        game.state_for(starter).phase,
        PhaseSnapshot::Bidding(_)
    ));
    let after: Vec<_> = game.players().iter().map(|p| p.hand.clone()).collect();
    assert_ne!(before, after, "re-deal reshuffles");
    assert!(game.players().iter().all(|p| p.bid.is_none()));
}

#[test]
fn garde_runs_the_full_dog_exchange() {
    let mut game = TarotGame::new(42);
    let taker = game.current_player();
    settle_bid(&mut game, Bid::Garde);

    assert_eq!(game.taking_player(), Some(taker));
    assert_eq!(game.taking_bid(), Some(Bid::Garde));
    assert_eq!(game.current_player(), taker);
    assert_eq!(
        game.players()[taker as usize].hand.len(),
        CARDS_PER_PLAYER + DOG_SIZE,
        "dog merged into the taker's hand"
    );

    for _ in 0..DOG_SIZE {
        let action = game.legal_actions()[0];
        assert!(matches!(action, Action::Card(_)));
        game.step(action).unwrap();
    }

    // Exchange done, trick play starts with an even 18 everywhere.
    assert!(matches!(
        game.state_for(taker).phase,
        PhaseSnapshot::Trick(_)
    ));
    assert!(game
        .players()
        .iter()
        .all(|p| p.hand.len() == CARDS_PER_PLAYER));

    drive_to_completion(&mut game);
    let payoffs = game.payoffs().unwrap();
    assert_eq!(payoffs.iter().sum::<i32>(), 0);
}

#[test]
fn garde_sans_leaves_the_dog_face_down() {
    let mut game = TarotGame::new(11);
    let taker = game.current_player();
    settle_bid(&mut game, Bid::GardeSans);

    // Straight to trick play, hands untouched.
    assert!(game
        .players()
        .iter()
        .all(|p| p.hand.len() == CARDS_PER_PLAYER));
    let PhaseSnapshot::Trick(snap) = game.state_for(taker).phase else {
        panic!("expected trick play after GARDE_SANS");
    };
    // Even the taker counts the dog among the unknowns.
    assert_eq!(snap.unknown.len(), 3 * CARDS_PER_PLAYER + DOG_SIZE);

    drive_to_completion(&mut game);
    assert_eq!(game.payoffs().unwrap().iter().sum::<i32>(), 0);
}

#[test]
fn garde_contre_skips_the_remaining_speakers() {
    let mut game = TarotGame::new(5);
    let taker = game.current_player();
    game.step(Action::Bid(Bid::GardeContre)).unwrap();

    assert_eq!(game.taking_player(), Some(taker));
    assert!(matches!(
        game.state_for(taker).phase,
        PhaseSnapshot::Trick(_)
    ));
}

#[test]
fn finished_deal_rejects_further_steps() {
    let mut game = TarotGame::new(3);
    drive_to_completion(&mut game);

    let err = game.step(Action::Bid(Bid::Passe)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation {
            kind: ValidationKind::GameOver,
            ..
        }
    ));
}

#[test]
fn payoffs_unavailable_mid_deal() {
    let game = TarotGame::new(3);
    let err = game.payoffs().unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation {
            kind: ValidationKind::PhaseMismatch,
            ..
        }
    ));
}

#[test]
fn deal_point_totals_balance_at_the_end() {
    let mut game = TarotGame::new(2024);
    drive_to_completion(&mut game);

    let GamePhase::Main(phase) = &game.phase else {
        panic!("finished deal must be in the main phase");
    };
    assert_eq!(phase.played_cards.len(), 72);
    assert_eq!(phase.trick_no(), 18);
    assert!(game.players().iter().all(|p| p.hand.is_empty()));

    let in_play: f32 = game.players().iter().map(|p| p.points).sum();
    let in_dog: f32 = crate::domain::deck::pot_value(&phase.new_dog);
    assert_eq!(
        in_play + in_dog,
        crate::domain::rules::TOTAL_CARD_POINTS,
        "every card point lands with a seat or in the set-aside dog"
    );
    let bouts: u8 = game.players().iter().map(|p| p.bouts).sum::<u8>()
        + crate::domain::deck::pot_bouts(&phase.new_dog);
    assert_eq!(bouts, 3);
}

#[test]
fn dog_snapshot_hides_buried_cards_from_defenders() {
    let mut game = TarotGame::new(42);
    let taker = game.current_player();
    settle_bid(&mut game, Bid::Garde);
    let action = game.legal_actions()[0];
    game.step(action).unwrap();

    for viewer in 0..4u8 {
        let PhaseSnapshot::Dog(snap) = game.state_for(viewer).phase else {
            panic!("expected the dog phase");
        };
        if viewer == taker {
            assert_eq!(snap.buried.as_deref().map(<[_]>::len), Some(1));
            assert_eq!(snap.legal_discards.len(), game.legal_actions().len());
        } else {
            assert_eq!(snap.buried, None);
            assert!(snap.legal_discards.is_empty());
            // The buried card joins the three hidden hands.
            assert_eq!(snap.unknown.len(), 2 * CARDS_PER_PLAYER + 23 + 1);
        }
    }
}

#[test]
fn legal_card_lists_are_empty_for_bystanders() {
    let mut game = TarotGame::new(17);
    settle_bid(&mut game, Bid::GardeContre);
    let to_act = game.current_player();

    for viewer in 0..4u8 {
        let PhaseSnapshot::Trick(snap) = game.state_for(viewer).phase else {
            panic!("expected trick play");
        };
        if viewer == to_act {
            assert!(!snap.legal_cards.is_empty());
        } else {
            assert!(snap.legal_cards.is_empty());
        }
    }
}

#[test]
fn snapshots_round_trip_through_json() {
    let game = TarotGame::new(8);
    let (snapshot, to_act) = game.init_state();
    assert_eq!(snapshot.viewer, to_act);

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["phase"]["phase"], "Bidding");
    assert!(value["phase"]["data"]["hand"].is_array());

    let back: crate::domain::snapshot::GameSnapshot =
        serde_json::from_value(value).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn actions_round_trip_through_their_names() {
    let game = TarotGame::new(31);
    for action in game.legal_actions() {
        let parsed: Action = action.to_string().parse().unwrap();
        assert_eq!(parsed, action);
    }
    assert_eq!("GARDE_SANS".parse::<Action>().unwrap(), Action::Bid(Bid::GardeSans));
    assert!("TRUMP-22".parse::<Action>().is_err());
}

#[test]
fn lenient_game_substitutes_illegal_actions() {
    let mut lenient = LenientGame::new(64);
    let bogus = Action::Card(crate::domain::cards::Card::Trump(21));

    // A card during the bid phase is a phase mismatch; the wrapper bids
    // something legal instead of failing.
    let (_, next) = lenient.step(bogus).unwrap();
    assert_eq!(next, lenient.game().current_player());
    let bids_placed = lenient
        .game()
        .players()
        .iter()
        .filter(|p| p.bid.is_some())
        .count();
    assert_eq!(bids_placed, 1);
}

#[test]
fn lenient_game_passes_game_over_through() {
    let mut lenient = LenientGame::new(9);
    let mut steps = 0;
    while !lenient.game().is_over() {
        steps += 1;
        assert!(steps < 200, "lenient deal did not complete");
        lenient.step(Action::Bid(Bid::GardeContre)).unwrap();
    }

    // No legal action is left to substitute; the caller's mistake comes back
    // as-is instead of dressed up as an engine inconsistency.
    let err = lenient.step(Action::Bid(Bid::Passe)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation {
            kind: ValidationKind::GameOver,
            ..
        }
    ));
}

#[test]
fn action_indexes_span_bids_then_deck_order() {
    for (i, bid) in Bid::ALL.into_iter().enumerate() {
        assert_eq!(Action::Bid(bid).index(), i);
    }
    for (i, card) in crate::domain::deck::full_deck().into_iter().enumerate() {
        assert_eq!(Action::Card(card).index(), i);
    }
}

#[test]
fn lenient_game_completes_under_a_stubborn_policy() {
    let mut lenient = LenientGame::new(12);
    // Open with the top bid, then keep submitting it; every later step is
    // illegal and gets replaced by a random legal card.
    let mut steps = 0;
    while !lenient.game().is_over() {
        steps += 1;
        assert!(steps < 200, "lenient deal did not complete");
        lenient.step(Action::Bid(Bid::GardeContre)).unwrap();
    }
    let game = lenient.into_inner();
    assert_eq!(game.payoffs().unwrap().iter().sum::<i32>(), 0);
}

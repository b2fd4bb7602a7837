//! Unit tests for end-of-deal judgment.

use crate::domain::cards::{Card, Suit};
use crate::domain::judger::{judge, taker_totals};
use crate::domain::player::Player;

fn table(taker: usize, points: f32, bouts: u8) -> [Player; 4] {
    let mut players: [Player; 4] = std::array::from_fn(|i| Player::new(i as u8));
    players[taker].taking = true;
    players[taker].points = points;
    players[taker].bouts = bouts;
    players
}

#[test]
fn totals_include_the_exchanged_dog() {
    let players = table(1, 50.0, 0);
    let dog = vec![Card::Suited(Suit::Heart, 14), Card::Trump(21)];

    let (taker, points, bouts) = taker_totals(&players, &dog, true).unwrap();
    assert_eq!(taker, 1);
    assert_eq!(points, 59.0);
    assert_eq!(bouts, 1);
}

#[test]
fn unexchanged_dog_counts_for_nobody() {
    let players = table(1, 50.0, 0);
    let dog = vec![Card::Suited(Suit::Heart, 14), Card::Trump(21)];

    let (_, points, bouts) = taker_totals(&players, &dog, false).unwrap();
    assert_eq!(points, 50.0);
    assert_eq!(bouts, 0);
}

#[test]
fn no_taker_means_no_totals() {
    let players: [Player; 4] = std::array::from_fn(|i| Player::new(i as u8));
    assert!(taker_totals(&players, &[], false).is_none());
}

#[test]
fn threshold_drops_with_each_bout() {
    // points right between the 1-bout and 0-bout thresholds
    for (bouts, expected_win) in [(0, false), (1, true)] {
        let players = table(0, 55.0, bouts);
        let winners = judge(&players, &[], false);
        if expected_win {
            assert_eq!(winners, vec![0]);
        } else {
            assert_eq!(winners, vec![1, 2, 3]);
        }
    }
}

#[test]
fn contract_is_met_at_exactly_the_threshold() {
    let players = table(2, 36.0, 3);
    assert_eq!(judge(&players, &[], false), vec![2]);

    let players = table(2, 35.5, 3);
    assert_eq!(judge(&players, &[], false), vec![0, 1, 3]);
}

#[test]
fn buried_bouts_can_turn_the_result() {
    // 45 points and one bout from play fails the 51 threshold, but a bout
    // and a king in the exchanged dog drop the bar to 41 and clear it.
    let players = table(3, 45.0, 1);
    let dog = vec![Card::Trump(1), Card::Suited(Suit::Spade, 14)];
    assert_eq!(judge(&players, &dog, false), vec![0, 1, 2]);
    assert_eq!(judge(&players, &dog, true), vec![3]);
}

//! Domain layer: pure rules for one four-player tarot deal.

pub mod bidding;
pub mod bids;
pub mod cards;
pub mod cards_parsing;
pub mod cards_serde;
pub mod deck;
pub mod dog;
pub mod game;
pub mod judger;
pub mod lenient;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod tricks;

#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_judger;

// Re-exports for ergonomics
pub use bids::Bid;
pub use cards::{Card, Suit};
pub use deck::{deal, full_deck, pot_bouts, pot_value, Deal};
pub use game::{Action, GamePhase, TarotGame};
pub use player::{next_seat, nth_from, Player, PlayerId};
pub use seed_derivation::derive_deal_seed;

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for four-player French Tarot.
//!
//! One [`TarotGame`] models a single deal through its three phases (bidding,
//! dog exchange, trick play) as a strict turn-based state machine: callers ask
//! for the legal actions of the seat to move, submit one, and read back a
//! per-seat snapshot. Everything is synchronous, single-threaded, and fully
//! reproducible from the shuffle seed.

pub mod domain;
pub mod errors;


// Re-exports for public API
pub use domain::bids::Bid;
pub use domain::cards::{Card, Suit};
pub use domain::game::{Action, GamePhase, TarotGame};
pub use domain::lenient::LenientGame;
pub use domain::player::{Player, PlayerId};
pub use domain::snapshot::{GameSnapshot, PhaseSnapshot};
pub use errors::domain::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

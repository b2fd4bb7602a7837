//! Opt-in wrapper substituting a random legal action for an illegal one.
//!
//! Learning agents sometimes emit actions outside the legal set. The rules
//! engine rejects those outright; this wrapper catches the rejection and
//! plays a uniformly random legal action instead, so a training loop never
//! stalls on a bad policy head. Invariant errors still propagate.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::domain::game::{Action, TarotGame};
use crate::domain::player::PlayerId;
use crate::domain::snapshot::GameSnapshot;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone)]
pub struct LenientGame {
    game: TarotGame,
    rng: ChaCha8Rng,
}

impl LenientGame {
    /// The fallback RNG gets its own stream derived from the game seed, so
    /// substitutions are as reproducible as the deal itself.
    pub fn new(seed: u64) -> Self {
        Self {
            game: TarotGame::new(seed),
            rng: ChaCha8Rng::seed_from_u64(seed ^ 0x5EED_FA11_BACC_0FFE),
        }
    }

    /// Stepping a finished game is still a caller mistake, not something a
    /// substitute card can repair, so `GameOver` passes through untouched.
    pub fn step(&mut self, action: Action) -> Result<(GameSnapshot, PlayerId), DomainError> {
        match self.game.step(action) {
            Err(err @ DomainError::Validation {
                kind: ValidationKind::GameOver,
                ..
            }) => Err(err),
            Err(err @ DomainError::Validation { .. }) => {
                let legal = self.game.legal_actions();
                let Some(&fallback) = legal.choose(&mut self.rng) else {
                    return Err(err);
                };
                warn!(%action, %err, %fallback, "illegal action replaced by a random legal one");
                self.game.step(fallback)
            }
            other => other,
        }
    }

    pub fn game(&self) -> &TarotGame {
        &self.game
    }

    pub fn into_inner(self) -> TarotGame {
        self.game
    }
}

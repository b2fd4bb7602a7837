//! Domain-level error type used across the engine.
//!
//! Two families, deliberately kept apart:
//!
//! - [`DomainError::Validation`]: the caller submitted something the rules
//!   reject (out of turn, illegal bid, card not in hand, ...). The deal is
//!   untouched and the caller may retry with a legal action.
//! - [`DomainError::Invariant`]: the engine's own bookkeeping is
//!   inconsistent (card conservation, phase sequencing). These abort the deal
//!   and are never recovered from.

use thiserror::Error;

/// Validation error kinds for protocol violations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    OutOfTurn,
    PhaseMismatch,
    GameOver,
    IllegalBid,
    IllegalDiscard,
    CardNotInHand,
    MustFollowSuit,
    ParseCard,
    ParseBid,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Action submitted by a caller that the rules reject.
    #[error("validation {kind:?}: {detail}")]
    Validation { kind: ValidationKind, detail: String },
    /// Internal engine inconsistency; fatal for the deal.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}

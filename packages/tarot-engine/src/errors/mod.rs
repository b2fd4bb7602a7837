//! Error handling for the tarot engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};

//! Card parsing and display on the wire form `TRUMP-7` / `HEART-14`.

use std::fmt;
use std::str::FromStr;

use super::cards::{Card, Suit, KING_RANK, MAX_TRUMP};
use crate::errors::domain::{DomainError, ValidationKind};

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Spade => "SPADE",
            Suit::Clover => "CLOVER",
            Suit::Heart => "HEART",
            Suit::Diamond => "DIAMOND",
        };
        f.write_str(name)
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPADE" => Ok(Suit::Spade),
            "CLOVER" => Ok(Suit::Clover),
            "HEART" => Ok(Suit::Heart),
            "DIAMOND" => Ok(Suit::Diamond),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("invalid suit: {s}"),
            )),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Trump(rank) => write!(f, "TRUMP-{rank}"),
            Card::Suited(suit, rank) => write!(f, "{suit}-{rank}"),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (color, value) = s.split_once('-').ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("parse card: {s}"))
        })?;
        let rank: u8 = value.parse().map_err(|_| {
            DomainError::validation(ValidationKind::ParseCard, format!("parse card rank: {s}"))
        })?;
        if color == "TRUMP" {
            if rank > MAX_TRUMP {
                return Err(DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("trump rank out of range: {s}"),
                ));
            }
            return Ok(Card::Trump(rank));
        }
        let suit: Suit = color.parse()?;
        if rank == 0 || rank > KING_RANK {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("suited rank out of range: {s}"),
            ));
        }
        Ok(Card::Suited(suit, rank))
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

//! The six-level bid ladder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

/// Bid levels in ascending order. The derived `Ord` is the ladder order used
/// for legality; [`Bid::stake`] is the separate point value used in scoring.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bid {
    Passe,
    Petite,
    Pousse,
    Garde,
    GardeSans,
    GardeContre,
}

impl Bid {
    pub const ALL: [Bid; 6] = [
        Bid::Passe,
        Bid::Petite,
        Bid::Pousse,
        Bid::Garde,
        Bid::GardeSans,
        Bid::GardeContre,
    ];

    /// Ladder position, 0..=5.
    pub fn order(self) -> u8 {
        self as u8
    }

    /// Base contract value: 0, 1, 2, 4, 8, 16.
    pub fn stake(self) -> i32 {
        match self {
            Bid::Passe => 0,
            Bid::Petite => 1,
            Bid::Pousse => 2,
            Bid::Garde => 4,
            Bid::GardeSans => 8,
            Bid::GardeContre => 16,
        }
    }

    /// The two highest levels play without ever seeing the dog.
    pub fn skips_dog(self) -> bool {
        self >= Bid::GardeSans
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bid::Passe => "PASSE",
            Bid::Petite => "PETITE",
            Bid::Pousse => "POUSSE",
            Bid::Garde => "GARDE",
            Bid::GardeSans => "GARDE_SANS",
            Bid::GardeContre => "GARDE_CONTRE",
        };
        f.write_str(name)
    }
}

impl FromStr for Bid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASSE" => Ok(Bid::Passe),
            "PETITE" => Ok(Bid::Petite),
            "POUSSE" => Ok(Bid::Pousse),
            "GARDE" => Ok(Bid::Garde),
            "GARDE_SANS" => Ok(Bid::GardeSans),
            "GARDE_CONTRE" => Ok(Bid::GardeContre),
            _ => Err(DomainError::validation(
                ValidationKind::ParseBid,
                format!("invalid bid: {s}"),
            )),
        }
    }
}

impl Serialize for Bid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

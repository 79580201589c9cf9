//! Typed identifiers for the seating domain.
//!
//! Using distinct types prevents accidentally passing a raw integer or a
//! free-form string where a seat id or a hold token is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a seat.
///
/// Seat ids are positive integers assigned once at startup and never
/// change for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub u32);

impl SeatId {
    /// Return the inner integer value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeatId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl From<u32> for SeatId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Unguessable credential proving that a caller created a given hold.
///
/// Backed by a random v4 UUID (128 random bits), so a token is never
/// derivable from the seat id, the holder, or the time of the hold, and
/// the collision probability is cryptographically negligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoldToken(pub Uuid);

impl HoldToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HoldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HoldToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

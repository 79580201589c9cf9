//! Seating layout and hold timing configuration.

use serde::{Deserialize, Serialize};

/// Seating configuration.
///
/// The layout is fixed for the process lifetime: seats are created once at
/// startup from `rows` x `seats_per_row`, with ids assigned 1..n in row
/// order, and the inventory never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingConfig {
    /// How long a hold remains valid before automatic expiry, in seconds.
    #[serde(default = "default_hold_ttl")]
    pub hold_ttl_seconds: u64,
    /// Row labels, in layout order.
    #[serde(default = "default_rows")]
    pub rows: Vec<String>,
    /// Number of seats in each row.
    #[serde(default = "default_seats_per_row")]
    pub seats_per_row: u32,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            hold_ttl_seconds: default_hold_ttl(),
            rows: default_rows(),
            seats_per_row: default_seats_per_row(),
        }
    }
}

impl SeatingConfig {
    /// The hold TTL as a `Duration`.
    pub fn hold_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.hold_ttl_seconds)
    }
}

fn default_hold_ttl() -> u64 {
    60
}

fn default_rows() -> Vec<String> {
    vec!["A".to_string(), "B".to_string()]
}

fn default_seats_per_row() -> u32 {
    6
}

//! Seat model and lock state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::Instant;

use boxoffice_core::types::{HoldToken, SeatId};

/// One unit of the finite seat inventory.
///
/// Identity and position are immutable after creation; only the lock state
/// behind the mutex ever changes.
#[derive(Debug)]
pub struct Seat {
    /// Unique seat identifier.
    pub id: SeatId,
    /// Row label, e.g. "A".
    pub row: String,
    /// Seat number within the row.
    pub number: u32,
    /// Current lock state. All read-then-write access goes through this
    /// mutex, including the expiry timer when it fires.
    pub(crate) lock: Mutex<SeatLock>,
}

impl Seat {
    pub(crate) fn new(id: SeatId, row: String, number: u32) -> Self {
        Self {
            id,
            row,
            number,
            lock: Mutex::new(SeatLock::Available),
        }
    }
}

/// Lock state of a seat.
///
/// The enum shape enforces the state invariant: holder, token, and deadline
/// exist exactly when the seat is held, and are all cleared together on any
/// transition out of `Held`. `Confirmed` is terminal.
#[derive(Debug)]
pub(crate) enum SeatLock {
    Available,
    Held(Hold),
    Confirmed,
}

/// A live hold on a seat.
#[derive(Debug)]
pub(crate) struct Hold {
    /// Opaque actor identifier of the holder.
    pub holder: String,
    /// Credential issued when the hold was created.
    pub token: HoldToken,
    /// Authoritative deadline. Monotonic, so every expiry decision is a
    /// plain `now >= expires_at` comparison.
    pub expires_at: Instant,
    /// Wall-clock rendering of the deadline for API responses.
    pub expires_wall: DateTime<Utc>,
    /// Handle to the armed one-shot expiry task. Aborted on any transition
    /// out of `Held`; a late firing that loses the race is a no-op because
    /// the fired task re-checks status and deadline under the mutex.
    pub timer: AbortHandle,
}

impl Hold {
    /// Whether this hold's deadline has passed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Publicly visible status of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to be held.
    Available,
    /// Held by an actor, pending confirmation.
    Held,
    /// Permanently booked.
    Booked,
}

/// Read-only snapshot of one seat's public fields.
///
/// Taken under the seat's mutex, so a view is always internally consistent
/// even though cross-seat consistency is not guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatView {
    /// Seat identifier.
    pub id: SeatId,
    /// Row label.
    pub row: String,
    /// Seat number within the row.
    pub number: u32,
    /// Current status.
    pub status: SeatStatus,
    /// Holder, present iff held.
    pub held_by: Option<String>,
    /// Hold deadline, present iff held.
    pub hold_expires_at: Option<DateTime<Utc>>,
}

impl SeatView {
    /// Render a view of the seat's current lock state.
    ///
    /// A hold whose deadline has already passed is rendered as available
    /// even before the expiry transition lands: the deadline comparison,
    /// not the timer, is the source of truth for observers too.
    pub(crate) fn render(seat: &Seat, lock: &SeatLock, now: Instant) -> Self {
        let (status, held_by, hold_expires_at) = match lock {
            SeatLock::Held(hold) if !hold.is_expired(now) => (
                SeatStatus::Held,
                Some(hold.holder.clone()),
                Some(hold.expires_wall),
            ),
            SeatLock::Held(_) | SeatLock::Available => (SeatStatus::Available, None, None),
            SeatLock::Confirmed => (SeatStatus::Booked, None, None),
        };

        Self {
            id: seat.id,
            row: seat.row.clone(),
            number: seat.number,
            status,
            held_by,
            hold_expires_at,
        }
    }
}

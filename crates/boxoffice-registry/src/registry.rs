//! The seat registry: sole mutation surface for the seat inventory.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::info;

use boxoffice_core::config::seating::SeatingConfig;
use boxoffice_core::types::{HoldToken, SeatId};
use boxoffice_core::{AppError, AppResult};

use crate::expiry;
use crate::seat::{Hold, Seat, SeatLock, SeatView};

/// Result of a successful hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldGrant {
    /// The held seat.
    pub seat_id: SeatId,
    /// Echo of the holding actor.
    pub holder: String,
    /// Credential required to confirm the hold.
    pub token: HoldToken,
    /// When the hold expires.
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedSeat {
    /// The booked seat.
    pub seat_id: SeatId,
    /// Row label.
    pub row: String,
    /// Seat number within the row.
    pub number: u32,
}

/// Owns the fixed seat collection and applies all lock state transitions.
///
/// The seat map is built once at startup and never changes, so lookups need
/// no locking; each seat carries its own mutex for state mutation. One
/// registry instance lives for the process lifetime, but tests construct
/// independent instances freely.
#[derive(Debug)]
pub struct SeatRegistry {
    seats: HashMap<SeatId, Arc<Seat>>,
    hold_ttl: Duration,
}

impl SeatRegistry {
    /// Build the registry from the seating layout configuration.
    ///
    /// Seats are numbered 1..n across the configured rows, all Available.
    pub fn from_config(config: &SeatingConfig) -> Self {
        let mut seats = HashMap::new();
        let mut id = 1u32;
        for row in &config.rows {
            for number in 1..=config.seats_per_row {
                let seat_id = SeatId(id);
                seats.insert(seat_id, Arc::new(Seat::new(seat_id, row.clone(), number)));
                id += 1;
            }
        }

        Self {
            seats,
            hold_ttl: config.hold_ttl(),
        }
    }

    /// Number of seats in the inventory.
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Snapshot of all seats, ordered by id.
    ///
    /// Each view is taken under its seat's mutex; no torn reads of a single
    /// seat, though seats may be observed at slightly different instants.
    pub async fn list(&self) -> Vec<SeatView> {
        let mut ids: Vec<SeatId> = self.seats.keys().copied().collect();
        ids.sort();

        let now = Instant::now();
        let mut views = Vec::with_capacity(ids.len());
        for id in ids {
            let seat = &self.seats[&id];
            let lock = seat.lock.lock().await;
            views.push(SeatView::render(seat, &lock, now));
        }
        views
    }

    /// Snapshot of a single seat.
    pub async fn get(&self, id: SeatId) -> AppResult<SeatView> {
        let seat = self.seat(id)?;
        let lock = seat.lock.lock().await;
        Ok(SeatView::render(seat, &lock, Instant::now()))
    }

    /// Attempt to hold a seat for `actor`.
    ///
    /// A hold that has already passed its deadline does not block a new
    /// hold: it is expired in place before the request is evaluated.
    pub async fn hold(&self, id: SeatId, actor: &str) -> AppResult<HoldGrant> {
        let seat = self.seat(id)?;
        let mut lock = seat.lock.lock().await;

        match &*lock {
            SeatLock::Confirmed => {
                return Err(AppError::conflict("seat is already booked"));
            }
            SeatLock::Held(hold) => {
                if hold.is_expired(Instant::now()) {
                    hold.timer.abort();
                    info!(seat_id = %seat.id, reason = "expired-detected-on-hold", "hold expired");
                    *lock = SeatLock::Available;
                } else {
                    return Err(AppError::conflict("seat is currently held"));
                }
            }
            SeatLock::Available => {}
        }

        let token = HoldToken::generate();
        let expires_at = Instant::now() + self.hold_ttl;
        let expires_wall = Utc::now() + self.hold_ttl;
        let timer = expiry::arm(Arc::clone(seat), expires_at);

        *lock = SeatLock::Held(Hold {
            holder: actor.to_string(),
            token,
            expires_at,
            expires_wall,
            timer,
        });

        info!(
            seat_id = %seat.id,
            holder = %actor,
            expires_at = %expires_wall,
            "seat held"
        );

        Ok(HoldGrant {
            seat_id: seat.id,
            holder: actor.to_string(),
            token,
            expires_at: expires_wall,
        })
    }

    /// Confirm a hold, permanently booking the seat.
    ///
    /// An expired hold is normalized to Available as a side effect and
    /// reported as Expired rather than "not held": the seat is free for
    /// anyone to re-hold, which is different remediation than a seat that
    /// was never held. Holder and token are checked together; a mismatch
    /// in either yields the same Forbidden error.
    pub async fn confirm(&self, id: SeatId, actor: &str, token: &str) -> AppResult<ConfirmedSeat> {
        let seat = self.seat(id)?;
        let mut lock = seat.lock.lock().await;

        let SeatLock::Held(hold) = &*lock else {
            return Err(AppError::conflict("seat is not held"));
        };

        if hold.is_expired(Instant::now()) {
            hold.timer.abort();
            info!(seat_id = %seat.id, reason = "expired-detected-on-confirm", "hold expired");
            *lock = SeatLock::Available;
            return Err(AppError::expired("hold has expired"));
        }

        let presented = token.parse::<HoldToken>().ok();
        if hold.holder != actor || presented != Some(hold.token) {
            return Err(AppError::forbidden("invalid token or holder mismatch"));
        }

        hold.timer.abort();
        *lock = SeatLock::Confirmed;
        info!(seat_id = %seat.id, holder = %actor, reason = "confirmed", "seat booked");

        Ok(ConfirmedSeat {
            seat_id: seat.id,
            row: seat.row.clone(),
            number: seat.number,
        })
    }

    /// Release a hold at the holder's request.
    pub async fn release(&self, id: SeatId, actor: &str) -> AppResult<()> {
        let seat = self.seat(id)?;
        let mut lock = seat.lock.lock().await;

        let SeatLock::Held(hold) = &*lock else {
            return Err(AppError::bad_state("seat is not held"));
        };

        if hold.holder != actor {
            return Err(AppError::forbidden("only the holder can release the seat"));
        }

        hold.timer.abort();
        *lock = SeatLock::Available;
        info!(seat_id = %seat.id, holder = %actor, reason = "manual-release", "seat released");

        Ok(())
    }

    fn seat(&self, id: SeatId) -> AppResult<&Arc<Seat>> {
        self.seats
            .get(&id)
            .ok_or_else(|| AppError::not_found(format!("seat {id} not found")))
    }
}

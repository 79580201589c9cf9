//! One-shot hold expiry timers.

use std::sync::Arc;

use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::seat::{Seat, SeatLock};

/// Arm a one-shot expiry task for `seat` at `deadline`.
///
/// The task proposes the expiry rather than forcing it: after sleeping it
/// re-acquires the seat mutex and only flips `Held -> Available` if the seat
/// is still held with that exact deadline. A seat that was confirmed,
/// released, or re-held in the meantime is left untouched, which also makes
/// a firing that races its own abort harmless.
pub(crate) fn arm(seat: Arc<Seat>, deadline: Instant) -> AbortHandle {
    tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;

        let mut lock = seat.lock.lock().await;
        if let SeatLock::Held(hold) = &*lock
            && hold.expires_at == deadline
        {
            tracing::info!(seat_id = %seat.id, reason = "timeout", "hold expired");
            *lock = SeatLock::Available;
        }
    })
    .abort_handle()
}

//! # boxoffice-registry
//!
//! The seat inventory and its hold/confirm/release lock state machine.
//!
//! [`SeatRegistry`] owns the fixed seat collection and is the sole mutation
//! surface. Every state transition for a seat runs under that seat's own
//! mutex, so concurrent operations on one seat are strictly serialized while
//! unrelated seats never contend. Unconfirmed holds expire automatically:
//! a one-shot timer per hold proposes the expiry, and every operation that
//! inspects a held seat re-checks the deadline itself, so correctness never
//! depends on timer precision.

mod expiry;
mod registry;
mod seat;

pub use registry::{ConfirmedSeat, HoldGrant, SeatRegistry};
pub use seat::{Seat, SeatStatus, SeatView};

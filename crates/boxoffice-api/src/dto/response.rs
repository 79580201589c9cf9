//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::types::{HoldToken, SeatId};
use boxoffice_registry::{ConfirmedSeat, HoldGrant};

/// Response to a successful hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldResponse {
    /// Held seat.
    pub seat_id: SeatId,
    /// Holding actor (echo of the request).
    pub holder: String,
    /// Token required to confirm the hold.
    pub token: HoldToken,
    /// When the hold expires.
    pub expires_at: DateTime<Utc>,
}

impl From<HoldGrant> for HoldResponse {
    fn from(grant: HoldGrant) -> Self {
        Self {
            seat_id: grant.seat_id,
            holder: grant.holder,
            token: grant.token,
            expires_at: grant.expires_at,
        }
    }
}

/// Response to a successful confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResponse {
    /// Booked seat.
    pub seat_id: SeatId,
    /// Row label.
    pub row: String,
    /// Seat number within the row.
    pub number: u32,
    /// Confirmation message.
    pub message: String,
}

impl From<ConfirmedSeat> for ConfirmResponse {
    fn from(seat: ConfirmedSeat) -> Self {
        Self {
            seat_id: seat.seat_id,
            row: seat.row,
            number: seat.number,
            message: "Seat successfully booked".to_string(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

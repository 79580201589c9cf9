//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Hold request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HoldRequest {
    /// Actor requesting the hold.
    #[validate(length(min = 1, message = "actor_id is required"))]
    pub actor_id: String,
}

/// Confirm request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmRequest {
    /// Actor confirming the hold.
    #[validate(length(min = 1, message = "actor_id is required"))]
    pub actor_id: String,
    /// Token issued when the hold was created.
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
}

/// Release request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReleaseRequest {
    /// Actor releasing the hold.
    #[validate(length(min = 1, message = "actor_id is required"))]
    pub actor_id: String,
}

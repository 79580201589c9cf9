//! # boxoffice-api
//!
//! HTTP API layer for BoxOffice built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging), DTOs, and
//! error mapping over the seat registry.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;

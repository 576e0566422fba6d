//! Web layer for the circulation checker.
//!
//! Provides HTTP endpoints for checking a vehicle and listing holidays.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

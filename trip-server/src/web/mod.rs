//! Web layer for the trip planner.
//!
//! A thin JSON API over the simulator: plan a trip, and look up known
//! cities for the location picker.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

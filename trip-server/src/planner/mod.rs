//! Trip planning by duty-cycle simulation.
//!
//! This module answers: "if a driver leaves now, what does the trip look
//! like on their log?" It simulates the drive leg by leg at a fixed speed,
//! splitting legs with a rest break whenever continuous driving reaches the
//! cap, and can lay the resulting timeline out as daily log sheets.

mod config;
mod daily;
mod simulate;

pub use config::DutyConfig;
pub use daily::{DailyLog, LogHeader, StatusHours, daily_logs};
pub use simulate::{PlanError, TripPlan, TripRequest, TripSimulator};

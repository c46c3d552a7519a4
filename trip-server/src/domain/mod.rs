//! Domain types for the trip planner.
//!
//! Plain value types shared by the simulator and the web layer. They carry
//! no serialisation concerns; the web layer maps them to DTOs.

mod duty;
mod geo;
mod stop;
mod time;

pub use duty::{DutyEvent, DutyStatus};
pub use geo::{Coordinate, EARTH_RADIUS_MILES};
pub use stop::{Location, Stop, StopKind};
pub use time::{TimeError, Timestamp, duration_to_hours, hours_to_duration, parse_start_time};

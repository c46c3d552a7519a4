//! Duty-cycle parameters for the trip simulator.

/// Fixed parameters of the duty simulation.
///
/// All durations are in fractional hours.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyConfig {
    /// Average driving speed (miles per hour).
    pub avg_speed_mph: f64,

    /// Maximum continuous driving before a mandatory rest (hours).
    pub max_continuous_driving_hours: f64,

    /// Length of the mandatory rest (hours).
    pub rest_break_hours: f64,

    /// Pre-trip inspection at the start location (hours).
    pub pre_trip_hours: f64,

    /// Post-trip inspection at the dropoff location (hours).
    pub post_trip_hours: f64,

    /// Loading or unloading at pickup and dropoff (hours each).
    pub on_location_hours: f64,
}

impl DutyConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        avg_speed_mph: f64,
        max_continuous_driving_hours: f64,
        rest_break_hours: f64,
        pre_trip_hours: f64,
        post_trip_hours: f64,
        on_location_hours: f64,
    ) -> Self {
        Self {
            avg_speed_mph,
            max_continuous_driving_hours,
            rest_break_hours,
            pre_trip_hours,
            post_trip_hours,
            on_location_hours,
        }
    }

    /// Miles that can be covered in one full continuous-driving window.
    pub fn miles_per_window(&self) -> f64 {
        self.max_continuous_driving_hours * self.avg_speed_mph
    }
}

impl Default for DutyConfig {
    fn default() -> Self {
        Self {
            avg_speed_mph: 60.0,
            max_continuous_driving_hours: 8.0,
            rest_break_hours: 0.5,
            pre_trip_hours: 0.25,
            post_trip_hours: 0.25,
            on_location_hours: 1.0,
        }
    }
}

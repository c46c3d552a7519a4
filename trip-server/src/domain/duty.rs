//! Duty-status events.

use std::fmt;

use chrono::Duration;

use super::time::Timestamp;

/// What the driver is doing during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DutyStatus {
    /// Working but not behind the wheel (inspections, loading, unloading).
    OnDutyNotDriving,
    /// Behind the wheel.
    Driving,
    /// Resting or finished for the day.
    OffDuty,
}

impl DutyStatus {
    /// Short code used on log sheets ("ON", "D", "OFF").
    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::OnDutyNotDriving => "ON",
            DutyStatus::Driving => "D",
            DutyStatus::OffDuty => "OFF",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OnDutyNotDriving => "On Duty",
            DutyStatus::Driving => "Driving",
            DutyStatus::OffDuty => "Off Duty",
        }
    }

    /// Whether time in this status counts towards on-duty cycle hours.
    pub fn is_on_duty(&self) -> bool {
        !matches!(self, DutyStatus::OffDuty)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A contiguous span of time in one duty status.
///
/// `end_time` is always `start_time` plus `duration_hours`, rounded to the
/// microsecond.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyEvent {
    pub status: DutyStatus,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub duration_hours: f64,
    /// Where the event happened, e.g. a city name or "Highway".
    pub location: String,
    pub remarks: String,
    /// Miles covered; zero unless driving.
    pub distance_miles: f64,
}

impl DutyEvent {
    /// Elapsed wall-clock time of the event.
    pub fn duration(&self) -> Duration {
        self.end_time.signed_duration_since(self.start_time)
    }

    /// Returns true for driving events.
    pub fn is_driving(&self) -> bool {
        self.status == DutyStatus::Driving
    }
}

//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase to match the dispatcher front end.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, DutyEvent, Stop, Timestamp};
use crate::locations::KnownLocation;
use crate::planner::{DailyLog, StatusHours, TripPlan, TripRequest};

/// Request to plan a trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTripRequest {
    /// Where the truck is now (city name)
    pub current_location: String,

    /// Pickup city name
    pub pickup_location: String,

    /// Dropoff city name
    pub dropoff_location: String,

    /// ISO-8601 start time
    pub start_date_time: String,

    /// On-duty hours already used in the current cycle
    #[serde(default)]
    pub cycle_used: f64,
}

impl From<PlanTripRequest> for TripRequest {
    fn from(req: PlanTripRequest) -> Self {
        TripRequest::new(
            req.current_location,
            req.pickup_location,
            req.dropoff_location,
            req.start_date_time,
        )
        .with_cycle_used(req.cycle_used)
    }
}

/// A coordinate on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateResult {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinate> for CoordinateResult {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

/// A duty event on the timeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResult {
    /// Duty status code: "ON", "D" or "OFF"
    pub status: &'static str,

    /// RFC 3339 start time
    pub start_time: String,

    /// RFC 3339 end time
    pub end_time: String,

    /// Duration in hours
    pub duration: f64,

    /// Where it happened
    pub location: String,

    pub remarks: String,

    /// Miles driven
    pub distance: f64,
}

/// A named location, with coordinates when known.
#[derive(Debug, Clone, Serialize)]
pub struct LocationResult {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords: Option<CoordinateResult>,
}

/// A stop along the route.
#[derive(Debug, Clone, Serialize)]
pub struct StopResult {
    pub location: LocationResult,

    /// "start", "rest", "pickup" or "dropoff"
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Hours per duty status, keyed by status code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoursResult {
    #[serde(rename = "OFF")]
    pub off_duty: f64,

    #[serde(rename = "D")]
    pub driving: f64,

    #[serde(rename = "ON")]
    pub on_duty: f64,
}

/// One daily log sheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogResult {
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    pub events: Vec<EventResult>,
    pub total_miles: f64,
    pub total_hours: HoursResult,
    pub cycle_used_start: f64,
    pub cycle_used_end: f64,
    pub carrier: String,
    pub truck_number: String,
}

/// Response for trip planning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTripResponse {
    pub events: Vec<EventResult>,
    pub route_path: Vec<CoordinateResult>,
    pub stops: Vec<StopResult>,
    pub daily_logs: Vec<DailyLogResult>,
}

/// Query for the city picker.
#[derive(Debug, Deserialize)]
pub struct CitySearchRequest {
    /// Substring to match; empty matches everything
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A known city.
#[derive(Debug, Clone, Serialize)]
pub struct CityResult {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Response for city search.
#[derive(Debug, Serialize)]
pub struct CitySearchResponse {
    pub cities: Vec<CityResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl EventResult {
    /// Create from a domain DutyEvent.
    pub fn from_event(event: &DutyEvent) -> Self {
        Self {
            status: event.status.code(),
            start_time: format_timestamp(&event.start_time),
            end_time: format_timestamp(&event.end_time),
            duration: event.duration_hours,
            location: event.location.clone(),
            remarks: event.remarks.clone(),
            distance: event.distance_miles,
        }
    }
}

impl StopResult {
    /// Create from a domain Stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            location: LocationResult {
                name: stop.location.name.clone(),
                coords: stop.location.coords.map(CoordinateResult::from),
            },
            kind: stop.kind.as_str(),
        }
    }
}

impl From<StatusHours> for HoursResult {
    fn from(h: StatusHours) -> Self {
        Self {
            off_duty: h.off_duty,
            driving: h.driving,
            on_duty: h.on_duty,
        }
    }
}

impl DailyLogResult {
    /// Create from a domain DailyLog.
    pub fn from_log(log: &DailyLog) -> Self {
        Self {
            date: log.date.format("%Y-%m-%d").to_string(),
            events: log.events.iter().map(EventResult::from_event).collect(),
            total_miles: log.total_miles,
            total_hours: log.total_hours.into(),
            cycle_used_start: log.cycle_used_start,
            cycle_used_end: log.cycle_used_end,
            carrier: log.carrier.clone(),
            truck_number: log.truck_number.clone(),
        }
    }
}

impl PlanTripResponse {
    /// Create from a simulated plan and its daily logs.
    pub fn from_plan(plan: &TripPlan, logs: &[DailyLog]) -> Self {
        Self {
            events: plan.events.iter().map(EventResult::from_event).collect(),
            route_path: plan.route_path.iter().copied().map(Into::into).collect(),
            stops: plan.stops.iter().map(StopResult::from_stop).collect(),
            daily_logs: logs.iter().map(DailyLogResult::from_log).collect(),
        }
    }
}

impl From<KnownLocation> for CityResult {
    fn from(l: KnownLocation) -> Self {
        Self {
            name: l.name,
            lat: l.coords.lat,
            lng: l.coords.lng,
        }
    }
}

/// Format a timestamp as RFC 3339 with whole seconds.
pub fn format_timestamp(t: &Timestamp) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DutyStatus, StopKind, hours_to_duration, parse_start_time};
    use crate::planner::{LogHeader, daily_logs};

    fn driving_event() -> DutyEvent {
        let start = parse_start_time("2024-01-01T08:15:00Z").unwrap();
        DutyEvent {
            status: DutyStatus::Driving,
            start_time: start,
            end_time: start + hours_to_duration(2.5),
            duration_hours: 2.5,
            location: "Highway".to_string(),
            remarks: "Driving".to_string(),
            distance_miles: 150.0,
        }
    }

    #[test]
    fn request_uses_camel_case() {
        let json = r#"{
            "currentLocation": "New York, NY",
            "pickupLocation": "Chicago, IL",
            "dropoffLocation": "Los Angeles, CA",
            "startDateTime": "2024-01-01T08:00:00Z"
        }"#;
        let req: PlanTripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.current_location, "New York, NY");
        assert_eq!(req.cycle_used, 0.0);

        let trip: TripRequest = req.into();
        assert_eq!(trip.pickup_location, "Chicago, IL");
        assert_eq!(trip.start_date_time, "2024-01-01T08:00:00Z");
    }

    #[test]
    fn request_accepts_cycle_used() {
        let json = r#"{
            "currentLocation": "a",
            "pickupLocation": "b",
            "dropoffLocation": "c",
            "startDateTime": "2024-01-01T08:00:00Z",
            "cycleUsed": 12.5
        }"#;
        let req: PlanTripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(TripRequest::from(req).cycle_used, 12.5);
    }

    #[test]
    fn request_missing_field_is_rejected() {
        let json = r#"{"currentLocation": "a", "pickupLocation": "b"}"#;
        assert!(serde_json::from_str::<PlanTripRequest>(json).is_err());
    }

    #[test]
    fn event_result_from_event() {
        let result = EventResult::from_event(&driving_event());

        assert_eq!(result.status, "D");
        assert_eq!(result.start_time, "2024-01-01T08:15:00+00:00");
        assert_eq!(result.end_time, "2024-01-01T10:45:00+00:00");
        assert_eq!(result.duration, 2.5);
        assert_eq!(result.distance, 150.0);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["startTime"], "2024-01-01T08:15:00+00:00");
        assert_eq!(json["status"], "D");
        assert_eq!(json["duration"], 2.5);
    }

    #[test]
    fn stop_result_serializes_type() {
        let stop = Stop::new(StopKind::Rest, "Rest Area", Coordinate::new(40.0, -90.0));
        let json = serde_json::to_value(StopResult::from_stop(&stop)).unwrap();

        assert_eq!(json["type"], "rest");
        assert_eq!(json["location"]["name"], "Rest Area");
        assert_eq!(json["location"]["coords"]["lat"], 40.0);
        assert_eq!(json["location"]["coords"]["lng"], -90.0);
    }

    #[test]
    fn daily_log_result_keys() {
        let logs = daily_logs(&[driving_event()], 3.0, &LogHeader::new("Acme", "T-1"));
        let json = serde_json::to_value(DailyLogResult::from_log(&logs[0])).unwrap();

        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["totalHours"]["D"], 2.5);
        assert_eq!(json["totalHours"]["OFF"], 0.0);
        assert_eq!(json["totalMiles"], 150.0);
        assert_eq!(json["cycleUsedStart"], 3.0);
        assert_eq!(json["cycleUsedEnd"], 5.5);
        assert_eq!(json["truckNumber"], "T-1");
        assert_eq!(json["events"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn format_timestamp_keeps_offset() {
        let t = parse_start_time("2024-07-04T18:30:00-04:00").unwrap();
        assert_eq!(format_timestamp(&t), "2024-07-04T18:30:00-04:00");
    }
}

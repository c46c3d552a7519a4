//! Trip simulation.
//!
//! Drives a truck from its current location to a pickup and then a dropoff,
//! inserting a rest break whenever the continuous-driving cap is reached.
//! The output is a contiguous timeline of duty events plus the route
//! polyline and the stops made along the way.

use tracing::debug;

use crate::domain::{
    Coordinate, DutyEvent, DutyStatus, Location, Stop, StopKind, TimeError, Timestamp,
    hours_to_duration, parse_start_time,
};
use crate::locations::LocationResolver;

use super::config::DutyConfig;

/// Location label for driving events.
const HIGHWAY: &str = "Highway";

/// Location label and stop name for rest breaks.
const REST_AREA: &str = "Rest Area";

/// Error from trip planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The start timestamp could not be parsed
    #[error(transparent)]
    InvalidStartTime(#[from] TimeError),

    /// Hours already used in the duty cycle must be finite and non-negative
    #[error("invalid cycle hours used: {0}")]
    InvalidCycleUsed(f64),

    /// The duty configuration cannot produce a finite plan
    #[error("invalid duty configuration: {0}")]
    InvalidConfig(&'static str),
}

/// A request to plan a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    /// Where the truck is now.
    pub current_location: String,

    /// Where the load is collected.
    pub pickup_location: String,

    /// Where the load is delivered.
    pub dropoff_location: String,

    /// ISO-8601 start timestamp.
    pub start_date_time: String,

    /// On-duty hours already used in the driver's cycle before this trip.
    pub cycle_used: f64,
}

impl TripRequest {
    /// Create a request with no prior cycle hours.
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        start_date_time: impl Into<String>,
    ) -> Self {
        Self {
            current_location: current_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            start_date_time: start_date_time.into(),
            cycle_used: 0.0,
        }
    }

    /// Set the hours already used in the duty cycle.
    pub fn with_cycle_used(mut self, hours: f64) -> Self {
        self.cycle_used = hours;
        self
    }

    /// Validate the request and parse its start time.
    pub fn start_time(&self) -> Result<Timestamp, PlanError> {
        if !self.cycle_used.is_finite() || self.cycle_used < 0.0 {
            return Err(PlanError::InvalidCycleUsed(self.cycle_used));
        }
        Ok(parse_start_time(&self.start_date_time)?)
    }
}

/// The simulated trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    /// Contiguous duty events, in time order.
    pub events: Vec<DutyEvent>,

    /// Route polyline, starting at the current location.
    pub route_path: Vec<Coordinate>,

    /// Stops in visiting order.
    pub stops: Vec<Stop>,
}

impl TripPlan {
    /// When the first event starts.
    pub fn start_time(&self) -> Option<Timestamp> {
        self.events.first().map(|e| e.start_time)
    }

    /// When the last event ends.
    pub fn end_time(&self) -> Option<Timestamp> {
        self.events.last().map(|e| e.end_time)
    }

    /// Total miles driven.
    pub fn total_miles(&self) -> f64 {
        self.events.iter().map(|e| e.distance_miles).sum()
    }

    /// Total hours spent in `status`.
    pub fn total_hours(&self, status: DutyStatus) -> f64 {
        self.events
            .iter()
            .filter(|e| e.status == status)
            .map(|e| e.duration_hours)
            .sum()
    }

    /// Number of rest breaks taken.
    pub fn rest_stop_count(&self) -> usize {
        self.stops.iter().filter(|s| s.kind == StopKind::Rest).count()
    }
}

/// Runs trip simulations against a location table and duty configuration.
///
/// Holds no per-trip state, so one simulator can serve any number of
/// concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct TripSimulator<'a> {
    resolver: &'a LocationResolver,
    config: &'a DutyConfig,
}

impl<'a> TripSimulator<'a> {
    /// Create a new simulator.
    pub fn new(resolver: &'a LocationResolver, config: &'a DutyConfig) -> Self {
        Self { resolver, config }
    }

    /// Plan a trip from a request.
    ///
    /// Fails if the request's start time or cycle hours are invalid, or if
    /// the duty configuration could never finish a leg.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::{DutyStatus, StopKind};
    /// use trip_server::locations::us_cities;
    /// use trip_server::planner::{DutyConfig, TripRequest, TripSimulator};
    ///
    /// let cities = us_cities();
    /// let config = DutyConfig::default();
    /// let simulator = TripSimulator::new(&cities, &config);
    ///
    /// let request = TripRequest::new(
    ///     "Dallas, TX",
    ///     "Fort Worth, TX",
    ///     "Austin, TX",
    ///     "2024-01-01T08:00:00Z",
    /// );
    /// let plan = simulator.plan(&request).unwrap();
    ///
    /// assert_eq!(plan.events[0].remarks, "Pre-trip Inspection");
    /// assert_eq!(plan.events.last().unwrap().status, DutyStatus::OffDuty);
    /// assert_eq!(plan.stops.last().unwrap().kind, StopKind::Dropoff);
    /// ```
    pub fn plan(&self, request: &TripRequest) -> Result<TripPlan, PlanError> {
        let start_time = request.start_time()?;
        self.simulate(
            &Location::named(&request.current_location),
            &Location::named(&request.pickup_location),
            &Location::named(&request.dropoff_location),
            start_time,
        )
    }

    /// Simulate a trip between three locations.
    ///
    /// Locations without coordinates are resolved by name; unknown names
    /// resolve to the table's fallback coordinate.
    pub fn simulate(
        &self,
        start: &Location,
        pickup: &Location,
        dropoff: &Location,
        start_time: Timestamp,
    ) -> Result<TripPlan, PlanError> {
        validate_config(self.config)?;

        let start_coords = self.coordinates_of(start);
        let mut clock = DutyClock::new(self.config, start_time, start_coords);
        clock.stops.push(Stop::new(StopKind::Start, &start.name, start_coords));

        clock.record(
            DutyStatus::OnDutyNotDriving,
            self.config.pre_trip_hours,
            &start.name,
            "Pre-trip Inspection",
        );

        let legs = [
            (pickup, StopKind::Pickup, "Pickup Operation"),
            (dropoff, StopKind::Dropoff, "Dropoff Operation"),
        ];
        for (target, kind, remarks) in legs {
            let target_coords = self.coordinates_of(target);
            clock.drive_leg(&target.name, target_coords);
            clock.record(
                DutyStatus::OnDutyNotDriving,
                self.config.on_location_hours,
                &target.name,
                remarks,
            );
            clock.stops.push(Stop::new(kind, &target.name, target_coords));
        }

        clock.record(
            DutyStatus::OnDutyNotDriving,
            self.config.post_trip_hours,
            &dropoff.name,
            "Post-trip Inspection",
        );
        clock.record(DutyStatus::OffDuty, 0.0, &dropoff.name, "End of Trip");

        let plan = clock.finish();
        debug!(
            events = plan.events.len(),
            rests = plan.rest_stop_count(),
            miles = plan.total_miles(),
            "Trip simulation complete"
        );
        Ok(plan)
    }

    fn coordinates_of(&self, location: &Location) -> Coordinate {
        location
            .coords
            .unwrap_or_else(|| self.resolver.resolve(&location.name))
    }
}

fn validate_config(config: &DutyConfig) -> Result<(), PlanError> {
    if !(config.avg_speed_mph.is_finite() && config.avg_speed_mph > 0.0) {
        return Err(PlanError::InvalidConfig("speed must be positive"));
    }
    if !(config.max_continuous_driving_hours.is_finite()
        && config.max_continuous_driving_hours > 0.0)
    {
        return Err(PlanError::InvalidConfig(
            "continuous driving limit must be positive",
        ));
    }
    let fixed = [
        config.rest_break_hours,
        config.pre_trip_hours,
        config.post_trip_hours,
        config.on_location_hours,
    ];
    if fixed.iter().any(|h| !h.is_finite() || *h < 0.0) {
        return Err(PlanError::InvalidConfig(
            "fixed durations must be non-negative",
        ));
    }
    Ok(())
}

/// Mutable state of one simulation run.
struct DutyClock<'a> {
    config: &'a DutyConfig,

    /// Simulated wall-clock time.
    now: Timestamp,

    /// Hours driven since the last rest break.
    continuous_driving_hours: f64,

    position: Coordinate,
    events: Vec<DutyEvent>,
    route_path: Vec<Coordinate>,
    stops: Vec<Stop>,
}

impl<'a> DutyClock<'a> {
    fn new(config: &'a DutyConfig, start_time: Timestamp, position: Coordinate) -> Self {
        Self {
            config,
            now: start_time,
            continuous_driving_hours: 0.0,
            position,
            events: Vec::new(),
            route_path: vec![position],
            stops: Vec::new(),
        }
    }

    /// Append an event starting now and advance the clock past it.
    fn record(&mut self, status: DutyStatus, hours: f64, location: &str, remarks: &str) {
        let distance_miles = match status {
            DutyStatus::Driving => hours * self.config.avg_speed_mph,
            _ => 0.0,
        };
        let start_time = self.now;
        let end_time = start_time + hours_to_duration(hours);

        self.events.push(DutyEvent {
            status,
            start_time,
            end_time,
            duration_hours: hours,
            location: location.to_string(),
            remarks: remarks.to_string(),
            distance_miles,
        });
        self.now = end_time;
    }

    /// Drive from the current position to `target`, resting whenever the
    /// continuous-driving cap is reached.
    ///
    /// Arriving at a waypoint does not reset the continuous-driving counter;
    /// only a rest break does.
    fn drive_leg(&mut self, target_name: &str, target: Coordinate) {
        let speed = self.config.avg_speed_mph;
        let cap = self.config.max_continuous_driving_hours;
        let leg_miles = self.position.distance_miles(&target);
        let mut remaining = leg_miles;
        let mut rests = 0usize;

        while remaining > 0.0 {
            let available = (cap - self.continuous_driving_hours).max(0.0);
            let needed = remaining / speed;

            if needed > available {
                // At the cap this is a zero-length drive and a repeated
                // route point.
                self.record(DutyStatus::Driving, available, HIGHWAY, "Driving");
                self.position = self.position.interpolate(&target, available / needed);
                self.route_path.push(self.position);
                self.take_rest();
                rests += 1;
                remaining -= available * speed;
            } else {
                self.record(DutyStatus::Driving, needed, HIGHWAY, "Driving");
                self.route_path.push(target);
                self.continuous_driving_hours += needed;
                remaining = 0.0;
            }
        }
        self.position = target;

        debug!(
            target = %target_name,
            miles = leg_miles,
            rests,
            continuous_driving_hours = self.continuous_driving_hours,
            "Leg complete"
        );
    }

    fn take_rest(&mut self) {
        let remarks = format!("{}m Break", (self.config.rest_break_hours * 60.0).round());
        self.record(
            DutyStatus::OffDuty,
            self.config.rest_break_hours,
            REST_AREA,
            &remarks,
        );
        self.stops
            .push(Stop::new(StopKind::Rest, REST_AREA, self.position));
        self.continuous_driving_hours = 0.0;
    }

    fn finish(self) -> TripPlan {
        TripPlan {
            events: self.events,
            route_path: self.route_path,
            stops: self.stops,
        }
    }
}

#[cfg(test)]
#[path = "simulate_tests.rs"]
mod tests;

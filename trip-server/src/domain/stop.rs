//! Named places and the stops a trip makes at them.

use std::fmt;

use super::geo::Coordinate;

/// A display name, optionally resolved to a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub coords: Option<Coordinate>,
}

impl Location {
    /// A location that has not been resolved yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coords: None,
        }
    }

    /// A location at a known coordinate.
    pub fn at(name: impl Into<String>, coords: Coordinate) -> Self {
        Self {
            name: name.into(),
            coords: Some(coords),
        }
    }
}

/// Why the truck stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopKind {
    Start,
    Rest,
    Pickup,
    Dropoff,
}

impl StopKind {
    /// Lower-case name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            StopKind::Start => "start",
            StopKind::Rest => "rest",
            StopKind::Pickup => "pickup",
            StopKind::Dropoff => "dropoff",
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place the trip stops, in visiting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub location: Location,
    pub kind: StopKind,
}

impl Stop {
    /// Create a stop at a resolved coordinate.
    pub fn new(kind: StopKind, name: impl Into<String>, coords: Coordinate) -> Self {
        Self {
            location: Location::at(name, coords),
            kind,
        }
    }
}

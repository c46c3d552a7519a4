//! Location name resolution.
//!
//! Trips are requested by city name ("Chicago, IL"). This module maps names
//! to coordinates from a fixed table. Names missing from the table resolve
//! to a fallback point near the geographic centre of the contiguous US, so
//! a simulation never fails on an unrecognised name.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::Coordinate;

/// Approximate geographic centre of the contiguous United States.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate::new(39.82, -98.57);

/// An immutable table of known locations.
///
/// Lookups ignore surrounding whitespace and ASCII case.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    /// Normalised name to (display name, coordinate).
    entries: HashMap<String, (String, Coordinate)>,
    fallback: Coordinate,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: FALLBACK_COORDINATE,
        }
    }
}

/// A table entry returned by [`LocationResolver::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct KnownLocation {
    pub name: String,
    pub coords: Coordinate,
}

impl LocationResolver {
    /// Create an empty table with the default fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a location.
    pub fn insert(&mut self, name: &str, coords: Coordinate) {
        self.entries
            .insert(normalize(name), (name.trim().to_string(), coords));
    }

    /// Look up a name without falling back.
    pub fn lookup(&self, name: &str) -> Option<Coordinate> {
        self.entries.get(&normalize(name)).map(|(_, c)| *c)
    }

    /// Resolve a name to a coordinate.
    ///
    /// Unknown names resolve to the fallback coordinate. This is logged but
    /// never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::locations::{FALLBACK_COORDINATE, us_cities};
    ///
    /// let cities = us_cities();
    /// let chicago = cities.resolve("Chicago, IL");
    /// assert_eq!(chicago.lat, 41.8781);
    ///
    /// assert_eq!(cities.resolve("Atlantis"), FALLBACK_COORDINATE);
    /// ```
    pub fn resolve(&self, name: &str) -> Coordinate {
        self.lookup(name).unwrap_or_else(|| {
            warn!(location = %name, fallback = %self.fallback, "Unknown location, using fallback");
            self.fallback
        })
    }

    /// The coordinate used for unknown names.
    pub fn fallback(&self) -> Coordinate {
        self.fallback
    }

    /// Case-insensitive substring search over display names.
    ///
    /// Results are sorted by name and truncated to `limit`. An empty query
    /// matches everything.
    pub fn search(&self, query: &str, limit: usize) -> Vec<KnownLocation> {
        let needle = normalize(query);
        let mut matches: Vec<KnownLocation> = self
            .entries
            .iter()
            .filter(|(key, _)| key.contains(&needle))
            .map(|(_, (name, coords))| KnownLocation {
                name: name.clone(),
                coords: *coords,
            })
            .collect();

        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches.truncate(limit);
        matches
    }

    /// Number of known locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no locations are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Builder for a [`LocationResolver`].
#[derive(Debug, Default)]
pub struct LocationResolverBuilder {
    inner: LocationResolver,
}

impl LocationResolverBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location.
    pub fn add(mut self, name: &str, lat: f64, lng: f64) -> Self {
        self.inner.insert(name, Coordinate::new(lat, lng));
        self
    }

    /// Use a different coordinate for unknown names.
    pub fn fallback(mut self, coords: Coordinate) -> Self {
        self.inner.fallback = coords;
        self
    }

    /// Build the resolver.
    pub fn build(self) -> LocationResolver {
        self.inner
    }
}

/// The default table of major US cities.
pub fn us_cities() -> LocationResolver {
    LocationResolverBuilder::new()
        .add("New York, NY", 40.7128, -74.0060)
        .add("Los Angeles, CA", 34.0522, -118.2437)
        .add("Chicago, IL", 41.8781, -87.6298)
        .add("Houston, TX", 29.7604, -95.3698)
        .add("Phoenix, AZ", 33.4484, -112.0740)
        .add("Philadelphia, PA", 39.9526, -75.1652)
        .add("San Antonio, TX", 29.4241, -98.4936)
        .add("San Diego, CA", 32.7157, -117.1611)
        .add("Dallas, TX", 32.7767, -96.7970)
        .add("San Jose, CA", 37.3382, -121.8863)
        .add("Austin, TX", 30.2672, -97.7431)
        .add("Jacksonville, FL", 30.3322, -81.6557)
        .add("Fort Worth, TX", 32.7555, -97.3308)
        .add("Columbus, OH", 39.9612, -82.9988)
        .add("Charlotte, NC", 35.2271, -80.8431)
        .add("San Francisco, CA", 37.7749, -122.4194)
        .add("Indianapolis, IN", 39.7684, -86.1581)
        .add("Seattle, WA", 47.6062, -122.3321)
        .add("Denver, CO", 39.7392, -104.9903)
        .add("Washington, DC", 38.9072, -77.0369)
        .add("Boston, MA", 42.3601, -71.0589)
        .add("Nashville, TN", 36.1627, -86.7816)
        .add("Detroit, MI", 42.3314, -83.0458)
        .add("Portland, OR", 45.5152, -122.6784)
        .add("Las Vegas, NV", 36.1699, -115.1398)
        .add("Miami, FL", 25.7617, -80.1918)
        .add("Atlanta, GA", 33.7490, -84.3880)
        .build()
}

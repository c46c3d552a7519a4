//! Geographic coordinates and the two geometric helpers the simulator uses.

use std::fmt;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in miles.
    ///
    /// Uses the haversine formulation on a sphere of radius
    /// [`EARTH_RADIUS_MILES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::Coordinate;
    ///
    /// let new_york = Coordinate::new(40.7128, -74.0060);
    /// let chicago = Coordinate::new(41.8781, -87.6298);
    ///
    /// let miles = new_york.distance_miles(&chicago);
    /// assert!((miles - 711.0).abs() < 1.0);
    /// assert_eq!(new_york.distance_miles(&new_york), 0.0);
    /// ```
    pub fn distance_miles(&self, other: &Coordinate) -> f64 {
        let (lat1, lng1) = (self.lat.to_radians(), self.lng.to_radians());
        let (lat2, lng2) = (other.lat.to_radians(), other.lng.to_radians());
        let sin_dlat = ((lat2 - lat1) * 0.5).sin();
        let sin_dlng = ((lng2 - lng1) * 0.5).sin();
        let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        EARTH_RADIUS_MILES * c
    }

    /// The point `fraction` of the way from `self` to `other`.
    ///
    /// Latitude and longitude are interpolated independently along a straight
    /// line in degree space, not along the great circle. Only used to place
    /// markers on the route polyline.
    ///
    /// `fraction` 0 returns `self` and 1 returns `other`, both exactly.
    pub fn interpolate(&self, other: &Coordinate, fraction: f64) -> Coordinate {
        if fraction <= 0.0 {
            return *self;
        }
        if fraction >= 1.0 {
            return *other;
        }
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * fraction,
            lng: self.lng + (other.lng - self.lng) * fraction,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

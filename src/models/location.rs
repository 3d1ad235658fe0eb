//! Geographic location type.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, used by the haversine distance.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic point given as latitude/longitude in degrees.
///
/// On the wire a location is written as `{"lat": .., "long": ..}`, which
/// is the shape the route optimization service accepts.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::Location;
///
/// let plaza = Location::new(-33.4489, -70.6693);
/// assert_eq!(plaza.latitude(), -33.4489);
/// assert_eq!(plaza.to_pair(), [-33.4489, -70.6693]);
/// assert!(plaza.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "long")]
    longitude: f64,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns the `[lat, long]` pair used in optimizer responses.
    pub fn to_pair(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    /// Great-circle distance to another location, in meters.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl From<[f64; 2]> for Location {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Location> for [f64; 2] {
    fn from(location: Location) -> [f64; 2] {
        location.to_pair()
    }
}

//! Geographic bounding box and demo delivery points.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Location;

/// Demo delivery points around central Santiago, used when no travel data
/// is available. The first point doubles as the depot.
pub const SAMPLE_LOCATIONS: [Location; 8] = [
    Location::new(-33.4489, -70.6693),
    Location::new(-33.4372, -70.6506),
    Location::new(-33.4052, -70.5751),
    Location::new(-33.4569, -70.5987),
    Location::new(-33.5138, -70.6052),
    Location::new(-33.4722, -70.6419),
    Location::new(-33.4288, -70.6144),
    Location::new(-33.4915, -70.6581),
];

/// An inclusive latitude/longitude box.
///
/// Upstream data is filtered to a box like this before it is handed to the
/// planner; the planner itself never checks bounds.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::{GeoBounds, Location};
///
/// let santiago = GeoBounds::default();
/// assert!(santiago.contains(&Location::new(-33.4489, -70.6693)));
/// assert!(!santiago.contains(&Location::new(40.4168, -3.7038)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_long: f64,
    pub max_long: f64,
}

impl GeoBounds {
    /// Creates a bounding box. Returns `None` if a minimum exceeds its
    /// maximum or any edge is non-finite.
    pub fn new(min_lat: f64, max_lat: f64, min_long: f64, max_long: f64) -> Option<Self> {
        let edges = [min_lat, max_lat, min_long, max_long];
        if edges.iter().any(|e| !e.is_finite()) || min_lat > max_lat || min_long > max_long {
            return None;
        }
        Some(Self {
            min_lat,
            max_lat,
            min_long,
            max_long,
        })
    }

    /// Returns `true` if the location lies inside the box (edges included).
    pub fn contains(&self, location: &Location) -> bool {
        let lat = location.latitude();
        let long = location.longitude();
        lat >= self.min_lat && lat <= self.max_lat && long >= self.min_long && long <= self.max_long
    }

    /// Keeps the finite locations inside the box, preserving order.
    pub fn filter_locations(&self, locations: &[Location]) -> Vec<Location> {
        locations
            .iter()
            .filter(|l| l.is_finite() && self.contains(l))
            .copied()
            .collect()
    }

    /// Draws `count` uniformly random locations inside the box.
    pub fn scatter<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Location> {
        (0..count)
            .map(|_| {
                Location::new(
                    rng.random_range(self.min_lat..=self.max_lat),
                    rng.random_range(self.min_long..=self.max_long),
                )
            })
            .collect()
    }
}

impl Default for GeoBounds {
    /// The Santiago metropolitan area.
    fn default() -> Self {
        Self {
            min_lat: -34.2,
            max_lat: -33.0,
            min_long: -71.5,
            max_long: -70.3,
        }
    }
}

//! Depot-anchored round-trip route.

use super::Location;
use crate::error::{Error, Result};

/// An ordered round trip `[depot, stop_1, ..., stop_k, depot]`.
///
/// The first and last points are always the depot, so a route with no
/// stops is the two-point sequence `[depot, depot]`. Stops are 1-indexed:
/// stop `i` is `points()[i]`.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::{Location, Route};
///
/// let depot = Location::new(0.0, 0.0);
/// let route = Route::round_trip(depot, [Location::new(0.0, 1.0), Location::new(1.0, 1.0)]);
/// assert_eq!(route.total_stops(), 2);
/// assert_eq!(route.num_points(), 4);
/// assert_eq!(route.depot(), depot);
/// assert_eq!(route.stop(1), Some(Location::new(0.0, 1.0)));
/// assert_eq!(route.stop(3), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Location>,
}

impl Route {
    /// Builds a round trip that leaves `depot`, visits `stops` in order and
    /// returns to `depot`.
    pub fn round_trip(depot: Location, stops: impl IntoIterator<Item = Location>) -> Self {
        let mut points = vec![depot];
        points.extend(stops);
        points.push(depot);
        Self { points }
    }

    /// Wraps an already closed point sequence, as returned by an optimizer.
    ///
    /// Fails with [`Error::MalformedRoute`] if fewer than two points are
    /// given or the first and last points differ.
    pub fn from_points(vehicle: &str, points: Vec<Location>) -> Result<Self> {
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 => (first, last),
            _ => {
                return Err(Error::MalformedRoute {
                    vehicle: vehicle.to_string(),
                    reason: format!("expected at least 2 points, got {}", points.len()),
                })
            }
        };
        if first != last {
            return Err(Error::MalformedRoute {
                vehicle: vehicle.to_string(),
                reason: "route does not return to its depot".to_string(),
            });
        }
        Ok(Self { points })
    }

    /// The depot this route starts and ends at.
    pub fn depot(&self) -> Location {
        self.points[0]
    }

    /// All points including both depot anchors.
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    /// The stops between the depot anchors.
    pub fn stops(&self) -> &[Location] {
        &self.points[1..self.points.len() - 1]
    }

    /// Number of points including both depot anchors.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of stops (`num_points() - 2`).
    pub fn total_stops(&self) -> usize {
        self.points.len() - 2
    }

    /// Returns `true` if the route visits no stops.
    pub fn has_no_stops(&self) -> bool {
        self.total_stops() == 0
    }

    /// Stop number `index` (1-indexed), or `None` outside `1..=total_stops()`.
    pub fn stop(&self, index: usize) -> Option<Location> {
        if index == 0 || index > self.total_stops() {
            return None;
        }
        Some(self.points[index])
    }

    /// Total great-circle length of the round trip, in meters.
    pub fn distance_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }

    /// The route as `[lat, long]` pairs.
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(Location::to_pair).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d() -> Location {
        Location::new(0.0, 0.0)
    }

    #[test]
    fn test_round_trip_empty() {
        let r = Route::round_trip(d(), []);
        assert_eq!(r.points(), &[d(), d()]);
        assert_eq!(r.total_stops(), 0);
        assert!(r.has_no_stops());
        assert!(r.stops().is_empty());
        assert_eq!(r.distance_meters(), 0.0);
    }

    #[test]
    fn test_round_trip_stops() {
        let a = Location::new(0.0, 1.0);
        let b = Location::new(1.0, 1.0);
        let r = Route::round_trip(d(), [a, b]);
        assert_eq!(r.points(), &[d(), a, b, d()]);
        assert_eq!(r.stops(), &[a, b]);
        assert_eq!(r.stop(0), None);
        assert_eq!(r.stop(2), Some(b));
    }

    #[test]
    fn test_from_points_valid() {
        let a = Location::new(0.0, 1.0);
        let r = Route::from_points("0", vec![d(), a, d()]).expect("valid");
        assert_eq!(r.total_stops(), 1);
        assert_eq!(r.coordinates(), vec![[0.0, 0.0], [0.0, 1.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_from_points_too_short() {
        assert!(matches!(
            Route::from_points("0", vec![d()]),
            Err(Error::MalformedRoute { .. })
        ));
        assert!(Route::from_points("0", vec![]).is_err());
    }

    #[test]
    fn test_from_points_open_route() {
        let err = Route::from_points("7", vec![d(), Location::new(1.0, 1.0)])
            .expect_err("open route");
        match err {
            Error::MalformedRoute { vehicle, .. } => assert_eq!(vehicle, "7"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_distance_is_sum_of_legs() {
        let a = Location::new(1.0, 0.0);
        let r = Route::round_trip(d(), [a]);
        let leg = d().distance_to(&a);
        assert!((r.distance_meters() - 2.0 * leg).abs() < 1e-6);
    }
}
